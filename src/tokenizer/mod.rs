//! Token encoding and counting.
//!
//! Thin layer over tiktoken-rs: one lazily-built, process-wide encoder
//! per [`Encoding`](crate::encoding::Encoding). All encoding goes through
//! `encode_ordinary`, so special-token markers in the input are tokenized
//! as plain text and never raise.
//!
//! # Example
//!
//! ```
//! use tkc::tokenizer::count_tokens;
//!
//! let tokens = count_tokens("Hello, world!")?;
//! assert!(tokens > 0);
//! # Ok::<(), tkc::TkcError>(())
//! ```

mod counter;

pub use counter::{count_tokens, count_tokens_with_encoding, encode};
