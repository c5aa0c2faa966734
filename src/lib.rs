//! # tkc - Token Counting CLI
//!
//! Counts BPE tokens in a text string, file(s), or standard input under a
//! named tokenizer model or encoding, via tiktoken-rs.
//!
//! ## Pipeline
//!
//! One pass, strictly forward, per invocation:
//!
//! ```text
//! argv ──> option parser ──> input resolver ──> tokenizer resolver ──> output
//!            (-h -l -t -v)    (literal/file/stdin)  (model -> encoding    (count / IDs /
//!                                                    -> fallback)          raw text)
//! ```
//!
//! The tokenizer resolver tries the candidate name as a model, then as an
//! encoding name, then falls back to the configured default encoding.
//! Misses are recovered, never errors: a bare model name given alone
//! selects a tokenizer and drops the text, while an explicit name that
//! resolves to nothing is folded back into the text.
//!
//! ## Quick start
//!
//! ```
//! use tkc::config::TokenizerConfig;
//! use tkc::{input, encoding, tokenizer};
//!
//! let args = vec!["gpt-4".to_string(), "hello world".to_string()];
//! let plan = input::plan(&args)?;
//! let text = input::gather(&plan.source, true)?;
//! let resolution = encoding::resolve(&plan, text, &TokenizerConfig::default());
//! let tokens = tokenizer::encode(&resolution.text, resolution.encoding)?;
//! assert!(!tokens.is_empty());
//! # Ok::<(), tkc::TkcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`input`]: positional-argument decision table and text gathering
//! - [`encoding`]: encodings, model lookup, the three-tier resolver
//! - [`tokenizer`]: cached tiktoken-rs encoders, encode and count
//! - [`output`]: result-line formatting
//! - [`config`]: defaults, TOML file, environment overrides
//! - [`error`]: error types and result alias

pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod output;
pub mod tokenizer;

// Re-exports for convenience
pub use config::{Config, TokenizerConfig};
pub use encoding::{resolve, Encoding, Resolution};
pub use error::{Result, TkcError};
pub use input::{gather, plan, InputPlan, TextSource};
pub use output::{render, OutputMode};
pub use tokenizer::{count_tokens, count_tokens_with_encoding, encode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
