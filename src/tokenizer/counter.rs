//! Token counting implementation.

use std::sync::OnceLock;

use tiktoken_rs::{get_bpe_from_tokenizer, CoreBPE};

use crate::encoding::Encoding;
use crate::error::{Result, TkcError};

// One cached encoder per encoding, built on first use.
static O200K: OnceLock<CoreBPE> = OnceLock::new();
static CL100K: OnceLock<CoreBPE> = OnceLock::new();
static P50K: OnceLock<CoreBPE> = OnceLock::new();
static P50K_EDIT: OnceLock<CoreBPE> = OnceLock::new();
static R50K: OnceLock<CoreBPE> = OnceLock::new();
static GPT2: OnceLock<CoreBPE> = OnceLock::new();

fn cell(encoding: Encoding) -> &'static OnceLock<CoreBPE> {
    match encoding {
        Encoding::O200kBase => &O200K,
        Encoding::Cl100kBase => &CL100K,
        Encoding::P50kBase => &P50K,
        Encoding::P50kEdit => &P50K_EDIT,
        Encoding::R50kBase => &R50K,
        Encoding::Gpt2 => &GPT2,
    }
}

/// Get the encoder for `encoding`, building it on first use.
fn bpe(encoding: Encoding) -> Result<&'static CoreBPE> {
    let cell = cell(encoding);
    if let Some(bpe) = cell.get() {
        return Ok(bpe);
    }
    let built = get_bpe_from_tokenizer(encoding.tokenizer())
        .map_err(|e| TkcError::Tokenizer(format!("failed to load {encoding}: {e}")))?;
    // First writer wins; a racing build is discarded.
    Ok(cell.get_or_init(|| built))
}

/// Encode text to token IDs under `encoding`.
///
/// Special-token markers (`<|endoftext|>` and friends) are tokenized as
/// ordinary text.
pub fn encode(text: &str, encoding: Encoding) -> Result<Vec<u32>> {
    Ok(bpe(encoding)?.encode_ordinary(text))
}

/// Count tokens using the default encoding (cl100k_base).
pub fn count_tokens(text: &str) -> Result<usize> {
    count_tokens_with_encoding(text, Encoding::default())
}

/// Count tokens with a specific encoding.
///
/// # Example
/// ```
/// use tkc::tokenizer::count_tokens_with_encoding;
/// use tkc::encoding::Encoding;
///
/// let tokens = count_tokens_with_encoding("Hello!", Encoding::O200kBase)?;
/// assert!(tokens > 0);
/// # Ok::<(), tkc::TkcError>(())
/// ```
pub fn count_tokens_with_encoding(text: &str, encoding: Encoding) -> Result<usize> {
    Ok(bpe(encoding)?.encode_ordinary(text).len())
}
