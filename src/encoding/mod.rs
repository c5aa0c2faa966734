//! Tokenizer encodings and name resolution.
//!
//! An [`Encoding`] identifies one of the BPE vocabularies shipped with
//! tiktoken-rs. Model names (`gpt-4`, `text-davinci-003`, ...) map onto
//! encodings through the library's model table; encoding names
//! (`cl100k_base`, ...) are matched directly.
//!
//! # Example
//!
//! ```
//! use tkc::encoding::Encoding;
//!
//! assert_eq!(Encoding::for_model("gpt-4"), Some(Encoding::Cl100kBase));
//! assert_eq!(Encoding::from_name("o200k_base"), Some(Encoding::O200kBase));
//! assert_eq!(Encoding::Cl100kBase.name(), "cl100k_base");
//! ```

mod resolve;

pub use resolve::{resolve, Resolution};

use std::fmt;

use serde::{Deserialize, Serialize};
use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer};

/// A tokenizer encoding known to tiktoken-rs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// o200k_base (GPT-4o, o1, o3)
    O200kBase,
    /// cl100k_base (GPT-3.5, GPT-4)
    #[default]
    Cl100kBase,
    /// p50k_base (Codex, text-davinci-002/003)
    P50kBase,
    /// p50k_edit (davinci/code edit models)
    P50kEdit,
    /// r50k_base (earlier GPT-3 models)
    R50kBase,
    /// gpt2 (the original GPT-2 vocabulary)
    Gpt2,
}

impl Encoding {
    /// Every known encoding, in the order `-l` lists them.
    pub const ALL: [Encoding; 6] = [
        Encoding::O200kBase,
        Encoding::Cl100kBase,
        Encoding::P50kBase,
        Encoding::P50kEdit,
        Encoding::R50kBase,
        Encoding::Gpt2,
    ];

    /// Canonical encoding name.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::O200kBase => "o200k_base",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::P50kEdit => "p50k_edit",
            Encoding::R50kBase => "r50k_base",
            Encoding::Gpt2 => "gpt2",
        }
    }

    /// Iterate over every known encoding name.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(Encoding::name)
    }

    /// Look up an encoding by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "o200k_base" => Some(Encoding::O200kBase),
            "cl100k_base" => Some(Encoding::Cl100kBase),
            "p50k_base" => Some(Encoding::P50kBase),
            "p50k_edit" => Some(Encoding::P50kEdit),
            "r50k_base" => Some(Encoding::R50kBase),
            "gpt2" => Some(Encoding::Gpt2),
            _ => None,
        }
    }

    /// Resolve a model name to its encoding via the tiktoken-rs model
    /// table (`gpt-4` → cl100k_base, `gpt-4o` → o200k_base, ...).
    ///
    /// Returns `None` for names the library does not recognize; callers
    /// fall back per the resolution chain, never error.
    pub fn for_model(model: &str) -> Option<Self> {
        get_tokenizer(model).and_then(Self::from_tokenizer)
    }

    /// The tiktoken-rs tokenizer variant backing this encoding.
    pub(crate) fn tokenizer(self) -> Tokenizer {
        match self {
            Encoding::O200kBase => Tokenizer::O200kBase,
            Encoding::Cl100kBase => Tokenizer::Cl100kBase,
            Encoding::P50kBase => Tokenizer::P50kBase,
            Encoding::P50kEdit => Tokenizer::P50kEdit,
            Encoding::R50kBase => Tokenizer::R50kBase,
            Encoding::Gpt2 => Tokenizer::Gpt2,
        }
    }

    /// Tokenizer variants added by future tiktoken-rs releases resolve to
    /// `None` until wired up here.
    #[allow(unreachable_patterns)]
    fn from_tokenizer(tokenizer: Tokenizer) -> Option<Self> {
        match tokenizer {
            Tokenizer::O200kBase => Some(Encoding::O200kBase),
            Tokenizer::Cl100kBase => Some(Encoding::Cl100kBase),
            Tokenizer::P50kBase => Some(Encoding::P50kBase),
            Tokenizer::P50kEdit => Some(Encoding::P50kEdit),
            Tokenizer::R50kBase => Some(Encoding::R50kBase),
            Tokenizer::Gpt2 => Some(Encoding::Gpt2),
            _ => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
