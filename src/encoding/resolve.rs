//! Candidate-name resolution: model, then encoding, then fallback.
//!
//! The three tiers carry two distinct recovery behaviors:
//!
//! - a bare model name in single-argument form selects a tokenizer only,
//!   so the text (which doubles as the name) is discarded;
//! - an explicitly given name that resolves to nothing is restored into
//!   the text rather than dropped.

use tracing::debug;

use crate::config::TokenizerConfig;
use crate::encoding::Encoding;
use crate::input::InputPlan;

/// Longest candidate name considered for lookup. Bounds pathological
/// inputs (a whole pasted paragraph in the name position).
const MAX_NAME_CHARS: usize = 50;

/// Outcome of tokenizer resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Encoding to tokenize with.
    pub encoding: Encoding,
    /// Text to tokenize, adjusted by the recovery rules.
    pub text: String,
}

/// Resolve the candidate name from `plan` against the tokenizer library.
///
/// Tried in order: model name, encoding name, configured fallback. A miss
/// is never an error; the fallback tier recovers per the rules above.
pub fn resolve(plan: &InputPlan, text: String, config: &TokenizerConfig) -> Resolution {
    let candidate = plan
        .candidate
        .as_deref()
        .unwrap_or(config.default_model.as_str());
    let lookup: String = candidate.chars().take(MAX_NAME_CHARS).collect();

    if let Some(encoding) = Encoding::for_model(&lookup) {
        debug!(model = %lookup, %encoding, "candidate resolved as model name");
        // Single-argument form: the name was only a model selector, not
        // also the text to tokenize.
        let text = if plan.name_is_text { String::new() } else { text };
        return Resolution { encoding, text };
    }

    if let Some(encoding) = Encoding::from_name(&lookup) {
        debug!(%encoding, "candidate resolved as encoding name");
        return Resolution { encoding, text };
    }

    let fallback = config.fallback_encoding;
    debug!(candidate = %candidate, %fallback, "candidate resolved as neither model nor encoding");
    // Restore the full, untruncated name into the text: it did not select
    // anything, so it is reinterpreted as leading literal text.
    let text = if plan.explicit_name {
        format!("{candidate} {text}")
    } else {
        text
    };
    Resolution {
        encoding: fallback,
        text,
    }
}
