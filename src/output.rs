//! Output formatting for the single result line.

/// What the result line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Token count followed by the encoding name (the default).
    CountWithName,
    /// Bare token count (`-v`).
    CountOnly,
    /// The token-ID sequence (`-t`).
    TokenIds,
    /// The input text unchanged (`-t -t`).
    RawText,
}

impl OutputMode {
    /// Derive the mode from the `-t` and `-v` flag counters.
    pub fn from_flags(tokens: u8, quiet: bool) -> Self {
        if tokens > 1 {
            OutputMode::RawText
        } else if tokens == 1 {
            OutputMode::TokenIds
        } else if quiet {
            OutputMode::CountOnly
        } else {
            OutputMode::CountWithName
        }
    }
}

/// Render the result line for `mode`.
pub fn render(mode: OutputMode, text: &str, ids: &[u32], encoding_name: &str) -> String {
    match mode {
        OutputMode::RawText => text.to_string(),
        OutputMode::TokenIds => format!("{ids:?}"),
        OutputMode::CountOnly => ids.len().to_string(),
        OutputMode::CountWithName => format!("{} {}", ids.len(), encoding_name),
    }
}
