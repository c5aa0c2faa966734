//! Input resolution: positional arguments to a candidate name and a text
//! source.
//!
//! [`plan`] is the whole decision table, evaluated in strict priority
//! order over the positionals left after flag parsing:
//!
//! 1. two-plus args, second is `-` — first arg names the tokenizer, text
//!    comes from stdin;
//! 2. two-plus args, first is `-` — second arg names the tokenizer, text
//!    comes from stdin;
//! 3. two-plus args, neither is `-` — file concatenation when the first
//!    or second arg is an existing file, otherwise a space-join of
//!    everything past the first arg;
//! 4. a lone `-` — stdin under the default model;
//! 5. a lone existing file path — that file under the default model;
//! 6. any other lone arg — name and text at once (single-argument form);
//! 7. nothing — usage error.
//!
//! [`gather`] then performs the reads. Stdin and files are read fully
//! buffered; there is no streaming.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, TkcError};

/// Where the text to tokenize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Read all of standard input.
    Stdin,
    /// Read and concatenate these files, in order.
    Files(Vec<PathBuf>),
    /// The text is this literal string.
    Literal(String),
}

/// Input plan resolved from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPlan {
    /// Candidate model/encoding name; `None` keeps the configured default.
    pub candidate: Option<String>,
    /// Where the text comes from.
    pub source: TextSource,
    /// A name was given alongside separate text arguments. If it resolves
    /// to nothing it is restored into the text.
    pub explicit_name: bool,
    /// Single-argument form: the name doubles as the text. If it resolves
    /// as a model, the text is discarded.
    pub name_is_text: bool,
}

fn is_file(arg: &str) -> bool {
    Path::new(arg).is_file()
}

/// Resolve the positional arguments into an [`InputPlan`].
///
/// Within the two-plus-argument group, a `-` sentinel in the second
/// position wins over one in the first, and both win over file detection.
pub fn plan(args: &[String]) -> Result<InputPlan> {
    match args {
        [] => Err(TkcError::Usage("nothing to tokenize".into())),

        [only] if only == "-" => Ok(InputPlan {
            candidate: None,
            source: TextSource::Stdin,
            explicit_name: false,
            name_is_text: false,
        }),

        [only] if is_file(only) => Ok(InputPlan {
            candidate: None,
            source: TextSource::Files(vec![PathBuf::from(only)]),
            explicit_name: false,
            name_is_text: false,
        }),

        [only] => Ok(InputPlan {
            candidate: Some(only.clone()),
            source: TextSource::Literal(only.clone()),
            explicit_name: false,
            name_is_text: true,
        }),

        [first, second, ..] if second == "-" => Ok(InputPlan {
            candidate: Some(first.clone()),
            source: TextSource::Stdin,
            explicit_name: false,
            name_is_text: false,
        }),

        [first, second, ..] if first == "-" => Ok(InputPlan {
            candidate: Some(second.clone()),
            source: TextSource::Stdin,
            explicit_name: false,
            name_is_text: false,
        }),

        [first, second, ..] if is_file(first) || is_file(second) => {
            // Only the first two args gate file mode, but every arg that
            // names an existing file is read. Non-file args past the
            // gate are dropped.
            let files = args
                .iter()
                .filter(|arg| is_file(arg))
                .map(PathBuf::from)
                .collect();
            let named = !is_file(first);
            Ok(InputPlan {
                candidate: named.then(|| first.clone()),
                source: TextSource::Files(files),
                explicit_name: named,
                name_is_text: false,
            })
        }

        [first, rest @ ..] => Ok(InputPlan {
            candidate: Some(first.clone()),
            source: TextSource::Literal(rest.join(" ")),
            explicit_name: true,
            name_is_text: false,
        }),
    }
}

/// Read the text for `source`.
///
/// Each file read emits a `File: <path>` diagnostic to stderr unless
/// `quiet` is set.
pub fn gather(source: &TextSource, quiet: bool) -> Result<String> {
    match source {
        TextSource::Stdin => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        TextSource::Files(paths) => {
            let mut text = String::new();
            for path in paths {
                text.push_str(&fs::read_to_string(path)?);
                if !quiet {
                    eprintln!("File: {}", path.display());
                }
            }
            Ok(text)
        }
        TextSource::Literal(text) => Ok(text.clone()),
    }
}
