//! End-to-end resolution pipeline tests.
//!
//! These drive the public plan -> gather -> resolve -> encode pipeline the
//! binary wires together, beyond the per-module unit tests. Stdin-backed
//! sources are exercised at the plan level only.

use std::io::Write;

use tempfile::NamedTempFile;
use tkc::config::TokenizerConfig;
use tkc::output::{render, OutputMode};
use tkc::{encoding, input, tokenizer, Encoding, TextSource};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Run the full pipeline over positionals, with file diagnostics off.
fn pipeline(argv: &[&str]) -> (Encoding, String, Vec<u32>) {
    let plan = input::plan(&args(argv)).unwrap();
    let text = input::gather(&plan.source, true).unwrap();
    let resolution = encoding::resolve(&plan, text, &TokenizerConfig::default());
    let ids = tokenizer::encode(&resolution.text, resolution.encoding).unwrap();
    (resolution.encoding, resolution.text, ids)
}

/// A file path given alone counts the file's contents under the default
/// model's encoding.
#[test]
fn test_file_alone_counts_contents_under_default_model() {
    let contents = "The quick brown fox jumps over the lazy dog.";
    let file = temp_file(contents);
    let path = file.path().to_string_lossy().into_owned();

    let (encoding, text, ids) = pipeline(&[&path]);

    assert_eq!(encoding, Encoding::Cl100kBase);
    assert_eq!(text, contents);
    assert_eq!(
        ids.len(),
        tokenizer::count_tokens_with_encoding(contents, Encoding::Cl100kBase).unwrap()
    );
}

/// An explicit encoding name with `-` takes its text from stdin and
/// displays that encoding's name.
#[test]
fn test_encoding_name_with_stdin_sentinel() {
    let plan = input::plan(&args(&["cl100k_base", "-"])).unwrap();
    assert_eq!(plan.source, TextSource::Stdin);

    let resolution = encoding::resolve(&plan, "piped text".into(), &TokenizerConfig::default());
    assert_eq!(resolution.encoding.name(), "cl100k_base");
    assert_eq!(resolution.text, "piped text");
}

/// A lone recognized model name selects the tokenizer only: the text is
/// discarded and the count is 0.
#[test]
fn test_lone_model_name_counts_zero() {
    let (encoding, text, ids) = pipeline(&["gpt-4"]);

    assert_eq!(encoding, Encoding::Cl100kBase);
    assert_eq!(text, "");
    assert!(ids.is_empty());
    assert_eq!(render(OutputMode::CountOnly, &text, &ids, encoding.name()), "0");
}

/// A lone arg that is no file, model, or encoding is tokenized as literal
/// text under the fallback encoding.
#[test]
fn test_lone_unresolved_arg_is_literal_text() {
    let (encoding, text, ids) = pipeline(&["hello world"]);

    assert_eq!(encoding, Encoding::Cl100kBase);
    assert_eq!(text, "hello world");
    assert!(!ids.is_empty());
}

/// In the explicit-name multi-arg form, an unresolved name is restored
/// into the text, so the original string is recoverable.
#[test]
fn test_unresolved_explicit_name_is_recoverable() {
    let (encoding, text, _) = pipeline(&["hello", "world"]);

    assert_eq!(encoding, Encoding::Cl100kBase);
    assert_eq!(text, "hello world");
}

/// `-t -t` prints the input text unchanged, not a count.
#[test]
fn test_double_tokens_flag_passes_text_through() {
    let (encoding, text, ids) = pipeline(&["gpt-4", "pass", "through"]);

    let mode = OutputMode::from_flags(2, false);
    assert_eq!(mode, OutputMode::RawText);
    assert_eq!(render(mode, &text, &ids, encoding.name()), "pass through");
}

/// `-t` prints the token-ID sequence for the resolved text.
#[test]
fn test_single_tokens_flag_prints_ids() {
    let (encoding, text, ids) = pipeline(&["gpt-4", "hello"]);

    let line = render(OutputMode::from_flags(1, false), &text, &ids, encoding.name());
    assert_eq!(line, format!("{ids:?}"));
    assert!(line.starts_with('['));
    assert!(line.ends_with(']'));
}

/// Default output is `<count> <encoding name>`; a model name displays the
/// encoding it maps to.
#[test]
fn test_default_output_shows_resolved_encoding_name() {
    let (encoding, text, ids) = pipeline(&["gpt-4o", "hello"]);

    assert_eq!(encoding, Encoding::O200kBase);
    let line = render(OutputMode::from_flags(0, false), &text, &ids, encoding.name());
    assert_eq!(line, format!("{} o200k_base", ids.len()));
}

/// The encoding listing is non-empty and has no duplicates.
#[test]
fn test_encoding_listing_distinct_nonempty() {
    let names: Vec<_> = Encoding::names().collect();
    assert!(!names.is_empty());
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}

/// Several files concatenate in argument order before counting.
#[test]
fn test_multiple_files_concatenate_in_order() {
    let a = temp_file("alpha ");
    let b = temp_file("beta");
    let path_a = a.path().to_string_lossy().into_owned();
    let path_b = b.path().to_string_lossy().into_owned();

    let (encoding, text, ids) = pipeline(&[&path_a, &path_b]);

    assert_eq!(encoding, Encoding::Cl100kBase);
    assert_eq!(text, "alpha beta");
    assert_eq!(
        ids.len(),
        tokenizer::count_tokens_with_encoding("alpha beta", Encoding::Cl100kBase).unwrap()
    );
}
