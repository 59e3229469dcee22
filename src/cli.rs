//! Command-line interface definition for wordbank-import

use clap::Parser;
use std::path::PathBuf;

/// Build length-bucketed word-game dictionaries from a raw word list
///
/// Reads the keyboard layout at `{language}/{keyboard}.json`, filters the word
/// list and writes `{language}/length4.json` through `{language}/length8.json`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordbank-import",
    version,
    about = "Build length-bucketed word-game dictionaries from a raw word list",
    long_about = r#"
Filter a newline-delimited word list into per-length JSON dictionaries.

A word is kept when it is 4 to 8 characters long, every character appears on
the keyboard layout, and more than half of its letters are distinct.

EXAMPLES:
    # Reads en/qwerty.json, writes en/length4.json .. en/length8.json
    wordbank-import en qwerty words_alpha.txt

LOGGING:
    Set RUST_LOG=debug for detailed layout and encoding information.
"#
)]
pub struct Args {
    /// Language directory holding the layout and the output files
    #[arg(value_name = "LANGUAGE")]
    pub language: String,

    /// Keyboard layout name, read from {language}/{keyboard}.json
    #[arg(value_name = "KEYBOARD")]
    pub keyboard: String,

    /// Word list, one candidate word per line
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}
