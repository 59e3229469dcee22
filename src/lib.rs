//! # Wordbank Import
//!
//! Builds word-game dictionaries from a raw word list.
//!
//! ## Features
//!
//! - **Keyboard layouts**: only words typeable on the given layout are kept
//! - **Length buckets**: words of 4 to 8 characters, one JSON file per length
//! - **Repetition check**: more than half of a word's letters must be distinct
//! - **Encoding detection**: word lists in legacy encodings or UTF-16 are transcoded
//!
//! ## Usage
//!
//! ```bash
//! # Reads en/qwerty.json, writes en/length4.json .. en/length8.json
//! wordbank-import en qwerty words_alpha.txt
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordbank_import::processor::{ImportConfig, Importer};
//! use std::path::PathBuf;
//!
//! let config = ImportConfig {
//!     root: PathBuf::from("."),
//!     language: "en".to_string(),
//!     keyboard: "qwerty".to_string(),
//!     word_list: PathBuf::from("words_alpha.txt"),
//! };
//!
//! let mut importer = Importer::new(config);
//! // importer.run().unwrap();
//! ```

pub mod buckets;
pub mod cli;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod layout;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use error::ImportError;
pub use processor::{ImportConfig, Importer};
