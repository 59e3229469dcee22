//! Keyboard layout loading
//!
//! A layout file is a JSON array of rows. A row is either an array of
//! single-character strings or a plain string of keys. Flattening the rows gives
//! the set of characters a player can type.

use crate::error::ImportError;

use ahash::RandomState;
use hashbrown::HashSet;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Row members that mark layout structure rather than typeable keys
const LAYOUT_MARKERS: [&str; 2] = ["\n", "\t"];

/// One keyboard row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Row {
    /// `["q", "w", "e"]`
    Keys(Vec<String>),
    /// `"qwe"`, one key per character
    Line(String),
}

impl IntoIterator for Row {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Keys(keys) => keys.into_iter(),
            Self::Line(line) => line.chars().map(String::from).collect::<Vec<_>>().into_iter(),
        }
    }
}

/// Raw layout document: rows of key labels
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    pub rows: Vec<Row>,
}

/// Set of characters allowed in accepted words
#[derive(Debug, Clone)]
pub struct ValidChars {
    chars: HashSet<char, RandomState>,
}

impl ValidChars {
    /// Flatten layout rows into a character set.
    ///
    /// Newline and tab markers are dropped. Members longer than one character
    /// can never match a single letter of a word, so they are skipped as well.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = HashSet::with_hasher(RandomState::new());

        for member in rows.into_iter().flatten() {
            let member = member.as_ref();
            if LAYOUT_MARKERS.contains(&member) {
                continue;
            }

            let mut it = member.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => {
                    chars.insert(c);
                }
                _ => log::debug!("Ignoring layout member {:?}", member),
            }
        }

        Self { chars }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// First character of `word` outside the set, if any
    #[inline]
    pub fn first_invalid(&self, word: &str) -> Option<char> {
        word.chars().find(|c| !self.contains(*c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in sorted order
    pub fn sorted(&self) -> Vec<char> {
        let mut v: Vec<char> = self.chars.iter().copied().collect();
        v.sort_unstable();
        v
    }
}

/// Path of the layout file for a language/keyboard pair
pub fn layout_path(root: &Path, language: &str, keyboard: &str) -> PathBuf {
    root.join(language).join(format!("{}.json", keyboard))
}

/// Load `{root}/{language}/{keyboard}.json` and flatten it
pub fn load_layout(root: &Path, language: &str, keyboard: &str) -> Result<ValidChars, ImportError> {
    let path = layout_path(root, language, keyboard);

    let content = fs::read_to_string(&path).map_err(|source| ImportError::LayoutRead {
        path: path.clone(),
        source,
    })?;

    let layout: Layout = serde_json::from_str(&content).map_err(|source| ImportError::LayoutParse {
        path: path.clone(),
        source,
    })?;

    let valid = ValidChars::from_rows(layout.rows);

    if valid.is_empty() {
        log::warn!("Layout {:?} has no typeable characters, every word will be rejected", path);
    } else {
        log::info!("Loaded {} valid characters from {:?}", valid.len(), path);
        log::debug!("Valid characters: {:?}", valid.sorted());
    }

    Ok(valid)
}
