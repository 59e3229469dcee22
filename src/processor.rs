//! Core processing engine
//!
//! Loads the layout, scans the word list into buckets and writes them out.

use crate::buckets::Buckets;
use crate::cli::Args;
use crate::encoding::EncodedLineIterator;
use crate::error::ImportError;
use crate::filter::{Rejection, Verdict, WordFilter};
use crate::layout::load_layout;
use crate::output::{write_buckets, WrittenBucket};
use crate::progress::{
    bucket_summary, create_bytes_progress_bar, print_header, print_info, print_success, print_warning, ImportStats,
};

use colored::*;
use indicatif::ProgressBar;
use std::fmt;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Importer configuration
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Directory holding the per-language folders
    pub root: PathBuf,
    pub language: String,
    pub keyboard: String,
    pub word_list: PathBuf,
}

impl ImportConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            root: PathBuf::from("."),
            language: args.language.clone(),
            keyboard: args.keyboard.clone(),
            word_list: args.path.clone(),
        }
    }
}

/// A word left out of the dictionary, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub word: String,
    pub rejection: Rejection,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping {} for {}", self.word, self.rejection)
    }
}

/// Main importer
pub struct Importer {
    config: ImportConfig,
    stats: ImportStats,
}

impl Importer {
    pub fn new(config: ImportConfig) -> Self {
        Self {
            config,
            stats: ImportStats::new(),
        }
    }

    /// Run the whole import: layout, scan, write
    pub fn run(&mut self) -> anyhow::Result<Vec<WrittenBucket>> {
        print_header("Loading keyboard layout...");
        let valid = load_layout(&self.config.root, &self.config.language, &self.config.keyboard)?;
        print_info(&format!(
            "{} valid characters from {}/{}",
            valid.len(),
            self.config.language,
            self.config.keyboard
        ));

        let filter = WordFilter::new(valid);

        print_header("Filtering word list...");
        let word_list = self.config.word_list.clone();
        let buckets = self.scan_with_progress(&word_list, &filter)?;

        print_header("Writing buckets...");
        let written = write_buckets(
            &self.config.root,
            &self.config.language,
            &buckets,
            |length, count| {
                print_info(&bucket_summary(length, count));
            },
        )?;

        print_success(&format!(
            "{} words written to {:?}",
            buckets.total(),
            self.config.root.join(&self.config.language)
        ));
        self.stats.print_summary();

        Ok(written)
    }

    /// Scan with a progress bar, printing a diagnostic for each reported rejection
    fn scan_with_progress(&mut self, path: &Path, filter: &WordFilter) -> Result<Buckets, ImportError> {
        let size = std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|source| ImportError::WordListRead {
                path: path.to_path_buf(),
                source,
            })?;

        let pb = if std::io::stdout().is_terminal() {
            create_bytes_progress_bar(size, "Scanning...")
        } else {
            ProgressBar::hidden()
        };

        let buckets = self.scan(path, filter, |skipped, position| {
            if let Some(skipped) = skipped {
                pb.suspend(|| {
                    print_warning(&skipped.to_string());
                });
            }
            pb.set_position(position);
        })?;

        pb.finish_with_message("Complete".green().to_string());

        Ok(buckets)
    }

    /// Scan a word list into buckets.
    ///
    /// `report` is called once per line with the rejection to show, if any, and
    /// the number of bytes consumed so far. Length rejections are never shown.
    pub fn scan<F>(&mut self, path: &Path, filter: &WordFilter, mut report: F) -> Result<Buckets, ImportError>
    where
        F: FnMut(Option<&Skipped>, u64),
    {
        let read_error = |source| ImportError::WordListRead {
            path: path.to_path_buf(),
            source,
        };

        let mut iter = EncodedLineIterator::new(path).map_err(read_error)?;
        self.stats.word_list_bytes = iter.size();

        let mut buckets = Buckets::new();

        while let Some(line) = iter.next() {
            let line = line.map_err(read_error)?;
            let word = line.trim();

            self.stats.add_line();
            if word.is_empty() {
                self.stats.add_blank();
            }

            let skipped = match filter.check(word) {
                Verdict::Accept(_) => {
                    buckets.push(word);
                    self.stats.add_accepted();
                    None
                }
                Verdict::Reject(rejection) => {
                    self.stats.add_rejection(&rejection);
                    if rejection.is_silent() {
                        None
                    } else {
                        Some(Skipped {
                            word: word.to_string(),
                            rejection,
                        })
                    }
                }
            };

            report(skipped.as_ref(), iter.position());
        }

        Ok(buckets)
    }

    /// Get run statistics
    pub fn stats(&self) -> &ImportStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ValidChars;
    use std::fs;
    use tempfile::TempDir;

    fn abcder() -> WordFilter {
        WordFilter::new(ValidChars::from_rows(vec![vec!["a", "b", "c", "d", "e", "r", "\n"]]))
    }

    fn setup(words: &str) -> (TempDir, ImportConfig) {
        let dir = TempDir::new().unwrap();
        let lang = dir.path().join("en");
        fs::create_dir(&lang).unwrap();
        fs::write(lang.join("qwerty.json"), r#"[["a","b","c","d","e"],["r","\t"],["\n"]]"#).unwrap();
        fs::write(dir.path().join("words.txt"), words).unwrap();

        let config = ImportConfig {
            root: dir.path().to_path_buf(),
            language: "en".to_string(),
            keyboard: "qwerty".to_string(),
            word_list: dir.path().join("words.txt"),
        };
        (dir, config)
    }

    fn read_bucket(dir: &TempDir, length: usize) -> Vec<String> {
        let path = dir.path().join("en").join(format!("length{}.json", length));
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_scan_reports_rejections() {
        let (_dir, config) = setup("cabbed\nabba\ncaved\nhi\n  bread \n\ndeadbeef\n");
        let mut importer = Importer::new(config.clone());

        let mut skipped = Vec::new();
        let buckets = importer
            .scan(&config.word_list, &abcder(), |s, _| skipped.extend(s.cloned()))
            .unwrap();

        assert_eq!(buckets.get(6).unwrap(), ["cabbed"]);
        assert_eq!(buckets.get(5).unwrap(), ["bread"]);
        assert_eq!(buckets.total(), 2);

        let reasons: Vec<String> = skipped
            .iter()
            .map(Skipped::to_string)
            .collect();
        assert_eq!(
            reasons,
            vec![
                "Skipping abba for not enough unique letters",
                "Skipping caved for invalid chars",
                "Skipping deadbeef for invalid chars",
            ]
        );

        let stats = importer.stats();
        assert_eq!(stats.total_lines, 7);
        assert_eq!(stats.blank_lines, 1);
        assert_eq!(stats.wrong_length, 2);
        assert_eq!(stats.accepted, 2);
    }

    #[test]
    fn test_scan_preserves_order() {
        let (_dir, config) = setup("read\nbead\ndare\nbread\nacre\n");
        let mut importer = Importer::new(config.clone());

        let buckets = importer.scan(&config.word_list, &abcder(), |_, _| {}).unwrap();

        assert_eq!(buckets.get(4).unwrap(), ["read", "bead", "dare", "acre"]);
    }

    #[test]
    fn test_scan_missing_word_list() {
        let (dir, mut config) = setup("");
        config.word_list = dir.path().join("nope.txt");
        let mut importer = Importer::new(config.clone());

        let err = importer.scan(&config.word_list, &abcder(), |_, _| {}).unwrap_err();

        assert!(matches!(err, ImportError::WordListRead { ref path, .. } if *path == config.word_list));
    }

    #[test]
    fn test_run_writes_all_buckets() {
        let (dir, config) = setup("cabbed\nabba\ncaved\nhi\nbread\nbarred\n");

        let written = Importer::new(config).run().unwrap();

        assert_eq!(written.len(), 5);
        assert_eq!(read_bucket(&dir, 4), Vec::<String>::new());
        assert_eq!(read_bucket(&dir, 5), vec!["bread"]);
        assert_eq!(read_bucket(&dir, 6), vec!["cabbed", "barred"]);
        assert_eq!(read_bucket(&dir, 7), Vec::<String>::new());
        assert_eq!(read_bucket(&dir, 8), Vec::<String>::new());
    }

    #[test]
    fn test_run_empty_word_list() {
        let (dir, config) = setup("");

        Importer::new(config).run().unwrap();

        for length in 4..=8 {
            let path = dir.path().join("en").join(format!("length{}.json", length));
            assert_eq!(fs::read_to_string(path).unwrap(), "[]");
        }
    }

    #[test]
    fn test_run_is_idempotent() {
        let (dir, config) = setup("cabbed\nbread\nread\nbearded\n");

        Importer::new(config.clone()).run().unwrap();
        let first: Vec<String> = (4..=8)
            .map(|l| fs::read_to_string(dir.path().join("en").join(format!("length{}.json", l))).unwrap())
            .collect();

        Importer::new(config).run().unwrap();
        let second: Vec<String> = (4..=8)
            .map(|l| fs::read_to_string(dir.path().join("en").join(format!("length{}.json", l))).unwrap())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_missing_layout() {
        let (dir, mut config) = setup("bread\n");
        config.keyboard = "azerty".to_string();

        let err = Importer::new(config).run().unwrap_err();

        let import_err = err.downcast_ref::<ImportError>().unwrap();
        assert!(matches!(import_err, ImportError::LayoutRead { .. }));
        assert!(!dir.path().join("en").join("length4.json").exists());
    }
}
