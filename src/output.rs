//! Output management module
//!
//! Writes each length bucket to its own JSON file.

use crate::buckets::Buckets;
use crate::error::ImportError;

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// One bucket file that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBucket {
    pub length: usize,
    pub path: PathBuf,
    pub words: usize,
}

/// Path of the bucket file for words of `length`
pub fn bucket_path(root: &Path, language: &str, length: usize) -> PathBuf {
    root.join(language).join(format!("length{}.json", length))
}

/// Write `words` as a JSON array, replacing any existing file
pub fn write_bucket(path: &Path, words: &[String]) -> Result<(), ImportError> {
    let to_error = |source: std::io::Error| ImportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file: File = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(to_error)?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, words).map_err(|e| to_error(e.into()))?;
    writer.flush().map_err(to_error)?;

    Ok(())
}

/// Write every bucket in ascending length order.
///
/// `announce` is called with each bucket's length and word count before its
/// file is opened.
pub fn write_buckets<F>(
    root: &Path,
    language: &str,
    buckets: &Buckets,
    mut announce: F,
) -> Result<Vec<WrittenBucket>, ImportError>
where
    F: FnMut(usize, usize),
{
    let mut written = Vec::new();

    for (length, words) in buckets.iter() {
        let path = bucket_path(root, language, length);

        announce(length, words.len());
        write_bucket(&path, words)?;
        log::info!("Wrote {} words to {:?}", words.len(), path);

        written.push(WrittenBucket {
            length,
            path,
            words: words.len(),
        });
    }

    Ok(written)
}
