//! Word list decoding
//!
//! Detects the encoding of a word list and yields its lines as UTF-8.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Bytes sampled for encoding detection
const SAMPLE_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
    /// Length of the byte order mark, 0 if none
    pub bom_len: usize,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            encoding: encoding_rs::UTF_8,
            bom_len: 0,
        }
    }
}

/// Detect the encoding of a reader by sampling its first bytes
pub fn detect_encoding<R: Read>(reader: &mut R) -> std::io::Result<EncodingInfo> {
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    reader.take(SAMPLE_SIZE as u64).read_to_end(&mut sample)?;

    if sample.is_empty() {
        return Ok(EncodingInfo::default());
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(&sample) {
        return Ok(EncodingInfo {
            name: encoding.name(),
            encoding,
            bom_len,
        });
    }

    // Plain UTF-8 (and ASCII) needs no guessing
    if std::str::from_utf8(&sample).is_ok() {
        return Ok(EncodingInfo::default());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, sample.len() < SAMPLE_SIZE);
    let encoding = detector.guess(None, true);

    Ok(EncodingInfo {
        name: encoding.name(),
        encoding,
        bom_len: 0,
    })
}

/// Where lines come from
enum LineSource {
    /// ASCII-compatible encodings split on raw `\n` bytes
    Stream(BufReader<File>),
    /// UTF-16 is decoded up front since `\n` bytes can sit inside other code units
    Decoded(std::vec::IntoIter<String>),
}

/// Line iterator over a word list in any detected encoding
pub struct EncodedLineIterator {
    source: LineSource,
    encoding: &'static Encoding,
    line_buffer: Vec<u8>,
    position: u64,
    size: u64,
}

impl EncodedLineIterator {
    /// Open a file, detect its encoding and skip any byte order mark
    pub fn new(path: &Path) -> std::io::Result<Self> {
        let mut file = File::open(path)?;
        let info = detect_encoding(&mut file)?;
        log::debug!("Word list {:?} decoded as {}", path, info.name);

        Self::open(path, file, info)
    }

    /// Open a file with a known encoding, without a byte order mark
    pub fn with_encoding(path: &Path, encoding: &'static Encoding) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let info = EncodingInfo {
            name: encoding.name(),
            encoding,
            bom_len: 0,
        };

        Self::open(path, file, info)
    }

    fn open(path: &Path, mut file: File, info: EncodingInfo) -> std::io::Result<Self> {
        let size = file.metadata()?.len();

        let mut position = info.bom_len as u64;
        file.seek(SeekFrom::Start(position))?;

        let source = if info.encoding.is_ascii_compatible() {
            LineSource::Stream(BufReader::with_capacity(SAMPLE_SIZE, file))
        } else {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            position = size;

            let (decoded, had_errors) = info.encoding.decode_without_bom_handling(&bytes);
            if had_errors {
                log::warn!("Encoding errors in {:?}, using lossy conversion", path);
            }
            let lines: Vec<String> = decoded.lines().map(str::to_string).collect();
            LineSource::Decoded(lines.into_iter())
        };

        Ok(Self {
            source,
            encoding: info.encoding,
            line_buffer: Vec::with_capacity(64),
            position,
            size,
        })
    }

    /// Get the detected encoding
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Size of the file in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    fn decode_line(&self) -> String {
        let mut bytes = self.line_buffer.as_slice();
        while let Some((b'\n' | b'\r', rest)) = bytes.split_last() {
            bytes = rest;
        }

        if self.encoding == encoding_rs::UTF_8 {
            String::from_utf8_lossy(bytes).into_owned()
        } else {
            let (decoded, had_errors) = self.encoding.decode_without_bom_handling(bytes);
            if had_errors {
                log::warn!("Encoding errors in line, using lossy conversion");
            }
            decoded.into_owned()
        }
    }
}

impl Iterator for EncodedLineIterator {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = match &mut self.source {
            LineSource::Stream(reader) => reader,
            LineSource::Decoded(lines) => return lines.next().map(Ok),
        };

        self.line_buffer.clear();

        match reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None,
            Ok(n) => {
                self.position += n as u64;
                Some(Ok(self.decode_line()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
