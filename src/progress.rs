//! Progress display module
//!
//! Styled console messages, the scan progress bar and run statistics.

use crate::filter::Rejection;

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Line announcing a bucket file before it is written
pub fn bucket_summary(length: usize, words: usize) -> String {
    format!("Writing {} words of length {}.", words, length)
}

/// Create a bytes-based progress bar
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for one import run
#[derive(Debug)]
pub struct ImportStats {
    pub word_list_bytes: u64,
    pub total_lines: u64,
    pub blank_lines: u64,
    pub accepted: u64,
    pub wrong_length: u64,
    pub invalid_chars: u64,
    pub too_few_unique: u64,
    pub start_time: Instant,
}

impl ImportStats {
    pub fn new() -> Self {
        Self {
            word_list_bytes: 0,
            total_lines: 0,
            blank_lines: 0,
            accepted: 0,
            wrong_length: 0,
            invalid_chars: 0,
            too_few_unique: 0,
            start_time: Instant::now(),
        }
    }

    pub fn add_line(&mut self) {
        self.total_lines += 1;
    }

    pub fn add_blank(&mut self) {
        self.blank_lines += 1;
    }

    pub fn add_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn add_rejection(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::WrongLength(_) => self.wrong_length += 1,
            Rejection::InvalidChars => self.invalid_chars += 1,
            Rejection::TooFewUnique { .. } => self.too_few_unique += 1,
        }
    }

    pub fn rejected(&self) -> u64 {
        self.wrong_length + self.invalid_chars + self.too_few_unique
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                      IMPORT COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Word list:      ".green(), ByteSize(self.word_list_bytes));
        println!("  {} {}", "Total lines:    ".green(), format_number(self.total_lines));
        println!("  {} {}", "Blank lines:    ".green(), format_number(self.blank_lines));
        println!();

        println!("  {} {}", "Wrong length:   ".yellow(), format_number(self.wrong_length));
        println!("  {} {}", "Invalid chars:  ".yellow(), format_number(self.invalid_chars));
        println!("  {} {}", "Repeated chars: ".yellow(), format_number(self.too_few_unique));
        println!("  {} {}", "Rejected:       ".yellow().bold(), format_number(self.rejected()));
        println!(
            "  {} {}",
            "Accepted:       ".green().bold(),
            format_number(self.accepted).green().bold()
        );

        println!();
        println!("  {} {:?}", "Duration:       ".green(), self.elapsed());
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
