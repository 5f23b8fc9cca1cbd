//! 端末出力
//!
//! レベル付きメッセージ、結果サマリー、スピナー。

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub fn info(message: &str) {
    println!("{} {}", "i".blue(), message);
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "!".yellow(), message.yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}

/// 見出し（前後に空行）
pub fn title(message: &str) {
    println!();
    println!("{}", message.bold());
    println!();
}

/// 箇条書きの1項目
pub fn step(message: &str) {
    println!("  {} {}", "•".dimmed(), message);
}

/// インポート例
pub fn import_example(names: &[String], path: &str) {
    println!(
        "  {}",
        format!("import {{ {} }} from '{}';", names.join(", "), path).cyan()
    );
}

/// 利用例に並べる export 名（先頭3件、それ以上あれば `...`）
pub fn example_exports(exports: &[String]) -> Vec<String> {
    let mut names: Vec<String> = exports.iter().take(3).cloned().collect();
    if exports.len() > 3 {
        names.push("...".to_string());
    }
    names
}

/// ファイル書き込み結果の1行サマリー
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(written: usize, failed: usize) -> Self {
        match (written, failed) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} file(s) written, {} failed", written.green(), f.red()),
            },
            (w, _) if w > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} file(s) written", w.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No files written".to_string(),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}

/// スピナーを開始
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// ファイル数ぶんの進捗バー
pub fn file_progress(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}") {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
