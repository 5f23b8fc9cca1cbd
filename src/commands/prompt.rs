//! 対話入力

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// ユーザーへの問い合わせ
pub trait Prompt {
    /// y/N で確認を取る
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// 文字列を入力させる（空入力は既定値）
    fn text(&mut self, question: &str, default: &str) -> Result<String>;
}

/// 標準入力から回答を読む
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    fn read_answer(&self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input)
    }
}

impl Prompt for StdinPrompt {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let input = self.read_answer(&format!("{} {}: ", question, hint))?;
        Ok(parse_confirm(&input, default))
    }

    fn text(&mut self, question: &str, default: &str) -> Result<String> {
        let input = self.read_answer(&format!("{} ({}): ", question, default))?;
        Ok(parse_text(&input, default))
    }
}

/// y/yes で true、n/no で false、それ以外は既定値
pub(crate) fn parse_confirm(input: &str, default: bool) -> bool {
    let answer = input.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        true
    } else if answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no") {
        false
    } else {
        default
    }
}

pub(crate) fn parse_text(input: &str, default: &str) -> String {
    match input.trim() {
        "" => default.to_string(),
        answer => answer.to_string(),
    }
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
