//! インポートパスの書き換え
//!
//! コンポーネントのソースに含まれる相対インポートを、配置先プロジェクトの
//! 解決方式（パスエイリアス / 相対パス）に合わせて書き換える。
//!
//! 構文解析は行わず、カタログ作者が使う決まった形だけを対象にする。
//! 対象外の記述はそのまま残る。
//!
//! ## 書き換え規則（優先順）
//!
//! | 規則 | 元の指定子 | エイリアス有効 | エイリアス無効 |
//! |------|-----------|---------------|---------------|
//! | 1 | `../../lib/utils` | `<lib>/utils` | `../../lib/utils` |
//! | 2 | `../../hooks/useTheme` | `<hooks>/use-theme` | `../../hooks/use-theme` |
//! | 3 | `../Name/Name` | `<components>/<kebab>` | 変更なし |
//! | 4 | `../Name` | `<components>/<kebab>` | 変更なし |

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// テーマフックの配置ファイル名（インポート名 `useTheme` とは一致しない）
const THEME_HOOK_FILE: &str = "use-theme";

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?-u:\b)from(\s+)(['"])(\.\./\.\./lib/utils|\.\./\.\./hooks/useTheme|\.\./([A-Za-z0-9_]+)/([A-Za-z0-9_]+)|\.\./([A-Za-z0-9_]+))(['"])"#,
    )
    .expect("import pattern is valid")
});

/// 書き換えに使うプロジェクト設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLayout {
    pub aliases_enabled: bool,
    pub components: String,
    pub lib: String,
    pub hooks: String,
}

/// 認識したインポートの形
#[derive(Debug, Clone, PartialEq, Eq)]
enum ImportRule {
    /// `../../lib/utils`
    LibUtils,
    /// `../../hooks/useTheme`
    ThemeHook,
    /// `../Name/Name`
    SelfNamedComponent(String),
    /// `../Name`
    SiblingComponent(String),
}

impl ImportRule {
    fn classify(caps: &Captures<'_>) -> Option<Self> {
        match &caps[3] {
            "../../lib/utils" => Some(ImportRule::LibUtils),
            "../../hooks/useTheme" => Some(ImportRule::ThemeHook),
            _ => {
                if let (Some(dir), Some(file)) = (caps.get(4), caps.get(5)) {
                    // ディレクトリ名とファイル名が一致する場合のみ
                    (dir.as_str() == file.as_str())
                        .then(|| ImportRule::SelfNamedComponent(dir.as_str().to_string()))
                } else {
                    caps.get(6)
                        .map(|name| ImportRule::SiblingComponent(name.as_str().to_string()))
                }
            }
        }
    }

    /// 書き換え後の指定子（None は変更なし）
    fn rewrite(&self, layout: &ImportLayout) -> Option<String> {
        if layout.aliases_enabled {
            let spec = match self {
                ImportRule::LibUtils => format!("{}/utils", prefix(&layout.lib)),
                ImportRule::ThemeHook => format!("{}/{}", prefix(&layout.hooks), THEME_HOOK_FILE),
                ImportRule::SelfNamedComponent(name) | ImportRule::SiblingComponent(name) => {
                    format!("{}/{}", prefix(&layout.components), to_kebab_case(name))
                }
            };
            Some(spec)
        } else {
            match self {
                ImportRule::LibUtils => Some("../../lib/utils".to_string()),
                ImportRule::ThemeHook => Some(format!("../../hooks/{}", THEME_HOOK_FILE)),
                // 兄弟配置のままで解決できるため触らない
                ImportRule::SelfNamedComponent(_) | ImportRule::SiblingComponent(_) => None,
            }
        }
    }
}

fn prefix(alias: &str) -> &str {
    let trimmed = alias.trim_end_matches('/');
    if trimmed.is_empty() {
        alias
    } else {
        trimmed
    }
}

/// ソース中のインポート指定子を書き換える
///
/// `from` の後の空白と引用符の種類は保持する。
/// 開き/閉じの引用符が一致しない記述は対象外。
pub fn rewrite_imports(source: &str, layout: &ImportLayout) -> String {
    IMPORT_RE
        .replace_all(source, |caps: &Captures<'_>| {
            let original = caps[0].to_string();
            let (open, close) = (&caps[2], &caps[7]);
            if open != close {
                return original;
            }

            match ImportRule::classify(caps).and_then(|rule| rule.rewrite(layout)) {
                Some(spec) => format!("from{}{}{}{}", &caps[1], open, spec, close),
                None => original,
            }
        })
        .into_owned()
}

/// camelCase / PascalCase を kebab-case に変換
///
/// - 小文字の直後の大文字の前にハイフンを入れる
/// - 空白・アンダースコアの連続は1つのハイフンにする
/// - 全体を小文字にする
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_separator = false;

    for c in input.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_separator {
                out.push('-');
                in_separator = true;
            }
            prev = Some(c);
            continue;
        }
        in_separator = false;

        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;

#[cfg(test)]
#[path = "transform_proptests.rs"]
mod proptests;
