//! 依存解決
//!
//! 要求されたコンポーネント名から、レジストリ依存の推移閉包を求める。
//! 純粋な計算で、ルックアップ以外の副作用を持たずエラーも返さない。

use crate::registry::ComponentRecord;
use std::collections::{HashSet, VecDeque};

/// コンポーネントレコードの取得元
pub trait ComponentSource {
    /// 名前からレコードを取得
    fn lookup(&self, name: &str) -> Lookup;
}

/// ルックアップの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(ComponentRecord),
    /// レコードが存在しない
    Absent,
    /// レコードはあるが読み込めない（理由付き）
    Invalid(String),
}

/// 解決できなかった参照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    pub name: String,
    /// 参照元コンポーネント（直接要求された場合は None）
    pub required_by: Option<String>,
    /// レコードが壊れていた場合の詳細（存在しない場合は None）
    pub detail: Option<String>,
}

impl std::fmt::Display for MissingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.name)?;
        if let Some(parent) = &self.required_by {
            write!(f, " (required by \"{}\")", parent)?;
        }
        match &self.detail {
            Some(detail) => write!(f, " has an invalid record: {}", detail),
            None => write!(f, " is not in the registry"),
        }
    }
}

/// 解決済みコンポーネント集合
///
/// 発見順を保持し、各コンポーネントは一度だけ含まれる。
#[derive(Debug, Clone, Default)]
pub struct ResolvedSet {
    components: Vec<ComponentRecord>,
    requested: Vec<String>,
    missing: Vec<MissingReference>,
}

impl ResolvedSet {
    /// 解決済みコンポーネント（発見順）
    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    /// 解決済みコンポーネント名（発見順）
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 直接要求されたコンポーネント（要求順）
    pub fn requested(&self) -> Vec<&ComponentRecord> {
        self.components
            .iter()
            .filter(|c| self.requested.contains(&c.name))
            .collect()
    }

    /// 依存として自動的に含まれたコンポーネント（発見順）
    pub fn auto_included(&self) -> Vec<&ComponentRecord> {
        self.components
            .iter()
            .filter(|c| !self.requested.contains(&c.name))
            .collect()
    }

    /// 解決できなかった参照
    pub fn missing(&self) -> &[MissingReference] {
        &self.missing
    }
}

/// 依存の推移閉包を幅優先で求める
///
/// - 解決済みの名前は展開前にスキップする（重複要求・循環でも停止する）
/// - 見つからない名前はスキップし、`missing` に記録する
/// - 直接要求されたコンポーネントは要求順で先頭に並ぶ
pub fn resolve<S, N>(requested: &[N], source: &S) -> ResolvedSet
where
    S: ComponentSource + ?Sized,
    N: AsRef<str>,
{
    let mut set = ResolvedSet::default();
    let mut resolved: HashSet<String> = HashSet::new();
    let mut missing: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, Option<String>)> = requested
        .iter()
        .map(|n| (n.as_ref().to_string(), None))
        .collect();

    for name in requested {
        let name = name.as_ref();
        if !set.requested.iter().any(|r| r == name) {
            set.requested.push(name.to_string());
        }
    }

    while let Some((name, required_by)) = queue.pop_front() {
        if resolved.contains(&name) || missing.contains(&name) {
            continue;
        }

        let record = match source.lookup(&name) {
            Lookup::Found(record) => record,
            Lookup::Absent => {
                missing.insert(name.clone());
                set.missing.push(MissingReference {
                    name,
                    required_by,
                    detail: None,
                });
                continue;
            }
            Lookup::Invalid(detail) => {
                missing.insert(name.clone());
                set.missing.push(MissingReference {
                    name,
                    required_by,
                    detail: Some(detail),
                });
                continue;
            }
        };

        resolved.insert(name.clone());
        for dep in &record.registry_dependencies {
            if !resolved.contains(dep) {
                queue.push_back((dep.clone(), Some(name.clone())));
            }
        }
        set.components.push(record);
    }

    set
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;

#[cfg(test)]
#[path = "resolve_proptests.rs"]
mod proptests;
