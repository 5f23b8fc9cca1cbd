//! resolve モジュールのプロパティテスト

use super::*;
use crate::registry::{Catalog, ComponentKind};
use proptest::prelude::*;

const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

/// 任意の依存グラフ（自己参照・循環・未登録参照を含む）
fn graph_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(prop::collection::vec(0usize..10, 0..4), NAMES.len()).prop_map(
        |edges| {
            let records = NAMES
                .iter()
                .zip(edges)
                .map(|(name, deps)| ComponentRecord {
                    name: name.to_string(),
                    kind: ComponentKind::Ui,
                    title: String::new(),
                    description: String::new(),
                    category: String::new(),
                    files: vec![],
                    dependencies: vec![],
                    // 8, 9 は未登録の名前を指す
                    registry_dependencies: deps
                        .into_iter()
                        .map(|i| NAMES.get(i).map(|n| n.to_string()).unwrap_or(format!("x{}", i)))
                        .collect(),
                    exports: vec![],
                })
                .collect();
            Catalog::from_records(records)
        },
    )
}

fn request_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c", "d", "e", "f", "g", "h", "zz"]),
        0..5,
    )
    .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    /// 解決結果の名前を再度解決しても同じ集合になる
    #[test]
    fn prop_closure_is_idempotent(catalog in graph_strategy(), request in request_strategy()) {
        let first = resolve(&request, &catalog);
        let names: Vec<String> = first.names().into_iter().map(String::from).collect();
        let second = resolve(&names, &catalog);

        prop_assert_eq!(first.names(), second.names());
    }

    /// 各コンポーネントは一度だけ含まれる
    #[test]
    fn prop_each_component_appears_once(catalog in graph_strategy(), request in request_strategy()) {
        let set = resolve(&request, &catalog);
        let mut seen = std::collections::HashSet::new();
        for name in set.names() {
            prop_assert!(seen.insert(name), "duplicate: {}", name);
        }
    }

    /// 要求を重ねても結果は変わらない
    #[test]
    fn prop_duplicate_requests_are_harmless(catalog in graph_strategy(), request in request_strategy()) {
        let doubled: Vec<String> = request.iter().chain(request.iter()).cloned().collect();

        let single = resolve(&request, &catalog);
        let twice = resolve(&doubled, &catalog);
        prop_assert_eq!(single.names(), twice.names());
    }

    /// 結果は依存について閉じている
    #[test]
    fn prop_result_is_closed_under_dependencies(catalog in graph_strategy(), request in request_strategy()) {
        let set = resolve(&request, &catalog);
        for component in set.components() {
            for dep in &component.registry_dependencies {
                let known = catalog.get(dep).is_some();
                prop_assert_eq!(set.names().contains(&dep.as_str()), known);
            }
        }
    }

    /// 要求された既知のコンポーネントは要求順で先頭に並ぶ
    #[test]
    fn prop_requested_come_first_in_request_order(catalog in graph_strategy(), request in request_strategy()) {
        let set = resolve(&request, &catalog);

        let mut expected: Vec<&str> = Vec::new();
        for name in &request {
            if catalog.get(name).is_some() && !expected.contains(&name.as_str()) {
                expected.push(name);
            }
        }

        let names = set.names();
        prop_assert_eq!(&names[..expected.len()], &expected[..]);
    }
}
