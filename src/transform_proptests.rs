//! transform モジュールのプロパティテスト

use super::*;
use proptest::prelude::*;

/// PascalCase の単語（先頭大文字 + 小文字）
fn word_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}".prop_map(|s| s)
}

fn alias_layout() -> ImportLayout {
    ImportLayout {
        aliases_enabled: true,
        components: "@/components/ui".to_string(),
        lib: "@/lib".to_string(),
        hooks: "@/hooks".to_string(),
    }
}

proptest! {
    /// PascalCase は単語ごとにハイフンで区切られる
    #[test]
    fn prop_pascal_case_splits_on_words(words in prop::collection::vec(word_strategy(), 1..5)) {
        let pascal: String = words.concat();
        let expected = words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("-");

        prop_assert_eq!(to_kebab_case(&pascal), expected);
    }

    /// 変換結果をさらに変換しても変わらない
    #[test]
    fn prop_kebab_is_idempotent(input in "[A-Za-z0-9_ ]{0,24}") {
        let once = to_kebab_case(&input);
        prop_assert_eq!(to_kebab_case(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// 認識できる形を含まないソースは変更されない
    #[test]
    fn prop_sources_without_parent_imports_are_unchanged(source in "[a-zA-Z0-9 {};'\"\n./-]{0,80}") {
        prop_assume!(!source.contains(".."));
        prop_assert_eq!(rewrite_imports(&source, &alias_layout()), source);
    }

    /// 自己参照インポートは kebab 化したコンポーネントパスになる
    #[test]
    fn prop_self_named_import_becomes_alias(words in prop::collection::vec(word_strategy(), 1..4)) {
        let name: String = words.concat();
        let source = format!("import {{ {0} }} from '../{0}/{0}';", name);

        let out = rewrite_imports(&source, &alias_layout());

        prop_assert_eq!(
            out,
            format!("import {{ {} }} from '@/components/ui/{}';", name, to_kebab_case(&name))
        );
    }
}
