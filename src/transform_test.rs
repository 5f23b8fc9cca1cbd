use super::*;

fn alias_layout() -> ImportLayout {
    ImportLayout {
        aliases_enabled: true,
        components: "@/components/ui".to_string(),
        lib: "@/lib".to_string(),
        hooks: "@/hooks".to_string(),
    }
}

fn relative_layout() -> ImportLayout {
    ImportLayout {
        aliases_enabled: false,
        components: "./src/components/ui".to_string(),
        lib: "./src/lib".to_string(),
        hooks: "./src/hooks".to_string(),
    }
}

// ========================================
// alias mode
// ========================================

#[test]
fn test_alias_lib_utils() {
    let source = r#"import { cn } from "../../lib/utils";"#;
    assert_eq!(
        rewrite_imports(source, &alias_layout()),
        r#"import { cn } from "@/lib/utils";"#
    );
}

#[test]
fn test_alias_lib_utils_leaves_rest_untouched() {
    let source = "import React from 'react';\nimport { cn } from \"../../lib/utils\";\n\nexport const x = cn('a');\n";
    let expected = "import React from 'react';\nimport { cn } from \"@/lib/utils\";\n\nexport const x = cn('a');\n";
    assert_eq!(rewrite_imports(source, &alias_layout()), expected);
}

#[test]
fn test_alias_theme_hook_is_renamed() {
    let source = "import { useTheme } from '../../hooks/useTheme';";
    assert_eq!(
        rewrite_imports(source, &alias_layout()),
        "import { useTheme } from '@/hooks/use-theme';"
    );
}

#[test]
fn test_theme_hook_uses_fixed_file_name() {
    // 汎用の kebab 変換ではなく固定のファイル名を使う
    let layout = ImportLayout {
        hooks: "~/custom-hooks".to_string(),
        ..alias_layout()
    };
    let out = rewrite_imports("from \"../../hooks/useTheme\"", &layout);
    assert_eq!(out, format!("from \"~/custom-hooks/{}\"", THEME_HOOK_FILE));
}

#[test]
fn test_alias_self_named_component() {
    let source = r#"import { DateRangePicker } from "../DateRangePicker/DateRangePicker";"#;
    assert_eq!(
        rewrite_imports(source, &alias_layout()),
        r#"import { DateRangePicker } from "@/components/ui/date-range-picker";"#
    );
}

#[test]
fn test_alias_sibling_component() {
    let source = "import { Button } from '../Button';";
    assert_eq!(
        rewrite_imports(source, &alias_layout()),
        "import { Button } from '@/components/ui/button';"
    );
}

#[test]
fn test_alias_mismatched_dir_and_file_is_untouched() {
    let source = "import { Icon } from '../Icons/ChevronDown';";
    assert_eq!(rewrite_imports(source, &alias_layout()), source);
}

#[test]
fn test_alias_rewrites_every_occurrence() {
    let source = "import { cn } from '../../lib/utils';\nimport { Button } from '../Button/Button';\nimport { Popover } from '../Popover';\nimport { useTheme } from '../../hooks/useTheme';\n";
    let expected = "import { cn } from '@/lib/utils';\nimport { Button } from '@/components/ui/button';\nimport { Popover } from '@/components/ui/popover';\nimport { useTheme } from '@/hooks/use-theme';\n";
    assert_eq!(rewrite_imports(source, &alias_layout()), expected);
}

#[test]
fn test_alias_trailing_slash_in_prefix_is_ignored() {
    let layout = ImportLayout {
        lib: "@/lib/".to_string(),
        ..alias_layout()
    };
    assert_eq!(
        rewrite_imports("from '../../lib/utils'", &layout),
        "from '@/lib/utils'"
    );
}

#[test]
fn test_preserves_whitespace_after_from() {
    let source = "import { cn } from   '../../lib/utils';";
    assert_eq!(
        rewrite_imports(source, &alias_layout()),
        "import { cn } from   '@/lib/utils';"
    );
}

#[test]
fn test_mismatched_quotes_are_untouched() {
    let source = "import { cn } from '../../lib/utils\";";
    assert_eq!(rewrite_imports(source, &alias_layout()), source);
}

#[test]
fn test_unknown_shapes_pass_through() {
    let source = "import x from './local';\nimport y from '../../lib/other';\nimport z from '../../../deep/thing';\nimport w from 'react';\n";
    assert_eq!(rewrite_imports(source, &alias_layout()), source);
}

#[test]
fn test_side_effect_import_without_from_is_untouched() {
    let source = "import '../Button';";
    assert_eq!(rewrite_imports(source, &alias_layout()), source);
}

#[test]
fn test_identifier_ending_in_from_is_not_matched() {
    let source = "const datefrom '../Button'";
    assert_eq!(rewrite_imports(source, &alias_layout()), source);
}

#[test]
fn test_non_ascii_component_names_are_untouched() {
    let source = "import { Bütton } from '../Bütton';\nimport { Bütton } from '../Bütton/Bütton';";
    assert_eq!(rewrite_imports(source, &alias_layout()), source);
}

// ========================================
// relative mode
// ========================================

#[test]
fn test_relative_lib_utils_is_identity() {
    let source = r#"import { cn } from "../../lib/utils";"#;
    assert_eq!(rewrite_imports(source, &relative_layout()), source);
}

#[test]
fn test_relative_theme_hook_is_renamed() {
    assert_eq!(
        rewrite_imports("from '../../hooks/useTheme'", &relative_layout()),
        "from '../../hooks/use-theme'"
    );
}

#[test]
fn test_relative_component_imports_are_untouched() {
    let source = "import { Button } from '../Button/Button';\nimport { Popover } from '../Popover';\n";
    assert_eq!(rewrite_imports(source, &relative_layout()), source);
}

// ========================================
// to_kebab_case
// ========================================

#[test]
fn test_kebab_pascal_case() {
    assert_eq!(to_kebab_case("DateRangePicker"), "date-range-picker");
    assert_eq!(to_kebab_case("Button"), "button");
}

#[test]
fn test_kebab_camel_case() {
    assert_eq!(to_kebab_case("useTheme"), "use-theme");
}

#[test]
fn test_kebab_separators() {
    assert_eq!(to_kebab_case("date_range picker"), "date-range-picker");
    assert_eq!(to_kebab_case("a__ _b"), "a-b");
}

#[test]
fn test_kebab_consecutive_capitals_are_not_split() {
    assert_eq!(to_kebab_case("OTPInput"), "otpinput");
    assert_eq!(to_kebab_case("useURL"), "use-url");
}

#[test]
fn test_kebab_digits_do_not_start_boundary() {
    assert_eq!(to_kebab_case("Heading2Text"), "heading2text");
}

#[test]
fn test_kebab_already_kebab() {
    assert_eq!(to_kebab_case("data-table"), "data-table");
}
