use super::*;
use crate::fs::mock::MockFs;
use crate::project::{PackageManager, ProjectInfo};
use crate::registry::{Catalog, ComponentFile, ComponentKind, ComponentRecord};
use crate::resolve::resolve;
use std::path::{Path, PathBuf};

const REGISTRY_ROOT: &str = "/pkg";
const PROJECT: &str = "/project";

fn record(name: &str, kind: ComponentKind, files: &[(&str, &str)], deps: &[&str]) -> ComponentRecord {
    ComponentRecord {
        name: name.to_string(),
        kind,
        title: String::new(),
        description: String::new(),
        category: "inputs".to_string(),
        files: files
            .iter()
            .map(|(path, target)| ComponentFile {
                path: path.to_string(),
                target: target.to_string(),
            })
            .collect(),
        dependencies: deps.iter().map(|d| d.to_string()).collect(),
        registry_dependencies: vec![],
        exports: vec![],
    }
}

fn config() -> ProjectConfig {
    ProjectConfig::default_for(&ProjectInfo::default())
}

fn catalog() -> Catalog {
    let mut button = record(
        "button",
        ComponentKind::Ui,
        &[("src/components/Button/Button.tsx", "button.tsx")],
        &["@radix-ui/react-slot@1.0.2", "clsx"],
    );
    button.registry_dependencies = vec!["utils".to_string()];

    Catalog::from_records(vec![
        button,
        record(
            "utils",
            ComponentKind::Lib,
            &[("src/lib/utils.ts", "utils.ts")],
            &["clsx@2.1.0", "tailwind-merge"],
        ),
        record(
            "use-theme",
            ComponentKind::Hook,
            &[("src/hooks/useTheme.ts", "use-theme.ts")],
            &[],
        ),
    ])
}

fn add_sources(fs: &MockFs) {
    fs.add_file(
        "/pkg/src/components/Button/Button.tsx",
        "import { cn } from '../../lib/utils';\nexport const Button = () => null;\n",
    );
    fs.add_file("/pkg/src/lib/utils.ts", "export function cn() {}\n");
    fs.add_file("/pkg/src/hooks/useTheme.ts", "export function useTheme() {}\n");
}

fn build(names: &[&str], fs: &MockFs) -> InstallPlan {
    let resolved = resolve(names, &catalog());
    InstallPlan::build(&resolved, &config(), None, Path::new(PROJECT), fs)
}

// ========================================
// collect_external_dependencies
// ========================================

#[test]
fn test_external_dependencies_strip_versions_and_dedupe() {
    let resolved = resolve(&["button"], &catalog());

    assert_eq!(
        collect_external_dependencies(&resolved),
        vec!["@radix-ui/react-slot", "clsx", "tailwind-merge"]
    );
}

#[test]
fn test_external_dependencies_empty() {
    let resolved = resolve(&["use-theme"], &catalog());
    assert!(collect_external_dependencies(&resolved).is_empty());
}

// ========================================
// InstallPlan
// ========================================

#[test]
fn test_plan_places_by_kind() {
    let fs = MockFs::new();
    let plan = build(&["button", "use-theme"], &fs);

    let targets: Vec<PathBuf> = plan.files().iter().map(|f| f.target.clone()).collect();
    assert_eq!(
        targets,
        vec![
            PathBuf::from("/project/src/components/ui/button.tsx"),
            PathBuf::from("/project/src/hooks/use-theme.ts"),
            PathBuf::from("/project/src/lib/utils.ts"),
        ]
    );
    assert!(!plan.has_conflicts());
    assert!(plan.collisions().is_empty());
}

#[test]
fn test_plan_override_dir_applies_to_all_kinds() {
    let fs = MockFs::new();
    let resolved = resolve(&["button"], &catalog());
    let plan = InstallPlan::build(
        &resolved,
        &config(),
        Some(Path::new("vendor/apex")),
        Path::new(PROJECT),
        &fs,
    );

    assert!(plan
        .files()
        .iter()
        .all(|f| f.target.starts_with("/project/vendor/apex")));
    assert_eq!(plan.len(), 2);
}

#[test]
fn test_plan_detects_existing_files() {
    let fs = MockFs::new();
    fs.add_file("/project/src/lib/utils.ts", "existing");

    let plan = build(&["button"], &fs);

    assert!(plan.has_conflicts());
    assert_eq!(plan.conflicts(), &[PathBuf::from("/project/src/lib/utils.ts")]);
}

#[test]
fn test_plan_detects_collisions() {
    let fs = MockFs::new();
    let catalog = Catalog::from_records(vec![
        record("a", ComponentKind::Ui, &[("src/a/index.tsx", "index.tsx")], &[]),
        record("b", ComponentKind::Ui, &[("src/b/index.tsx", "nested/index.tsx")], &[]),
    ]);
    let resolved = resolve(&["a", "b"], &catalog);
    let plan = InstallPlan::build(&resolved, &config(), None, Path::new(PROJECT), &fs);

    assert_eq!(plan.collisions().len(), 1);
    let collision = &plan.collisions()[0];
    assert_eq!(
        collision.target,
        PathBuf::from("/project/src/components/ui/index.tsx")
    );
    assert_eq!(
        collision.claimants,
        vec![
            ("a".to_string(), "src/a/index.tsx".to_string()),
            ("b".to_string(), "src/b/index.tsx".to_string()),
        ]
    );
    assert!(collision.to_string().contains("a (src/a/index.tsx)"));
}

#[test]
fn test_plan_conflicts_are_deduplicated() {
    let fs = MockFs::new();
    fs.add_file("/project/src/components/ui/index.tsx", "");
    let catalog = Catalog::from_records(vec![
        record("a", ComponentKind::Ui, &[("src/a/index.tsx", "index.tsx")], &[]),
        record("b", ComponentKind::Ui, &[("src/b/index.tsx", "index.tsx")], &[]),
    ]);
    let resolved = resolve(&["a", "b"], &catalog);
    let plan = InstallPlan::build(&resolved, &config(), None, Path::new(PROJECT), &fs);

    assert_eq!(plan.conflicts().len(), 1);
}

// ========================================
// InstallExecutor
// ========================================

#[test]
fn test_execute_writes_rewritten_sources() {
    let fs = MockFs::new();
    add_sources(&fs);
    let store = RegistryStore::new(&fs, REGISTRY_ROOT);
    let plan = build(&["button"], &fs);

    let result = InstallExecutor::new(&store, &fs, &config()).execute(&plan, |_| {});

    assert!(result.is_success());
    assert_eq!(result.written_count(), 2);
    assert_eq!(result.written_components(), vec!["button", "utils"]);
    let written = fs
        .read_to_string(Path::new("/project/src/components/ui/button.tsx"))
        .unwrap();
    assert!(written.contains("from '@/lib/utils'"));
    assert!(fs.is_dir(Path::new("/project/src/components/ui")));
}

#[test]
fn test_execute_relative_mode_keeps_paths() {
    let fs = MockFs::new();
    add_sources(&fs);
    let store = RegistryStore::new(&fs, REGISTRY_ROOT);
    let mut config = config();
    config.aliases.enabled = false;
    let resolved = resolve(&["button"], &catalog());
    let plan = InstallPlan::build(&resolved, &config, None, Path::new(PROJECT), &fs);

    InstallExecutor::new(&store, &fs, &config).execute(&plan, |_| {});

    let written = fs
        .read_to_string(Path::new("/project/src/components/ui/button.tsx"))
        .unwrap();
    assert!(written.contains("from '../../lib/utils'"));
}

#[test]
fn test_execute_missing_source_continues_batch() {
    let fs = MockFs::new();
    fs.add_file("/pkg/src/lib/utils.ts", "export function cn() {}\n");
    let store = RegistryStore::new(&fs, REGISTRY_ROOT);
    let plan = build(&["button"], &fs);

    let result = InstallExecutor::new(&store, &fs, &config()).execute(&plan, |_| {});

    assert!(!result.is_success());
    assert_eq!(result.failure_count(), 1);
    assert_eq!(result.failed[0].file.component, "button");
    assert!(result.failed[0].error.contains("Button.tsx"));
    assert_eq!(result.written_components(), vec!["utils"]);
    assert!(fs.exists(Path::new("/project/src/lib/utils.ts")));
}

#[test]
fn test_execute_overwrites_existing_file() {
    let fs = MockFs::new();
    add_sources(&fs);
    fs.add_file("/project/src/lib/utils.ts", "old");
    let store = RegistryStore::new(&fs, REGISTRY_ROOT);
    let plan = build(&["utils"], &fs);

    InstallExecutor::new(&store, &fs, &config()).execute(&plan, |_| {});

    assert_eq!(
        fs.read_to_string(Path::new("/project/src/lib/utils.ts")).unwrap(),
        "export function cn() {}\n"
    );
}

#[test]
fn test_execute_reports_progress_per_file() {
    let fs = MockFs::new();
    add_sources(&fs);
    let store = RegistryStore::new(&fs, REGISTRY_ROOT);
    let plan = build(&["button"], &fs);

    let mut seen = Vec::new();
    InstallExecutor::new(&store, &fs, &config())
        .execute(&plan, |f| seen.push(f.component.clone()));

    assert_eq!(seen, vec!["button", "utils"]);
}

// ========================================
// installer
// ========================================

#[test]
fn test_manual_install_command() {
    let packages = vec!["clsx".to_string(), "tailwind-merge".to_string()];

    assert_eq!(
        manual_install_command(PackageManager::Npm, &packages),
        "npm install clsx tailwind-merge"
    );
    assert_eq!(
        manual_install_command(PackageManager::Pnpm, &packages),
        "pnpm add clsx tailwind-merge"
    );
}

#[tokio::test]
async fn test_process_installer_empty_list_is_noop() {
    let result = ProcessInstaller
        .install(&[], PackageManager::Npm, Path::new("/nonexistent"))
        .await;

    assert!(result.is_ok());
}
