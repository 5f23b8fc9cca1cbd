use super::*;
use crate::project::ProjectInfo;

fn paths() -> DirPaths {
    DirPaths::default()
}

fn record(name: &str, kind: ComponentKind) -> ComponentRecord {
    ComponentRecord {
        name: name.to_string(),
        kind,
        title: String::new(),
        description: String::new(),
        category: String::new(),
        files: vec![],
        dependencies: vec![],
        registry_dependencies: vec![],
        exports: vec![],
    }
}

#[test]
fn test_destination_by_kind() {
    assert_eq!(
        destination_dir(&ComponentKind::Ui, &paths(), None),
        PathBuf::from("./src/components/ui")
    );
    assert_eq!(
        destination_dir(&ComponentKind::Lib, &paths(), None),
        PathBuf::from("./src/lib")
    );
    assert_eq!(
        destination_dir(&ComponentKind::Hook, &paths(), None),
        PathBuf::from("./src/hooks")
    );
}

#[test]
fn test_unknown_kind_goes_to_components() {
    let kind = ComponentKind::Other("registry:block".to_string());
    assert_eq!(
        destination_dir(&kind, &paths(), None),
        PathBuf::from("./src/components/ui")
    );
}

#[test]
fn test_override_wins_for_every_kind() {
    let custom = Path::new("./custom");
    for kind in [ComponentKind::Ui, ComponentKind::Lib, ComponentKind::Hook] {
        assert_eq!(destination_dir(&kind, &paths(), Some(custom)), PathBuf::from("./custom"));
    }
}

#[test]
fn test_target_path_uses_base_name() {
    let file = ComponentFile {
        path: "src/components/Button/Button.tsx".to_string(),
        target: "components/ui/button.tsx".to_string(),
    };
    let target = target_path(Path::new("/project"), Path::new("src/components/ui"), &file);

    assert_eq!(target, PathBuf::from("/project/src/components/ui/button.tsx"));
}

#[test]
fn test_target_path_strips_current_dir() {
    let file = ComponentFile {
        path: "src/hooks/useTheme.ts".to_string(),
        target: "use-theme.ts".to_string(),
    };
    let target = target_path(Path::new("/project"), Path::new("./src/hooks"), &file);

    assert_eq!(target, PathBuf::from("/project/src/hooks/use-theme.ts"));
    assert_eq!(target.to_string_lossy(), "/project/src/hooks/use-theme.ts");
}

#[test]
fn test_target_path_absolute_override() {
    let file = ComponentFile {
        path: "src/Button.tsx".to_string(),
        target: "button.tsx".to_string(),
    };
    let target = target_path(Path::new("/project"), Path::new("/elsewhere/ui"), &file);

    assert_eq!(target, PathBuf::from("/elsewhere/ui/button.tsx"));
}

#[test]
fn test_import_path_alias_and_relative() {
    let mut config = ProjectConfig::default_for(&ProjectInfo::default());
    let button = record("button", ComponentKind::Ui);
    assert_eq!(import_path(&button, &config), "@/components/ui/button");

    config.aliases.enabled = false;
    assert_eq!(import_path(&button, &config), "./src/components/ui/button");
}

#[test]
fn test_project_dir() {
    assert_eq!(
        project_dir(Path::new("/project"), "./src/lib"),
        PathBuf::from("/project/src/lib")
    );
    assert_eq!(
        project_dir(Path::new("/project"), "src/./lib"),
        PathBuf::from("/project/src/lib")
    );
}
