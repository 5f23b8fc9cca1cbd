use super::*;
use crate::fs::mock::MockFs;
use crate::registry::ComponentKind;
use serial_test::serial;

const ROOT: &str = "/pkg";

fn index_json(components: &[&str]) -> String {
    serde_json::json!({
        "name": "apex-design-system",
        "version": "1.2.0",
        "components": components,
    })
    .to_string()
}

fn component_json(name: &str, deps: &[&str]) -> String {
    serde_json::json!({
        "name": name,
        "type": "registry:ui",
        "title": name,
        "description": "",
        "category": "inputs",
        "files": [{ "path": format!("src/{}.tsx", name), "target": format!("{}.tsx", name) }],
        "dependencies": [],
        "registryDependencies": deps,
        "exports": [],
    })
    .to_string()
}

fn add_component(fs: &MockFs, name: &str, deps: &[&str]) {
    fs.add_file(
        &format!("{}/registry/components/{}.json", ROOT, name),
        &component_json(name, deps),
    );
}

#[test]
fn test_load_index() {
    let fs = MockFs::new();
    fs.add_file("/pkg/registry/registry.json", &index_json(&["button", "input"]));

    let store = RegistryStore::new(&fs, ROOT);
    let index = store.load_index().unwrap();

    assert_eq!(index.name, "apex-design-system");
    assert_eq!(index.version, "1.2.0");
    assert_eq!(index.components, vec!["button", "input"]);
    assert!(index.contains("input"));
    assert!(!index.contains("dialog"));
}

#[test]
fn test_load_index_missing_is_registry_error() {
    let fs = MockFs::new();
    let store = RegistryStore::new(&fs, ROOT);

    let err = store.load_index().unwrap_err();
    assert!(matches!(err, ApexError::Registry(_)));
}

#[test]
fn test_load_index_malformed_is_registry_error() {
    let fs = MockFs::new();
    fs.add_file("/pkg/registry/registry.json", "{ not json");
    let store = RegistryStore::new(&fs, ROOT);

    assert!(matches!(store.load_index(), Err(ApexError::Registry(_))));
}

#[test]
fn test_load_component_found() {
    let fs = MockFs::new();
    add_component(&fs, "button", &[]);
    let store = RegistryStore::new(&fs, ROOT);

    let record = store.load_component("button").unwrap().unwrap();
    assert_eq!(record.name, "button");
    assert_eq!(record.kind, ComponentKind::Ui);
}

#[test]
fn test_load_component_absent_is_none() {
    let fs = MockFs::new();
    let store = RegistryStore::new(&fs, ROOT);

    assert!(store.load_component("dialog").unwrap().is_none());
}

#[test]
fn test_load_component_rejects_path_like_names() {
    let fs = MockFs::new();
    fs.add_file("/pkg/registry/secret.json", &component_json("secret", &[]));
    let store = RegistryStore::new(&fs, ROOT);

    assert!(store.load_component("../secret").unwrap().is_none());
    assert!(store.load_component("").unwrap().is_none());
}

#[test]
fn test_load_component_malformed_is_error() {
    let fs = MockFs::new();
    fs.add_file("/pkg/registry/components/broken.json", "[1, 2");
    let store = RegistryStore::new(&fs, ROOT);

    assert!(store.load_component("broken").is_err());
    // lookup は存在しないレコードと壊れたレコードを区別する
    assert!(matches!(store.lookup("broken"), Lookup::Invalid(detail) if detail.contains("JSON")));
    assert_eq!(store.lookup("ghost"), Lookup::Absent);
}

#[test]
fn test_read_source_resolves_against_root() {
    let fs = MockFs::new();
    fs.add_file("/pkg/src/button.tsx", "export const Button = 1;");
    let store = RegistryStore::new(&fs, ROOT);

    let file = ComponentFile {
        path: "src/button.tsx".to_string(),
        target: "button.tsx".to_string(),
    };
    assert_eq!(store.read_source(&file).unwrap(), "export const Button = 1;");
}

#[test]
fn test_read_source_missing_is_source_not_found() {
    let fs = MockFs::new();
    let store = RegistryStore::new(&fs, ROOT);

    let file = ComponentFile {
        path: "src/gone.tsx".to_string(),
        target: "gone.tsx".to_string(),
    };
    match store.read_source(&file) {
        Err(ApexError::SourceNotFound { path }) => {
            assert_eq!(path, PathBuf::from("/pkg/src/gone.tsx"))
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_load_catalog_collects_warnings() {
    let fs = MockFs::new();
    add_component(&fs, "button", &[]);
    fs.add_file("/pkg/registry/components/broken.json", "nope");
    let store = RegistryStore::new(&fs, ROOT);
    let index: RegistryIndex =
        serde_json::from_str(&index_json(&["button", "ghost", "broken"])).unwrap();

    let (catalog, warnings) = store.load_catalog(&index);

    assert_eq!(catalog.records().len(), 1);
    assert!(catalog.get("button").is_some());
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0], LoadWarning::Missing("ghost".to_string()));
    assert!(matches!(&warnings[1], LoadWarning::Invalid { name, .. } if name == "broken"));
}

#[test]
fn test_catalog_lookup() {
    let record: ComponentRecord = serde_json::from_str(&component_json("input", &[])).unwrap();
    let catalog = Catalog::from_records(vec![record]);

    assert!(matches!(catalog.lookup("input"), Lookup::Found(r) if r.name == "input"));
    assert_eq!(catalog.lookup("button"), Lookup::Absent);
}

#[test]
#[serial]
fn test_resolve_registry_root_prefers_explicit_path() {
    std::env::set_var(REGISTRY_ENV, "/from/env");
    let root = resolve_registry_root(Some(Path::new("/explicit"))).unwrap();
    assert_eq!(root, PathBuf::from("/explicit"));
    std::env::remove_var(REGISTRY_ENV);
}

#[test]
#[serial]
fn test_resolve_registry_root_uses_env_var() {
    std::env::set_var(REGISTRY_ENV, "/from/env");
    let root = resolve_registry_root(None).unwrap();
    assert_eq!(root, PathBuf::from("/from/env"));
    std::env::remove_var(REGISTRY_ENV);
}

#[test]
#[serial]
fn test_resolve_registry_root_falls_back_to_executable_dir() {
    std::env::remove_var(REGISTRY_ENV);
    let root = resolve_registry_root(None).unwrap();
    let exe = std::env::current_exe().unwrap();
    assert_eq!(Some(root.as_path()), exe.parent());
}
