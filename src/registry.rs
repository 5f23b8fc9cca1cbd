//! コンポーネントレジストリ
//!
//! カタログ（registry.json）とコンポーネントレコード（components/<name>.json）の
//! 型定義と読み込みを提供する。

mod model;
mod store;

pub use model::{
    group_by_category, normalize_component_name, ComponentFile, ComponentKind, ComponentRecord,
    RegistryIndex,
};
pub use store::{resolve_registry_root, RegistryStore};

#[cfg(test)]
pub use store::Catalog;
