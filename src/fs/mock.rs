//! テスト用モックファイルシステム

use super::*;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<BTreeMap<String, MockEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MockEntry {
    File(Vec<u8>),
    Dir,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(BTreeMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::File(content.as_bytes().to_vec()));
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::Dir);
    }

    /// 登録済みファイルのパス一覧（ディレクトリは除く）
    pub fn file_paths(&self) -> Vec<String> {
        self.files
            .read()
            .unwrap()
            .iter()
            .filter(|(_, entry)| matches!(entry, MockEntry::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn not_found() -> crate::error::ApexError {
    std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into()
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(&key(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(
            self.files.read().unwrap().get(&key(path)),
            Some(MockEntry::Dir)
        )
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.add_dir(&key(path));
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.files.read().unwrap().get(&key(path)) {
            Some(MockEntry::File(content)) => Ok(String::from_utf8_lossy(content).to_string()),
            Some(MockEntry::Dir) => Err(std::io::Error::new(
                std::io::ErrorKind::IsADirectory,
                "is a directory",
            )
            .into()),
            None => Err(not_found()),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.files
            .write()
            .unwrap()
            .insert(key(path), MockEntry::File(content.to_vec()));
        Ok(())
    }
}
