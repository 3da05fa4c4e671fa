use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if path == STDIN_PATH {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            return Ok(data);
        }

        let data = fs::read(self.resolve(path))?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
