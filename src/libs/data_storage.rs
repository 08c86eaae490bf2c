use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = ".jtbd";

/// Resolves the per-user directories the tools read from and write to.
///
/// Everything lives under `~/.jtbd` except the manual backup documents,
/// which are written straight into the home directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    home: PathBuf,
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let home = match OS {
            "windows" => var("USERPROFILE").unwrap_or_else(|_| ".".into()),
            _ => var("HOME").unwrap_or_else(|_| ".".into()),
        };
        let home = PathBuf::from(home);
        let base_path = home.join(APP_DIR_NAME);

        Self { home, base_path }
    }

    /// Path of a file inside `~/.jtbd`, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Path of a file directly in the user's home directory.
    pub fn home_file(&self, file_name: &str) -> PathBuf {
        self.home.join(file_name)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
