use crate::utils::error::Result;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// 本機讀寫：輸入檔或 stdin，輸出檔或 stdout
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    /// `None` 或 `-` 代表從 stdin 讀取
    pub fn read_source(&self, input: Option<&str>) -> Result<String> {
        match input {
            None | Some("-") => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            Some(path) => {
                tracing::debug!("Reading source from: {}", path);
                Ok(fs::read_to_string(path)?)
            }
        }
    }

    pub fn write_file(&self, path: &str, data: &str) -> Result<()> {
        let full_path = Path::new(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    pub fn write_stdout(&self, data: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data.as_bytes())?;
        if !data.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}
