use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::write_context;

/// File-based store for the pipeline's inspection checkpoints
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a new store, creating its directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create artifacts directory: {}", dir.display()))?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save rows as `<name>.csv`, header taken from the row type's field names
    pub fn save_table<T, I>(&self, name: &str, rows: I) -> Result<PathBuf>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let file_path = self.build_table_path(name);
        let bytes = encode_csv(rows).with_context(|| write_context(name, &file_path))?;

        self.write_atomically(&file_path, &bytes)
            .with_context(|| write_context(name, &file_path))?;

        info!("Saved table artifact: {}", file_path.display());
        Ok(file_path)
    }

    /// Save data as pretty JSON in `<key>.json`
    pub fn save_json<T: Serialize>(&self, key: &str, data: &T) -> Result<PathBuf> {
        let file_path = self.build_json_path(key);
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;

        self.write_atomically(&file_path, json.as_bytes())
            .with_context(|| write_context(key, &file_path))?;

        info!("Saved JSON artifact: {}", file_path.display());
        Ok(file_path)
    }

    /// Load `<key>.json`, or `None` if it was never written
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_json_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                file_path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }

    // --- Helper Methods ---

    fn build_table_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", name))
    }

    fn build_json_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Writes next to the target and renames, so readers never see a partial file
    fn write_atomically(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let temp_path = path.with_extension("tmp");

        if temp_path.exists() {
            fs::remove_file(&temp_path)?;
        }

        fs::write(&temp_path, bytes).context("Failed to write artifact file")?;
        fs::rename(&temp_path, path).context("Failed to move artifact into place")?;
        Ok(())
    }
}

fn encode_csv<T, I>(rows: I) -> Result<Vec<u8>>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());

    for row in rows {
        writer.serialize(row).context("Failed to serialize table row")?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush table: {}", e.error()))
}
