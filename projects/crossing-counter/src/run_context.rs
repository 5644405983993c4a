use crate::run_artifacts::CountingLineDef;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionMetadata {
    pub original_name: String,
    pub created_at: DateTime<Utc>,
    pub run_id: String,
    #[serde(skip)]
    pub output_dir: PathBuf,
}

/// Find all track-stream files (.jsonl) under the input root
pub fn list_streams(input_root: &Path) -> Vec<PathBuf> {
    WalkDir::new(input_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .map(|s| s.to_lowercase() == "jsonl")
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect()
}

pub fn create_run(output_root: &Path, stream_name: &str) -> Result<SessionMetadata> {
    let stem = Path::new(stream_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid stream name: {}", stream_name))?;

    let output_dir = output_root.join(stem);
    if output_dir.exists() {
        return Err(anyhow::anyhow!(
            "Output directory already exists for: {}",
            stem
        ));
    }

    fs::create_dir_all(&output_dir)?;

    let metadata = SessionMetadata {
        original_name: stream_name.to_string(),
        created_at: Utc::now(),
        run_id: stem.to_string(),
        output_dir: output_dir.clone(),
    };

    let metadata_path = output_dir.join("metadata.json");
    let content = serde_json::to_string_pretty(&metadata)?;
    fs::write(metadata_path, content)?;

    Ok(metadata)
}

pub fn load_line_config(path: &Path) -> Result<CountingLineDef> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read line config at {:?}: {}", path, e))?;
    let def: CountingLineDef = serde_json::from_str(&content)?;
    Ok(def)
}
