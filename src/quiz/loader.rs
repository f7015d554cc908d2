use anyhow::{Context, Result};
use std::path::Path;

use super::types::{Campaign, Level};

pub fn load_level(path: &Path) -> Result<Level> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let level: Level =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(level)
}

pub fn load_campaign(campaign_dir: &Path) -> Result<Campaign> {
    let mut entries: Vec<_> = std::fs::read_dir(campaign_dir)
        .with_context(|| format!("reading campaign dir {}", campaign_dir.display()))?
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.starts_with("level_") && name.ends_with(".toml")
        })
        .collect();

    // Sort by filename so level_01, level_02, level_03 are in order
    entries.sort_by_key(|e| e.file_name());

    let mut levels = Vec::new();
    for entry in entries {
        levels.push(load_level(&entry.path())?);
    }

    Campaign::new(levels)
}
