use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mhx/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MhxConfig {
    /// Pretty-print markup output. When false, markup is written with
    /// references rewritten but otherwise untouched.
    pub pretty_print: bool,
    /// Spaces per indentation level in pretty-printed output.
    pub indent_width: usize,
    /// User MIME -> extension additions, consulted after the built-in
    /// table and before the registry (e.g. "application/x-foo" = "foo").
    #[serde(default)]
    pub extra_extensions: HashMap<String, String>,
}

impl Default for MhxConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            indent_width: 2,
            extra_extensions: HashMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mhx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MhxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MhxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MhxConfig = toml::from_str(&data)?;
    Ok(cfg)
}
