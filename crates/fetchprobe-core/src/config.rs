use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/fetchprobe/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Whole-request timeout per attempt, in seconds (connect + transfer).
    pub timeout_secs: u64,
    /// Optional receive buffer size in bytes (None = 8192).
    #[serde(default)]
    pub buffer_bytes: Option<usize>,
    /// Optional directory for output files (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            buffer_bytes: None,
            output_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProbeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProbeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ProbeConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ProbeConfig::default();
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.buffer_bytes.is_none());
        assert!(cfg.output_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ProbeConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ProbeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
        assert_eq!(parsed.buffer_bytes, cfg.buffer_bytes);
        assert_eq!(parsed.output_dir, cfg.output_dir);
    }

    #[test]
    fn config_toml_minimal() {
        let cfg: ProbeConfig = toml::from_str("timeout_secs = 10").unwrap();
        assert_eq!(cfg.timeout_secs, 10);
        assert!(cfg.buffer_bytes.is_none());
        assert!(cfg.output_dir.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            timeout_secs = 5
            buffer_bytes = 65536
            output_dir = "/tmp/probes"
        "#;
        let cfg: ProbeConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.buffer_bytes, Some(65536));
        assert_eq!(cfg.output_dir.as_deref(), Some(std::path::Path::new("/tmp/probes")));
    }
}
