use super::types::{
    ApiConfig, GemlistConfig, ListConfig, RawApiConfig, RawGemlistConfig, RawListConfig,
};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

/// A config file that takes part in the merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    pub name: &'static str,
    pub path: PathBuf,
}

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<GemlistConfig> {
        let paths: Vec<PathBuf> = Self::layers().into_iter().map(|l| l.path).collect();
        Self::load_layers(&paths)
    }

    /// Config layers in merge order (user, then project)
    pub fn layers() -> Vec<ConfigLayer> {
        let mut layers = Vec::new();
        if let Some(path) = Self::user_config_path() {
            layers.push(ConfigLayer { name: "user", path });
        }
        layers.push(ConfigLayer {
            name: "project",
            path: Self::project_config_path(),
        });
        layers
    }

    /// Load and merge config files in order; later files win, missing files are skipped
    pub fn load_layers(paths: &[PathBuf]) -> Result<GemlistConfig> {
        let mut raw = RawGemlistConfig::default();

        for path in paths {
            if let Some(layer) = Self::read_raw(path)? {
                raw = Self::merge_raw(raw, layer);
            }
        }

        // Convert to final config with defaults applied
        Ok(Self::finalize(raw))
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gemlist").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with GEMLIST_PROJECT_CONFIG_DIR env var (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("GEMLIST_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".gemlist/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<Option<RawGemlistConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawGemlistConfig, overlay: RawGemlistConfig) -> RawGemlistConfig {
        RawGemlistConfig {
            api: RawApiConfig {
                base_url: overlay.api.base_url.or(base.api.base_url),
                api_version: overlay.api.api_version.or(base.api.api_version),
                page_size: overlay.api.page_size.or(base.api.page_size),
                api_key_env: overlay.api.api_key_env.or(base.api.api_key_env),
            },
            list: RawListConfig {
                capabilities: overlay.list.capabilities.or(base.list.capabilities),
                fetch_once: overlay.list.fetch_once.or(base.list.fetch_once),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawGemlistConfig) -> GemlistConfig {
        let api_defaults = ApiConfig::default();
        let list_defaults = ListConfig::default();

        GemlistConfig {
            api: ApiConfig {
                base_url: raw.api.base_url.unwrap_or(api_defaults.base_url),
                api_version: raw.api.api_version.unwrap_or(api_defaults.api_version),
                page_size: raw.api.page_size.unwrap_or(api_defaults.page_size),
                api_key_env: raw.api.api_key_env,
            },
            list: ListConfig {
                capabilities: raw.list.capabilities.unwrap_or(list_defaults.capabilities),
                fetch_once: raw.list.fetch_once.unwrap_or(list_defaults.fetch_once),
            },
        }
    }
}
