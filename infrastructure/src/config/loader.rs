//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["plog.toml", ".plog.toml"];

/// Prefix of environment overrides, e.g. `PLOG_LOGGERS__CONSOLE__LEVEL=debug`
const ENV_PREFIX: &str = "PLOG_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PLOG_` environment variables (`__` separates nested keys)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./plog.toml` or `./.plog.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/plog/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/plog/config.toml if set,
    /// otherwise falls back to ~/.config/plog/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("plog").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used, highest priority first
    pub fn config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut sources = vec![format!("[     ] Env:     {}*", ENV_PREFIX)];

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            sources.push(format!("[{:<5}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => sources.push(format!("[FOUND] Project: {}", path.display())),
            None => sources.push(format!(
                "[     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            sources.push(format!("[{}] Global:  {}", mark, path.display()));
        }

        sources.push("[     ] Default: built-in defaults".to_string());
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_config::FileOutputKind;
    use plog_domain::LogLevel;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.loggers.is_empty());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("plog"));
    }

    #[test]
    fn test_explicit_file_is_merged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
            [loggers.explicit_test_audit]
            output = "file"
            level = "trace"

            [loggers.explicit_test_audit.file]
            name_format = "audit.log"
            "#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(path.as_path())).unwrap();

        let audit = &config.loggers["explicit_test_audit"];
        assert_eq!(audit.output, FileOutputKind::File);
        assert_eq!(audit.level, LogLevel::Trace);
        assert_eq!(audit.file.as_ref().unwrap().name_format, "audit.log");
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[loggers.bad]\nlevel = \"loud\"\n").unwrap();

        assert!(ConfigLoader::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_sources_list_explicit_path() {
        let sources = ConfigLoader::config_sources(Some(Path::new("/nonexistent/plog.toml")));

        assert!(sources.iter().any(|s| s.contains("[MISSING] Explicit")));
        assert!(sources.last().unwrap().contains("Default"));
    }
}
