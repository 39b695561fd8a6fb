use crate::sidebar::{GuardPolicy, SectionKind, Visibility};
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// URL or file path of the document to open on startup
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Sections hidden on startup, by config key (`servers`, `paths`, ...)
    #[serde(default)]
    pub hidden_sections: Vec<String>,

    /// Reproduce the old security guard and case-sensitive filters
    #[serde(default)]
    pub legacy_guards: bool,
}

impl SidebarConfig {
    /// Initial visibility; unknown section names are logged and skipped
    pub fn visibility(&self) -> Visibility {
        let hidden = self.hidden_sections.iter().filter_map(|name| {
            let kind = SectionKind::from_config_key(name);
            if kind.is_none() {
                tracing::warn!("unknown section in hidden_sections: {name}");
            }
            kind
        });
        Visibility::with_hidden(hidden)
    }

    pub fn guard_policy(&self) -> GuardPolicy {
        if self.legacy_guards {
            GuardPolicy::Legacy
        } else {
            GuardPolicy::Corrected
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        let app_dir = home_dir.join(".config").join("swagger-sidebar-tui");

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir.join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Remember a new document source and save
    pub fn set_source(&mut self, source: String) -> Result<()> {
        self.document.source = Some(source);
        self.save()
    }
}

/// Validate a document source: an http(s) URL or a path to an existing file
pub fn validate_source(source: &str) -> Result<(), String> {
    let source = source.trim();
    if source.is_empty() {
        return Err("Source cannot be empty".to_string());
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        return match url::Url::parse(source) {
            Ok(parsed) if parsed.host_str().is_some() => Ok(()),
            Ok(_) => Err("URL has no host".to_string()),
            Err(e) => Err(format!("Invalid URL: {e}")),
        };
    }

    if source.contains("://") {
        return Err("Only http:// and https:// URLs are supported".to_string());
    }

    if !Path::new(source).is_file() {
        return Err(format!("File not found: {source}"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "swagger-sidebar-tui-{}-{name}",
            std::process::id()
        ))
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document.source, None);
        assert!(config.sidebar.hidden_sections.is_empty());
        assert_eq!(config.sidebar.guard_policy(), GuardPolicy::Corrected);
        assert_eq!(config.sidebar.visibility(), Visibility::default());
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            [document]
            source = "https://petstore3.swagger.io/api/v3/openapi.json"

            [sidebar]
            hidden_sections = ["servers", "Headers", "bogus"]
            legacy_guards = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.document.source.as_deref(),
            Some("https://petstore3.swagger.io/api/v3/openapi.json")
        );
        assert_eq!(config.sidebar.guard_policy(), GuardPolicy::Legacy);

        let visibility = config.sidebar.visibility();
        assert!(!visibility.is_visible(SectionKind::Servers));
        assert!(!visibility.is_visible(SectionKind::Headers));
        assert!(visibility.is_visible(SectionKind::Paths));
        assert!(!visibility.info_expanded());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("[document]\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("config.toml");
        let mut config = Config::default();
        config.document.source = Some("./openapi.json".to_string());
        config.sidebar.hidden_sections = vec!["schemas".to_string()];

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let config = Config::load_from(&temp_path("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_source_urls() {
        assert!(validate_source("https://petstore3.swagger.io/api/v3/openapi.json").is_ok());
        assert!(validate_source("http://localhost:5000/swagger/v1/swagger.json").is_ok());
        assert!(validate_source("").is_err());
        assert!(validate_source("   ").is_err());
        assert!(validate_source("ftp://example.com/openapi.json").is_err());
        assert!(validate_source("http://").is_err());
    }

    #[test]
    fn test_validate_source_files() {
        let path = temp_path("openapi.json");
        fs::write(&path, "{}").unwrap();
        assert!(validate_source(path.to_str().unwrap()).is_ok());
        fs::remove_file(&path).unwrap();

        let err = validate_source("/no/such/openapi.json").unwrap_err();
        assert!(err.contains("File not found"));
    }
}
