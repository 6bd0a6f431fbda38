//! # gwstyles Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads, merges, and validates configuration. The configuration answers
//! three questions for the discovery engine:
//!
//! - Where is the theme, and where inside it do the component stylesheets live?
//! - Which category priority table should be used?
//! - Should `.CSS` count as a stylesheet extension?
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags and `GWSTYLES_THEME` (applied by the commands)
//! 2. Project-specific `.gwstyles.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/gwstyles/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [theme]
//! path = "~/sites/web/themes/contrib/groundwork"
//! components_dir = "css/block-style-components"
//!
//! [discovery]
//! case_insensitive_extension = false
//!
//! [[categories]]
//! label = "🔲 Layout"
//! rank = 1
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let dir = cfg.resolve_style_dir(None, None)?;
//! let catalog = cfg.discoverer().discover(&dir);
//! ```
//!
use crate::catalog::{CategoryOrder, CategoryRank, ExtensionMatch, StyleDiscoverer};
use crate::common::fs::io;
use crate::core::error::{GwStylesError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    /// Category priority table. Empty means the built-in table.
    #[serde(default)]
    pub categories: Vec<CategoryRank>,
}

/// Where the theme's component stylesheets live.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme root directory (can use ~). Will be expanded.
    #[serde(default)]
    pub path: Option<String>,
    /// Stylesheet directory relative to the theme root.
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: None,
            components_dir: default_components_dir(),
        }
    }
}

/// Scan behaviour switches.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Accept `.CSS` and other casings of the extension. Unset means `false`.
    #[serde(default)]
    pub case_insensitive_extension: Option<bool>,
}

fn default_components_dir() -> String {
    "css/block-style-components".to_string()
}

impl Config {
    /// The configured priority table, or the built-in one when none is set.
    pub fn category_order(&self) -> CategoryOrder {
        if self.categories.is_empty() {
            CategoryOrder::default()
        } else {
            CategoryOrder::new(self.categories.clone())
        }
    }

    pub fn extension_match(&self) -> ExtensionMatch {
        if self.discovery.case_insensitive_extension.unwrap_or(false) {
            ExtensionMatch::CaseInsensitive
        } else {
            ExtensionMatch::Exact
        }
    }

    /// A discoverer wired with this configuration's table and extension rule.
    pub fn discoverer(&self) -> StyleDiscoverer {
        StyleDiscoverer::new(self.category_order()).with_extension_match(self.extension_match())
    }

    /// Resolves the directory to scan.
    ///
    /// `dir` names the stylesheet directory directly. Otherwise the theme root
    /// (`theme`, falling back to `[theme] path`) is joined with `components_dir`.
    ///
    /// # Errors
    ///
    /// Returns `GwStylesError::Config` when neither a directory nor a theme is known.
    pub fn resolve_style_dir(&self, dir: Option<&Path>, theme: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = dir {
            return Ok(expand_path(dir));
        }
        let theme_root = match theme {
            Some(theme) => expand_path(theme),
            None => match &self.theme.path {
                Some(path) => PathBuf::from(path),
                None => {
                    return Err(anyhow!(GwStylesError::Config(
                        "No theme path configured. Pass --theme, set GWSTYLES_THEME, or add [theme] path to .gwstyles.toml."
                            .to_string()
                    )))
                }
            },
        };
        Ok(theme_root.join(&self.theme.components_dir))
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

const PROJECT_CONFIG_FILENAME: &str = ".gwstyles.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Groundwork", "gwstyles") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.gwstyles.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.gwstyles.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.theme.path = project_cfg.theme.path.or(user.theme.path);
    merged.theme.components_dir = if project_cfg.theme.components_dir != default_components_dir() {
        project_cfg.theme.components_dir
    } else {
        user.theme.components_dir
    };
    merged.discovery.case_insensitive_extension = project_cfg
        .discovery
        .case_insensitive_extension
        .or(user.discovery.case_insensitive_extension);
    merged.categories = if !project_cfg.categories.is_empty() {
        project_cfg.categories
    } else {
        user.categories
    };
    merged
}

fn expand_config_paths(config: &mut Config) {
    if let Some(path) = &config.theme.path {
        let expanded = shellexpand::tilde(path).into_owned();
        debug!("Expanded theme path: {}", expanded);
        config.theme.path = Some(expanded);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if let Some(path) = &config.theme.path {
        // A missing theme is not fatal: discovery just finds nothing.
        if !Path::new(path).is_dir() {
            warn!("Configured theme path '{}' is not a directory.", path);
        }
    }
    if Path::new(&config.theme.components_dir).is_absolute() {
        return Err(anyhow!(GwStylesError::Config(format!(
            "components_dir '{}' must be relative to the theme root.",
            config.theme.components_dir
        ))));
    }
    let mut seen = HashSet::new();
    for entry in &config.categories {
        if entry.label.trim().is_empty() {
            return Err(anyhow!(GwStylesError::Config(format!(
                "Category table entry with rank {} has an empty label.",
                entry.rank
            ))));
        }
        if !seen.insert(entry.label.as_str()) {
            return Err(anyhow!(GwStylesError::Config(format!(
                "Category '{}' appears more than once in the category table.",
                entry.label
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [theme]
            path = "~/themes/groundwork"

            [discovery]
            case_insensitive_extension = true

            [[categories]]
            label = "Buttons"
            rank = 1

            [[categories]]
            label = "Cards"
            rank = 2
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.theme.path.as_deref(), Some("~/themes/groundwork")); // Not yet expanded
        assert_eq!(config.theme.components_dir, default_components_dir());
        assert_eq!(config.discovery.case_insensitive_extension, Some(true));
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.category_order().rank("Cards"), Some(2));
        assert_eq!(config.category_order().rank("🔲 Layout"), None);
        assert_eq!(config.extension_match(), ExtensionMatch::CaseInsensitive);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.category_order(), CategoryOrder::default());
        assert_eq!(config.extension_match(), ExtensionMatch::Exact);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[theme]\nname = \"groundwork\"");
        assert!(result.is_err());
        let result: std::result::Result<Config, _> =
            toml::from_str("[[categories]]\nlabel = \"A\"\nrank = 1\ncolor = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_project() {
        let user = Config {
            theme: ThemeConfig {
                path: Some("/user/theme".into()),
                components_dir: "css/user".into(),
            },
            categories: vec![CategoryRank { label: "User".into(), rank: 1 }],
            ..Default::default()
        };
        let project = Config {
            theme: ThemeConfig {
                path: Some("/project/theme".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.theme.path.as_deref(), Some("/project/theme"));
        // Project left components_dir at its default, so the user value stays.
        assert_eq!(merged.theme.components_dir, "css/user");
        assert_eq!(merged.categories[0].label, "User");
    }

    #[test]
    fn test_merge_extension_case_project_wins_when_set() {
        let user = Config {
            discovery: DiscoveryConfig {
                case_insensitive_extension: Some(true),
            },
            ..Default::default()
        };
        let project: Config = toml::from_str("[discovery]\ncase_insensitive_extension = false").unwrap();
        let merged = merge_configs(user.clone(), Some(project));
        assert_eq!(merged.discovery.case_insensitive_extension, Some(false));
        assert_eq!(merged.extension_match(), ExtensionMatch::Exact);

        let silent: Config = toml::from_str("[theme]\npath = \"/p\"").unwrap();
        let merged = merge_configs(user, Some(silent));
        assert_eq!(merged.extension_match(), ExtensionMatch::CaseInsensitive);
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            theme: ThemeConfig {
                path: Some("~/theme_test".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        expand_config_paths(&mut config);
        let expanded = config.theme.path.unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("theme_test"));
    }

    #[test]
    fn test_validate_rejects_duplicate_and_empty_labels() {
        let duplicate = Config {
            categories: vec![
                CategoryRank { label: "A".into(), rank: 1 },
                CategoryRank { label: "A".into(), rank: 2 },
            ],
            ..Default::default()
        };
        let err = validate_config(&duplicate).unwrap_err();
        assert!(err.to_string().contains("appears more than once"));

        let empty = Config {
            categories: vec![CategoryRank { label: "  ".into(), rank: 1 }],
            ..Default::default()
        };
        assert!(validate_config(&empty).is_err());
    }

    #[test]
    fn test_validate_rejects_absolute_components_dir() {
        let config = Config {
            theme: ThemeConfig {
                path: None,
                components_dir: "/etc/css".into(),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("must be relative"));
    }

    #[test]
    fn test_validate_tolerates_missing_theme() {
        let config = Config {
            theme: ThemeConfig {
                path: Some("/no/such/theme".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_resolve_style_dir() {
        let config = Config {
            theme: ThemeConfig {
                path: Some("/srv/themes/groundwork".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.resolve_style_dir(None, None).unwrap(),
            PathBuf::from("/srv/themes/groundwork/css/block-style-components")
        );
        assert_eq!(
            config
                .resolve_style_dir(None, Some(Path::new("/other/theme")))
                .unwrap(),
            PathBuf::from("/other/theme/css/block-style-components")
        );
        assert_eq!(
            config
                .resolve_style_dir(Some(Path::new("/direct/css")), Some(Path::new("/ignored")))
                .unwrap(),
            PathBuf::from("/direct/css")
        );
        let err = Config::default().resolve_style_dir(None, None).unwrap_err();
        assert!(err.to_string().contains("No theme path configured"));
    }

    #[test]
    fn test_find_project_config_path() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("web/themes")).unwrap();
        assert_eq!(find_project_config_path(&root.join("web/themes")), None);

        fs::write(root.join(PROJECT_CONFIG_FILENAME), "[theme]\n").unwrap();
        assert_eq!(
            find_project_config_path(&root.join("web/themes")),
            Some(root.join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_config_from_path_reports_parse_errors() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[theme\n").unwrap();
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
