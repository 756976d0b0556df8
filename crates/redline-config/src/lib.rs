//! Configuration management for redline.
//!
//! Parses `redline.toml` with serde and provides auto-discovery of the
//! config file in parent directories. CLI flags can override loaded
//! values via [`CliSettings`].
//!
//! ```toml
//! [render]
//! class_prefix = "criticmarkup"
//! gfm = true
//!
//! [theme.light]
//! addition = "#008800"
//!
//! [theme.dark]
//! addition = "#00dd00"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use redline_core::AnnotationKind;
use redline_theme::{Palette, ParseColorError, Theme};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "redline.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the CSS class prefix.
    pub class_prefix: Option<String>,
    /// Override the GFM toggle.
    pub gfm: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Per-scheme color overrides.
    theme: ThemeConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// CSS class prefix for annotation wrappers.
    pub class_prefix: String,
    /// Whether GitHub Flavored Markdown extensions are enabled.
    pub gfm: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_prefix: "criticmarkup".to_owned(),
            gfm: true,
        }
    }
}

/// Color overrides per scheme, as raw hex strings from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeConfig {
    light: PaletteOverrides,
    dark: PaletteOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaletteOverrides {
    addition: Option<String>,
    deletion: Option<String>,
    substitution: Option<String>,
    comment: Option<String>,
    highlight: Option<String>,
}

impl PaletteOverrides {
    fn entries(&self) -> [(AnnotationKind, Option<&String>); 5] {
        [
            (AnnotationKind::Addition, self.addition.as_ref()),
            (AnnotationKind::Deletion, self.deletion.as_ref()),
            (AnnotationKind::Substitution, self.substitution.as_ref()),
            (AnnotationKind::Comment, self.comment.as_ref()),
            (AnnotationKind::Highlight, self.highlight.as_ref()),
        ]
    }

    fn apply(&self, palette: &mut Palette, scheme: &str) -> Result<(), ConfigError> {
        for (kind, value) in self.entries() {
            if let Some(hex) = value {
                let color = hex.parse().map_err(|source: ParseColorError| {
                    ConfigError::Color {
                        field: format!("theme.{scheme}.{}", kind.css_suffix()),
                        source,
                    }
                })?;
                palette.set_color(kind, color);
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a specific file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&raw)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Discover `redline.toml` in `start_dir` or any of its ancestors.
    ///
    /// Returns `Ok(None)` when no config file exists; that is not an
    /// error, defaults apply.
    pub fn discover(start_dir: &Path) -> Result<Option<Self>, ConfigError> {
        for dir in start_dir.ancestors() {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Self::load(&candidate).map(Some);
            }
        }
        Ok(None)
    }

    /// Discover a config file, falling back to defaults when absent.
    pub fn load_or_default(start_dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self::discover(start_dir)?.unwrap_or_default())
    }

    /// Apply CLI overrides on top of the loaded values.
    pub fn apply_cli(&mut self, settings: &CliSettings) {
        if let Some(prefix) = &settings.class_prefix {
            self.render.class_prefix.clone_from(prefix);
        }
        if let Some(gfm) = settings.gfm {
            self.render.gfm = gfm;
        }
    }

    /// Resolved theme: defaults with any configured overrides applied.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::default();
        self.theme.light.apply(&mut theme.light, "light")?;
        self.theme.dark.apply(&mut theme.dark, "dark")?;
        Ok(theme)
    }

    /// Validate loaded values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.render.class_prefix;
        let valid_start = prefix.chars().next().is_some_and(char::is_alphabetic);
        let valid_rest = prefix
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !(valid_start && valid_rest) {
            return Err(ConfigError::Validation(format!(
                "render.class_prefix {prefix:?} is not a CSS identifier"
            )));
        }
        // Surface bad colors at load time, not at first render.
        self.theme()?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Invalid color value.
    #[error("invalid {field}: {source}")]
    Color {
        /// Config field path (e.g. `theme.dark.addition`).
        field: String,
        /// Underlying parse failure.
        source: ParseColorError,
    },
    /// Validation error.
    #[error("configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use redline_theme::Rgb;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render.class_prefix, "criticmarkup");
        assert!(config.render.gfm);
        assert_eq!(config.theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_load_render_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[render]\nclass_prefix = \"mdmarkup\"\ngfm = false\n",
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.render.class_prefix, "mdmarkup");
        assert!(!config.render.gfm);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_theme_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[theme.light]\naddition = \"#112233\"\n\n[theme.dark]\naddition = \"#99aabb\"\n",
        );
        let config = Config::load(&path).unwrap();
        let theme = config.theme().unwrap();
        assert_eq!(
            theme.light.color(AnnotationKind::Addition),
            Rgb::new(0x11, 0x22, 0x33)
        );
        assert_eq!(
            theme.dark.color(AnnotationKind::Addition),
            Rgb::new(0x99, 0xaa, 0xbb)
        );
        // Untouched kinds keep their defaults.
        assert_eq!(
            theme.light.color(AnnotationKind::Comment),
            Palette::light().color(AnnotationKind::Comment)
        );
    }

    #[test]
    fn test_invalid_color_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[theme.light]\naddition = \"green\"\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Color { ref field, .. } if field == "theme.light.addition"));
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[render]\nclass_prefix = \"1 bad\"\n");
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_discover_walks_parents() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[render]\nclass_prefix = \"mdmarkup\"\n");
        let nested = dir.path().join("docs").join("chapter");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Config::discover(&nested).unwrap().unwrap();
        assert_eq!(config.render.class_prefix, "mdmarkup");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.render.class_prefix, "criticmarkup");
        assert_eq!(config.config_path, None);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();
        config.apply_cli(&CliSettings {
            class_prefix: Some("mdmarkup".to_owned()),
            gfm: Some(false),
        });
        assert_eq!(config.render.class_prefix, "mdmarkup");
        assert!(!config.render.gfm);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[render\n");
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
