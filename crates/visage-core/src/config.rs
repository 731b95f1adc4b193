//! View configuration
//!
//! Loaded from a TOML file with the following structure:
//!
//! ```toml
//! [display]
//! digits = 4
//! palette = ["#8884d8", "#82ca9d", "#ff7300", "#ff0000", "#0088fe"]
//!
//! [face]
//! roles = ["A1", "A2", "A3", "A4", "A5"]
//! ```
//!
//! Every section and key is optional. `face.roles` assigns attributes to
//! head, eyes, mouth, nose and ears explicitly; without it the first five
//! attributes are used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, VisageError, VisageResult};
use crate::face::FaceRole;
use crate::palette::Palette;

/// Largest number of fraction digits accepted for display
pub const MAX_DIGITS: usize = 12;

const DEFAULT_DIGITS: usize = 4;

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayConfig {
    /// Fraction digits for statistics
    pub digits: usize,
    /// Series colours by attribute position
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            palette: Palette::default(),
        }
    }
}

/// Face settings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FaceConfig {
    /// Attribute per role, in role order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl FaceConfig {
    /// Attributes that drive the face, in role order
    ///
    /// Explicit roles must all be attributes of the table; without them
    /// every attribute is a candidate and the first five are used.
    pub fn face_attributes(&self, attributes: &[String]) -> VisageResult<Vec<String>> {
        match &self.roles {
            Some(roles) => {
                if let Some(unknown) = roles.iter().find(|r| !attributes.contains(r)) {
                    return Err(VisageError::UnknownAttribute(unknown.clone()));
                }
                Ok(roles.clone())
            }
            None => Ok(attributes.to_vec()),
        }
    }
}

/// Complete view configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewConfig {
    pub display: DisplayConfig,
    pub face: FaceConfig,
}

#[derive(Debug, Deserialize, Default)]
struct TomlDisplay {
    #[serde(default)]
    digits: Option<usize>,
    #[serde(default)]
    palette: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlFace {
    #[serde(default)]
    roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlView {
    #[serde(default)]
    display: TomlDisplay,
    #[serde(default)]
    face: TomlFace,
}

impl ViewConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let toml: TomlView =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let display = parse_display(toml.display)?;
        let face = parse_face(toml.face)?;
        Ok(Self { display, face })
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load an explicit file, or the default location when none is given
    ///
    /// A missing explicit file is an error; a missing default file yields
    /// the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/visage/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("visage").join("config.toml"))
}

fn parse_display(toml: TomlDisplay) -> ConfigResult<DisplayConfig> {
    let digits = toml.digits.unwrap_or(DEFAULT_DIGITS);
    if digits > MAX_DIGITS {
        return Err(ConfigError::OutOfRange(format!(
            "display.digits must be at most {MAX_DIGITS}, got {digits}"
        )));
    }

    let palette = match toml.palette {
        Some(hex) => Palette::from_hex_list(&hex)?,
        None => Palette::default(),
    };

    Ok(DisplayConfig { digits, palette })
}

fn parse_face(toml: TomlFace) -> ConfigResult<FaceConfig> {
    if let Some(roles) = &toml.roles {
        let expected = FaceRole::ALL.len();
        if roles.len() != expected {
            return Err(ConfigError::RoleCount {
                expected,
                found: roles.len(),
            });
        }
    }

    let roles = toml
        .roles
        .map(|roles| roles.into_iter().map(|r| r.trim().to_string()).collect());
    Ok(FaceConfig { roles })
}
