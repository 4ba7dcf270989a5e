// Capsword Configuration
// Validated per-instance parameters and their TOML schema

use std::path::{Path, PathBuf};

use crate::classify;
use crate::mods::Mods;
use crate::usage;

/// One continuation allow-list entry: a key that keeps the word running
/// when all of its required modifier bits are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueEntry {
    pub usage_page: u16,
    pub usage_id: u16,
    /// Bits that must all be present (from the event or from held
    /// modifiers) for this entry to match. Empty always matches.
    pub required_mods: Mods,
}

impl ContinueEntry {
    /// Entry for a keyboard-page usage with no required modifiers
    pub fn key(usage_id: u16) -> Self {
        Self {
            usage_page: usage::PAGE_KEYBOARD,
            usage_id,
            required_mods: Mods::empty(),
        }
    }

    /// Set the required modifier bits
    pub fn with_mods(mut self, mods: Mods) -> Self {
        self.required_mods = mods;
        self
    }
}

/// Immutable parameter set for one word instance.
///
/// Built either programmatically or from a TOML file; never mutated after
/// the owning instance is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapsWordConfig {
    /// Bits applied to alphabetic keys while the word runs
    pub mods: Mods,
    /// Ordered allow-list consulted for keys that are neither letters
    /// nor digits. Duplicate keys are legal; the first matching entry
    /// wins.
    pub continuations: Vec<ContinueEntry>,
}

impl Default for CapsWordConfig {
    fn default() -> Self {
        Self {
            mods: Mods::LSFT,
            continuations: Vec::new(),
        }
    }
}

/// Errors that can occur when loading a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("unknown key name: {0}")]
    UnknownKey(String),

    #[error("unknown modifier name: {0}")]
    UnknownModifier(String),
}

/// TOML representation for deserializing a configuration
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct ConfigToml {
    #[serde(default)]
    mods: Option<Vec<String>>,

    #[serde(default)]
    continue_list: Vec<ContinueToml>,
}

/// A continuation entry is either a bare key name or a table with
/// required modifiers
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
enum ContinueToml {
    Key(String),
    Entry {
        key: String,
        #[serde(default)]
        mods: Vec<String>,
    },
}

impl CapsWordConfig {
    /// Create a configuration with the default modifier (left Shift) and
    /// an empty continuation list
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the applied modifier bits
    pub fn with_mods(mut self, mods: Mods) -> Self {
        self.mods = mods;
        self
    }

    /// Append a continuation entry
    pub fn continue_on(mut self, entry: ContinueEntry) -> Self {
        self.continuations.push(entry);
        self
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        let mut config = Self::new();

        // An explicitly empty mods list means "apply nothing"; only an
        // absent key falls back to left Shift.
        if let Some(names) = raw.mods {
            config.mods = parse_mods(&names)?;
        }

        for item in raw.continue_list {
            let (key, mod_names) = match item {
                ContinueToml::Key(key) => (key, Vec::new()),
                ContinueToml::Entry { key, mods } => (key, mods),
            };
            let usage_id =
                usage::usage_from_name(&key).ok_or_else(|| ConfigError::UnknownKey(key.clone()))?;
            if classify::is_alpha(usage::PAGE_KEYBOARD, usage_id)
                || classify::is_numeric(usage::PAGE_KEYBOARD, usage_id)
            {
                log::warn!(
                    "continuation entry '{}' is a letter or digit and is never consulted",
                    key
                );
            }
            config
                .continuations
                .push(ContinueEntry::key(usage_id).with_mods(parse_mods(&mod_names)?));
        }

        Ok(config)
    }

    /// Get the default configuration path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("capsword").join("capsword.toml"))
    }

    /// Load from the default location, falling back to the built-in
    /// defaults when no file exists
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }
}

/// Fold a list of modifier names into a mask
fn parse_mods(names: &[String]) -> Result<Mods, ConfigError> {
    let mut mods = Mods::empty();
    for name in names {
        mods |= Mods::from_name(name).ok_or_else(|| ConfigError::UnknownModifier(name.clone()))?;
    }
    Ok(mods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CapsWordConfig::new();
        assert_eq!(config.mods, Mods::LSFT);
        assert!(config.continuations.is_empty());
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
mods = ["LShift"]
continue_list = ["SPACE", "BACKSPACE", { key = "MINUS", mods = ["LShift"] }]
"#;

        let config = CapsWordConfig::from_toml(toml).unwrap();
        assert_eq!(config.mods, Mods::LSFT);
        assert_eq!(config.continuations.len(), 3);
        assert_eq!(config.continuations[0].usage_id, usage::KEY_SPACE);
        assert!(config.continuations[0].required_mods.is_empty());
        assert_eq!(config.continuations[1].usage_id, usage::KEY_BACKSPACE);
        assert_eq!(config.continuations[2].usage_id, usage::KEY_MINUS);
        assert_eq!(config.continuations[2].required_mods, Mods::LSFT);
    }

    #[test]
    fn test_config_mods_default_when_absent() {
        let config = CapsWordConfig::from_toml("continue_list = [\"SPACE\"]").unwrap();
        assert_eq!(config.mods, Mods::LSFT);
    }

    #[test]
    fn test_config_mods_explicit_empty() {
        let config = CapsWordConfig::from_toml("mods = []").unwrap();
        assert!(config.mods.is_empty());
    }

    #[test]
    fn test_config_multiple_mods() {
        let config = CapsWordConfig::from_toml("mods = [\"LShift\", \"RShift\"]").unwrap();
        assert_eq!(config.mods, Mods::LSFT | Mods::RSFT);
    }

    #[test]
    fn test_config_unknown_key() {
        let err = CapsWordConfig::from_toml("continue_list = [\"NO_SUCH_KEY\"]").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn test_config_unknown_modifier() {
        let err = CapsWordConfig::from_toml("mods = [\"Hyper\"]").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownModifier(_)));
    }

    #[test]
    fn test_config_bad_toml() {
        let err = CapsWordConfig::from_toml("mods = [").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_config_entry_order_preserved() {
        let toml = r#"
continue_list = [
    { key = "MINUS", mods = ["LShift"] },
    { key = "MINUS", mods = ["RShift"] },
]
"#;
        let config = CapsWordConfig::from_toml(toml).unwrap();
        assert_eq!(config.continuations[0].required_mods, Mods::LSFT);
        assert_eq!(config.continuations[1].required_mods, Mods::RSFT);
    }
}
