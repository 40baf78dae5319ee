//! Persisted light/dark theme preference.
//!
//! The theme has nothing to do with the listing itself. It is a single
//! boolean stored as `{ "darkMode": true }` and read once at start, then
//! written back whenever it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("Unknown theme: '{}'. Use light or dark.", other),
        }
    }
}

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreferenceFile {
    dark_mode: bool,
}

/// File-backed theme preference.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved theme.
    ///
    /// A missing file means light. An unreadable or corrupt file is logged
    /// and also treated as light.
    pub fn load(&self) -> Theme {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Theme::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read theme preference");
                return Theme::default();
            }
        };

        match serde_json::from_str::<PreferenceFile>(&content) {
            Ok(file) => Theme::from_dark_mode(file.dark_mode),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt theme preference");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preference directory: {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string(&PreferenceFile {
            dark_mode: theme.is_dark(),
        })?;

        // Readers must never see a truncated file, so write a sibling and
        // rename it over the old one.
        let tmp = self.temp_path();
        std::fs::write(&tmp, json)
            .with_context(|| format!("Failed to write preference file: {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to write preference file: {}", self.path.display()))?;
        tracing::debug!(theme = theme.as_str(), "saved theme preference");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "preferences.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// Flip the saved theme and return the new value.
    ///
    /// Not atomic across processes. Callers sharing one store must
    /// serialize toggles themselves.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_light() {
        let tmp = TempDir::new().unwrap();
        let store = PreferenceStore::new(tmp.path().join("prefs.json"));
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let store = PreferenceStore::new(tmp.path().join("nested/prefs.json"));
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"darkMode":true}"#);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let store = PreferenceStore::new(tmp.path().join("prefs.json"));
        store.save(Theme::Dark).unwrap();
        store.save(Theme::Light).unwrap();

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["prefs.json".to_string()]);
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let tmp = TempDir::new().unwrap();
        let store = PreferenceStore::new(tmp.path().join("prefs.json"));
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn corrupt_file_is_light() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        std::fs::write(&path, "dark please").unwrap();
        assert_eq!(PreferenceStore::new(path).load(), Theme::Light);
    }

    #[test]
    fn parse_theme() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
