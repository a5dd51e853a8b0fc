//! Named, persisted bundles of collection settings.
//!
//! A preset stores an extension list, an exclude list and the gitignore flag
//! under a name. Presets live in a JSON array on disk. Entries that fail to
//! parse are dropped one by one with a warning, so a single bad entry never
//! hides the others.

use super::parsing::{normalize_extensions, split_exclude_list};
use crate::constants::{NEW_PRESET_NAME, PRESETS_FILE_NAME};
use crate::errors::{io_error_with_path, PresetError, Result};
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One named preset.
///
/// `extensions` is a comma-separated list (`rs, .toml`) and `excludes` holds
/// one path prefix per line, the way they are typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub extensions: String,
    #[serde(default)]
    pub excludes: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_use_gitignore")]
    pub use_gitignore: bool,
}

fn default_use_gitignore() -> bool {
    true
}

impl Preset {
    /// An empty preset: every extension, no excludes, gitignore on.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extensions: String::new(),
            excludes: String::new(),
            description: String::new(),
            use_gitignore: true,
        }
    }

    /// The normalized extension allow-list.
    pub fn extension_list(&self) -> Vec<String> {
        normalize_extensions([&self.extensions])
    }

    /// The user exclude prefixes, one per non-blank line.
    pub fn exclude_list(&self) -> Vec<String> {
        split_exclude_list(&self.excludes)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PresetError::Serialize(e).into())
    }

    /// Parses a single preset. A blank name is rejected.
    pub fn from_json(raw: &str) -> Result<Self> {
        let preset: Preset = serde_json::from_str(raw.trim()).map_err(PresetError::Parse)?;
        if preset.name.trim().is_empty() {
            return Err(PresetError::Parse(serde::de::Error::custom("preset name is empty")).into());
        }
        Ok(preset)
    }
}

/// A JSON file holding an ordered list of presets.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store in the platform config directory, if one can be determined.
    pub fn default_location() -> Option<Self> {
        ProjectDirs::from("", "", "content-collector")
            .map(|dirs| Self::new(dirs.config_dir().join(PRESETS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every well-formed preset, in stored order.
    ///
    /// A missing file is an empty store. A file that is not a JSON array is
    /// treated as empty too, with a warning.
    pub fn list(&self) -> Result<Vec<Preset>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No presets file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error_with_path(e, &self.path)),
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable presets file {}: {}", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        Ok(entries
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Preset>(value) {
                Ok(preset) if !preset.name.trim().is_empty() => Some(preset),
                Ok(_) => {
                    warn!("Dropping preset entry with an empty name");
                    None
                }
                Err(e) => {
                    warn!("Dropping malformed preset entry: {}", e);
                    None
                }
            })
            .collect())
    }

    pub fn get(&self, name: &str) -> Result<Option<Preset>> {
        Ok(self.list()?.into_iter().find(|p| p.name == name))
    }

    /// Like [`PresetStore::get`], but a missing preset is an error.
    pub fn require(&self, name: &str) -> Result<Preset> {
        self.get(name)?
            .ok_or_else(|| PresetError::NotFound(name.to_string()).into())
    }

    /// Stores `preset`, replacing any preset with the same name. The new entry
    /// goes to the end of the list.
    pub fn add(&self, preset: Preset) -> Result<()> {
        let mut presets = self.list()?;
        presets.retain(|p| p.name != preset.name);
        presets.push(preset);
        self.save(&presets)
    }

    /// Removes the preset called `name`. Returns whether one existed.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let mut presets = self.list()?;
        let before = presets.len();
        presets.retain(|p| p.name != name);
        if presets.len() == before {
            return Ok(false);
        }
        self.save(&presets)?;
        Ok(true)
    }

    /// Saves an edited preset. If its name changed, the entry under the old
    /// name is removed first.
    pub fn save_edited(&self, original_name: &str, preset: Preset) -> Result<()> {
        if original_name != preset.name {
            self.remove(original_name)?;
        }
        self.add(preset)
    }

    /// Serializes one stored preset for sharing.
    pub fn export(&self, name: &str) -> Result<String> {
        self.require(name)?.to_json()
    }

    /// Parses a shared preset and stores it.
    pub fn import(&self, raw: &str) -> Result<Preset> {
        let preset = Preset::from_json(raw)?;
        self.add(preset.clone())?;
        Ok(preset)
    }

    /// A name not used by any stored preset: `New preset`, `New preset 2`, ...
    pub fn unique_name(&self) -> Result<String> {
        let presets = self.list()?;
        let taken = |name: &str| presets.iter().any(|p| p.name == name);

        if !taken(NEW_PRESET_NAME) {
            return Ok(NEW_PRESET_NAME.to_string());
        }
        Ok((2..)
            .map(|n| format!("{} {}", NEW_PRESET_NAME, n))
            .find(|name| !taken(name))
            .unwrap_or_else(|| NEW_PRESET_NAME.to_string()))
    }

    fn save(&self, presets: &[Preset]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
        }
        let json = serde_json::to_string_pretty(presets).map_err(PresetError::Serialize)?;
        fs::write(&self.path, json).map_err(|e| io_error_with_path(e, &self.path))?;
        debug!("Saved {} preset(s) to {}", presets.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::{tempdir, TempDir};

    fn store() -> (TempDir, PresetStore) {
        let dir = tempdir().unwrap();
        let store = PresetStore::new(dir.path().join("nested/presets.json"));
        (dir, store)
    }

    fn preset(name: &str, exts: &str) -> Preset {
        Preset {
            extensions: exts.to_string(),
            ..Preset::new(name)
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_replaces_same_name_and_moves_to_end() {
        let (_dir, store) = store();
        store.add(preset("rust", "rs")).unwrap();
        store.add(preset("web", "js,ts")).unwrap();
        store.add(preset("rust", "rs,toml")).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["web", "rust"]);
        assert_eq!(store.get("rust").unwrap().unwrap().extensions, "rs,toml");
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = store();
        store.add(preset("a", "")).unwrap();
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_edited_renames() {
        let (_dir, store) = store();
        store.add(preset("old", "md")).unwrap();
        store.save_edited("old", preset("new", "md")).unwrap();
        assert!(store.get("old").unwrap().is_none());
        assert!(store.get("new").unwrap().is_some());
    }

    #[test]
    fn test_export_import_round_trip_with_awkward_values() {
        let (_dir, store) = store();
        let awkward = Preset {
            name: "quotes \"and\", commas".to_string(),
            extensions: ".RS, toml".to_string(),
            excludes: "src/gen\ndocs/\"old\"".to_string(),
            description: "line one\nline two".to_string(),
            use_gitignore: false,
        };
        store.add(awkward.clone()).unwrap();
        let exported = store.export(&awkward.name).unwrap();

        let (_dir2, other) = self::store();
        let imported = other.import(&exported).unwrap();
        assert_eq!(imported, awkward);
        assert_eq!(other.list().unwrap(), vec![awkward]);
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"[{"name":"good","extensions":"rs"},{"extensions":"no name"},42,{"name":"  "}]"#,
        )
        .unwrap();

        let presets = store.list().unwrap();
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].name, "good");
        assert!(presets[0].use_gitignore);
    }

    #[test]
    fn test_garbage_file_is_empty() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_require_missing_preset() {
        let (_dir, store) = store();
        let err = store.require("nope").unwrap_err();
        assert!(matches!(err, Error::Preset(PresetError::NotFound(_))));
    }

    #[test]
    fn test_import_rejects_blank_name() {
        let (_dir, store) = store();
        assert!(store.import(r#"{"name":""}"#).is_err());
        assert!(store.import("not json").is_err());
    }

    #[test]
    fn test_unique_name() {
        let (_dir, store) = store();
        assert_eq!(store.unique_name().unwrap(), "New preset");
        store.add(Preset::new("New preset")).unwrap();
        store.add(Preset::new("New preset 2")).unwrap();
        assert_eq!(store.unique_name().unwrap(), "New preset 3");
    }

    #[test]
    fn test_preset_lists() {
        let p = Preset {
            excludes: "src/gen\n\n  vendor  \n".to_string(),
            ..preset("p", " .Md, txt ,")
        };
        assert_eq!(p.extension_list(), vec!["md", "txt"]);
        assert_eq!(p.exclude_list(), vec!["src/gen", "vendor"]);
    }
}
