use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::StylistError;
use crate::models::UserProfile;
use crate::storage::default_data_dir;

const PROFILE_FILE_NAME: &str = "profile.json";

/// Persistence for the single user profile.
pub trait ProfileStore {
    /// Writes the profile. Fails when one exists and `overwrite` is false.
    fn save(&mut self, profile: &UserProfile, overwrite: bool) -> Result<PathBuf, StylistError>;

    fn load(&self) -> Result<UserProfile, StylistError>;

    fn exists(&self) -> bool;

    /// Removes the stored profile. Does nothing when there is none.
    fn delete(&mut self) -> Result<(), StylistError>;
}

/// Stores the profile as pretty-printed JSON in a directory.
pub struct FileProfileStore {
    storage_path: PathBuf,
}

impl FileProfileStore {
    pub fn new(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }

    /// Store rooted in the application data directory
    pub fn new_default() -> Result<Self, StylistError> {
        Ok(Self::new(default_data_dir()?))
    }

    pub fn profile_path(&self) -> PathBuf {
        self.storage_path.join(PROFILE_FILE_NAME)
    }

    fn path_string(path: &Path) -> String {
        path.display().to_string()
    }
}

impl ProfileStore for FileProfileStore {
    fn save(&mut self, profile: &UserProfile, overwrite: bool) -> Result<PathBuf, StylistError> {
        let path = self.profile_path();
        if path.exists() && !overwrite {
            return Err(StylistError::ProfileAlreadyExists {
                path: Self::path_string(&path),
            });
        }

        fs::create_dir_all(&self.storage_path)
            .map_err(|e| StylistError::StorageIOError { source: e })?;
        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| StylistError::SerializeError { source: e })?;
        fs::write(&path, content).map_err(|e| StylistError::StorageIOError { source: e })?;

        info!("Profile saved: {}", path.display());
        Ok(path)
    }

    fn load(&self) -> Result<UserProfile, StylistError> {
        let path = self.profile_path();
        if !path.exists() {
            return Err(StylistError::ProfileNotFound {
                path: Self::path_string(&path),
            });
        }

        let content =
            fs::read_to_string(&path).map_err(|e| StylistError::StorageIOError { source: e })?;
        let profile = serde_json::from_str(&content).map_err(|e| {
            StylistError::CorruptedProfile {
                path: Self::path_string(&path),
                source: e,
            }
        })?;
        debug!("Profile loaded from {}", path.display());
        Ok(profile)
    }

    fn exists(&self) -> bool {
        self.profile_path().exists()
    }

    fn delete(&mut self) -> Result<(), StylistError> {
        let path = self.profile_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StylistError::StorageIOError { source: e })?;
            info!("Profile deleted: {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::test_support::profile;

    fn store() -> (TempDir, FileProfileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(dir.path().join("nested"));
        (dir, store)
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, mut store) = store();
        assert!(!store.exists());
        let path = store.save(&profile(), false).unwrap();
        assert!(path.ends_with("profile.json"));
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), profile());
    }

    #[test]
    fn test_none_fields_are_omitted() {
        let (_dir, mut store) = store();
        store.save(&profile(), false).unwrap();
        let raw = fs::read_to_string(store.profile_path()).unwrap();
        assert!(!raw.contains("style_archetype"));
        assert!(!raw.contains("null"));
    }

    #[test]
    fn test_save_without_overwrite_fails() {
        let (_dir, mut store) = store();
        store.save(&profile(), false).unwrap();
        let mut newer = profile();
        newer.profile_version = 2;
        assert!(matches!(
            store.save(&newer, false),
            Err(StylistError::ProfileAlreadyExists { .. })
        ));
        store.save(&newer, true).unwrap();
        assert_eq!(store.load().unwrap().profile_version, 2);
    }

    #[test]
    fn test_load_errors() {
        let (_dir, mut store) = store();
        assert!(matches!(
            store.load(),
            Err(StylistError::ProfileNotFound { .. })
        ));

        store.save(&profile(), false).unwrap();
        fs::write(store.profile_path(), "{\"skin_undertone\": ").unwrap();
        assert!(matches!(
            store.load(),
            Err(StylistError::CorruptedProfile { .. })
        ));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_dir, mut store) = store();
        store.delete().unwrap();
        store.save(&profile(), false).unwrap();
        store.delete().unwrap();
        assert!(!store.exists());
    }
}
