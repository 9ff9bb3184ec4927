use super::AliasStorage;
use crate::error::{Result, WrkError};
use crate::history::{AliasFrame, AliasHistory};
use std::fs;
use std::path::{Path, PathBuf};

pub const WRK_IDS_FILENAME: &str = "wrk-ids";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `<root>/wrk-ids`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(WRK_IDS_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AliasStorage for FileStore {
    fn load(&self) -> Result<Vec<AliasFrame>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(WrkError::Io)?;
        let frames: Vec<AliasFrame> =
            serde_json::from_str(&content).map_err(WrkError::Serialization)?;
        Ok(frames)
    }

    fn save(&mut self, history: &AliasHistory) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(WrkError::Io)?;
            }
        }
        let content = serde_json::to_string(history).map_err(WrkError::Serialization)?;
        fs::write(&self.path, content).map_err(WrkError::Io)?;
        tracing::debug!(path = %self.path.display(), frames = history.len(), "wrote wrk-ids");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityKind, WrkId};
    use tempfile::TempDir;

    fn sample() -> AliasHistory {
        let mut history = AliasHistory::new();
        history.push(
            [("wrk1", WrkId::new(EntityKind::Board, "b1"))]
                .into_iter()
                .collect(),
        );
        history.push(
            [
                ("wrk1", WrkId::new(EntityKind::Card, "c1")),
                ("wrk2", WrkId::new(EntityKind::Card, "c2")),
            ]
            .into_iter()
            .collect(),
        );
        history
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        let history = sample();

        store.save(&history).unwrap();
        let loaded = AliasHistory::from_frames(store.load().unwrap());

        assert_eq!(loaded, history);
        assert_eq!(loaded.head().unwrap().raw("wrk2"), Some("c:c2"));
    }

    #[test]
    fn writes_flat_json_array() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&sample()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            raw,
            r#"[{"wrk1":"c:c1","wrk2":"c:c2"},{"wrk1":"b:b1"}]"#
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(WrkError::Serialization(_))));

        fs::write(store.path(), r#"[{"wrk1":42}]"#).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn unreadable_values_load_as_stored() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        fs::write(store.path(), r#"[{"wrk1":"z:nope"},{"wrk1":"b:b1"}]"#).unwrap();

        let history = AliasHistory::from_frames(store.load().unwrap());
        assert_eq!(history.len(), 2);
        assert_eq!(history.head().unwrap().raw("wrk1"), Some("z:nope"));

        store.save(&history).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"[{"wrk1":"z:nope"},{"wrk1":"b:b1"}]"#);
    }
}
