use std::path::PathBuf;

use super::snapshot::{self, Snapshot, SnapshotError};

/// Persistence contract consumed by the app: snapshots keyed by a
/// loosely-typed user-or-anonymous identity. Saves are opportunistic and
/// local-first; a failed save is reported, never rolled back.
pub trait SnapshotStore {
    fn load(&self, identity: &str) -> Result<Option<Snapshot>, SnapshotError>;
    fn save(&self, identity: &str, snapshot: &Snapshot) -> Result<(), SnapshotError>;
}

/// Directory-backed store: one JSON file per identity under the OS data
/// directory.
pub struct DirSnapshotStore {
    root: PathBuf,
}

impl DirSnapshotStore {
    /// Store rooted at the OS data directory; `None` when no home
    /// directory can be resolved.
    pub fn new() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("", "", "NeoTimeline")?;
        Some(Self::with_root(dirs.data_dir().to_path_buf()))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, identity: &str) -> PathBuf {
        // Identities are free-form; keep the filename tame.
        let safe: String = identity
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

impl SnapshotStore for DirSnapshotStore {
    fn load(&self, identity: &str) -> Result<Option<Snapshot>, SnapshotError> {
        let path = self.path_for(identity);
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path)?;
        snapshot::from_json(&json).map(Some)
    }

    fn save(&self, identity: &str, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        std::fs::create_dir_all(&self.root)?;
        let json = snapshot::to_json(snapshot)?;
        std::fs::write(self.path_for(identity), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;

    #[test]
    fn save_then_load_round_trips_per_identity() {
        let dir = std::env::temp_dir().join(format!("neo-timeline-test-{}", uuid::Uuid::new_v4()));
        let store = DirSnapshotStore::with_root(dir.clone());

        let snapshot = Snapshot {
            projects: vec![Project::fallback()],
            events: vec![],
        };
        store.save("anonymous", &snapshot).unwrap();
        assert_eq!(store.load("anonymous").unwrap(), Some(snapshot));
        assert_eq!(store.load("someone-else").unwrap(), None);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn hostile_identity_stays_inside_the_root() {
        let store = DirSnapshotStore::with_root(PathBuf::from("/tmp/neo"));
        let path = store.path_for("../../etc/passwd");
        assert!(path.starts_with("/tmp/neo"));
        assert!(!path.to_string_lossy().contains(".."));
    }
}
