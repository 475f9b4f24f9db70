use std::path::Path;

use super::snapshot::{self, Snapshot, SnapshotError};

/// Save a snapshot to a JSON file.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), SnapshotError> {
    let json = snapshot::to_json(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let json = std::fs::read_to_string(path)?;
    snapshot::from_json(&json)
}
