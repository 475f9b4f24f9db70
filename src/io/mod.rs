pub mod csv_export;
pub mod document;
pub mod file;
pub mod persist;
pub mod snapshot;

pub use document::{DocumentRenderer, TextAgendaRenderer};
pub use file::{load_snapshot, save_snapshot};
pub use persist::{DirSnapshotStore, SnapshotStore};
pub use snapshot::{SharePayload, Snapshot, SnapshotError};
