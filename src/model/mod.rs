pub mod error;
pub mod event;
pub mod grid;
pub mod holidays;
pub mod project;
pub mod store;
pub mod view_state;

pub use error::{StoreError, StoreResult};
pub use event::{Event, EventDraft, EventPatch};
pub use grid::GridCell;
pub use project::{Project, ProjectPatch, FALLBACK_PROJECT_ID};
pub use store::Store;
pub use view_state::{NavDirection, ViewMode, ViewState};
