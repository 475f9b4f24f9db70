use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the built-in fallback project. It always exists and cannot be
/// deleted; events whose project goes away are re-attached to it.
pub const FALLBACK_PROJECT_ID: &str = "default";

/// A named, colored grouping of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Hex color string, e.g. `#3b82f6`.
    pub color: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Project {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: color.into(),
            visible: true,
        }
    }

    /// The built-in fallback project.
    pub fn fallback() -> Self {
        Self {
            id: FALLBACK_PROJECT_ID.to_string(),
            name: "General".to_string(),
            color: "#64748b".to_string(),
            visible: true,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.id == FALLBACK_PROJECT_ID
    }
}

/// Partial update for [`Project`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub visible: Option<bool>,
}
