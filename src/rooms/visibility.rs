use serde::{Deserialize, Serialize};

/// Visibility tier of a room.
///
/// A pure label: any tier may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityLevel {
    /// Nothing of the room is rendered.
    #[default]
    Invisible,
    /// Structure only (walls, floor, ceiling, lights); the interior is hidden.
    PartialVisible,
    /// Structure and interior are both rendered.
    FullVisible,
}

impl VisibilityLevel {
    pub const ALL: [VisibilityLevel; 3] = [
        VisibilityLevel::Invisible,
        VisibilityLevel::PartialVisible,
        VisibilityLevel::FullVisible,
    ];

    /// Active flags for the `(structure, interior)` subtrees.
    #[inline]
    #[must_use]
    pub fn subtree_flags(self) -> (bool, bool) {
        match self {
            VisibilityLevel::FullVisible => (true, true),
            VisibilityLevel::PartialVisible => (true, false),
            VisibilityLevel::Invisible => (false, false),
        }
    }
}
