//! Boundary sensor adapter.
//!
//! The host's physics reports the tracked entity crossing a room's trigger
//! volume; [`RoomTrigger`] filters those reports by tag and forwards them as
//! room entries.

use crate::rooms::RoomKey;

/// Tag carried by the tracked entity unless configured otherwise.
pub const DEFAULT_TRACKED_TAG: &str = "Player";

/// Receiver of room-entry events.
pub trait RoomEntrySink {
    fn enter_room(&mut self, room: Option<RoomKey>);
}

/// A trigger volume linked to one room.
#[derive(Debug, Clone)]
pub struct RoomTrigger {
    pub linked_room: Option<RoomKey>,
    /// Also fire the entry when the tracked entity leaves the volume
    /// (for gaps or neutral zones between rooms).
    pub fire_on_exit: bool,
    pub tracked_tag: String,
}

impl RoomTrigger {
    #[must_use]
    pub fn new(linked_room: RoomKey) -> Self {
        Self {
            linked_room: Some(linked_room),
            fire_on_exit: false,
            tracked_tag: DEFAULT_TRACKED_TAG.to_string(),
        }
    }

    #[must_use]
    pub fn with_fire_on_exit(mut self, fire_on_exit: bool) -> Self {
        self.fire_on_exit = fire_on_exit;
        self
    }

    #[must_use]
    pub fn with_tracked_tag(mut self, tag: &str) -> Self {
        self.tracked_tag = tag.to_string();
        self
    }

    /// Returns `true` if an entry was forwarded.
    pub fn on_trigger_enter(&self, other_tag: &str, sink: &mut impl RoomEntrySink) -> bool {
        self.fire(other_tag, sink)
    }

    /// Returns `true` if an entry was forwarded.
    pub fn on_trigger_exit(&self, other_tag: &str, sink: &mut impl RoomEntrySink) -> bool {
        self.fire_on_exit && self.fire(other_tag, sink)
    }

    fn fire(&self, other_tag: &str, sink: &mut impl RoomEntrySink) -> bool {
        if other_tag != self.tracked_tag {
            return false;
        }
        if self.linked_room.is_none() {
            log::warn!("RoomTrigger: LinkedRoom reference is missing!");
            return false;
        }
        sink.enter_room(self.linked_room);
        true
    }
}
