//! Error Types
//!
//! This module defines the error types returned by the fallible parts of
//! the crate.
//!
//! # Overview
//!
//! Only level loading can fail. Room entry, visibility changes and
//! lighting transitions never return errors: missing wiring, repeated
//! entries and an absent character material all degrade to a logged
//! no-op instead.
//!
//! ```rust,ignore
//! use roomlight::errors::{RoomError, Result};
//!
//! fn load(json: &str) -> Result<roomlight::Level> {
//!     roomlight::Level::from_json(json)
//! }
//! ```

use thiserror::Error;

/// The main error type for level loading.
#[derive(Error, Debug)]
pub enum RoomError {
    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// The level description is not valid JSON or does not match the schema.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Reference Errors
    // ========================================================================
    /// Two rooms in one level description share an id.
    #[error("Duplicate room id {id} (rooms '{first}' and '{second}')")]
    DuplicateRoomId {
        /// The shared id
        id: i32,
        /// Name of the room that claimed the id first
        first: String,
        /// Name of the room that collided with it
        second: String,
    },

    /// A propagation entry points at a room id that the level does not define.
    #[error("Room '{room}' lists unknown room id {target} in visible_from_here")]
    UnknownRoomReference {
        /// Name of the room holding the bad entry
        room: String,
        /// The id that could not be resolved
        target: i32,
    },

    /// The starting room id does not match any room.
    #[error("Starting room id {0} does not match any room")]
    UnknownStartingRoom(i32),
}

/// Alias for `Result<T, RoomError>`.
pub type Result<T> = std::result::Result<T, RoomError>;
