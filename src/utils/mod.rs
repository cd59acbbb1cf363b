//! Utility Module
//!
//! - [`interner`]: string interning for material property and keyword names
//! - [`time`]: wall-clock frame timer
//!
//! ```rust,ignore
//! use roomlight::utils::interner;
//!
//! let a = interner::intern("_EmissionColor");
//! let b = interner::intern("_EmissionColor");
//! assert_eq!(a, b); // O(1) comparison
//! ```

pub mod interner;
pub mod time;

pub use interner::Symbol;
pub use time::Timer;
