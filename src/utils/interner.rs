//! Global string interner.
//!
//! Material property and keyword names are interned into compact
//! [`Symbol`]s so lookups on the shared material compare integers instead
//! of strings.

use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Compact integer identifier for an interned string.
pub type Symbol = Spur;

/// Interns a string, returning the existing symbol if it was seen before.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Looks up a string without interning it.
///
/// Returns `None` if the string has never been interned; never allocates.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a symbol back to its string.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}

/// Pre-interns the property and keyword names used by the emission
/// transition so the per-frame path never takes the interner's write lock.
pub fn preload_material_names() {
    for name in ["_EmissionColor", "_EMISSION", "_Color"] {
        intern(name);
    }
}
