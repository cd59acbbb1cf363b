//! Material Keyword Set
//!
//! Keywords are the boolean feature switches a shared material carries
//! (for example `_EMISSION`, which must be on before an emission colour has
//! any visible effect). They are stored as interned [`Symbol`]s in a sorted
//! `Vec`, so two sets with the same keywords always compare and hash equal
//! regardless of the order they were enabled in.
//!
//! ```rust,ignore
//! use roomlight::resources::MaterialKeywords;
//!
//! let mut keywords = MaterialKeywords::new();
//! keywords.enable("_EMISSION");
//! assert!(keywords.contains("_EMISSION"));
//! ```

use std::hash::{Hash, Hasher};

use crate::utils::interner::{self, Symbol};

/// Sorted set of enabled material keywords.
#[derive(Debug, Clone, Default)]
pub struct MaterialKeywords {
    keywords: Vec<Symbol>,
}

impl MaterialKeywords {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            keywords: Vec::new(),
        }
    }

    /// Enables a keyword. Returns `true` if it was not enabled before.
    pub fn enable(&mut self, keyword: &str) -> bool {
        self.enable_symbol(interner::intern(keyword))
    }

    #[inline]
    pub fn enable_symbol(&mut self, keyword: Symbol) -> bool {
        match self.keywords.binary_search(&keyword) {
            Ok(_) => false,
            Err(idx) => {
                self.keywords.insert(idx, keyword);
                true
            }
        }
    }

    /// Disables a keyword. Returns `true` if it was enabled.
    pub fn disable(&mut self, keyword: &str) -> bool {
        interner::get(keyword).is_some_and(|sym| self.disable_symbol(sym))
    }

    #[inline]
    pub fn disable_symbol(&mut self, keyword: Symbol) -> bool {
        if let Ok(idx) = self.keywords.binary_search(&keyword) {
            self.keywords.remove(idx);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        interner::get(keyword).is_some_and(|sym| self.contains_symbol(sym))
    }

    #[inline]
    #[must_use]
    pub fn contains_symbol(&self, keyword: Symbol) -> bool {
        self.keywords.binary_search(&keyword).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterates enabled keywords as strings, in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keywords.iter().map(|&sym| interner::resolve(sym))
    }
}

impl Hash for MaterialKeywords {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.keywords.hash(state);
    }
}

impl PartialEq for MaterialKeywords {
    fn eq(&self, other: &Self) -> bool {
        self.keywords == other.keywords
    }
}

impl Eq for MaterialKeywords {}

impl From<&[&str]> for MaterialKeywords {
    fn from(keywords: &[&str]) -> Self {
        let mut result = Self::new();
        for keyword in keywords {
            result.enable(keyword);
        }
        result
    }
}
