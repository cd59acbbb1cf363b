use glam::Vec4;
use rustc_hash::FxHashMap;

use crate::resources::keywords::MaterialKeywords;
use crate::resources::version_tracker::ChangeTracker;
use crate::utils::interner::{self, Symbol};

/// A material shared by every renderer that draws the tracked character.
///
/// Only the surface the lighting transitions need is modelled: named colour
/// properties and a keyword set. Colours are linear RGBA; a property that was
/// never written reads back as `None`, and [`color_or_black`](Self::color_or_black)
/// gives the host's default of transparent black.
#[derive(Debug, Clone, Default)]
pub struct SharedMaterial {
    pub name: String,
    colors: FxHashMap<Symbol, Vec4>,
    keywords: MaterialKeywords,
    tracker: ChangeTracker,
}

impl SharedMaterial {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    // -- Colour properties --

    #[must_use]
    pub fn color(&self, property: &str) -> Option<Vec4> {
        interner::get(property).and_then(|sym| self.color_symbol(sym))
    }

    #[inline]
    #[must_use]
    pub fn color_symbol(&self, property: Symbol) -> Option<Vec4> {
        self.colors.get(&property).copied()
    }

    #[must_use]
    pub fn color_or_black(&self, property: &str) -> Vec4 {
        self.color(property).unwrap_or(Vec4::ZERO)
    }

    pub fn set_color(&mut self, property: &str, color: Vec4) {
        self.set_color_symbol(interner::intern(property), color);
    }

    #[inline]
    pub fn set_color_symbol(&mut self, property: Symbol, color: Vec4) {
        self.colors.insert(property, color);
        self.tracker.changed();
    }

    // -- Keywords --

    pub fn enable_keyword(&mut self, keyword: &str) {
        if self.keywords.enable(keyword) {
            self.tracker.changed();
        }
    }

    pub fn disable_keyword(&mut self, keyword: &str) {
        if self.keywords.disable(keyword) {
            self.tracker.changed();
        }
    }

    #[must_use]
    pub fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    #[must_use]
    pub fn keywords(&self) -> &MaterialKeywords {
        &self.keywords
    }

    /// Bumped on every colour write and every keyword that actually toggles.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.tracker.version()
    }
}
