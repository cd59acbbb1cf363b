//! Change versions for state a renderer mirrors.
//!
//! The room system writes the scene ambient block and the character
//! material from inside per-frame transitions. A host renderer that keeps
//! GPU copies of either compares [`Scene::environment_version`] or
//! [`SharedMaterial::version`] with the value it last uploaded and skips
//! the upload when nothing moved. Idle frames (no blend running) therefore
//! cost no uploads.
//!
//! [`Scene::environment_version`]: crate::scene::Scene::environment_version
//! [`SharedMaterial::version`]: crate::resources::SharedMaterial::version

/// Monotonic change counter. Wraps on overflow; only equality matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeTracker {
    version: u64,
}

impl ChangeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self { version: 0 }
    }

    pub fn changed(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Mutable borrow that bumps the owner's version when it goes out of scope.
///
/// Handed out by [`Scene::environment_mut`](crate::scene::Scene::environment_mut)
/// so every ambient write is observable as a version change.
pub struct MutGuard<'a, T> {
    data: &'a mut T,
    tracker: &'a mut ChangeTracker,
}

impl<'a, T> MutGuard<'a, T> {
    pub fn new(data: &'a mut T, tracker: &'a mut ChangeTracker) -> Self {
        Self { data, tracker }
    }
}

impl<T> std::ops::Deref for MutGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.data
    }
}

impl<T> std::ops::DerefMut for MutGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.data
    }
}

impl<T> Drop for MutGuard<'_, T> {
    fn drop(&mut self) {
        self.tracker.changed();
    }
}
