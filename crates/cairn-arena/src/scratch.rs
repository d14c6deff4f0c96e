//! Scoped temporary allocations.
//!
//! [`ArenaScope`] records the head position on creation and restores it on
//! drop, so everything pushed into the head chunk inside the scope is given
//! back at once. The backing memory is reused, not zeroed.

use std::ops::{Deref, DerefMut};

use crate::arena::Arena;

/// Guard returned by [`Arena::scope`].
///
/// Derefs to the arena, so the full API is available inside the scope.
/// Only the head position is restored: pushes that overflowed into other
/// chunks keep their space until [`Arena::reset`] or release.
///
/// # Example
///
/// ```
/// use cairn_arena::Arena;
///
/// let mut arena = Arena::with_size(256)?;
/// let kept = arena.push(16)?;
/// {
///     let mut scope = arena.scope();
///     scope.push(128)?;
///     assert_eq!(scope.position(), 144);
/// }
/// assert_eq!(arena.position(), 16);
/// assert!(arena.bytes(kept).is_ok());
/// # Ok::<(), cairn_arena::ArenaError>(())
/// ```
pub struct ArenaScope<'a> {
    arena: &'a mut Arena,
    saved: usize,
}

impl<'a> ArenaScope<'a> {
    pub(crate) fn new(arena: &'a mut Arena) -> Self {
        let saved = arena.position();
        Self { arena, saved }
    }

    /// Head position that will be restored on drop.
    pub fn saved_position(&self) -> usize {
        self.saved
    }
}

impl Deref for ArenaScope<'_> {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        &*self.arena
    }
}

impl DerefMut for ArenaScope<'_> {
    fn deref_mut(&mut self) -> &mut Arena {
        &mut *self.arena
    }
}

impl Drop for ArenaScope<'_> {
    fn drop(&mut self) {
        // `saved` was a valid head position and the head never shrinks.
        if self.arena.set_pos_back(self.saved).is_err() {
            tracing::warn!(saved = self.saved, "arena scope could not restore position");
        }
    }
}
