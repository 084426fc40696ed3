use std::sync::atomic::{AtomicUsize, Ordering};

pub mod collision;
pub mod config;
pub mod error;
pub mod prelude;

static NEXT_COLLIDABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// A stable identity for objects registered with a
/// [`CollisionHandler`](collision::CollisionHandler).
///
/// Ids come from a global atomic counter, so two live objects never share one. The ordering of
/// ids is the canonical ordering used to deduplicate collision pairs.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CollidableId(pub(crate) usize);

impl CollidableId {
    pub fn next() -> Self {
        CollidableId(NEXT_COLLIDABLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for CollidableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
