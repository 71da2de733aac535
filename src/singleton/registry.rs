use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// A lazily initialized slot that holds exactly one `T`.
///
/// `new` is `const`, so a `Registry` can sit in a `static` for a global
/// instance or be owned locally and handed out by reference.
pub struct Registry<T> {
    cell: OnceLock<T>,
    constructions: AtomicUsize,
}

impl<T> Registry<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Return the instance, running `init` if this is the first call.
    ///
    /// Concurrent first callers block until the winner's `init` returns;
    /// `init` runs at most once for the life of the registry.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(|| {
            self.constructions.fetch_add(1, Ordering::SeqCst);
            init()
        })
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// How many times an initializer has run. Never more than 1.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
