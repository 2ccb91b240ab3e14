// Speculative updates
// Apply a local value before the server confirms it, keeping what it replaced

/// Snapshot of a field taken when an optimistic value was written over it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speculation<T> {
    snapshot: T,
}

impl<T> Speculation<T> {
    /// Write `value` into `field` and remember the previous value
    pub fn apply(field: &mut T, value: T) -> Self {
        Self {
            snapshot: std::mem::replace(field, value),
        }
    }

    /// Value the field held before the speculative write
    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// Restore the pre-call value
    pub fn rollback(self, field: &mut T) {
        *field = self.snapshot;
    }
}
