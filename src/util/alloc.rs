use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// Shared counter of how many [`Tracked`] values have been dropped.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self, key: i32) -> Tracked {
        Tracked {
            key,
            id: 0,
            counter: self.clone(),
        }
    }

    /// Tracks a value with an id, used to check stability among equal keys.
    pub fn track_with_id(&self, key: i32, id: usize) -> Tracked {
        Tracked {
            key,
            id,
            counter: self.clone(),
        }
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

/// A test element that orders by `key` only and records its drop.
#[derive(Debug, Clone)]
pub struct Tracked {
    pub key: i32,
    pub id: usize,
    counter: DropCounter,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}
