use super::constants::REVEAL_THRESHOLD;
use fnv::FnvHashSet;

/// Tracks which reveal targets are still waiting for their first sighting.
///
/// Targets are matched by equality, so the page can hand in its elements
/// as-is. Once a target fires it is forgotten and later visibility changes
/// for it are ignored.
#[derive(Debug)]
pub struct RevealTracker<T> {
    targets: Vec<T>,
    pending: FnvHashSet<usize>,
    revealed: u32,
}

impl<T> Default for RevealTracker<T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            pending: FnvHashSet::default(),
            revealed: 0,
        }
    }
}

impl<T: PartialEq> RevealTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, target: &T) -> Option<usize> {
        self.targets.iter().position(|t| t == target)
    }

    /// Start watching `target`; observing it twice is a no-op.
    pub fn observe(&mut self, target: T) {
        if self.position(&target).is_none() {
            self.pending.insert(self.targets.len());
            self.targets.push(target);
        }
    }

    pub fn is_pending(&self, target: &T) -> bool {
        self.position(target)
            .is_some_and(|i| self.pending.contains(&i))
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed
    }

    /// Returns true exactly when `target` should become active and stop being observed.
    pub fn on_entry(&mut self, target: &T, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        match self.position(target) {
            Some(i) if self.pending.remove(&i) => {
                self.revealed += 1;
                true
            }
            _ => false,
        }
    }
}
