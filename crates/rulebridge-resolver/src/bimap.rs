//! One-to-one map kept consistent in both directions

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A bijection between `L` and `R`
///
/// Inserting a pair drops any earlier pairing of either side, so a lookup
/// left → right → left always returns to where it started.
#[derive(Debug, Clone)]
pub(crate) struct BiMap<L, R> {
    forward: HashMap<L, R>,
    backward: HashMap<R, L>,
}

impl<L, R> Default for BiMap<L, R> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }
}

impl<L, R> BiMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Pair `left` with `right`, unpairing whatever either was bound to
    pub(crate) fn insert(&mut self, left: L, right: R) {
        if let Some(old_right) = self.forward.remove(&left) {
            self.backward.remove(&old_right);
        }
        if let Some(old_left) = self.backward.remove(&right) {
            self.forward.remove(&old_left);
        }
        self.forward.insert(left.clone(), right.clone());
        self.backward.insert(right, left);
    }

    /// Right side paired with `left`
    pub(crate) fn get_by_left<Q>(&self, left: &Q) -> Option<&R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(left)
    }

    /// Left side paired with `right`
    pub(crate) fn get_by_right<Q>(&self, right: &Q) -> Option<&L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.get(right)
    }

    /// Drop every pair
    pub(crate) fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }
}
