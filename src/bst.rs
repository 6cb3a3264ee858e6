//! An ordered collection based on a binary search tree that is rebalanced on demand.

use compare::{self, Compare, Natural};
use log::{debug, trace};
use std::fmt::{self, Debug, Display};
use std::iter::FromIterator;
use std::mem;
use super::Error;
use super::node::{self, Dir, Left, Link, Right};

pub use super::node::{IntoIter, Iter, Preorder};

/// An ordered collection based on a binary search tree.
///
/// Items that compare equal may be added more than once; each copy is stored in its own node,
/// to the right of the copies already present. The tree never rebalances itself: call
/// [`rebalance`](#method.rebalance) to rebuild it with minimum height.
///
/// The behavior of this tree is unspecified if an item's ordering relative to any other item
/// changes while the item is in the tree. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
pub struct LinkedBst<T, C = Natural<T>> where C: Compare<T> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> LinkedBst<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bst = linked_bst::LinkedBst::new();
    ///
    /// bst.add(2);
    /// bst.add(1);
    /// bst.add(3);
    ///
    /// assert_eq!(bst.inorder(), [1, 2, 3]);
    /// ```
    pub fn new() -> Self { LinkedBst::with_cmp(compare::natural()) }
}

impl<T, C> LinkedBst<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut bst = linked_bst::LinkedBst::with_cmp(natural().rev());
    ///
    /// bst.add(2);
    /// bst.add(1);
    /// bst.add(3);
    ///
    /// assert_eq!(bst.inorder(), [3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { LinkedBst { root: None, len: 0, cmp } }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bst = linked_bst::LinkedBst::new();
    /// assert!(bst.is_empty());
    ///
    /// bst.add(2);
    /// assert!(!bst.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the tree, duplicates included.
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bst: linked_bst::LinkedBst<_> = (1..4).collect();
    /// assert_eq!(bst.len(), 3);
    ///
    /// bst.clear();
    ///
    /// assert_eq!(bst.len(), 0);
    /// assert_eq!(bst.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
        self.len = 0;
        trace!("cleared tree");
    }

    /// Adds an item to the tree.
    ///
    /// The item always becomes a new leaf. An item equal to one already in the tree is stored
    /// in addition to it, in that item's right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bst = linked_bst::LinkedBst::new();
    ///
    /// bst.add(1);
    /// bst.add(1);
    ///
    /// assert_eq!(bst.len(), 2);
    /// assert_eq!(bst.inorder(), [1, 1]);
    /// ```
    pub fn add(&mut self, item: T) {
        node::insert(&mut self.root, &self.cmp, item);
        self.len += 1;
        trace!("added item, len = {}", self.len);
    }

    /// Removes an item equal to the given one from the tree and returns it.
    ///
    /// If several items are equal to the given one, the one closest to the root is removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound`, leaving the tree untouched, if no item is equal to the given
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, LinkedBst};
    ///
    /// let mut bst: LinkedBst<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(bst.remove(&5), Ok(5));
    /// assert_eq!(bst.remove(&5), Err(Error::NotFound));
    /// assert_eq!(bst.inorder(), [3, 8]);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> Result<T, Error> where C: Compare<Q, T> {
        let removed = node::remove(&mut self.root, &self.cmp, item).ok_or(Error::NotFound)?;
        self.len -= 1;
        trace!("removed item, len = {}", self.len);
        Ok(removed)
    }

    /// Returns a reference to the tree's item equal to the given one, or `None` if there is
    /// none.
    ///
    /// # Examples
    ///
    /// ```
    /// let bst: linked_bst::LinkedBst<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(bst.find(&3), Some(&3));
    /// assert_eq!(bst.find(&4), None);
    /// ```
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, item)
    }

    /// Checks if the tree contains an item equal to the given one.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.find(item).is_some()
    }

    /// Overwrites the tree's item equal to `item` with `new_item`, returning the old item, or
    /// `Ok(None)` if there is no such item.
    ///
    /// The tree is not reordered, so `new_item` must belong at the position of the item it
    /// replaces: no smaller than anything before it in ascending order and no larger than
    /// anything after it.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfOrder`, leaving the tree untouched and dropping `new_item`, if
    /// `new_item` does not belong at that position.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, LinkedBst};
    ///
    /// let mut bst: LinkedBst<_> = vec![20, 10, 30].into_iter().collect();
    ///
    /// assert_eq!(bst.replace(&10, 15), Ok(Some(10)));
    /// assert_eq!(bst.replace(&15, 25), Err(Error::OutOfOrder));
    /// assert_eq!(bst.replace(&99, 100), Ok(None));
    /// assert_eq!(bst.inorder(), [15, 20, 30]);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Result<Option<T>, Error> {
        let old = node::replace(&mut self.root, &self.cmp, item, new_item)?;
        trace!("replaced item: {}", old.is_some());
        Ok(old)
    }

    /// Returns a reference to the tree's minimum item, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> { Left::extremum(&self.root) }

    /// Returns a reference to the tree's maximum item, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> { Right::extremum(&self.root) }

    /// Returns the number of edges on the longest path from the root to a leaf.
    ///
    /// A tree with a single item has height `0` and an empty tree has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bst = linked_bst::LinkedBst::new();
    /// assert_eq!(bst.height(), -1);
    ///
    /// bst.extend(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(bst.height(), 4);
    /// ```
    pub fn height(&self) -> isize { node::height(&self.root) }

    /// Checks whether `height() < 2 * log2(n + 1) - 1`, where `n` is the number of items.
    ///
    /// This is a global bound on the height, not a per-node balance factor. It holds for any
    /// tree returned by [`rebalance`](#method.rebalance) and, being loose, for many trees that
    /// are far from minimum height. It never holds for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bst: linked_bst::LinkedBst<_> = (0..8).collect();
    /// assert!(!bst.is_balanced());
    ///
    /// bst.rebalance();
    /// assert!(bst.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let n = self.iter().count();
        (self.height() as f64) < 2.0 * ((n + 1) as f64).log2() - 1.0
    }

    /// Returns an iterator over the tree's items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let bst: linked_bst::LinkedBst<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let mut it = bst.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter::new(&self.root, self.len) }

    /// Returns an iterator over the tree's items in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// let bst: linked_bst::LinkedBst<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(bst.preorder().cloned().collect::<Vec<_>>(), [5, 3, 1, 4, 8]);
    /// ```
    pub fn preorder(&self) -> Preorder<T> { Preorder::new(&self.root) }

    /// Returns the tree's items in ascending order.
    pub fn inorder(&self) -> Vec<T> where T: Clone { self.iter().cloned().collect() }

    /// Returns the tree's items in ascending order, starting at the first item equal to `low`
    /// and ending at the first item equal to `high` after it.
    ///
    /// If no item is equal to `low`, the result starts at the minimum; if no item at or after
    /// that start is equal to `high`, the result runs to the maximum. Neither bound filters
    /// by comparison on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// let bst: linked_bst::LinkedBst<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(bst.range_find(&3, &8), [3, 4, 5, 7, 8]);
    /// assert_eq!(bst.range_find(&2, &4), [1, 3, 4]);
    /// assert_eq!(bst.range_find(&7, &6), [7, 8, 9]);
    /// ```
    pub fn range_find<Q: ?Sized>(&self, low: &Q, high: &Q) -> Vec<T>
        where T: Clone, C: Compare<Q, T> {

        let items: Vec<&T> = self.iter().collect();

        let start = items.iter().position(|&item| self.cmp.compares_eq(low, item)).unwrap_or(0);
        let items = &items[start..];

        let end = items.iter().position(|&item| self.cmp.compares_eq(high, item))
            .map_or(items.len(), |end| end + 1);

        items[..end].iter().map(|&item| item.clone()).collect()
    }

    /// Returns a reference to the item following the first item equal to the given one in
    /// ascending order, or `None` if there is no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// let bst: linked_bst::LinkedBst<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(bst.successor(&5), Some(&7));
    /// assert_eq!(bst.successor(&9), None);
    /// assert_eq!(bst.successor(&6), None);
    /// ```
    pub fn successor<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        let mut it = self.iter();
        it.position(|x| self.cmp.compares_eq(item, x))?;
        it.next()
    }

    /// Returns a reference to the item preceding the first item equal to the given one in
    /// ascending order, or `None` if there is no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// let bst: linked_bst::LinkedBst<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(bst.predecessor(&5), Some(&4));
    /// assert_eq!(bst.predecessor(&1), None);
    /// assert_eq!(bst.predecessor(&6), None);
    /// ```
    pub fn predecessor<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        let mut prev = None;

        for x in self.iter() {
            if self.cmp.compares_eq(item, x) { return prev; }
            prev = Some(x);
        }

        None
    }

    /// Rebuilds the tree with minimum height, `floor(log2(len))`, keeping its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bst: linked_bst::LinkedBst<_> = (0..100).collect();
    /// assert_eq!(bst.height(), 99);
    ///
    /// bst.rebalance();
    /// assert_eq!(bst.height(), 6);
    /// assert_eq!(bst.inorder(), (0..100).collect::<Vec<_>>());
    /// ```
    pub fn rebalance(&mut self) {
        let before = self.height();
        let mut items = IntoIter::new(self.root.take(), self.len);
        self.root = node::build(&mut items, self.len);
        debug!("rebalanced {} items, height {} -> {}", self.len, before, self.height());
    }
}

impl<T, C> Clone for LinkedBst<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self {
        LinkedBst { root: node::duplicate(&self.root), len: self.len, cmp: self.cmp.clone() }
    }
}

impl<T, C> Debug for LinkedBst<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the tree rotated a quarter turn counterclockwise.
///
/// # Examples
///
/// ```
/// let bst: linked_bst::LinkedBst<_> = vec![2, 1, 3].into_iter().collect();
///
/// assert_eq!(bst.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T, C> Display for LinkedBst<T, C> where T: Display, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { node::fmt_rotated(&self.root, f) }
}

impl<T, C> Default for LinkedBst<T, C> where C: Compare<T> + Default {
    fn default() -> Self { LinkedBst::with_cmp(C::default()) }
}

impl<T, C> Drop for LinkedBst<T, C> where C: Compare<T> {
    fn drop(&mut self) { node::dismantle(self.root.take()); }
}

impl<T, C> Extend<T> for LinkedBst<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.add(item); }
    }
}

impl<T, C> FromIterator<T> for LinkedBst<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut bst = LinkedBst::default();
        bst.extend(it);
        bst
    }
}

impl<'a, T, C> IntoIterator for &'a LinkedBst<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for LinkedBst<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = mem::replace(&mut self.len, 0);
        IntoIter::new(self.root.take(), len)
    }
}

impl<T, C> PartialEq for LinkedBst<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.len == other.len && self.iter().eq(other.iter()) }
}

impl<T, C> Eq for LinkedBst<T, C> where T: Eq, C: Compare<T> {}
