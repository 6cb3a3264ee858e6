mod iter;


use compare::Compare;
use std::cmp::Ordering::{self, *};
use std::fmt::{self, Display};
use std::mem;
use super::Error;

pub use self::iter::{IntoIter, Iter, Preorder};

pub type Link<T> = Option<Box<Node<T>>>;

/// Values in `left` compare less than or equal to `data`, values in `right` greater than or equal.
///
/// Fresh insertions only ever produce strict `<` on the left; equal values land there only when a
/// two-child removal lifts a duplicate maximum out of the left subtree.
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    data: T,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Node { left: None, right: None, data }
    }
}

pub fn get<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, item: &Q) -> Option<&'a T>
    where C: Compare<Q, T> {

    while let Some(node) = link {
        link = match cmp.compare(item, &node.data) {
            Equal => return Some(&node.data),
            Less => &node.left,
            Greater => &node.right,
        };
    }

    None
}

/// Attaches `item` as a new leaf. Ties descend to the right.
pub fn insert<T, C>(mut link: &mut Link<T>, cmp: &C, item: T) where C: Compare<T> {
    while let Some(node) = link {
        link = if cmp.compares_lt(&item, &node.data) { &mut node.left } else { &mut node.right };
    }

    *link = Some(Box::new(Node::new(item)));
}

/// Returns the slot holding the first node equal to `item`, or the empty slot where the search
/// ended. `f` sees every ancestor passed on the way down along with the direction taken.
///
/// The returned slot is the parent's child link (or the root link), so callers can splice a
/// replacement into it without a parent pointer.
fn locate_mut<'a, T, C, Q: ?Sized, F>(mut link: &'a mut Link<T>, cmp: &C, item: &Q, mut f: F)
    -> &'a mut Link<T> where C: Compare<Q, T>, F: FnMut(&T, Ordering) {

    loop {
        let order = match link.as_deref() {
            None => return link,
            Some(node) => cmp.compare(item, &node.data),
        };

        if order == Equal { return link; }

        if let Some(node) = link {
            f(&node.data, order);
            link = if order == Less { &mut node.left } else { &mut node.right };
        }
    }
}

pub fn remove<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, item: &Q) -> Option<T>
    where C: Compare<Q, T> {

    let link = locate_mut(link, cmp, item, |_, _| ());

    match link {
        None => None,
        // Keep the node, pull the left subtree's maximum up into it.
        Some(node) if node.left.is_some() && node.right.is_some() => {
            let max = Right::remove_extremum(&mut node.left)?;
            Some(mem::replace(&mut node.data, max))
        }
        Some(_) => link.take().map(|node| {
            let node = *node;
            *link = node.left.or(node.right);
            node.data
        }),
    }
}

/// Overwrites the first node equal to `item` with `new_item`, provided `new_item` still sits
/// between every ancestor on the search path and the node's two subtrees.
pub fn replace<T, C>(link: &mut Link<T>, cmp: &C, item: &T, new_item: T)
    -> Result<Option<T>, Error> where C: Compare<T> {

    let mut fits = true;

    let link = locate_mut(link, cmp, item, |ancestor, order| {
        fits &= match order {
            Less => cmp.compares_le(&new_item, ancestor),
            _ => cmp.compares_ge(&new_item, ancestor),
        };
    });

    let node = match link {
        None => return Ok(None),
        Some(node) => node,
    };

    let fits = fits
        && Right::extremum(&node.left).map_or(true, |max| cmp.compares_ge(&new_item, max))
        && Left::extremum(&node.right).map_or(true, |min| cmp.compares_le(&new_item, min));

    if !fits { return Err(Error::OutOfOrder); }

    Ok(Some(mem::replace(&mut node.data, new_item)))
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn forward<T>(node: &Node<T>) -> &Link<T>;
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T>;

    fn extremum<T>(link: &Link<T>) -> Option<&T> {
        let mut node = link.as_deref()?;
        while let Some(next) = Self::forward(node).as_deref() { node = next; }
        Some(&node.data)
    }

    /// Detaches the extreme node of the subtree, splicing its only possible child into its slot.
    fn remove_extremum<T>(mut link: &mut Link<T>) -> Option<T> {
        while link.as_deref().map_or(false, |node| Self::forward(node).is_some()) {
            if let Some(node) = link { link = Self::forward_mut(node); }
        }

        link.take().map(|node| {
            let mut node = *node;
            *link = Self::Opposite::forward_mut(&mut node).take();
            node.data
        })
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.left }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.right }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.right }
}

/// Number of edges on the longest root-to-leaf path; `-1` for an empty link.
pub fn height<T>(link: &Link<T>) -> isize {
    let mut height: isize = -1;
    let mut stack: Vec<(&Node<T>, isize)> = link.as_deref().map(|node| (node, 0)).into_iter().collect();

    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
        stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
    }

    height
}

/// Builds a minimum-height tree from the next `len` items of an ascending iterator.
///
/// The root of every subtree is the item at index `len / 2`, so on even lengths the left half
/// is the larger one.
pub fn build<T, I>(items: &mut I, len: usize) -> Link<T> where I: Iterator<Item=T> {
    if len == 0 { return None; }

    let mid = len / 2;
    let left = build(items, mid);
    let data = items.next()?;
    let right = build(items, len - mid - 1);

    Some(Box::new(Node { left, right, data }))
}

/// Structural copy, built bottom-up from a post-order walk.
pub fn duplicate<T>(link: &Link<T>) -> Link<T> where T: Clone {
    // root, right, left; reversed this is post-order
    let mut order = vec![];
    let mut pending: Vec<&Node<T>> = link.as_deref().into_iter().collect();

    while let Some(node) = pending.pop() {
        order.push(node);
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }

    let mut built: Vec<Box<Node<T>>> = Vec::with_capacity(order.len());

    for node in order.into_iter().rev() {
        let right = node.right.as_ref().and_then(|_| built.pop());
        let left = node.left.as_ref().and_then(|_| built.pop());
        built.push(Box::new(Node { left, right, data: node.data.clone() }));
    }

    built.pop()
}

/// Drops every node without recursing through `Box`'s destructor.
pub fn dismantle<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Writes the tree rotated a quarter turn counterclockwise: right subtree first, one value per
/// line, indented by `"| "` per level of depth.
pub fn fmt_rotated<T>(link: &Link<T>, f: &mut fmt::Formatter) -> fmt::Result where T: Display {
    let mut stack = vec![];
    let mut next = link.as_deref().map(|node| (node, 0usize));

    loop {
        while let Some((node, level)) = next {
            stack.push((node, level));
            next = node.right.as_deref().map(|child| (child, level + 1));
        }

        let (node, level) = match stack.pop() {
            None => return Ok(()),
            Some(visit) => visit,
        };

        for _ in 0..level { f.write_str("| ")?; }
        writeln!(f, "{}", node.data)?;

        next = node.left.as_deref().map(|child| (child, level + 1));
    }
}
