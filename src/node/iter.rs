use super::{Link, Node};

trait NodeRef: Sized {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, T> NodeRef for &'a Node<T> {
    type Item = &'a T;
    fn item(self) -> &'a T { &self.data }
    fn left(&mut self) -> Option<&'a Node<T>> { let node: &'a Node<T> = *self; node.left.as_deref() }
    fn right(&mut self) -> Option<&'a Node<T>> { let node: &'a Node<T> = *self; node.right.as_deref() }
}

impl<T> NodeRef for Box<Node<T>> {
    type Item = T;
    fn item(self) -> T { let node = *self; node.data }
    fn left(&mut self) -> Link<T> { self.left.take() }
    fn right(&mut self) -> Link<T> { self.right.take() }
}

/// In-order walk over an explicit stack holding the left spine of the unvisited part.
#[derive(Clone)]
struct InOrder<N> where N: NodeRef {
    stack: Vec<N>,
    size: usize,
}

impl<N> InOrder<N> where N: NodeRef {
    fn new(root: Option<N>, size: usize) -> Self {
        let mut it = InOrder { stack: vec![], size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut next: Option<N>) {
        while let Some(mut node) = next {
            next = node.left();
            self.stack.push(node);
        }
    }
}

impl<N> Iterator for InOrder<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right();
        self.descend(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

/// An iterator over the tree's items in ascending order.
///
/// Acquire through [`LinkedBst::iter`](struct.LinkedBst.html#method.iter) or the `IntoIterator`
/// trait.
pub struct Iter<'a, T: 'a>(InOrder<&'a Node<T>>);

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, size: usize) -> Self {
        Iter(InOrder::new(root.as_deref(), size))
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator that consumes the tree, yielding its items in ascending order.
///
/// Nodes are detached from their children before they are freed, so dropping a partially
/// consumed iterator over a degenerate tree does not recurse.
pub struct IntoIter<T>(InOrder<Box<Node<T>>>);

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, size: usize) -> Self {
        IntoIter(InOrder::new(root, size))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

/// An iterator over the tree's items in pre-order: each node before its left subtree, the left
/// subtree before the right one.
///
/// Acquire through [`LinkedBst::preorder`](struct.LinkedBst.html#method.preorder).
pub struct Preorder<'a, T: 'a> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>) -> Self {
        Preorder { stack: root.as_deref().into_iter().collect() }
    }
}

impl<'a, T> Clone for Preorder<'a, T> {
    fn clone(&self) -> Self { Preorder { stack: self.stack.clone() } }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.data)
    }
}
