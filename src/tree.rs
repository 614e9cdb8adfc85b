//! An unbalanced BST that owns its nodes and orders them with a comparator.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//! assert!(tree.is_empty());
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Inserting an equal value is ignored.
//! assert!(!tree.insert(1));
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.remove(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::node::{Link, Node};

/// The comparator type used when none is given: a plain function pointer,
/// initialised to [`Ord::cmp`].
pub type Compare<T> = fn(&T, &T) -> Ordering;

/// A Binary Search Tree ordered by the comparator `C`. This can be used for
/// inserting, searching, and removing values. Values comparing equal to a
/// stored value are never stored twice.
///
/// The comparator must be a total order that stays consistent for the life of
/// the tree. If it isn't, the tree won't misbehave in any unsafe way but the
/// results of searches and traversals are unspecified.
pub struct Tree<T, C = Compare<T>> {
    root: Link<T>,
    compare: C,
}

impl<T> Default for Tree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Generate a new, empty `Tree` ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Ord::cmp)
    }

    /// Generate a `Tree` whose root is `root`, ordered by `T`'s natural order.
    ///
    /// The subtree is taken as is. It is the caller's job to make sure it is
    /// already a valid BST.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Node, Tree};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), None);
    /// let mut tree = Tree::from_root(root);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.in_order_traverse(), vec![&1, &2, &3]);
    /// ```
    pub fn from_root(root: Node<T>) -> Self {
        Self::from_root_with_comparator(root, Ord::cmp)
    }
}

impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Generate a new, empty `Tree` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend(vec![1, 3, 2]);
    ///
    /// assert_eq!(tree.in_order_traverse(), vec![&3, &2, &1]);
    ///
    /// // Types that aren't `Ord` just need a comparator.
    /// let mut floats = Tree::with_comparator(f64::total_cmp);
    /// floats.insert(0.5);
    /// assert!(floats.search(&0.5));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            compare,
        }
    }

    /// Generate a `Tree` whose root is `root`, ordered by `compare`.
    ///
    /// The subtree is not validated against `compare`.
    pub fn from_root_with_comparator(root: Node<T>, compare: C) -> Self {
        Self {
            root: Some(Box::new(root)),
            compare,
        }
    }

    /// Inserts the given value into the tree. Returns `false`, leaving the
    /// stored value in place, if a value comparing equal is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.in_order_traverse(), vec![&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        insert_into(&mut self.root, value, &self.compare)
    }

    /// Removes the value comparing equal to `value` from the tree and returns
    /// it. If the tree holds no such value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert!(!tree.search(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        remove_from(&mut self.root, value, &self.compare)
    }

    /// Whether the tree holds a value comparing equal to `value`.
    pub fn search(&self, value: &T) -> bool {
        self.search_node(value).is_some()
    }

    /// Finds the node holding a value comparing equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let node = tree.search_node(&2).unwrap();
    ///
    /// assert_eq!(node.left().map(|n| *n.value()), Some(1));
    /// assert_eq!(node.right().map(|n| *n.value()), Some(3));
    /// assert!(tree.search_node(&42).is_none());
    /// ```
    pub fn search_node(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match (self.compare)(value, &node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }
}

impl<T, C> Tree<T, C> {
    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The node holding the smallest value, found by following left links
    /// from the root.
    pub fn min(&self) -> Option<&Node<T>> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }

        Some(node)
    }

    /// The node holding the largest value, found by following right links
    /// from the root.
    pub fn max(&self) -> Option<&Node<T>> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }

        Some(node)
    }

    /// Gets the height of this tree: the number of nodes on the longest path
    /// from the root to a leaf. An empty tree has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// // Sorted input degenerates the tree into a list.
    /// let tree: Tree<_> = (0..10).collect();
    /// assert_eq!(tree.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }
}

#[cfg(test)]
impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Checks the BST invariant by walking the tree in order and making sure
    /// every value compares strictly greater than the one before it.
    pub(crate) fn is_ordered(&self) -> bool {
        self.in_order_traverse()
            .windows(2)
            .all(|pair| (self.compare)(pair[0], pair[1]) == Ordering::Less)
    }
}

/// Walks down from `link` to the empty link where `value` belongs and attaches a
/// new leaf there. Returns `false` if an equal value was found on the way down.
fn insert_into<T, C>(mut link: &mut Link<T>, value: T, compare: &C) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    while let Some(node) = link.as_deref() {
        let ordering = compare(&value, &node.value);
        link = match (ordering, link.as_mut()) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            _ => return false,
        };
    }

    *link = Some(Box::new(Node::new(value)));
    true
}

/// Removes `value` from the subtree rooted at `link`, rewiring the link that
/// held it, and returns the removed value if it was found.
fn remove_from<T, C>(mut link: &mut Link<T>, value: &T, compare: &C) -> Option<T>
where
    C: Fn(&T, &T) -> Ordering,
{
    loop {
        let ordering = compare(value, &link.as_ref()?.value);
        link = match ordering {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Equal => break,
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }

    let mut node = link.take()?;

    // With two children the in-order successor, the leftmost node of the right
    // subtree, gives up its value to this node and is unlinked instead.
    if node.left.is_some() && node.right.is_some() {
        if let Some(successor) = take_leftmost(&mut node.right) {
            let removed = mem::replace(&mut node.value, successor);
            *link = Some(node);
            return Some(removed);
        }
    }

    // Otherwise whichever child there is (if any) takes this node's place.
    *link = node.left.take().or(node.right.take());
    Some(node.into_value())
}

/// Unlinks the leftmost node of the subtree rooted at `link`, promoting its
/// right child, and returns its value.
fn take_leftmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.into_value())
}

impl<T, C> Drop for Tree<T, C> {
    // Dropping the `Box`es recursively would overflow the stack on a tree that
    // degenerated into a long list.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("values", &self.in_order_traverse())
            .finish()
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
