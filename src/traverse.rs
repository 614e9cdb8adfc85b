//! Traversals of a [`Tree`]. Every traversal hands back the stored values, not
//! the nodes holding them, and leaves the tree untouched.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T, C> Tree<T, C> {
    /// Visits the left subtree, then the node, then the right subtree. For a
    /// valid BST this yields the values in ascending comparator order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order_traverse(), vec![&1, &3, &4, &5, &7, &8, &9]);
    /// ```
    pub fn in_order_traverse(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Visits the node, then the left subtree, then the right subtree.
    ///
    /// This is the same walk as [`depth_first_search`][Self::depth_first_search].
    pub fn pre_order_traverse(&self) -> Vec<&T> {
        self.depth_first_search()
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn post_order_traverse(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, |root| {
            root.post_order_nodes().into_iter().map(Node::value).collect()
        })
    }

    /// Visits the tree level by level, top to bottom and left to right within
    /// a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.breadth_first_search(), vec![&5, &3, &8, &1, &4, &7, &9]);
    /// ```
    pub fn breadth_first_search(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            values.push(node.value());
            queue.extend(node.left());
            queue.extend(node.right());
        }

        values
    }

    /// Visits the tree depth first with an explicit stack. The right child is
    /// pushed before the left one so the order matches
    /// [`pre_order_traverse`][Self::pre_order_traverse].
    pub fn depth_first_search(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            values.push(node.value());
            stack.extend(node.right());
            stack.extend(node.left());
        }

        values
    }

    /// An iterator over the values in ascending comparator order. Unlike
    /// [`in_order_traverse`][Self::in_order_traverse] this doesn't collect
    /// everything up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 3, 1].into_iter().collect();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }
}

/// A lazy in-order iterator over the values of a [`Tree`], created by
/// [`Tree::iter`].
///
/// The stack holds the nodes whose value hasn't been yielded yet but whose
/// left subtree has been fully pushed.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
