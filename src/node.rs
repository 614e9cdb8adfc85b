//! The `Node` records a [`Tree`][crate::Tree] is built from.

/// An owning edge to a child subtree. `None` marks the empty pointer at the
/// bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a value and exclusively owns up to two child `Node`s.
///
/// Nodes are only handed out by reference from a [`Tree`][crate::Tree], or built
/// by hand to pre-seed one with [`Tree::from_root`][crate::Tree::from_root].
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` with the given children.
    ///
    /// Nothing checks that `left` only holds smaller values and `right` only
    /// holds larger ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let node = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    ///
    /// assert_eq!(node.left().map(Node::value), Some(&1));
    /// assert_eq!(node.right().map(Node::value), Some(&3));
    /// ```
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let mut level = vec![self];
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    /// The nodes of this subtree in post-order: left subtree, right subtree,
    /// then the node itself, which is always last.
    pub(crate) fn post_order_nodes(&self) -> Vec<&Self> {
        // Right-before-left pre-order, reversed.
        let mut stack = vec![self];
        let mut nodes = Vec::new();
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }

        nodes.reverse();
        nodes
    }

    /// Consumes the node, dropping its (already detached) children.
    pub(crate) fn into_value(self: Box<Self>) -> T {
        let Node { value, .. } = *self;
        value
    }
}

/// Rebuilds the subtree bottom up in post-order, so the copy of each child is
/// finished before its parent asks for it.
impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut built: Vec<Node<T>> = Vec::new();
        for node in self.post_order_nodes() {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Node::with_children(node.value.clone(), left, right));
        }

        // `self` comes last in post-order and its copy is all that's left.
        built.pop().unwrap_or_else(|| Node::new(self.value.clone()))
    }
}
