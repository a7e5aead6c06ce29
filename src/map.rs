//! A mutable ordered map backed by a left-leaning red-black tree.
//!
//! Keys are kept in sorted order, so in addition to the usual map
//! operations (`insert`, `get`, `delete`) the tree supports ordered
//! queries: minimum and maximum keys, rank and select, and in-order
//! enumeration.
//!
//! # Examples
//!
//! ```
//! use llrb::map::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.insert(1, "one");
//! tree.insert(3, "three");
//! tree.insert(2, "two");
//!
//! assert_eq!(tree.get(&2), Some(&"two"));
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&3));
//! assert_eq!(tree.keys(), [&1, &2, &3]);
//!
//! // Deleting a key returns its value.
//! assert_eq!(tree.delete(&2), Some("two"));
//! assert_eq!(tree.get(&2), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// The color of the link from a node to its parent. A missing child is
/// considered black.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

type Link<K, V> = Option<Box<Node<K, V>>>;

/// Returns whether the link to this node is red. Missing children are black.
fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |n| n.color == Color::Red)
}

/// Number of nodes in the subtree hanging off this link.
fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.count)
}

/// An ordered map from keys to values, balanced as a left-leaning
/// red-black tree. See the [crate docs](crate) for the invariants.
pub struct Tree<K, V> {
    root: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// The search is a plain iterative descent - colors play no part in
    /// lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut x = self.root.as_deref();
        while let Some(n) = x {
            match key.cmp(&n.key) {
                Ordering::Less => x = n.left.as_deref(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => x = n.right.as_deref(),
            }
        }
        None
    }

    /// Returns `true` if the tree holds an entry for the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.get(key).is_some()
    }

    /// Inserts the given value into the tree stored at the given key.
    /// Inserting a new value for an existing key overwrites its value and
    /// returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.get(&1), Some(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.get(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let (mut root, old) = Self::insert_rec(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
        old
    }

    fn insert_rec(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>)
    where
        K: Ord,
    {
        let mut h = match link {
            // New keys always come in as red leaves.
            None => return (Node::new_boxed(key, value), None),
            Some(h) => h,
        };
        let old = match key.cmp(&h.key) {
            Ordering::Less => {
                let (left, old) = Self::insert_rec(h.left.take(), key, value);
                h.left = Some(left);
                old
            }
            Ordering::Equal => Some(mem::replace(&mut h.value, value)),
            Ordering::Greater => {
                let (right, old) = Self::insert_rec(h.right.take(), key, value);
                h.right = Some(right);
                old
            }
        };
        (balance(h), old)
    }

    /// Deletes the node containing the given key from the tree and returns
    /// its value. If the tree does not contain a node with the key,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.get(&1), None);
    ///
    /// // Deleting an absent key is a no-op.
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        // The descent below assumes the key is present, so check first.
        if !self.contains(key) {
            return None;
        }
        let mut root = self.root.take()?;
        // Make a red link available to borrow from on the way down.
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        let (root, value) = Self::delete_rec(root, key);
        self.root = root;
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }
        Some(value)
    }

    fn delete_rec(mut h: Box<Node<K, V>>, key: &K) -> (Link<K, V>, V)
    where
        K: Ord,
    {
        if *key < h.key {
            let left_left_red = h.left.as_ref().map_or(false, |l| is_red(&l.left));
            if h.left.is_some() && !is_red(&h.left) && !left_left_red {
                h = move_red_left(h);
            }
            let left = h.left.take().expect("key is present in the left subtree");
            let (left, value) = Self::delete_rec(left, key);
            h.left = left;
            (Some(balance(h)), value)
        } else {
            // Push a left-leaning red link to the right so the symmetric
            // cases below only have to deal with red right links.
            if is_red(&h.left) {
                h = rotate_right(h);
            }
            if *key == h.key && h.right.is_none() {
                // The node is a leaf (or left-only after the rotation
                // above); its left link replaces it.
                let Node { left, value, .. } = *h;
                return (left, value);
            }
            let right_left_red = h.right.as_ref().map_or(false, |r| is_red(&r.left));
            if h.right.is_some() && !is_red(&h.right) && !right_left_red {
                h = move_red_right(h);
            }
            if *key == h.key {
                // Two-child case: replace this node's entry with its
                // successor, then delete the successor from the right
                // subtree.
                let right = h.right.take().expect("the no-right-child case returned above");
                let (right, (succ_key, succ_value)) = Self::pop_min_rec(right);
                h.right = right;
                h.key = succ_key;
                let value = mem::replace(&mut h.value, succ_value);
                (Some(balance(h)), value)
            } else {
                let right = h.right.take().expect("key is present in the right subtree");
                let (right, value) = Self::delete_rec(right, key);
                h.right = right;
                (Some(balance(h)), value)
            }
        }
    }

    /// Deletes the entry with the smallest key and returns it, or `None`
    /// if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    ///
    /// assert_eq!(tree.delete_min(), Some((1, "one")));
    /// assert_eq!(tree.delete_min(), Some((2, "two")));
    /// assert_eq!(tree.delete_min(), None);
    /// ```
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        let (root, entry) = Self::pop_min_rec(root);
        self.root = root;
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }
        Some(entry)
    }

    fn pop_min_rec(mut h: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
        if h.left.is_none() {
            // Black balance means a node without a left child has no
            // right child either.
            debug_assert!(h.right.is_none());
            let Node { key, value, .. } = *h;
            return (None, (key, value));
        }
        let left_left_red = h.left.as_ref().map_or(false, |l| is_red(&l.left));
        if !is_red(&h.left) && !left_left_red {
            h = move_red_left(h);
        }
        let left = h.left.take().expect("move_red_left keeps the left child");
        let (left, entry) = Self::pop_min_rec(left);
        h.left = left;
        (Some(balance(h)), entry)
    }

    /// Deletes the entry with the largest key and returns it, or `None`
    /// if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    ///
    /// assert_eq!(tree.delete_max(), Some((2, "two")));
    /// assert_eq!(tree.delete_max(), Some((1, "one")));
    /// assert_eq!(tree.delete_max(), None);
    /// ```
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        let (root, entry) = Self::pop_max_rec(root);
        self.root = root;
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }
        Some(entry)
    }

    fn pop_max_rec(mut h: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
        if is_red(&h.left) {
            h = rotate_right(h);
        }
        if h.right.is_none() {
            debug_assert!(h.left.is_none());
            let Node { key, value, .. } = *h;
            return (None, (key, value));
        }
        let right_left_red = h.right.as_ref().map_or(false, |r| is_red(&r.left));
        if !is_red(&h.right) && !right_left_red {
            h = move_red_right(h);
        }
        let right = h.right.take().expect("move_red_right keeps the right child");
        let (right, entry) = Self::pop_max_rec(right);
        h.right = right;
        (Some(balance(h)), entry)
    }

    /// Returns the smallest key in the tree, or `None` if the tree is
    /// empty.
    pub fn min(&self) -> Option<&K> {
        let mut x = self.root.as_deref()?;
        while let Some(left) = x.left.as_deref() {
            x = left;
        }
        Some(&x.key)
    }

    /// Returns the largest key in the tree, or `None` if the tree is
    /// empty.
    pub fn max(&self) -> Option<&K> {
        let mut x = self.root.as_deref()?;
        while let Some(right) = x.right.as_deref() {
            x = right;
        }
        Some(&x.key)
    }

    /// Returns the number of keys in the tree strictly less than the
    /// given key. The key itself does not have to be present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [10, 20, 30] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.rank(&10), 0);
    /// assert_eq!(tree.rank(&25), 2);
    /// assert_eq!(tree.rank(&99), 3);
    /// ```
    pub fn rank(&self, key: &K) -> usize
    where
        K: Ord,
    {
        Self::rank_rec(self.root.as_deref(), key)
    }

    fn rank_rec(node: Option<&Node<K, V>>, key: &K) -> usize
    where
        K: Ord,
    {
        let n = match node {
            None => return 0,
            Some(n) => n,
        };
        match key.cmp(&n.key) {
            Ordering::Less => Self::rank_rec(n.left.as_deref(), key),
            Ordering::Equal => size(&n.left),
            Ordering::Greater => 1 + size(&n.left) + Self::rank_rec(n.right.as_deref(), key),
        }
    }

    /// Returns the key with exactly `k` smaller keys in the tree, or
    /// `None` if `k` is out of range. The inverse of [`rank`](Self::rank):
    /// for every `i` in `0..tree.len()`, `tree.rank(tree.select(i).unwrap()) == i`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [10, 20, 30] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.select(0), Some(&10));
    /// assert_eq!(tree.select(2), Some(&30));
    /// assert_eq!(tree.select(3), None);
    /// ```
    pub fn select(&self, k: usize) -> Option<&K> {
        Self::select_rec(self.root.as_deref(), k)
    }

    fn select_rec(node: Option<&Node<K, V>>, k: usize) -> Option<&K> {
        let n = node?;
        let left_size = size(&n.left);
        match k.cmp(&left_size) {
            Ordering::Less => Self::select_rec(n.left.as_deref(), k),
            Ordering::Equal => Some(&n.key),
            Ordering::Greater => Self::select_rec(n.right.as_deref(), k - left_size - 1),
        }
    }

    /// Returns all keys in ascending order. This is the canonical
    /// enumeration order of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.keys(), [&1, &2, &3]);
    /// ```
    pub fn keys(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        Self::in_order(self.root.as_deref(), &mut out);
        out
    }

    fn in_order<'a>(node: Option<&'a Node<K, V>>, out: &mut Vec<&'a K>) {
        if let Some(n) = node {
            Self::in_order(n.left.as_deref(), out);
            out.push(&n.key);
            Self::in_order(n.right.as_deref(), out);
        }
    }

    /// Returns all keys in pre-order (each node before its subtrees).
    pub fn pre_order_keys(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        Self::pre_order(self.root.as_deref(), &mut out);
        out
    }

    fn pre_order<'a>(node: Option<&'a Node<K, V>>, out: &mut Vec<&'a K>) {
        if let Some(n) = node {
            out.push(&n.key);
            Self::pre_order(n.left.as_deref(), out);
            Self::pre_order(n.right.as_deref(), out);
        }
    }

    /// Returns all keys in post-order (each node after its subtrees).
    pub fn post_order_keys(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        Self::post_order(self.root.as_deref(), &mut out);
        out
    }

    fn post_order<'a>(node: Option<&'a Node<K, V>>, out: &mut Vec<&'a K>) {
        if let Some(n) = node {
            Self::post_order(n.left.as_deref(), out);
            Self::post_order(n.right.as_deref(), out);
            out.push(&n.key);
        }
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf. An empty tree has height 0. The red-black invariants bound
    /// this by `2 lg (len + 1)`.
    pub fn height(&self) -> usize {
        Self::height_rec(self.root.as_deref())
    }

    fn height_rec(node: Option<&Node<K, V>>) -> usize {
        node.map_or(0, |n| {
            1 + Self::height_rec(n.left.as_deref()).max(Self::height_rec(n.right.as_deref()))
        })
    }
}

/// Renders the tree sideways: the root at the left, leaves at the right,
/// the right subtree above its parent and the left subtree below. Red
/// nodes are written `(key)`, black nodes `[key]`.
///
/// This is a diagnostic aid, not a stable format.
impl<K, V> fmt::Display for Tree<K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root.as_deref() {
            None => return f.write_str("<empty tree>"),
            Some(root) => root,
        };
        let mut lines = Vec::new();
        render(root, String::new(), true, &mut lines);
        f.write_str(&lines.join("\n"))
    }
}

fn render<K, V>(node: &Node<K, V>, prefix: String, is_left: bool, lines: &mut Vec<String>)
where
    K: fmt::Display,
{
    if let Some(right) = node.right.as_deref() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render(right, deeper, false, lines);
    }
    let label = match node.color {
        Color::Red => format!("({})", node.key),
        Color::Black => format!("[{}]", node.key),
    };
    let connector = if is_left { "└── " } else { "┌── " };
    lines.push(format!("{}{}{}", prefix, connector, label));
    if let Some(left) = node.left.as_deref() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render(left, deeper, true, lines);
    }
}

struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    /// Number of nodes in the subtree rooted here, self included.
    count: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Clone for Node<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            color: self.color,
            count: self.count,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("color", &self.color)
            .field("count", &self.count)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            color: Color::Red,
            count: 1,
            left: None,
            right: None,
        })
    }
}

/// Rotates `h` left: its red right child becomes the subtree root and `h`
/// becomes that child's left child. Fixes a right-leaning red link.
///
/// ## Panics
///
/// When called on a node without a right child. Correct callers never do.
///
/// # Diagram
///
/// ```text
///    h              x
///   / \    ->      / \
///  a  (x)        (h)  c
///     / \        / \
///    b   c      a   b
/// ```
fn rotate_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = h
        .right
        .take()
        .expect("rotate_left called on a node with no right child");
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    h.count = 1 + size(&h.left) + size(&h.right);
    x.left = Some(h);
    x.count = 1 + size(&x.left) + size(&x.right);
    x
}

/// Mirror of [`rotate_left`], pivoting on the left child. Used to fix two
/// red links in a row on the left.
///
/// ## Panics
///
/// When called on a node without a left child. Correct callers never do.
fn rotate_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = h
        .left
        .take()
        .expect("rotate_right called on a node with no left child");
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    h.count = 1 + size(&h.left) + size(&h.right);
    x.right = Some(h);
    x.count = 1 + size(&x.left) + size(&x.right);
    x
}

/// Flips the colors of `h` and both of its children, splitting or merging
/// a temporary 4-node.
fn flip_colors<K, V>(h: &mut Node<K, V>) {
    h.color = h.color.flip();
    if let Some(left) = h.left.as_mut() {
        left.color = left.color.flip();
    }
    if let Some(right) = h.right.as_mut() {
        right.color = right.color.flip();
    }
}

/// Restores the LLRB invariants below `h` after an insertion or deletion
/// step and refreshes its count. The three fixes must run in exactly this
/// order: first straighten a right-leaning red, then break up two reds in
/// a row, then split a 4-node.
fn balance<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && h.left.as_ref().map_or(false, |l| is_red(&l.left)) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.count = 1 + size(&h.left) + size(&h.right);
    h
}

/// Assuming `h` is red and both `h.left` and `h.left.left` are black,
/// makes `h.left` or one of its children red. Borrows a red link from the
/// right subtree when it has one to spare. Deletion-descent helper.
fn move_red_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if h.right.as_ref().map_or(false, |r| is_red(&r.left)) {
        let right = h.right.take().expect("checked right child above");
        h.right = Some(rotate_right(right));
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Mirror of [`move_red_left`]: assuming `h` is red and both `h.right`
/// and `h.right.left` are black, makes `h.right` or one of its children
/// red.
fn move_red_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if h.left.as_ref().map_or(false, |l| is_red(&l.left)) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}

#[cfg(test)]
impl<K, V> Tree<K, V>
where
    K: Ord,
{
    /// Panics unless every LLRB invariant holds. Test-only; the property
    /// tests call this after every mutation.
    fn assert_valid(&self) {
        assert!(!is_red(&self.root), "root must be black");
        let count = Self::assert_node(self.root.as_deref(), None, None);
        assert_eq!(count, self.len());
        Self::assert_black_balance(self.root.as_deref());
    }

    /// Checks BST order, left-leaning colors, and subtree counts; returns
    /// the subtree size.
    fn assert_node(node: Option<&Node<K, V>>, lo: Option<&K>, hi: Option<&K>) -> usize {
        let n = match node {
            None => return 0,
            Some(n) => n,
        };
        if let Some(lo) = lo {
            assert!(n.key > *lo, "BST order violated on the left");
        }
        if let Some(hi) = hi {
            assert!(n.key < *hi, "BST order violated on the right");
        }
        assert!(!is_red(&n.right), "red link leaning right");
        if n.color == Color::Red {
            assert!(!is_red(&n.left), "two red links in a row");
        }
        let count = 1
            + Self::assert_node(n.left.as_deref(), lo, Some(&n.key))
            + Self::assert_node(n.right.as_deref(), Some(&n.key), hi);
        assert_eq!(n.count, count, "stale subtree count");
        count
    }

    /// Checks that every path to a missing child crosses the same number
    /// of black links; returns that number.
    fn assert_black_balance(node: Option<&Node<K, V>>) -> usize {
        let n = match node {
            None => return 0,
            Some(n) => n,
        };
        let left = Self::assert_black_balance(n.left.as_deref());
        let right = Self::assert_black_balance(n.right.as_deref());
        assert_eq!(left, right, "black balance violated");
        left + (n.color == Color::Black) as usize
    }
}
