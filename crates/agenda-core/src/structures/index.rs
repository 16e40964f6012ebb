//! Chronological index: an unbalanced binary search tree keyed by start time.
//!
//! Nodes carry the composite `(date, time)` key and the id of the event that
//! owns it; events themselves stay in the planner's store. Equal keys are
//! placed in the right subtree, so every node satisfies
//! `left < node <= right`. There is no rebalancing, so a run of inserts in
//! ascending order degrades to a list.

use jiff::civil::DateTime;

use crate::models::EventId;

type Link = Option<Box<Node>>;

#[derive(Debug, Clone)]
struct Node {
    key: DateTime,
    id: EventId,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(key: DateTime, id: EventId) -> Box<Self> {
        Box::new(Self {
            key,
            id,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree ordering event ids by start time.
#[derive(Debug, Clone, Default)]
pub struct ChronoIndex {
    root: Link,
    len: usize,
}

impl ChronoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts an entry. Ties descend to the right.
    pub fn insert(&mut self, key: DateTime, id: EventId) {
        Self::insert_into(&mut self.root, key, id);
        self.len += 1;
    }

    fn insert_into(slot: &mut Link, key: DateTime, id: EventId) {
        match slot {
            Some(node) if key < node.key => Self::insert_into(&mut node.left, key, id),
            Some(node) => Self::insert_into(&mut node.right, key, id),
            None => *slot = Some(Node::leaf(key, id)),
        }
    }

    /// Removes the entry holding `id` under `key`.
    ///
    /// Descends by key; on an equal key owned by another event the search
    /// continues right, where later ties live. A node with two children is
    /// replaced by its in-order successor. Returns false when no such entry
    /// exists.
    pub fn remove(&mut self, key: DateTime, id: EventId) -> bool {
        let removed = Self::remove_from(&mut self.root, key, id);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(slot: &mut Link, key: DateTime, id: EventId) -> bool {
        let Some(node) = slot.as_mut() else {
            return false;
        };
        if key < node.key {
            return Self::remove_from(&mut node.left, key, id);
        }
        if key > node.key || node.id != id {
            return Self::remove_from(&mut node.right, key, id);
        }

        let Some(mut node) = slot.take() else {
            return false;
        };
        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some((successor_key, successor_id)) = Self::take_min(&mut right) {
                    node.key = successor_key;
                    node.id = successor_id;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
        true
    }

    /// Detaches the leftmost node of a subtree, splicing in its right child.
    fn take_min(slot: &mut Link) -> Option<(DateTime, EventId)> {
        if slot.as_ref()?.left.is_some() {
            return Self::take_min(&mut slot.as_mut()?.left);
        }
        let node = slot.take()?;
        let Node { key, id, right, .. } = *node;
        *slot = right;
        Some((key, id))
    }

    /// Whether an entry for `id` sits under `key`.
    #[cfg(test)]
    pub fn contains(&self, key: DateTime, id: EventId) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if key < node.key {
                current = node.left.as_deref();
            } else if key == node.key && node.id == id {
                return true;
            } else {
                current = node.right.as_deref();
            }
        }
        false
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn depth(link: &Link) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
            }
        }
        depth(&self.root)
    }

    /// In-order (ascending) iteration over `(key, id)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

/// In-order iterator driven by an explicit stack.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (DateTime, EventId);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((node.key, node.id))
    }
}
