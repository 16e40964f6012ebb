//! Per-event task list: a singly linked list in insertion order.
//!
//! No tail pointer is kept, so appending walks the whole list. Removal and
//! completion scan for the first task whose description matches exactly.

use crate::models::Task;

type Link = Option<Box<Node>>;

#[derive(Debug, Clone)]
struct Node {
    task: Task,
    next: Link,
}

/// Ordered tasks of one event.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    head: Link,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of tasks marked complete.
    pub fn completed(&self) -> usize {
        self.iter().filter(|task| task.completed).count()
    }

    /// Appends a task at the tail.
    pub fn push(&mut self, task: Task) {
        fn append(slot: &mut Link, node: Box<Node>) {
            match slot {
                Some(existing) => append(&mut existing.next, node),
                None => *slot = Some(node),
            }
        }
        append(&mut self.head, Box::new(Node { task, next: None }));
    }

    /// Unlinks the first task with this description.
    pub fn remove(&mut self, description: &str) -> bool {
        fn unlink(slot: &mut Link, description: &str) -> bool {
            match slot {
                None => false,
                Some(node) if node.task.description != description => {
                    unlink(&mut node.next, description)
                }
                Some(node) => {
                    let next = node.next.take();
                    *slot = next;
                    true
                }
            }
        }
        unlink(&mut self.head, description)
    }

    /// Marks the first task with this description complete. Marking an
    /// already completed task succeeds and changes nothing.
    pub fn mark_complete(&mut self, description: &str) -> bool {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.task.description == description {
                node.task.completed = true;
                return true;
            }
            current = node.next.as_deref_mut();
        }
        false
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Owned copies of the tasks in order.
    pub fn to_vec(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut tasks: Vec<Task> = iter.into_iter().collect();
        let mut head = None;
        while let Some(task) = tasks.pop() {
            head = Some(Box::new(Node { task, next: head }));
        }
        Self { head }
    }
}

impl Drop for TaskList {
    // unlink iteratively so long lists don't recurse through Box drops
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl PartialEq for TaskList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Borrowing iterator over a [`TaskList`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.task
        })
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
