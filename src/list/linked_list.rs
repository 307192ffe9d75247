use std::{fmt::Debug, mem};

use super::{List, ListError};

type Link<T> = Option<Box<Node<T>>>;

// simple singly linked list, addressed by walking from the head
pub struct LinkedList<T> {
    head: Link<T>,
    size: usize,
}

struct Node<T> {
    item: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(item: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { item, next })
    }
}

impl<T> LinkedList<T> {
    /// get the link which points to the node at the index
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;

        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }

        Some(link)
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();

        for _ in 0..index {
            current = current?.next.as_deref();
        }

        current
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            size: self.size,
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.item)
    }

    pub fn push_front(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Node::new(item, next));
        self.size += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { item, next } = *node;

        self.head = next;
        self.size -= 1;

        Some(item)
    }
}

impl<T> List<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn new() -> Self {
        Self::default()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.node(index).map(|node| &node.item)
    }

    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.link_mut(index)?.as_deref_mut().map(|node| &mut node.item)
    }

    fn insert(&mut self, item: T, index: usize) -> Result<(), ListError> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }

        let err = self.out_of_range(index);
        let link = self.link_mut(index).ok_or(err)?;
        let next = link.take();
        *link = Some(Node::new(item, next));

        self.size += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }

        let err = self.out_of_range(index);
        let link = self.link_mut(index).ok_or(err)?;
        let node = link.take().ok_or(err)?;
        let Node { item, next } = *node;
        *link = next;

        self.size -= 1;
        Ok(item)
    }

    fn swap_remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }

        let last = self.remove_at(self.size - 1)?;

        if index == self.size {
            // the removed item was the last one
            return Ok(last);
        }

        let err = self.out_of_range(index);
        let slot = self.at_mut(index).ok_or(err)?;
        Ok(mem::replace(slot, last))
    }

    fn clear(&mut self) {
        let mut node = self.head.take();

        while let Some(mut inside) = node {
            node = inside.next.take();
        }

        self.size = 0;
    }

    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::default();
        let mut tail = &mut list.head;

        for item in iter {
            let node = tail.insert(Node::new(item, None));
            tail = &mut node.next;
            list.size += 1;
        }

        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;

        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
