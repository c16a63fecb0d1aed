use std::iter::FusedIterator;

use super::Node;
use crate::{Error, Point, Result};

/// Cursor over the points of a ring. Holds only the arena borrow and the
/// next index to visit, so any number of traversals can run side by side.
#[derive(Clone, Debug)]
pub struct Points<'a> {
    nodes: &'a [Node],
    head: usize,
    current: Option<usize>,
    remaining: usize,
}

impl<'a> Points<'a> {
    pub(super) fn new(nodes: &'a [Node], head: Option<usize>) -> Self {
        Self {
            nodes,
            head: head.unwrap_or_default(),
            current: head,
            remaining: if head.is_some() { nodes.len() } else { 0 },
        }
    }

    /// The ring cannot be edited through a traversal.
    pub fn remove(&mut self) -> Result<Point> {
        Err(Error::unsupported(
            "points cannot be removed through a tour traversal",
        ))
    }
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = &self.nodes[idx];
        self.current = (node.next != self.head).then_some(node.next);
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Points<'_> {}

impl FusedIterator for Points<'_> {}

/// Tour segments `(from, to)` in ring order, ending with the edge that
/// closes the loop back to the head.
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    points: Points<'a>,
}

impl<'a> Edges<'a> {
    pub(super) fn new(nodes: &'a [Node], head: Option<usize>) -> Self {
        Self {
            points: Points::new(nodes, head),
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.points.current?;
        let from = self.points.next()?;
        let to = self.points.nodes[self.points.nodes[idx].next].point;
        Some((from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl FusedIterator for Edges<'_> {}
