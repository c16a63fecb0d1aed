//! Closed tour over planar points, grown one point at a time.
//!
//! Nodes live in a flat arena and link to each other by index, so the
//! cyclic `prev`/`next` structure needs no shared ownership. The ring is
//! either empty or a single cycle reachable from `head`.

use crate::{Error, InsertionHeuristic, Point, Result};

mod iter;

pub use iter::{Edges, Points};

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

/// Circular doubly-linked sequence of points supporting three insertion
/// heuristics.
#[derive(Clone, Debug, Default)]
pub struct TourRing {
    nodes: Vec<Node>,
    head: Option<usize>,
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.dist(b)
}

/// Length added to a tour when `p` is placed between `u` and `v`.
#[inline]
pub fn insertion_cost(p: &Point, u: &Point, v: &Point) -> f64 {
    distance(p, u) + distance(p, v) - distance(u, v)
}

impl TourRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Point at the head of the ring, where traversal starts.
    pub fn head(&self) -> Option<Point> {
        self.head.map(|h| self.nodes[h].point)
    }

    /// Sum of all edge lengths, including the closing edge back to the head.
    /// A single point is a degenerate tour of length zero.
    pub fn total_distance(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::invalid_state(
                "total distance of an empty tour is undefined",
            ));
        }
        Ok(self.edges().map(|(a, b)| distance(&a, &b)).sum())
    }

    pub fn insert(&mut self, heuristic: InsertionHeuristic, p: Point) {
        match heuristic {
            InsertionHeuristic::Beginning => self.insert_beginning(p),
            InsertionHeuristic::Nearest => self.insert_nearest(p),
            InsertionHeuristic::Smallest => self.insert_smallest(p),
        }
    }

    pub fn extend_with<I>(&mut self, heuristic: InsertionHeuristic, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for p in points {
            self.insert(heuristic, p);
        }
    }

    /// Arbitrary insertion: `p` goes right before the head and becomes the
    /// new head.
    pub fn insert_beginning(&mut self, p: Point) {
        match self.head {
            None => self.first_node(p),
            Some(head) => {
                let idx = self.insert_before(p, head);
                self.head = Some(idx);
            }
        }
    }

    /// Nearest-neighbor insertion: `p` goes next to the closest point, on
    /// whichever side of it is closer to `p`. Ties keep the first node seen
    /// and the successor side.
    pub fn insert_nearest(&mut self, p: Point) {
        let Some(head) = self.head else {
            self.first_node(p);
            return;
        };

        let mut best = head;
        let mut best_dist = f64::INFINITY;
        let mut curr = head;
        loop {
            curr = self.nodes[curr].next;
            let d = distance(&self.nodes[curr].point, &p);
            if d < best_dist {
                best_dist = d;
                best = curr;
            }
            if curr == head {
                break;
            }
        }

        let Node { prev, next, .. } = self.nodes[best];
        if distance(&p, &self.nodes[prev].point) < distance(&p, &self.nodes[next].point) {
            log::trace!("ring: nearest best={best} dist={best_dist} side=before");
            self.insert_before(p, best);
        } else {
            log::trace!("ring: nearest best={best} dist={best_dist} side=after");
            self.insert_before(p, next);
        }
    }

    /// Cheapest insertion: `p` goes on the edge whose replacement grows the
    /// tour the least. Ties keep the first edge seen from the head.
    pub fn insert_smallest(&mut self, p: Point) {
        let Some(head) = self.head else {
            self.first_node(p);
            return;
        };
        if self.nodes[head].next == head {
            self.insert_before(p, head);
            return;
        }

        let mut best = head;
        let mut best_cost = f64::INFINITY;
        let mut curr = head;
        loop {
            let next = self.nodes[curr].next;
            let cost = insertion_cost(&p, &self.nodes[curr].point, &self.nodes[next].point);
            if cost < best_cost {
                best_cost = cost;
                best = next;
            }
            curr = next;
            if curr == head {
                break;
            }
        }

        log::trace!("ring: smallest before={best} increase={best_cost}");
        self.insert_before(p, best);
    }

    /// Drops every node; the ring is empty afterwards.
    pub fn reset(&mut self) {
        log::debug!("ring: reset n={}", self.nodes.len());
        self.nodes.clear();
        self.head = None;
    }

    /// Points in ring order, starting at the head and stopping before it
    /// comes around again.
    pub fn iter(&self) -> Points<'_> {
        Points::new(&self.nodes, self.head)
    }

    /// Consecutive point pairs in ring order, including the closing edge.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.nodes, self.head)
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }

    fn alloc(&mut self, p: Point) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            point: p,
            prev: idx,
            next: idx,
        });
        idx
    }

    fn first_node(&mut self, p: Point) {
        let idx = self.alloc(p);
        self.head = Some(idx);
    }

    /// Links a fresh node for `p` between `at` and its predecessor.
    fn insert_before(&mut self, p: Point, at: usize) -> usize {
        let idx = self.alloc(p);
        let prev = self.nodes[at].prev;
        self.nodes[idx].prev = prev;
        self.nodes[idx].next = at;
        self.nodes[prev].next = idx;
        self.nodes[at].prev = idx;
        idx
    }
}

impl<'a> IntoIterator for &'a TourRing {
    type Item = Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
