// ABOUTME: Circular navigation between slides
// ABOUTME: Every slide has a predecessor and successor, wrapping at both ends

/// Neighbours of one slide under wrap-around ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEdge {
    pub from: usize,
    pub prev: usize,
    pub next: usize,
}

/// Successor of slide `index` in a package of `count` slides
pub fn next(index: usize, count: usize) -> usize {
    if index < count {
        index + 1
    } else {
        1
    }
}

/// Predecessor of slide `index` in a package of `count` slides
pub fn prev(index: usize, count: usize) -> usize {
    if index > 1 {
        index - 1
    } else {
        count
    }
}

pub fn nav_edge(index: usize, count: usize) -> NavEdge {
    NavEdge {
        from: index,
        prev: prev(index, count),
        next: next(index, count),
    }
}

/// Edges for every slide `1..=count`
pub fn nav_edges(count: usize) -> Vec<NavEdge> {
    (1..=count).map(|index| nav_edge(index, count)).collect()
}
