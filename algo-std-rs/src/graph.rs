//! Breadth-first traversal over adjacency lists, and component labeling
//! driven by the weighted disjoint-set.

use std::collections::VecDeque;

use disjoint_set::{Error, WeightedQuickUnion};

fn check_node(node: usize, len: usize) -> Result<(), Error> {
    if node < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index: node, len })
    }
}

/// Breadth-first visit order from `start`. Neighbors are taken in the
/// order the adjacency list stores them.
pub fn bfs(adj: &[Vec<usize>], start: usize) -> Result<Vec<usize>, Error> {
    check_node(start, adj.len())?;
    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &n in &adj[node] {
            check_node(n, adj.len())?;
            if !visited[n] {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    Ok(order)
}

/// Fewest edges between `from` and `to`, or `None` when unreachable.
pub fn shortest_hops(adj: &[Vec<usize>], from: usize, to: usize) -> Result<Option<usize>, Error> {
    check_node(from, adj.len())?;
    check_node(to, adj.len())?;
    let mut dist: Vec<Option<usize>> = vec![None; adj.len()];
    let mut queue = VecDeque::new();

    dist[from] = Some(0);
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        if node == to {
            return Ok(dist[node]);
        }
        for &n in &adj[node] {
            check_node(n, adj.len())?;
            if dist[n].is_none() {
                dist[n] = dist[node].map(|d| d + 1);
                queue.push_back(n);
            }
        }
    }
    Ok(None)
}

/// Component label per element, merging undirected `edges` through a
/// weighted quick-union forest. Labels are dense, assigned in first-seen
/// order: element 0 always gets label 0.
pub fn connected_components(n: usize, edges: &[(usize, usize)]) -> Result<Vec<usize>, Error> {
    let mut forest = WeightedQuickUnion::new(n);
    for &(p, q) in edges {
        forest.union(p, q)?;
    }
    let mut label_of_root = std::collections::HashMap::new();
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let root = forest.find(i)?;
        let fresh = label_of_root.len();
        labels.push(*label_of_root.entry(root).or_insert(fresh));
    }
    Ok(labels)
}
