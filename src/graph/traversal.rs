//! Hypernym traversal algorithms (BFS closure, cycle detection).

use std::collections::{HashSet, VecDeque};

use crate::types::{Synset, SynsetId};

/// BFS over hypernym edges from `start`, returning every ancestor including `start`.
///
/// Order is visit order: `start` first, then by increasing hop count, with
/// siblings in hypernym declaration order.
pub fn bfs_ancestors(synsets: &[Synset], start: SynsetId) -> Vec<SynsetId> {
    let mut visited: HashSet<SynsetId> = HashSet::new();
    let mut visited_order: Vec<SynsetId> = Vec::new();
    let mut queue: VecDeque<SynsetId> = VecDeque::new();

    visited.insert(start);
    visited_order.push(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(synset) = synsets.get(current.index()) else {
            continue;
        };
        for &parent in &synset.hypernyms {
            if visited.insert(parent) {
                visited_order.push(parent);
                queue.push_back(parent);
            }
        }
    }

    visited_order
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Find a synset that lies on a hypernym cycle, if any.
///
/// Iterative DFS so deep hierarchies cannot overflow the stack.
pub fn find_cycle(synsets: &[Synset]) -> Option<SynsetId> {
    let mut marks = vec![Mark::Unvisited; synsets.len()];

    for root in synsets {
        if marks[root.id.index()] != Mark::Unvisited {
            continue;
        }
        // (node, index of the next hypernym to explore)
        let mut stack: Vec<(SynsetId, usize)> = vec![(root.id, 0)];
        marks[root.id.index()] = Mark::InProgress;

        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            let hypernyms = &synsets[node.index()].hypernyms;
            if next < hypernyms.len() {
                top.1 += 1;
                let parent = hypernyms[next];
                match marks.get(parent.index()) {
                    Some(Mark::InProgress) => return Some(parent),
                    Some(Mark::Unvisited) => {
                        marks[parent.index()] = Mark::InProgress;
                        stack.push((parent, 0));
                    }
                    _ => {}
                }
            } else {
                marks[node.index()] = Mark::Done;
                stack.pop();
            }
        }
    }

    None
}
