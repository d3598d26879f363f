//! Reachability searches.

use std::collections::VecDeque;

use tilepath_core::Stopwatch;

use crate::graph::LabeledGraph;
use crate::node::NodeId;

impl<V> LabeledGraph<V> {
    /// Breadth-first reachability from `start` to `end`.
    ///
    /// Returns `true` when `start == end`. Edge weights are ignored. Unknown
    /// node ids are never reachable.
    pub fn bfs(&self, start: impl Into<NodeId>, end: impl Into<NodeId>) -> bool {
        let sw = Stopwatch::start("bfs");
        let found = match (self.slot(&start.into()), self.slot(&end.into())) {
            (Some(s), Some(e)) => self.bfs_slots(s, e),
            _ => false,
        };
        self.duration.set(sw.stop());
        log::debug!("bfs finished: reachable={found}");
        found
    }

    fn bfs_slots(&self, start: usize, end: usize) -> bool {
        let adj = self.adjacency();
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            if current == end {
                return true;
            }
            for &next in &adj[current] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Depth-first reachability from `start` to `end`.
    ///
    /// Each neighbor is compared with `end` before it is expanded, and the
    /// search uses an explicit stack, so deep or cyclic graphs cannot exhaust
    /// the call stack. Agrees with [`bfs`](Self::bfs) on every input.
    pub fn dfs(&self, start: impl Into<NodeId>, end: impl Into<NodeId>) -> bool {
        let sw = Stopwatch::start("dfs");
        let found = match (self.slot(&start.into()), self.slot(&end.into())) {
            (Some(s), Some(e)) => self.dfs_slots(s, e),
            _ => false,
        };
        self.duration.set(sw.stop());
        log::debug!("dfs finished: reachable={found}");
        found
    }

    fn dfs_slots(&self, start: usize, end: usize) -> bool {
        if start == end {
            return true;
        }
        let adj = self.adjacency();
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(current) = stack.pop() {
            let adjacent = &adj[current];
            if adjacent.contains(&end) {
                return true;
            }
            // Reverse so the first neighbor is expanded first.
            for &next in adjacent.iter().rev() {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        false
    }
}
