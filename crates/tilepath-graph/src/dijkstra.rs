//! Single-source shortest distances and path reconstruction.
//!
//! The frontier is a plain scan over unvisited nodes rather than a priority
//! queue, which is quadratic in the node count. Graphs converted from tile
//! grids are small enough for this to be cheap.

use tilepath_core::Stopwatch;

use crate::error::GraphError;
use crate::graph::LabeledGraph;
use crate::node::{Node, NodeId};

/// Shortest known distance from the search source to `node`.
///
/// Unreached nodes have `distance == f64::INFINITY` and no `previous`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceEntry {
    pub node: NodeId,
    pub distance: f64,
    pub previous: Option<NodeId>,
}

impl DistanceEntry {
    /// Whether the source reaches this node.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Per-slot search state.
struct Table {
    distance: Vec<f64>,
    previous: Vec<Option<usize>>,
}

impl<V> LabeledGraph<V> {
    /// Compute the shortest distance from `source` to every node.
    ///
    /// Entries follow node insertion order. Unweighted edges count as weight
    /// 1. Fails with [`GraphError::NodeNotFound`] if `source` is not in the
    /// graph.
    pub fn dijkstra(&self, source: impl Into<NodeId>) -> Result<Vec<DistanceEntry>, GraphError> {
        let sw = Stopwatch::start("dijkstra");
        let source = source.into();
        let src = self
            .slot(&source)
            .ok_or_else(|| GraphError::NodeNotFound(source.clone()))?;

        let table = self.relax_from(src);
        let entries: Vec<DistanceEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| DistanceEntry {
                node: node.id.clone(),
                distance: table.distance[slot],
                previous: table.previous[slot].map(|p| self.nodes[p].id.clone()),
            })
            .collect();

        self.duration.set(sw.stop());
        log::debug!(
            "dijkstra from {source}: reached {} of {} nodes",
            entries.iter().filter(|e| e.is_reachable()).count(),
            entries.len()
        );
        Ok(entries)
    }

    /// The cheapest path from `start` to `end`, both included.
    ///
    /// Returns `[start]` when `start == end` and an empty path when `end` is
    /// unreachable. Fails with [`GraphError::NodeNotFound`] if either node is
    /// not in the graph.
    pub fn shortest_path(
        &self,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
    ) -> Result<Vec<&Node<V>>, GraphError> {
        let sw = Stopwatch::start("shortest_path");
        let (start, end) = (start.into(), end.into());
        let s = self
            .slot(&start)
            .ok_or_else(|| GraphError::NodeNotFound(start.clone()))?;
        let e = self
            .slot(&end)
            .ok_or_else(|| GraphError::NodeNotFound(end.clone()))?;

        let table = self.relax_from(s);
        let mut path = Vec::new();
        if table.distance[e].is_finite() {
            let mut current = Some(e);
            while let Some(slot) = current {
                path.push(&self.nodes[slot]);
                current = table.previous[slot];
            }
            path.reverse();
        }

        self.duration.set(sw.stop());
        log::debug!("shortest path {start} -> {end}: {} nodes", path.len());
        Ok(path)
    }

    /// Run the relaxation loop from slot `src`.
    ///
    /// The source is settled first and its outgoing edges relaxed once. Each
    /// later round settles the unvisited node with the lowest finite
    /// distance, choosing among nodes that still have an edge to an
    /// unvisited node, or among all unvisited nodes when none do. Ties go to
    /// the earliest inserted node. The loop stops when no unvisited node has
    /// a finite distance.
    fn relax_from(&self, src: usize) -> Table {
        let n = self.nodes.len();
        let mut out: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for (edge, &(from, to)) in self.edges.iter().zip(&self.ends) {
            out[from].push((to, edge.cost()));
        }

        let mut table = Table {
            distance: vec![f64::INFINITY; n],
            previous: vec![None; n],
        };
        let mut visited = vec![false; n];
        table.distance[src] = 0.0;

        let mut current = src;
        loop {
            visited[current] = true;
            for &(to, weight) in &out[current] {
                if visited[to] {
                    continue;
                }
                let candidate = table.distance[current] + weight;
                if candidate < table.distance[to] {
                    table.distance[to] = candidate;
                    table.previous[to] = Some(current);
                }
            }

            let unvisited: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
            if unvisited.is_empty() {
                break;
            }
            let frontier: Vec<usize> = unvisited
                .iter()
                .copied()
                .filter(|&i| out[i].iter().any(|&(to, _)| !visited[to]))
                .collect();
            let pool = if frontier.is_empty() { unvisited } else { frontier };

            let mut lowest: Option<usize> = None;
            for i in pool {
                let d = table.distance[i];
                if d.is_finite() && lowest.is_none_or(|l| d < table.distance[l]) {
                    lowest = Some(i);
                }
            }
            match lowest {
                Some(next) => current = next,
                None => break,
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;

    fn weighted() -> LabeledGraph {
        // a -1-> b -1-> c, a -5-> c, d isolated
        let mut g = LabeledGraph::new();
        for id in ["a", "b", "c", "d"] {
            g.add_node(Node::new(id));
        }
        g.add_edge(Edge::weighted("ab", "a", "b", 1.0), false).unwrap();
        g.add_edge(Edge::weighted("bc", "b", "c", 1.0), false).unwrap();
        g.add_edge(Edge::weighted("ac", "a", "c", 5.0), false).unwrap();
        g
    }

    fn entry<'a>(entries: &'a [DistanceEntry], id: &str) -> &'a DistanceEntry {
        entries.iter().find(|e| e.node.as_str() == id).unwrap()
    }

    #[test]
    fn distances_prefer_cheaper_route() {
        let g = weighted();
        let d = g.dijkstra("a").unwrap();
        assert_eq!(d.len(), 4);
        assert_eq!(entry(&d, "a").distance, 0.0);
        assert_eq!(entry(&d, "a").previous, None);
        assert_eq!(entry(&d, "b").distance, 1.0);
        assert_eq!(entry(&d, "c").distance, 2.0);
        assert_eq!(entry(&d, "c").previous, Some(NodeId::from("b")));
        assert!(!entry(&d, "d").is_reachable());
        assert_eq!(entry(&d, "d").previous, None);
    }

    #[test]
    fn entries_follow_insertion_order() {
        let g = weighted();
        let ids: Vec<String> = g
            .dijkstra("c")
            .unwrap()
            .into_iter()
            .map(|e| e.node.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let g = weighted();
        assert_eq!(
            g.dijkstra("zzz"),
            Err(GraphError::NodeNotFound(NodeId::from("zzz")))
        );
    }

    #[test]
    fn unweighted_edges_count_as_one() {
        let mut g: LabeledGraph = LabeledGraph::new();
        for id in 0..3 {
            g.add_node(Node::new(id));
        }
        g.add_edge(Edge::new("01", 0, 1), false).unwrap();
        g.add_edge(Edge::new("12", 1, 2), false).unwrap();
        let d = g.dijkstra(0).unwrap();
        assert_eq!(entry(&d, "2").distance, 2.0);
    }

    #[test]
    fn self_loop_keeps_source_at_zero() {
        let mut g: LabeledGraph = LabeledGraph::new();
        g.add_node(Node::new("a"));
        g.add_edge(Edge::weighted("aa", "a", "a", 3.0), false).unwrap();
        let d = g.dijkstra("a").unwrap();
        assert_eq!(d[0].distance, 0.0);
    }

    #[test]
    fn stops_early_when_frontier_is_unreachable() {
        // s -> a, where a has no outgoing edges; b -> c is a separate island.
        // After settling s, the only node with an edge to an unvisited node
        // is b, which is unreachable, so the loop stops with a unvisited.
        // a's distance is already final.
        let mut g: LabeledGraph = LabeledGraph::new();
        for id in ["s", "a", "b", "c"] {
            g.add_node(Node::new(id));
        }
        g.add_edge(Edge::weighted("sa", "s", "a", 2.0), false).unwrap();
        g.add_edge(Edge::weighted("bc", "b", "c", 1.0), false).unwrap();

        let d = g.dijkstra("s").unwrap();
        assert_eq!(entry(&d, "a").distance, 2.0);
        assert_eq!(entry(&d, "a").previous, Some(NodeId::from("s")));
        assert!(!entry(&d, "b").is_reachable());
        assert!(!entry(&d, "c").is_reachable());
    }

    #[test]
    fn sink_chain_is_settled_through_fallback() {
        // s -> a -> b with b a sink: once a is settled no unvisited node has
        // an outgoing edge to an unvisited node, so b is picked from the
        // fallback pool.
        let mut g: LabeledGraph = LabeledGraph::new();
        for id in ["s", "a", "b"] {
            g.add_node(Node::new(id));
        }
        g.add_edge(Edge::new("sa", "s", "a"), false).unwrap();
        g.add_edge(Edge::new("ab", "a", "b"), false).unwrap();
        let d = g.dijkstra("s").unwrap();
        assert_eq!(entry(&d, "b").distance, 2.0);
    }

    #[test]
    fn shortest_path_walks_backpointers() {
        let g = weighted();
        let path: Vec<&str> = g
            .shortest_path("a", "c")
            .unwrap()
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn shortest_path_edge_cases() {
        let g = weighted();
        assert_eq!(g.shortest_path("a", "a").unwrap().len(), 1);
        assert!(g.shortest_path("a", "d").unwrap().is_empty());
        assert!(g.shortest_path("c", "a").unwrap().is_empty());
        assert!(matches!(
            g.shortest_path("a", "nope"),
            Err(GraphError::NodeNotFound(_))
        ));
    }
}
