//! petgraph-based view of a Flow's screen navigation graph.
//!
//! Built best-effort from a document: only string screen ids and routes whose
//! both ends are declared become nodes and edges. Run the validator first if
//! you need to know what was left out.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use serde_json::Value;

pub struct RoutingGraph {
    /// Edge weight is the destination's position in the source's route list.
    pub graph: DiGraph<String, usize>,
    pub node_indices: HashMap<String, NodeIndex>,
    /// First declared screen, where navigation starts.
    pub entry: Option<NodeIndex>,
}

impl RoutingGraph {
    pub fn build(flow: &Value) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut entry = None;

        let screens = flow.get("screens").and_then(Value::as_array);
        for id in screens.into_iter().flatten().filter_map(|s| s.get("id")?.as_str()) {
            if node_indices.contains_key(id) {
                continue;
            }
            let idx = graph.add_node(id.to_string());
            node_indices.insert(id.to_string(), idx);
            entry.get_or_insert(idx);
        }

        let routes = flow.get("routing_model").and_then(Value::as_object);
        for (source, destinations) in routes.into_iter().flatten() {
            let Some(&s) = node_indices.get(source) else {
                continue;
            };
            let Some(destinations) = destinations.as_array() else {
                continue;
            };
            for (position, dest) in destinations.iter().enumerate() {
                let Some(&t) = dest.as_str().and_then(|d| node_indices.get(d)) else {
                    continue;
                };
                graph.update_edge(s, t, position);
            }
        }

        RoutingGraph {
            graph,
            node_indices,
            entry,
        }
    }

    pub fn screen_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn successors(&self, screen_id: &str) -> Vec<&str> {
        self.neighbors(screen_id, petgraph::Direction::Outgoing)
    }

    pub fn predecessors(&self, screen_id: &str) -> Vec<&str> {
        self.neighbors(screen_id, petgraph::Direction::Incoming)
    }

    pub fn outgoing_count(&self, screen_id: &str) -> usize {
        self.successors(screen_id).len()
    }

    pub fn incoming_count(&self, screen_id: &str) -> usize {
        self.predecessors(screen_id).len()
    }

    /// Screens reachable from `screen_id` (itself included), in BFS order.
    pub fn reachable_from(&self, screen_id: &str) -> Vec<&str> {
        let Some(&start) = self.node_indices.get(screen_id) else {
            return vec![];
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut reached = Vec::new();
        while let Some(nx) = bfs.next(&self.graph) {
            reached.push(self.graph[nx].as_str());
        }
        reached
    }

    /// Declared screens with no path from the entry screen, in declaration order.
    pub fn unreachable_from_entry(&self) -> Vec<&str> {
        let Some(entry) = self.entry else {
            return vec![];
        };
        let reached = self.reachable_from(&self.graph[entry]);
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .filter(|id| !reached.contains(id))
            .collect()
    }

    /// Graphviz rendering, one node per screen.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }

    fn neighbors(&self, screen_id: &str, direction: petgraph::Direction) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(screen_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].as_str())
            .collect()
    }
}
