//! Circuit graph representation and query surface.

use indexmap::IndexMap;

use crate::component::Component;
use crate::node::Node;

/// Analysis frequency included in every default parameter map, in hertz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 1e3;

/// One edge of the circuit multigraph: a component between two nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) a: String,
    pub(crate) b: String,
    pub(crate) component: Component,
}

impl Edge {
    /// The edge's endpoints, in the component's terminal order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }

    /// The component carried by this edge.
    pub fn component(&self) -> &Component {
        &self.component
    }
}

/// A small-signal circuit.
///
/// An undirected multigraph: nodes are opaque string identifiers, edges are
/// keyed by component name (unique within a circuit) and carry the
/// component. An edge's endpoints always equal its component's terminal
/// pair; control terminals of controlled sources may reference any node.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    pub(crate) nodes: IndexMap<String, Node>,
    pub(crate) edges: IndexMap<String, Edge>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component as an edge between `a` and `b`, creating the
    /// endpoint nodes as needed. A component reusing an existing name
    /// replaces the previous edge.
    pub fn add_edge(&mut self, a: impl Into<String>, b: impl Into<String>, component: Component) {
        let (a, b) = (a.into(), b.into());
        let key = component.name().to_string();
        if self.edges.contains_key(&key) {
            self.remove_edge(&key);
        }
        self.nodes
            .entry(a.clone())
            .or_default()
            .edges
            .insert(key.clone());
        self.nodes
            .entry(b.clone())
            .or_default()
            .edges
            .insert(key.clone());
        self.edges.insert(key, Edge { a, b, component });
    }

    /// Remove the edge keyed by `key`, detaching it from both endpoints.
    pub(crate) fn remove_edge(&mut self, key: &str) -> Option<Edge> {
        let edge = self.edges.shift_remove(key)?;
        if let Some(node) = self.nodes.get_mut(&edge.a) {
            node.edges.remove(key);
        }
        if let Some(node) = self.nodes.get_mut(&edge.b) {
            node.edges.remove(key);
        }
        Some(edge)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a node with this identifier exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all node identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Get a node's bookkeeping record.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get an edge by component name.
    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.get(name)
    }

    /// Iterate over `(neighbor, component)` pairs for the edges incident on
    /// `id`. A node unknown to the circuit yields nothing.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (&'a str, &'a Component)> {
        self.nodes.get(id).into_iter().flat_map(move |node| {
            node.edge_keys().filter_map(move |key| {
                let edge = self.edges.get(key)?;
                let other = if edge.a == id {
                    edge.b.as_str()
                } else {
                    edge.a.as_str()
                };
                Some((other, &edge.component))
            })
        })
    }

    /// Iterate over all `(source node, dest node, component)` edges.
    pub fn components(&self) -> impl Iterator<Item = (&str, &str, &Component)> {
        self.edges
            .values()
            .map(|edge| (edge.a.as_str(), edge.b.as_str(), &edge.component))
    }

    /// Default parameter mapping: every component with a numeric value, plus
    /// the fixed analysis frequency under `"f"`.
    pub fn parameters(&self) -> IndexMap<String, f64> {
        let mut params: IndexMap<String, f64> = self
            .edges
            .values()
            .filter_map(|edge| {
                edge.component
                    .numeric_value()
                    .map(|value| (edge.component.name().to_string(), value))
            })
            .collect();
        params.insert("f".to_string(), DEFAULT_FREQUENCY_HZ);
        params
    }

    /// Serialize the circuit back to netlist text, one entry per edge in
    /// iteration order. The order is not a stability guarantee.
    pub fn netlist(&self) -> String {
        self.edges
            .values()
            .map(|edge| edge.component.to_netlist_entry())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
