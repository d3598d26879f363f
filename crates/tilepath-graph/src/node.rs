use std::borrow::Borrow;
use std::fmt;

/// Identity of a graph node.
///
/// Ids are kept as strings; numeric ids are stringified on conversion, so
/// `NodeId::from(7)` and `NodeId::from("7")` name the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for NodeId {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

macro_rules! node_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NodeId {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

node_id_from_int!(i32, i64, u32, u64, usize);

/// A graph vertex with an optional opaque payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<V = ()> {
    pub id: NodeId,
    pub value: Option<V>,
}

impl<V> Node<V> {
    /// A node without payload.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            value: None,
        }
    }

    /// A node carrying `value`.
    pub fn with_value(id: impl Into<NodeId>, value: V) -> Self {
        Self {
            id: id.into(),
            value: Some(value),
        }
    }
}

/// A named, directed edge. `weight: None` marks an unweighted edge, which
/// Dijkstra treats as weight 1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub name: String,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Option<f64>,
}

impl Edge {
    /// An unweighted edge.
    pub fn new(name: impl Into<String>, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            to: to.into(),
            weight: None,
        }
    }

    /// A weighted edge.
    pub fn weighted(
        name: impl Into<String>,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: f64,
    ) -> Self {
        Self {
            weight: Some(weight),
            ..Self::new(name, from, to)
        }
    }

    /// The reverse edge, named `"<name>_reverse"`, with the same weight.
    pub fn reversed(&self) -> Self {
        Self {
            name: format!("{}_reverse", self.name),
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }

    /// Weight used by distance computations.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}
