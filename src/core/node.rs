use serde::Serialize;

use crate::core::types::NodeKind;

/// Index of a node in the hierarchy arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Previous/next sibling references, held as codes rather than owning pointers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiblingLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl SiblingLinks {
    pub fn clear(&mut self) {
        self.previous = None;
        self.next = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// A single node of the band hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode {
    /// Concatenation of ancestor codes with the local segment (e.g. "1p36.33")
    pub code: String,

    /// Human-readable label
    pub display: String,

    /// Structural level; fixed at creation
    kind: NodeKind,

    /// Containing node, `None` for chromosomes
    #[serde(skip)]
    pub parent: Option<NodeId>,

    /// Children in first-seen insertion order
    #[serde(skip)]
    pub children: Vec<NodeId>,

    pub links: SiblingLinks,
}

impl HierarchyNode {
    pub fn new(code: impl Into<String>, kind: NodeKind, parent: Option<NodeId>) -> Self {
        let code = code.into();
        Self {
            display: code.clone(),
            code,
            kind,
            parent,
            children: Vec::new(),
            links: SiblingLinks::default(),
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.links.previous.as_deref()
    }

    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.links.next.as_deref()
    }
}
