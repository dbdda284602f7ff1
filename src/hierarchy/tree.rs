//! Arena-backed band tree.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. A central
//! code index resolves the code-valued sibling links.

use std::collections::HashMap;

use crate::core::node::{HierarchyNode, NodeId};
use crate::core::types::NodeKind;

#[derive(Debug, Clone, Default)]
pub struct BandTree {
    nodes: Vec<HierarchyNode>,
    by_code: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
}

impl BandTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the top-level node for a chromosome if absent
    pub fn ensure_chromosome(&mut self, code: &str) -> NodeId {
        if let Some(&id) = self.by_code.get(code) {
            return id;
        }
        let node = HierarchyNode::new(code, NodeKind::Chromosome, None)
            .with_display(format!("Chromosome {code}"));
        let id = self.push(node);
        self.roots.push(id);
        id
    }

    pub fn ensure_arm(&mut self, chromosome: NodeId, code: &str) -> NodeId {
        self.ensure_child(chromosome, code, NodeKind::Arm)
    }

    pub fn ensure_region(&mut self, arm: NodeId, code: &str) -> NodeId {
        self.ensure_child(arm, code, NodeKind::Region)
    }

    pub fn ensure_band(&mut self, region: NodeId, code: &str) -> NodeId {
        self.ensure_child(region, code, NodeKind::Band)
    }

    /// Append a subband leaf under `band`. No existence check is made: a repeated
    /// code gets a second leaf and the code index moves to the newest one.
    pub fn add_subband_leaf(&mut self, band: NodeId, code: &str) -> NodeId {
        let id = self.push(HierarchyNode::new(code, NodeKind::Subband, Some(band)));
        self.nodes[band.0].children.push(id);
        id
    }

    /// Chromosome codes carry no `p`, `q` or `.` (see `is_placeable_chromosome`), so a
    /// code fixes its level: arm letter last, then one region digit, two band digits,
    /// or a dotted subband. An existing node under `code` is therefore already `kind`.
    fn ensure_child(&mut self, parent: NodeId, code: &str, kind: NodeKind) -> NodeId {
        if let Some(&id) = self.by_code.get(code) {
            debug_assert_eq!(self.nodes[id.0].kind(), kind, "code {code} reused across levels");
            return id;
        }
        let id = self.push(HierarchyNode::new(code, kind, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, node: HierarchyNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.by_code.insert(node.code.clone(), id);
        self.nodes.push(node);
        id
    }

    /// Get a node by id
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut HierarchyNode {
        &mut self.nodes[id.0]
    }

    /// Resolve a code to its node id
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<NodeId> {
        self.by_code.get(code).copied()
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&HierarchyNode> {
        self.lookup(code).map(|id| &self.nodes[id.0])
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut HierarchyNode> {
        self.lookup(code).map(|id| &mut self.nodes[id.0])
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Top-level chromosome nodes in their current emission order
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Replace the top-level order. Chromosomes not named in `codes` are detached from
    /// the top level and returned.
    pub fn reorder_roots(&mut self, codes: &[String]) -> Vec<String> {
        let ordered: Vec<NodeId> = codes
            .iter()
            .filter_map(|code| self.lookup(code))
            .filter(|id| self.nodes[id.0].parent.is_none())
            .collect();

        let dropped = self
            .roots
            .iter()
            .filter(|id| !ordered.contains(id))
            .map(|id| self.nodes[id.0].code.clone())
            .collect();

        self.roots = ordered;
        dropped
    }

    /// Children of a node in insertion order
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Codes from the chromosome down to `code`, inclusive
    #[must_use]
    pub fn ancestors(&self, code: &str) -> Vec<String> {
        let mut lineage = Vec::new();
        let mut current = self.lookup(code);
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            lineage.push(node.code.clone());
            current = node.parent;
        }
        lineage.reverse();
        lineage
    }

    /// Total number of nodes, including duplicate subband leaves
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_1p36() -> (BandTree, NodeId) {
        let mut tree = BandTree::new();
        let chrom = tree.ensure_chromosome("1");
        let arm = tree.ensure_arm(chrom, "1p");
        let region = tree.ensure_region(arm, "1p3");
        let band = tree.ensure_band(region, "1p36");
        (tree, band)
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let (mut tree, band) = build_1p36();
        let before = tree.len();

        let chrom = tree.ensure_chromosome("1");
        let arm = tree.ensure_arm(chrom, "1p");
        let region = tree.ensure_region(arm, "1p3");
        let again = tree.ensure_band(region, "1p36");

        assert_eq!(band, again);
        assert_eq!(tree.len(), before);
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.children(chrom).len(), 1);
    }

    #[test]
    fn test_kinds_and_displays() {
        let (tree, _) = build_1p36();
        assert_eq!(tree.get("1").unwrap().kind(), NodeKind::Chromosome);
        assert_eq!(tree.get("1").unwrap().display, "Chromosome 1");
        assert_eq!(tree.get("1p").unwrap().kind(), NodeKind::Arm);
        assert_eq!(tree.get("1p3").unwrap().kind(), NodeKind::Region);
        assert_eq!(tree.get("1p36").unwrap().kind(), NodeKind::Band);
        assert_eq!(tree.get("1p36").unwrap().display, "1p36");
    }

    #[test]
    fn test_subband_leaves_always_append() {
        let (mut tree, band) = build_1p36();
        let first = tree.add_subband_leaf(band, "1p36.33");
        let second = tree.add_subband_leaf(band, "1p36.33");

        assert_ne!(first, second);
        assert_eq!(tree.children(band), &[first, second]);
        assert_eq!(tree.lookup("1p36.33"), Some(second));
        assert_eq!(tree.node(first).kind(), NodeKind::Subband);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = BandTree::new();
        let chrom = tree.ensure_chromosome("2");
        let q = tree.ensure_arm(chrom, "2q");
        let p = tree.ensure_arm(chrom, "2p");
        assert_eq!(tree.children(chrom), &[q, p]);
    }

    #[test]
    fn test_reorder_roots_reports_dropped() {
        let mut tree = BandTree::new();
        tree.ensure_chromosome("X");
        tree.ensure_chromosome("M");
        tree.ensure_chromosome("2");

        let dropped = tree.reorder_roots(&["2".to_string(), "X".to_string()]);
        assert_eq!(dropped, vec!["M".to_string()]);
        let codes: Vec<&str> = tree
            .roots()
            .iter()
            .map(|&id| tree.node(id).code.as_str())
            .collect();
        assert_eq!(codes, vec!["2", "X"]);
    }

    #[test]
    fn test_ancestors() {
        let (mut tree, band) = build_1p36();
        tree.add_subband_leaf(band, "1p36.33");
        assert_eq!(
            tree.ancestors("1p36.33"),
            vec!["1", "1p", "1p3", "1p36", "1p36.33"]
        );
        assert!(tree.ancestors("2q").is_empty());
    }
}
