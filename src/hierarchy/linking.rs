//! Previous/next sibling linking and karyotype ordering.

use tracing::debug;

use crate::hierarchy::order::OrderTracker;
use crate::hierarchy::tree::BandTree;

/// Human karyotype order for top-level chromosomes
pub const KARYOTYPE_ORDER: [&str; 24] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y",
];

/// Thread previous/next links through an ordered code sequence.
///
/// Existing links on every member are cleared first, so re-running on the same sequence
/// yields the same assignment. Codes without a node are skipped.
pub fn link_seq(codes: &[String], tree: &mut BandTree) {
    for (i, code) in codes.iter().enumerate() {
        let Some(node) = tree.get_mut(code) else {
            debug!(code = %code, "no node for code in order list");
            continue;
        };

        node.links.clear();
        if i > 0 {
            node.links.previous = Some(codes[i - 1].clone());
        }
        if i + 1 < codes.len() {
            node.links.next = Some(codes[i + 1].clone());
        }
    }
}

/// Karyotype order restricted to chromosomes present in the tree
#[must_use]
pub fn karyotype_order_present(tree: &BandTree) -> Vec<String> {
    KARYOTYPE_ORDER
        .iter()
        .filter(|code| {
            tree.get(code)
                .is_some_and(|node| node.parent.is_none())
        })
        .map(|code| (*code).to_string())
        .collect()
}

/// Link every level: chromosomes in karyotype order, then each tracked scope.
/// Returns the chromosome order used.
pub fn link_all(tree: &mut BandTree, tracker: &OrderTracker) -> Vec<String> {
    let chromosome_order = karyotype_order_present(tree);
    link_seq(&chromosome_order, tree);

    for (_, order) in tracker.iter() {
        link_seq(order, tree);
    }

    chromosome_order
}
