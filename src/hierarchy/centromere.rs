//! Optional p/q cross-linking across the centromere.
//!
//! For each chromosome the last node of the p arm and the first node of the q arm at
//! a chosen level are joined with `next`/`previous`. A slot that intra-arm linking has
//! already filled is never overwritten.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::types::{Arm, CrossLinkLevel};
use crate::hierarchy::order::{OrderTracker, ScopeKey};
use crate::hierarchy::tree::BandTree;

/// A cross-link that changed at least one side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossLink {
    pub chromosome: String,
    pub level: CrossLinkLevel,
    /// Last p-arm node
    pub from: String,
    /// First q-arm node
    pub to: String,
    /// `from.next` was set by this pass
    pub next_added: bool,
    /// `to.previous` was set by this pass
    pub previous_added: bool,
}

/// Region codes of an arm in tracked order
fn region_sequence(tracker: &OrderTracker, chromosome: &str, arm: Arm) -> Vec<String> {
    tracker
        .sequence(&ScopeKey::regions(chromosome, arm))
        .to_vec()
}

/// Band codes of an arm, region by region
fn band_sequence(tracker: &OrderTracker, chromosome: &str, arm: Arm) -> Vec<String> {
    let mut bands = Vec::new();
    for region_code in tracker.sequence(&ScopeKey::regions(chromosome, arm)) {
        let Some(region) = region_code.chars().last() else {
            continue;
        };
        bands.extend_from_slice(tracker.sequence(&ScopeKey::bands(chromosome, arm, region)));
    }
    bands
}

/// Subband codes of an arm, band by band; bands without subbands contribute nothing
fn subband_sequence(tracker: &OrderTracker, chromosome: &str, arm: Arm) -> Vec<String> {
    let mut nodes = Vec::new();
    for band_code in band_sequence(tracker, chromosome, arm) {
        // Band codes end in the ASCII region and band digits
        let band_digits = &band_code[band_code.len().saturating_sub(2)..];
        nodes.extend_from_slice(tracker.sequence(&ScopeKey::subbands(chromosome, arm, band_digits)));
    }
    nodes
}

/// Nodes of one arm at a single level. With `band_fallback`, an arm that has no
/// subbands at all is represented at subband level by its bands.
fn arm_sequence(
    tracker: &OrderTracker,
    chromosome: &str,
    arm: Arm,
    level: CrossLinkLevel,
    band_fallback: bool,
) -> Vec<String> {
    match level {
        CrossLinkLevel::Region => region_sequence(tracker, chromosome, arm),
        CrossLinkLevel::Band => band_sequence(tracker, chromosome, arm),
        CrossLinkLevel::Subband | CrossLinkLevel::All => {
            let subbands = subband_sequence(tracker, chromosome, arm);
            if subbands.is_empty() && band_fallback {
                band_sequence(tracker, chromosome, arm)
            } else {
                subbands
            }
        }
    }
}

fn endpoints(
    tree: &BandTree,
    tracker: &OrderTracker,
    chromosome: &str,
    level: CrossLinkLevel,
    band_fallback: bool,
) -> Option<(String, String)> {
    if !tree.contains(&format!("{chromosome}p")) || !tree.contains(&format!("{chromosome}q")) {
        return None;
    }

    let last_p = arm_sequence(tracker, chromosome, Arm::P, level, band_fallback).pop()?;
    let first_q = arm_sequence(tracker, chromosome, Arm::Q, level, band_fallback)
        .into_iter()
        .next()?;
    Some((last_p, first_q))
}

/// Find `(last of p, first of q)` for a chromosome at a single level.
/// Returns `None` if either arm is missing or has nothing at that level.
///
/// At subband level an arm without any subbands falls back to its bands, so a
/// subbanded p arm still reaches an unsubdivided q arm.
#[must_use]
pub fn find_endpoints(
    tree: &BandTree,
    tracker: &OrderTracker,
    chromosome: &str,
    level: CrossLinkLevel,
) -> Option<(String, String)> {
    endpoints(tree, tracker, chromosome, level, true)
}

/// Join p and q arms across the centromere for each chromosome at the requested level(s).
/// Only empty link slots are filled. Returns the cross-links that changed something.
pub fn cross_link_centromere(
    tree: &mut BandTree,
    tracker: &OrderTracker,
    chromosomes: &[String],
    level: CrossLinkLevel,
) -> Vec<CrossLink> {
    let mut added = Vec::new();
    // Under `All` the band pass joins band nodes; the subband pass only joins subbands
    let band_fallback = level != CrossLinkLevel::All;

    for chromosome in chromosomes {
        for single in level.levels() {
            let Some((from, to)) = endpoints(tree, tracker, chromosome, single, band_fallback)
            else {
                debug!(chromosome = %chromosome, level = %single, "no centromere endpoints");
                continue;
            };
            if !tree.contains(&from) || !tree.contains(&to) {
                continue;
            }

            let next_added = tree.get_mut(&from).is_some_and(|node| {
                if node.links.next.is_some() {
                    return false;
                }
                node.links.next = Some(to.clone());
                true
            });
            let previous_added = tree.get_mut(&to).is_some_and(|node| {
                if node.links.previous.is_some() {
                    return false;
                }
                node.links.previous = Some(from.clone());
                true
            });

            if next_added || previous_added {
                info!(
                    chromosome = %chromosome,
                    level = %single,
                    "cross-linked {from} <-> {to}"
                );
                added.push(CrossLink {
                    chromosome: chromosome.clone(),
                    level: single,
                    from,
                    to,
                    next_added,
                    previous_added,
                });
            }
        }
    }

    added
}
