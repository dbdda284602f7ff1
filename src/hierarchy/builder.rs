//! Three-stage pipeline turning cytoband rows into a linked band hierarchy.
//!
//! 1. [`ingest`]: one scan of the rows, creating nodes and recording first-seen order
//! 2. [`link_all`]: previous/next at every level, karyotype order at the top
//! 3. [`cross_link_centromere`]: optional, fills empty p/q boundary slots
//!
//! Data-quality problems never abort a build; they are counted in [`BuildSummary`].
//! The only failure is a repeated subband under [`DuplicateSubbandPolicy::Reject`].

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::node::HierarchyNode;
use crate::core::types::{CrossLinkLevel, DuplicateSubbandPolicy};
use crate::hierarchy::centromere::{cross_link_centromere, CrossLink};
use crate::hierarchy::linking::link_all;
use crate::hierarchy::order::{OrderTracker, ScopeKey};
use crate::hierarchy::tree::BandTree;
use crate::parsing::band::BandName;
use crate::parsing::cytoband::{CytobandRow, CytobandTable};
use crate::utils::validation::{
    is_mitochondrial, is_non_primary_contig, is_placeable_chromosome, normalize_chromosome,
};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Duplicate subband '{code}' on line {line}")]
    DuplicateSubband { code: String, line: usize },
}

/// Options controlling a hierarchy build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Keep mitochondrial rows (off by default; M has no ISCN bands)
    pub include_mitochondrial: bool,
    /// Join p and q arms across the centromere
    pub link_across_centromere: bool,
    /// Level(s) used when cross-linking
    pub centromere_level: CrossLinkLevel,
    /// Handling of subband codes seen on more than one row
    pub duplicate_subbands: DuplicateSubbandPolicy,
}

impl BuildOptions {
    #[must_use]
    pub fn with_mitochondrial(mut self, include: bool) -> Self {
        self.include_mitochondrial = include;
        self
    }

    /// Enable centromere cross-linking at the given level
    #[must_use]
    pub fn with_centromere_links(mut self, level: CrossLinkLevel) -> Self {
        self.link_across_centromere = true;
        self.centromere_level = level;
        self
    }

    #[must_use]
    pub fn with_duplicate_subbands(mut self, policy: DuplicateSubbandPolicy) -> Self {
        self.duplicate_subbands = policy;
        self
    }
}

/// Counters and outcomes of a build, for operator review
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildSummary {
    pub kept_banded_rows: usize,
    /// Comment/header lines and rows with too few fields
    pub skipped_malformed_rows: usize,
    /// Rows whose band name or contig cannot be placed
    pub skipped_unplaceable_rows: usize,
    pub excluded_mitochondrial_rows: usize,
    /// Repeated subband rows dropped under the `skip` policy
    pub duplicate_subband_rows: usize,
    /// Repeated subband rows kept as extra leaves under `preserve`; included in
    /// `kept_banded_rows`
    pub preserved_duplicate_rows: usize,
    /// Top-level chromosomes, in karyotype order
    pub chromosomes_included: Vec<String>,
    /// Chromosomes built but outside the karyotype, so not emitted
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chromosomes_dropped: Vec<String>,
    pub centromere_cross_linking: bool,
    pub centromere_levels: CrossLinkLevel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cross_links: Vec<CrossLink>,
}

impl BuildSummary {
    /// All rows not placed in the tree
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_malformed_rows
            + self.skipped_unplaceable_rows
            + self.excluded_mitochondrial_rows
            + self.duplicate_subband_rows
    }

    /// Chromosomes that received at least one cross-link, in karyotype order
    #[must_use]
    pub fn cross_linked_chromosomes(&self) -> Vec<&str> {
        let mut chromosomes: Vec<&str> = Vec::new();
        for link in &self.cross_links {
            if !chromosomes.contains(&link.chromosome.as_str()) {
                chromosomes.push(&link.chromosome);
            }
        }
        chromosomes
    }
}

/// Output of the ingestion stage
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub tree: BandTree,
    pub tracker: OrderTracker,
    pub summary: BuildSummary,
}

/// Why a row did not make it into the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowOutcome {
    Kept,
    Unplaceable,
    Mitochondrial,
    DuplicateSubband,
}

/// Stage 1: create nodes and record first-seen order for every row
///
/// # Errors
///
/// Returns `BuildError::DuplicateSubband` if a subband repeats and the policy is `Reject`.
pub fn ingest(table: &CytobandTable, options: &BuildOptions) -> Result<Ingested, BuildError> {
    let mut ingested = Ingested::default();
    ingested.summary.skipped_malformed_rows = table.malformed;

    for row in &table.rows {
        match ingest_row(&mut ingested, row, options)? {
            RowOutcome::Kept => ingested.summary.kept_banded_rows += 1,
            RowOutcome::Unplaceable => ingested.summary.skipped_unplaceable_rows += 1,
            RowOutcome::Mitochondrial => ingested.summary.excluded_mitochondrial_rows += 1,
            RowOutcome::DuplicateSubband => ingested.summary.duplicate_subband_rows += 1,
        }
    }

    debug!(
        nodes = ingested.tree.len(),
        scopes = ingested.tracker.len(),
        "ingested cytoband rows"
    );
    Ok(ingested)
}

fn ingest_row(
    ingested: &mut Ingested,
    row: &CytobandRow,
    options: &BuildOptions,
) -> Result<RowOutcome, BuildError> {
    if is_non_primary_contig(&row.chromosome) {
        debug!(line = row.line, chrom = %row.chromosome, "skipping non-primary contig");
        return Ok(RowOutcome::Unplaceable);
    }

    let c = normalize_chromosome(&row.chromosome);
    if !is_placeable_chromosome(c) {
        debug!(line = row.line, chrom = %row.chromosome, "chromosome label cannot head band codes");
        return Ok(RowOutcome::Unplaceable);
    }
    if is_mitochondrial(c) && !options.include_mitochondrial {
        debug!(line = row.line, "skipping mitochondrial row");
        return Ok(RowOutcome::Mitochondrial);
    }

    let Some(band) = BandName::parse(&row.name) else {
        debug!(line = row.line, name = %row.name, "band name cannot be placed");
        return Ok(RowOutcome::Unplaceable);
    };

    let subband_code = band.subband_code(c);
    let mut duplicate = false;
    if let Some(code) = &subband_code {
        if ingested.tree.contains(code) {
            match options.duplicate_subbands {
                DuplicateSubbandPolicy::Skip => {
                    warn!(line = row.line, "duplicate subband {code}; row skipped");
                    return Ok(RowOutcome::DuplicateSubband);
                }
                DuplicateSubbandPolicy::Preserve => {
                    warn!(line = row.line, "duplicate subband {code}; second leaf kept");
                    duplicate = true;
                }
                DuplicateSubbandPolicy::Reject => {
                    return Err(BuildError::DuplicateSubband {
                        code: code.clone(),
                        line: row.line,
                    });
                }
            }
        }
    }

    let tree = &mut ingested.tree;
    let chromosome = tree.ensure_chromosome(c);
    let arm = tree.ensure_arm(chromosome, &band.arm_code(c));
    let region = tree.ensure_region(arm, &band.region_code(c));
    let band_node = tree.ensure_band(region, &band.band_code(c));
    if let Some(code) = &subband_code {
        tree.add_subband_leaf(band_node, code);
    }

    let tracker = &mut ingested.tracker;
    tracker.record(ScopeKey::arms(c), &band.arm_code(c));
    tracker.record(ScopeKey::regions(c, band.arm), &band.region_code(c));
    tracker.record(ScopeKey::bands(c, band.arm, band.region), &band.band_code(c));
    if let Some(code) = &subband_code {
        tracker.record(ScopeKey::subbands(c, band.arm, band.band_digits()), code);
    }

    if duplicate {
        ingested.summary.preserved_duplicate_rows += 1;
    }
    Ok(RowOutcome::Kept)
}

/// A fully linked band hierarchy and the record of how it was built
#[derive(Debug, Clone)]
pub struct BandHierarchy {
    tree: BandTree,
    tracker: OrderTracker,
    summary: BuildSummary,
}

impl BandHierarchy {
    /// Run all stages over a parsed table
    ///
    /// # Errors
    ///
    /// Returns `BuildError::DuplicateSubband` if a subband repeats and the policy is `Reject`.
    pub fn build(table: &CytobandTable, options: &BuildOptions) -> Result<Self, BuildError> {
        let Ingested {
            mut tree,
            tracker,
            mut summary,
        } = ingest(table, options)?;

        let chromosome_order = link_all(&mut tree, &tracker);
        let dropped = tree.reorder_roots(&chromosome_order);
        for code in &dropped {
            warn!("chromosome {code} is outside the karyotype and is not emitted");
        }

        summary.centromere_cross_linking = options.link_across_centromere;
        summary.centromere_levels = options.centromere_level;
        if options.link_across_centromere {
            summary.cross_links = cross_link_centromere(
                &mut tree,
                &tracker,
                &chromosome_order,
                options.centromere_level,
            );
        }
        summary.chromosomes_included = chromosome_order;
        summary.chromosomes_dropped = dropped;

        info!(
            kept = summary.kept_banded_rows,
            skipped = summary.skipped_rows(),
            chromosomes = summary.chromosomes_included.len(),
            cross_links = summary.cross_links.len(),
            "built band hierarchy"
        );

        Ok(Self {
            tree,
            tracker,
            summary,
        })
    }

    #[must_use]
    pub fn tree(&self) -> &BandTree {
        &self.tree
    }

    #[must_use]
    pub fn tracker(&self) -> &OrderTracker {
        &self.tracker
    }

    #[must_use]
    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&HierarchyNode> {
        self.tree.get(code)
    }

    /// Codes from the chromosome down to `code`
    #[must_use]
    pub fn ancestors(&self, code: &str) -> Vec<String> {
        self.tree.ancestors(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NodeKind;
    use crate::parsing::cytoband::parse_cytoband_text;

    const SCENARIO: &str = "chr1\t0\t100\tp36.33\tgneg
chr1\t100\t200\tp36.32\tgneg
chr1\t200\t300\tq44\tgneg
chrM\t0\t50\tp1\tgneg
";

    fn build(text: &str, options: &BuildOptions) -> BandHierarchy {
        let table = parse_cytoband_text(text).unwrap();
        BandHierarchy::build(&table, options).unwrap()
    }

    fn child_codes(hierarchy: &BandHierarchy, code: &str) -> Vec<String> {
        let tree = hierarchy.tree();
        let id = tree.lookup(code).unwrap();
        tree.children(id)
            .iter()
            .map(|&child| tree.node(child).code.clone())
            .collect()
    }

    #[test]
    fn test_scenario_structure_and_links() {
        let hierarchy = build(SCENARIO, &BuildOptions::default());

        assert_eq!(child_codes(&hierarchy, "1"), vec!["1p", "1q"]);
        assert_eq!(child_codes(&hierarchy, "1p"), vec!["1p3"]);
        assert_eq!(child_codes(&hierarchy, "1p3"), vec!["1p36"]);
        assert_eq!(child_codes(&hierarchy, "1p36"), vec!["1p36.33", "1p36.32"]);
        assert_eq!(child_codes(&hierarchy, "1q"), vec!["1q4"]);
        assert_eq!(child_codes(&hierarchy, "1q4"), vec!["1q44"]);

        let first = hierarchy.get("1p36.33").unwrap();
        assert_eq!(first.kind(), NodeKind::Subband);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some("1p36.32"));

        let second = hierarchy.get("1p36.32").unwrap();
        assert_eq!(second.previous(), Some("1p36.33"));
        assert_eq!(second.next(), None);

        assert!(hierarchy.get("1q44").unwrap().links.is_empty());
        assert!(hierarchy.get("M").is_none());

        let summary = hierarchy.summary();
        assert_eq!(summary.kept_banded_rows, 3);
        assert_eq!(summary.excluded_mitochondrial_rows, 1);
        assert_eq!(summary.chromosomes_included, vec!["1"]);
        assert!(summary.cross_links.is_empty());
    }

    #[test]
    fn test_scenario_with_subband_cross_link() {
        let options = BuildOptions::default().with_centromere_links(CrossLinkLevel::Subband);
        let hierarchy = build(SCENARIO, &options);

        assert_eq!(hierarchy.get("1p36.32").unwrap().next(), Some("1q44"));
        assert_eq!(hierarchy.get("1q44").unwrap().previous(), Some("1p36.32"));
        assert_eq!(hierarchy.get("1p36.33").unwrap().next(), Some("1p36.32"));
        assert_eq!(hierarchy.summary().cross_linked_chromosomes(), vec!["1"]);
        assert!(hierarchy.summary().centromere_cross_linking);
    }

    #[test]
    fn test_mitochondrial_inclusion() {
        let text = "chrM\t0\t50\tp11\tgneg\nchr2\t0\t100\tp25.3\tgneg\n";
        let hierarchy = build(text, &BuildOptions::default().with_mitochondrial(true));

        // M is built but is not part of the karyotype, so it is dropped from the top level
        assert!(hierarchy.get("Mp11").is_some());
        assert_eq!(hierarchy.summary().chromosomes_dropped, vec!["M"]);
        assert_eq!(hierarchy.summary().chromosomes_included, vec!["2"]);
        assert_eq!(hierarchy.summary().excluded_mitochondrial_rows, 0);
    }

    #[test]
    fn test_unplaceable_rows_are_counted() {
        let text = "chr1\t0\t100\tp36.33\tgneg
chr1\t100\t200\tacen\tacen
chr1_KI270706v1_random\t0\t175055\t\tgneg
chr6_GL000250v2_alt\t0\t100\tp21.33\tgneg
chr1\t200\t300
";
        let hierarchy = build(text, &BuildOptions::default());
        let summary = hierarchy.summary();
        assert_eq!(summary.kept_banded_rows, 1);
        assert_eq!(summary.skipped_unplaceable_rows, 3);
        assert_eq!(summary.skipped_malformed_rows, 1);
        assert_eq!(summary.skipped_rows(), 4);
        assert!(hierarchy.get("6_GL000250v2_alt").is_none());
    }

    #[test]
    fn test_chromosome_labels_with_arm_letters_are_unplaceable() {
        // "1p" as a chromosome would share its code with the p arm of chromosome 1
        let text = "chr1\t0\t100\tp36.33\tgneg\nchr1p\t0\t100\tq11\tgneg\n";
        let hierarchy = build(text, &BuildOptions::default());
        let summary = hierarchy.summary();
        assert_eq!(summary.kept_banded_rows, 1);
        assert_eq!(summary.skipped_unplaceable_rows, 1);
        assert_eq!(hierarchy.get("1p").unwrap().kind(), NodeKind::Arm);
        assert!(hierarchy.get("1pq11").is_none());
    }

    #[test]
    fn test_top_level_follows_karyotype_not_input() {
        let text = "chrY\t0\t1\tp11.2\tgneg
chrX\t0\t1\tp22.33\tgneg
chr10\t0\t1\tp15.3\tgneg
chr2\t0\t1\tp25.3\tgneg
";
        let hierarchy = build(text, &BuildOptions::default());
        let tree = hierarchy.tree();
        let roots: Vec<&str> = tree
            .roots()
            .iter()
            .map(|&id| tree.node(id).code.as_str())
            .collect();
        assert_eq!(roots, vec!["2", "10", "X", "Y"]);
        assert_eq!(hierarchy.get("2").unwrap().next(), Some("10"));
        assert_eq!(hierarchy.get("Y").unwrap().previous(), Some("X"));
        assert_eq!(hierarchy.get("Y").unwrap().next(), None);
    }

    #[test]
    fn test_duplicate_subband_skip() {
        let text = "chr1\t0\t1\tp36.33\tgneg\nchr1\t0\t1\tp36.33\tgneg\nchr1\t1\t2\tp36.32\tgneg\n";
        let hierarchy = build(text, &BuildOptions::default());
        assert_eq!(hierarchy.summary().duplicate_subband_rows, 1);
        assert_eq!(hierarchy.summary().kept_banded_rows, 2);
        assert_eq!(hierarchy.summary().skipped_rows(), 1);
        let band = hierarchy.tree().lookup("1p36").unwrap();
        assert_eq!(hierarchy.tree().children(band).len(), 2);
    }

    #[test]
    fn test_duplicate_subband_preserve() {
        let text = "chr1\t0\t1\tp36.33\tgneg\nchr1\t0\t1\tp36.33\tgneg\nchr1\t1\t2\tp36.32\tgneg\n";
        let options = BuildOptions::default().with_duplicate_subbands(DuplicateSubbandPolicy::Preserve);
        let hierarchy = build(text, &options);

        let tree = hierarchy.tree();
        let band = tree.lookup("1p36").unwrap();
        let children = tree.children(band);
        assert_eq!(children.len(), 3);

        // The code index resolves to the newest leaf, which carries the links
        let older = tree.node(children[0]);
        let newer = tree.node(children[1]);
        assert_eq!(older.code, newer.code);
        assert!(older.links.is_empty());
        assert_eq!(newer.next(), Some("1p36.32"));
        let summary = hierarchy.summary();
        assert_eq!(summary.preserved_duplicate_rows, 1);
        assert_eq!(summary.duplicate_subband_rows, 0);
        assert_eq!(summary.kept_banded_rows, 3);
        assert_eq!(summary.kept_banded_rows + summary.skipped_rows(), 3);
    }

    #[test]
    fn test_duplicate_subband_reject() {
        let text = "chr1\t0\t1\tp36.33\tgneg\nchr1\t0\t1\tp36.33\tgneg\n";
        let table = parse_cytoband_text(text).unwrap();
        let options = BuildOptions::default().with_duplicate_subbands(DuplicateSubbandPolicy::Reject);
        let err = BandHierarchy::build(&table, &options).unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateSubband { ref code, line: 2 } if code == "1p36.33"
        ));
    }

    #[test]
    fn test_ancestors() {
        let hierarchy = build(SCENARIO, &BuildOptions::default());
        assert_eq!(
            hierarchy.ancestors("1p36.32"),
            vec!["1", "1p", "1p3", "1p36", "1p36.32"]
        );
    }
}
