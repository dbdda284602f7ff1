//! Centralized validation and helper functions for chromosome labels and input lines.

/// Line prefixes that mark comments or UCSC header lines
pub const COMMENT_PREFIXES: [&str; 3] = ["#", "track", "browser"];

/// Substrings identifying alternate, fix-patch, unlocalized or unplaced contigs
const NON_PRIMARY_MARKERS: [&str; 4] = ["alt", "fix", "Un_", "_random"];

/// Check whether a line is a comment or header line.
///
/// # Examples
///
/// ```
/// use cytoband_hierarchy::utils::validation::is_comment_line;
///
/// assert!(is_comment_line("#chrom\tchromStart"));
/// assert!(is_comment_line("track name=cytoBand"));
/// assert!(!is_comment_line("chr1\t0\t2300000\tp36.33\tgneg"));
/// ```
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    COMMENT_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Strip a UCSC `chr` prefix from a chromosome label ("chr1" -> "1")
#[must_use]
pub fn normalize_chromosome(label: &str) -> &str {
    label.strip_prefix("chr").unwrap_or(label)
}

/// Check if a normalized chromosome code is mitochondrial
#[must_use]
pub fn is_mitochondrial(code: &str) -> bool {
    matches!(code, "M" | "MT")
}

/// Check if a chromosome label names an alternate, patch, or unplaced contig
#[must_use]
pub fn is_non_primary_contig(label: &str) -> bool {
    NON_PRIMARY_MARKERS
        .iter()
        .any(|marker| label.contains(marker))
}

/// Check that a normalized chromosome code can head band codes.
///
/// The code must be non-empty and free of `p`, `q` and `.`, so the first arm letter
/// in any band code marks where the chromosome ends and the level is readable from
/// what follows it.
#[must_use]
pub fn is_placeable_chromosome(code: &str) -> bool {
    !code.is_empty() && !code.contains(['p', 'q', '.'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_chromosome() {
        assert_eq!(normalize_chromosome("chr1"), "1");
        assert_eq!(normalize_chromosome("chrX"), "X");
        assert_eq!(normalize_chromosome("7"), "7");
        assert_eq!(normalize_chromosome("chrM"), "M");
    }

    #[test]
    fn test_is_mitochondrial() {
        assert!(is_mitochondrial("M"));
        assert!(is_mitochondrial("MT"));
        assert!(!is_mitochondrial("1"));
        assert!(!is_mitochondrial("chrM"));
    }

    #[test]
    fn test_is_non_primary_contig() {
        assert!(is_non_primary_contig("chr1_KI270706v1_random"));
        assert!(is_non_primary_contig("chrUn_KI270302v1"));
        assert!(is_non_primary_contig("chr6_GL000250v2_alt"));
        assert!(is_non_primary_contig("chr1_KN196472v1_fix"));
        assert!(!is_non_primary_contig("chr1"));
        assert!(!is_non_primary_contig("chrX"));
    }

    #[test]
    fn test_is_placeable_chromosome() {
        assert!(is_placeable_chromosome("1"));
        assert!(is_placeable_chromosome("X"));
        assert!(is_placeable_chromosome("MT"));
        assert!(!is_placeable_chromosome(""));
        assert!(!is_placeable_chromosome("1p"));
        assert!(!is_placeable_chromosome("1q2"));
        assert!(!is_placeable_chromosome("3.1"));
    }
}
