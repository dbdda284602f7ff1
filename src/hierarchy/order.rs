//! First-seen order tracking per sibling scope.
//!
//! The tracker never sorts. Genomic order comes from the input row order, which for
//! UCSC tables runs pter to qter within each chromosome.

use std::collections::HashMap;

use crate::core::types::Arm;

/// Identifies a group of siblings whose order is tracked
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Arms of a chromosome
    Arms { chromosome: String },
    /// Regions of an arm
    Regions { chromosome: String, arm: Arm },
    /// Bands of a region, keyed by the region digit
    Bands {
        chromosome: String,
        arm: Arm,
        region: char,
    },
    /// Subbands of a band, keyed by region and band digits (e.g. "36")
    Subbands {
        chromosome: String,
        arm: Arm,
        band_digits: String,
    },
}

impl ScopeKey {
    pub fn arms(chromosome: impl Into<String>) -> Self {
        Self::Arms {
            chromosome: chromosome.into(),
        }
    }

    pub fn regions(chromosome: impl Into<String>, arm: Arm) -> Self {
        Self::Regions {
            chromosome: chromosome.into(),
            arm,
        }
    }

    pub fn bands(chromosome: impl Into<String>, arm: Arm, region: char) -> Self {
        Self::Bands {
            chromosome: chromosome.into(),
            arm,
            region,
        }
    }

    pub fn subbands(chromosome: impl Into<String>, arm: Arm, band_digits: impl Into<String>) -> Self {
        Self::Subbands {
            chromosome: chromosome.into(),
            arm,
            band_digits: band_digits.into(),
        }
    }
}

/// Per-scope order lists, iterated in the order scopes were first opened
#[derive(Debug, Clone, Default)]
pub struct OrderTracker {
    scopes: Vec<(ScopeKey, Vec<String>)>,
    index: HashMap<ScopeKey, usize>,
}

impl OrderTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `code` to the scope's order list unless it is already there.
    /// Returns `true` if the code was newly recorded.
    pub fn record(&mut self, scope: ScopeKey, code: &str) -> bool {
        let slot = match self.index.get(&scope) {
            Some(&slot) => slot,
            None => {
                let slot = self.scopes.len();
                self.index.insert(scope.clone(), slot);
                self.scopes.push((scope, Vec::new()));
                slot
            }
        };

        let order = &mut self.scopes[slot].1;
        if order.iter().any(|c| c == code) {
            return false;
        }
        order.push(code.to_string());
        true
    }

    /// Order list for a scope; empty if the scope was never opened
    #[must_use]
    pub fn sequence(&self, scope: &ScopeKey) -> &[String] {
        match self.index.get(scope) {
            Some(&slot) => &self.scopes[slot].1,
            None => &[],
        }
    }

    /// All scopes and their order lists
    pub fn iter(&self) -> impl Iterator<Item = (&ScopeKey, &[String])> {
        self.scopes
            .iter()
            .map(|(scope, order)| (scope, order.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let mut tracker = OrderTracker::new();
        let scope = ScopeKey::bands("1", Arm::P, '3');

        assert!(tracker.record(scope.clone(), "1p36"));
        assert!(tracker.record(scope.clone(), "1p35"));
        assert!(!tracker.record(scope.clone(), "1p36"));
        assert!(tracker.record(scope.clone(), "1p34"));

        assert_eq!(tracker.sequence(&scope), &["1p36", "1p35", "1p34"]);
    }

    #[test]
    fn test_input_order_is_trusted() {
        let mut tracker = OrderTracker::new();
        let scope = ScopeKey::arms("3");
        tracker.record(scope.clone(), "3q");
        tracker.record(scope.clone(), "3p");
        assert_eq!(tracker.sequence(&scope), &["3q", "3p"]);
    }

    #[test]
    fn test_scopes_are_independent() {
        let mut tracker = OrderTracker::new();
        tracker.record(ScopeKey::regions("1", Arm::P), "1p3");
        tracker.record(ScopeKey::regions("1", Arm::Q), "1q1");
        tracker.record(ScopeKey::regions("2", Arm::P), "2p2");

        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.sequence(&ScopeKey::regions("1", Arm::Q)), &["1q1"]);
        assert!(tracker.sequence(&ScopeKey::regions("3", Arm::P)).is_empty());
    }

    #[test]
    fn test_iteration_follows_scope_creation() {
        let mut tracker = OrderTracker::new();
        tracker.record(ScopeKey::subbands("1", Arm::P, "36"), "1p36.33");
        tracker.record(ScopeKey::arms("1"), "1p");
        let scopes: Vec<&ScopeKey> = tracker.iter().map(|(scope, _)| scope).collect();
        assert_eq!(
            scopes,
            vec![&ScopeKey::subbands("1", Arm::P, "36"), &ScopeKey::arms("1")]
        );
    }
}
