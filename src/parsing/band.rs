//! Parser for ISCN band names such as `p36.33` or `q44`.
//!
//! A placeable band name has the shape `<arm><region digit><band digit>[.<1-2 digits>]`
//! with arm `p` or `q`. Anything else (centromere markers, empty names on unplaced
//! contigs, `gvar` placeholders) is not part of the hierarchy.

use crate::core::types::Arm;

/// A band name split into its structural parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandName {
    pub arm: Arm,
    /// First digit after the arm
    pub region: char,
    /// Second digit after the arm
    pub band: char,
    /// Digits after the decimal point, if any
    pub subband: Option<String>,
}

impl BandName {
    /// Parse a band name. Returns `None` when the name cannot be placed in the hierarchy.
    ///
    /// # Examples
    ///
    /// ```
    /// use cytoband_hierarchy::parsing::band::BandName;
    ///
    /// let band = BandName::parse("p36.33").unwrap();
    /// assert_eq!(band.region, '3');
    /// assert_eq!(band.band, '6');
    /// assert_eq!(band.subband.as_deref(), Some("33"));
    ///
    /// assert!(BandName::parse("acen").is_none());
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let arm = Arm::from_char(chars.next()?)?;
        let region = chars.next().filter(char::is_ascii_digit)?;
        let band = chars.next().filter(char::is_ascii_digit)?;

        let rest = chars.as_str();
        let subband = if rest.is_empty() {
            None
        } else {
            let digits = rest.strip_prefix('.')?;
            if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit())
            {
                return None;
            }
            Some(digits.to_string())
        };

        Some(Self {
            arm,
            region,
            band,
            subband,
        })
    }

    /// Region and band digits together (e.g. "36"), the key for a band's subband scope
    #[must_use]
    pub fn band_digits(&self) -> String {
        format!("{}{}", self.region, self.band)
    }

    #[must_use]
    pub fn arm_code(&self, chromosome: &str) -> String {
        format!("{chromosome}{}", self.arm)
    }

    #[must_use]
    pub fn region_code(&self, chromosome: &str) -> String {
        format!("{chromosome}{}{}", self.arm, self.region)
    }

    #[must_use]
    pub fn band_code(&self, chromosome: &str) -> String {
        format!("{chromosome}{}{}{}", self.arm, self.region, self.band)
    }

    /// Full dotted code (e.g. "1p36.33"), `None` for names without a subband
    #[must_use]
    pub fn subband_code(&self, chromosome: &str) -> Option<String> {
        self.subband
            .as_ref()
            .map(|sub| format!("{}.{sub}", self.band_code(chromosome)))
    }
}
