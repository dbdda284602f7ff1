use serde::{Deserialize, Serialize};

/// Structural level of a node in the band hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Chromosome,
    Arm,
    Region,
    Band,
    Subband,
}

impl NodeKind {
    /// The value used for the `kind` property in the published document
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Chromosome => "chromosome",
            Self::Arm => "arm",
            Self::Region => "region",
            Self::Band => "band",
            Self::Subband => "subband",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Chromosome arm: short (p) or long (q)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    P,
    Q,
}

impl Arm {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Self::P),
            'q' => Some(Self::Q),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::P => 'p',
            Self::Q => 'q',
        }
    }
}

impl std::fmt::Display for Arm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Level(s) at which p and q arms are joined across the centromere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossLinkLevel {
    /// Join the deepest available node of each arm (default)
    #[default]
    Subband,
    /// Join the last p band to the first q band
    Band,
    /// Join the last p region to the first q region
    Region,
    /// Apply subband, band and region cross-links in one pass
    All,
}

impl CrossLinkLevel {
    /// Expand into the concrete levels to apply, in application order
    #[must_use]
    pub fn levels(self) -> Vec<CrossLinkLevel> {
        match self {
            Self::All => vec![Self::Subband, Self::Band, Self::Region],
            level => vec![level],
        }
    }
}

impl std::fmt::Display for CrossLinkLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subband => write!(f, "subband"),
            Self::Band => write!(f, "band"),
            Self::Region => write!(f, "region"),
            Self::All => write!(f, "all"),
        }
    }
}

/// What to do when the same subband code appears on more than one input row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateSubbandPolicy {
    /// Count and log the repeated row, keep codes unique
    #[default]
    Skip,
    /// Append a second leaf with the same code, as the source table dictates
    Preserve,
    /// Fail the build
    Reject,
}
