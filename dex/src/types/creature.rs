//! Creature records as read from a dataset

/// Base stats of a species
///
/// `total` and `speed` are always present; the individual stats are optional
/// because the ranking only needs these two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub total: u32,
    pub speed: u32,
    pub hp: Option<u32>,
    pub atk: Option<u32>,
    pub def: Option<u32>,
    pub spa: Option<u32>,
    pub spd: Option<u32>,
}

impl BaseStats {
    /// Create stats with only the stat total and speed known
    pub fn new(total: u32, speed: u32) -> Self {
        Self {
            total,
            speed,
            ..Self::default()
        }
    }
}

/// One row of the creature dataset
///
/// Type labels are kept as written in the dataset and resolved against the
/// effectiveness matrix during enrichment, so an unknown label surfaces as a
/// lookup error at that stage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    /// National dex number (shared by alternate formes)
    pub number: Option<u32>,

    /// Species name (including forme, e.g., "CharizardMega Charizard X")
    pub name: String,

    /// Primary type label
    pub primary_type: String,

    /// Secondary type label, `None` for single-typed species
    pub secondary_type: Option<String>,

    pub stats: BaseStats,

    /// Generation the species was introduced in
    pub generation: Option<u8>,

    pub legendary: bool,
}

impl Creature {
    /// Create a single-typed, non-legendary creature
    pub fn new(name: impl Into<String>, primary_type: impl Into<String>, stats: BaseStats) -> Self {
        Self {
            number: None,
            name: name.into(),
            primary_type: primary_type.into(),
            secondary_type: None,
            stats,
            generation: None,
            legendary: false,
        }
    }

    /// Set the secondary type; a blank label means no secondary type
    pub fn with_secondary(mut self, secondary_type: impl Into<String>) -> Self {
        let label = secondary_type.into();
        self.secondary_type = if label.trim().is_empty() {
            None
        } else {
            Some(label)
        };
        self
    }

    pub fn with_legendary(mut self, legendary: bool) -> Self {
        self.legendary = legendary;
        self
    }

    /// Whether the name contains the exclusion marker (case-sensitive)
    pub fn has_marker(&self, marker: &str) -> bool {
        !marker.is_empty() && self.name.contains(marker)
    }

    /// Non-legendary species whose stat total equals `threshold` exactly
    pub fn is_pseudo_legendary(&self, threshold: u32) -> bool {
        self.stats.total == threshold && !self.legendary
    }
}
