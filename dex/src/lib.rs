//! Defensive type profiles and rankings for Pokemon datasets.
//!
//! This crate holds the pure part of the report pipeline: no file or
//! spreadsheet handling, only the data model and the computations on it.
//!
//! # Overview
//!
//! ```text
//! kazam-data (CSV input)
//!        │
//!        ▼
//! kazam-dex (matrix + profiles + rankings) ← THIS CRATE
//!        │
//!        ▼
//! kazam-report (workbook, plot, CLI)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Pokemon types with the built-in chart
//! - [`EffectivenessMatrix`] - Attacking x defending multiplier table
//! - [`Creature`] - One dataset row
//! - [`DefensiveProfile`] - Weakness/resistance/immunity counts and vulnerability
//! - [`EnrichedCreature`] - A creature with its profile attached
//! - [`RankedView`] - Top-N slice of the enriched collection
//!
//! # Example Usage
//!
//! ```
//! use kazam_dex::{BaseStats, Creature, EffectivenessMatrix, EnrichRules, Metric};
//!
//! let matrix = EffectivenessMatrix::standard();
//! let creatures = vec![
//!     Creature::new("Bulbasaur", "Grass", BaseStats::new(318, 45)).with_secondary("Poison"),
//!     Creature::new("Charmander", "Fire", BaseStats::new(309, 65)),
//! ];
//!
//! let enriched = kazam_dex::enrich(creatures, &matrix, &EnrichRules::default())?;
//! let fastest = kazam_dex::rank_top(&enriched, Metric::Speed, 10);
//! assert_eq!(fastest.rows[0].name(), "Charmander");
//! # Ok::<(), kazam_dex::DexError>(())
//! ```

use thiserror::Error;

pub mod query;
pub mod ranking;
pub mod types;

// Re-export main types at crate root for convenience
pub use query::{compute_defense, compute_extremes, defensive_multipliers};
pub use ranking::{
    CellValue, Column, EnrichRules, EnrichedCreature, Metric, RankedView, ViewKind, enrich,
    filter_excluded, rank_top, standard_views,
};
pub use types::{
    BaseStats, Creature, DefenseCounts, DefensiveProfile, EffectivenessMatrix, Extremes,
    TYPE_CHART, Type,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DexError {
    #[error("Unknown type: {0:?}")]
    UnknownType(String),

    #[error("Type {0} is not in the effectiveness matrix")]
    TypeNotInMatrix(Type),

    #[error("Invalid effectiveness matrix: {0}")]
    InvalidMatrix(String),

    #[error("Cannot compute defensive profile of {name}")]
    Creature {
        name: String,
        #[source]
        source: Box<DexError>,
    },
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_profile_serializes_field_names() {
        let matrix = EffectivenessMatrix::standard();
        let profile = query::profile(Type::Grass, Some(Type::Steel), &matrix).unwrap();

        let value = serde_json::to_value(profile).unwrap();
        assert_eq!(value["weaknesses"], 2);
        assert_eq!(value["super_weak"], true);
        assert_eq!(value["super_resistant"], true);
    }

    #[test]
    fn test_type_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Type::Fire).unwrap(), "\"Fire\"");
    }
}
