//! Enrichment and ranking of a creature collection

mod column;
mod enrich;
mod rank;

pub use column::{CellValue, Column};
pub use enrich::{
    DEFAULT_EXCLUDE_MARKER, DEFAULT_PSEUDO_LEGENDARY_TOTAL, EnrichRules, EnrichedCreature,
    enrich, enrich_one, filter_excluded,
};
pub use rank::{DEFAULT_TOP_N, Metric, RankedView, ViewKind, rank_top, standard_views};
