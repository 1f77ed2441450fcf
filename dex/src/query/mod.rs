//! Defensive queries against an effectiveness matrix
//!
//! This module turns a creature's one or two types into per-attacking-type
//! multipliers and the counts derived from them.

mod defense;

pub use defense::{
    SUPER_RESIST_THRESHOLD,
    SUPER_WEAK_THRESHOLD,
    compute_defense,
    compute_extremes,
    defensive_multipliers,
    profile,
};
