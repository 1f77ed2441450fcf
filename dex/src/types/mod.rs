//! Domain types: types, effectiveness matrix, creatures and profiles

mod creature;
mod matrix;
mod pokemon_type;
mod profile;

pub use creature::{BaseStats, Creature};
pub use matrix::EffectivenessMatrix;
pub use pokemon_type::{TYPE_CHART, Type};
pub use profile::{DefenseCounts, DefensiveProfile, Extremes};
