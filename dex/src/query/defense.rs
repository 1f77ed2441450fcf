//! Defensive profile computation against an effectiveness matrix

use crate::DexError;
use crate::types::{DefenseCounts, DefensiveProfile, EffectivenessMatrix, Extremes, Type};

/// Combined multiplier at or above which a creature counts as super weak
pub const SUPER_WEAK_THRESHOLD: f64 = 4.0;

/// Combined multiplier at or below which a creature counts as super resistant
pub const SUPER_RESIST_THRESHOLD: f64 = 0.25;

/// Multiplier taken from each attacking type, in matrix order
///
/// Single type: the matrix column of `primary`. Dual type: the elementwise
/// product of both columns.
pub fn defensive_multipliers(
    primary: Type,
    secondary: Option<Type>,
    matrix: &EffectivenessMatrix,
) -> Result<Vec<f64>, DexError> {
    let first = matrix.defending_column(primary)?;
    match secondary {
        None => Ok(first.collect()),
        Some(secondary) => {
            let second = matrix.defending_column(secondary)?;
            Ok(first.zip(second).map(|(a, b)| a * b).collect())
        }
    }
}

/// Weakness, resistance and immunity counts plus the vulnerability score
pub fn compute_defense(
    primary: Type,
    secondary: Option<Type>,
    matrix: &EffectivenessMatrix,
) -> Result<DefenseCounts, DexError> {
    let multipliers = defensive_multipliers(primary, secondary, matrix)?;
    Ok(count_multipliers(&multipliers))
}

/// Super weak / super resistant flags
///
/// Single-typed creatures are never flagged and the matrix is not consulted
/// for them.
pub fn compute_extremes(
    primary: Type,
    secondary: Option<Type>,
    matrix: &EffectivenessMatrix,
) -> Result<Extremes, DexError> {
    if secondary.is_none() {
        return Ok(Extremes::default());
    }

    let multipliers = defensive_multipliers(primary, secondary, matrix)?;
    Ok(Extremes {
        super_weak: multipliers.iter().any(|&m| m >= SUPER_WEAK_THRESHOLD),
        super_resistant: multipliers.iter().any(|&m| m <= SUPER_RESIST_THRESHOLD),
    })
}

/// Compute the full defensive profile of a type combination
pub fn profile(
    primary: Type,
    secondary: Option<Type>,
    matrix: &EffectivenessMatrix,
) -> Result<DefensiveProfile, DexError> {
    let counts = compute_defense(primary, secondary, matrix)?;
    let extremes = compute_extremes(primary, secondary, matrix)?;
    Ok(DefensiveProfile::from_parts(counts, extremes))
}

fn count_multipliers(multipliers: &[f64]) -> DefenseCounts {
    let count = |pred: fn(f64) -> bool| multipliers.iter().filter(|&&m| pred(m)).count() as u32;

    DefenseCounts {
        weaknesses: count(|m| m > 1.0),
        resistances: count(|m| m < 1.0),
        immunities: count(|m| m == 0.0),
        vulnerability: multipliers.iter().sum(),
    }
}
