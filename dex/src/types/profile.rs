//! Derived defensive profile types

/// Counts over the per-attacking-type multiplier vector of one creature
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseCounts {
    /// Attacking types dealing more than 1x
    pub weaknesses: u32,
    /// Attacking types dealing less than 1x (immunities included)
    pub resistances: u32,
    /// Attacking types dealing exactly 0x
    pub immunities: u32,
    /// Sum of all multipliers
    pub vulnerability: f64,
}

/// Extreme matchups of a dual-typed creature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extremes {
    /// Some attacking type deals 4x or more
    pub super_weak: bool,
    /// Some attacking type deals 0.25x or less
    pub super_resistant: bool,
}

/// Full defensive profile attached to an enriched creature
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefensiveProfile {
    pub weaknesses: u32,
    pub resistances: u32,
    pub immunities: u32,
    pub vulnerability: f64,
    pub super_weak: bool,
    pub super_resistant: bool,
}

impl DefensiveProfile {
    pub fn from_parts(counts: DefenseCounts, extremes: Extremes) -> Self {
        Self {
            weaknesses: counts.weaknesses,
            resistances: counts.resistances,
            immunities: counts.immunities,
            vulnerability: counts.vulnerability,
            super_weak: extremes.super_weak,
            super_resistant: extremes.super_resistant,
        }
    }
}
