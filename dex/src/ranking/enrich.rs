//! Enrichment: attach defensive profiles to a creature collection

use crate::DexError;
use crate::query;
use crate::types::{Creature, DefensiveProfile, EffectivenessMatrix, Type};

/// Default name marker for alternate (Mega) formes
pub const DEFAULT_EXCLUDE_MARKER: &str = "Mega";

/// Default stat total of a pseudo-legendary
pub const DEFAULT_PSEUDO_LEGENDARY_TOTAL: u32 = 600;

/// Rules applied while enriching a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichRules {
    /// Creatures whose name contains this marker are dropped
    pub exclude_marker: String,

    /// Exact stat total that marks a non-legendary as pseudo-legendary
    pub pseudo_legendary_total: u32,
}

impl Default for EnrichRules {
    fn default() -> Self {
        Self {
            exclude_marker: DEFAULT_EXCLUDE_MARKER.to_string(),
            pseudo_legendary_total: DEFAULT_PSEUDO_LEGENDARY_TOTAL,
        }
    }
}

/// A creature with its resolved types and derived fields
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnrichedCreature {
    pub creature: Creature,
    pub primary: Type,
    pub secondary: Option<Type>,
    pub profile: DefensiveProfile,
    pub pseudo_legendary: bool,
}

impl EnrichedCreature {
    pub fn name(&self) -> &str {
        &self.creature.name
    }

    pub fn total(&self) -> u32 {
        self.creature.stats.total
    }

    pub fn speed(&self) -> u32 {
        self.creature.stats.speed
    }
}

/// Drop every creature whose name contains `marker`, keeping input order
pub fn filter_excluded(creatures: Vec<Creature>, marker: &str) -> Vec<Creature> {
    creatures
        .into_iter()
        .filter(|c| {
            let excluded = c.has_marker(marker);
            if excluded {
                tracing::debug!(name = %c.name, marker, "Excluding creature");
            }
            !excluded
        })
        .collect()
}

/// Resolve one creature's types and compute its derived fields
pub fn enrich_one(
    creature: Creature,
    matrix: &EffectivenessMatrix,
    rules: &EnrichRules,
) -> Result<EnrichedCreature, DexError> {
    let resolved = resolve_types(&creature, matrix).and_then(|(primary, secondary)| {
        query::profile(primary, secondary, matrix).map(|profile| (primary, secondary, profile))
    });

    let (primary, secondary, profile) = resolved.map_err(|source| DexError::Creature {
        name: creature.name.clone(),
        source: Box::new(source),
    })?;

    let pseudo_legendary = creature.is_pseudo_legendary(rules.pseudo_legendary_total);

    Ok(EnrichedCreature {
        creature,
        primary,
        secondary,
        profile,
        pseudo_legendary,
    })
}

/// Filter and enrich a whole collection
///
/// Input order is preserved. The first creature whose type cannot be found in
/// the matrix fails the whole call; no partial collection is returned.
pub fn enrich(
    creatures: Vec<Creature>,
    matrix: &EffectivenessMatrix,
    rules: &EnrichRules,
) -> Result<Vec<EnrichedCreature>, DexError> {
    let loaded = creatures.len();
    let kept = filter_excluded(creatures, &rules.exclude_marker);

    tracing::info!(
        loaded,
        excluded = loaded - kept.len(),
        marker = %rules.exclude_marker,
        "Filtered creature collection"
    );

    kept.into_iter()
        .map(|creature| enrich_one(creature, matrix, rules))
        .collect()
}

fn resolve_types(
    creature: &Creature,
    matrix: &EffectivenessMatrix,
) -> Result<(Type, Option<Type>), DexError> {
    let primary = matrix.resolve(&creature.primary_type)?;
    let secondary = creature
        .secondary_type
        .as_deref()
        .map(|label| matrix.resolve(label))
        .transpose()?;
    Ok((primary, secondary))
}
