//! Named columns of the enriched dataset

use super::enrich::EnrichedCreature;

/// A single exported cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Column of an enriched creature, named as downstream consumers expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Number,
    Name,
    Type1,
    Type2,
    Total,
    Hp,
    Attack,
    Defense,
    SpAtk,
    SpDef,
    Speed,
    Generation,
    Legendary,
    PseudoLegendary,
    Weaknesses,
    Resistances,
    Immunities,
    Vulnerability,
    SuperWeaknesses,
    SuperResistances,
}

impl Column {
    /// Column order of the full dataset export
    pub const FULL: [Column; 20] = [
        Column::Number,
        Column::Name,
        Column::Type1,
        Column::Type2,
        Column::Total,
        Column::Hp,
        Column::Attack,
        Column::Defense,
        Column::SpAtk,
        Column::SpDef,
        Column::Speed,
        Column::Generation,
        Column::Legendary,
        Column::PseudoLegendary,
        Column::Weaknesses,
        Column::Resistances,
        Column::Immunities,
        Column::Vulnerability,
        Column::SuperWeaknesses,
        Column::SuperResistances,
    ];

    /// Header text
    pub fn header(self) -> &'static str {
        match self {
            Column::Number => "#",
            Column::Name => "Name",
            Column::Type1 => "Type 1",
            Column::Type2 => "Type 2",
            Column::Total => "Total",
            Column::Hp => "HP",
            Column::Attack => "Attack",
            Column::Defense => "Defense",
            Column::SpAtk => "Sp. Atk",
            Column::SpDef => "Sp. Def",
            Column::Speed => "Speed",
            Column::Generation => "Generation",
            Column::Legendary => "Legendary",
            Column::PseudoLegendary => "Pseudo-Legendary",
            Column::Weaknesses => "Weaknesses",
            Column::Resistances => "Resistances",
            Column::Immunities => "Immunities",
            Column::Vulnerability => "Vulnerability",
            Column::SuperWeaknesses => "Super Weaknesses",
            Column::SuperResistances => "Super Resistances",
        }
    }

    /// Extract this column from an enriched creature
    pub fn value(self, c: &EnrichedCreature) -> CellValue {
        let stats = &c.creature.stats;
        let optional = |v: Option<u32>| v.map_or(CellValue::Empty, |v| CellValue::Number(v as f64));

        match self {
            Column::Number => optional(c.creature.number),
            Column::Name => CellValue::Text(c.creature.name.clone()),
            Column::Type1 => CellValue::Text(c.primary.as_str().to_string()),
            Column::Type2 => c
                .secondary
                .map_or(CellValue::Empty, |t| CellValue::Text(t.as_str().to_string())),
            Column::Total => CellValue::Number(stats.total as f64),
            Column::Hp => optional(stats.hp),
            Column::Attack => optional(stats.atk),
            Column::Defense => optional(stats.def),
            Column::SpAtk => optional(stats.spa),
            Column::SpDef => optional(stats.spd),
            Column::Speed => CellValue::Number(stats.speed as f64),
            Column::Generation => optional(c.creature.generation.map(u32::from)),
            Column::Legendary => CellValue::Bool(c.creature.legendary),
            Column::PseudoLegendary => CellValue::Bool(c.pseudo_legendary),
            Column::Weaknesses => CellValue::Number(c.profile.weaknesses as f64),
            Column::Resistances => CellValue::Number(c.profile.resistances as f64),
            Column::Immunities => CellValue::Number(c.profile.immunities as f64),
            Column::Vulnerability => CellValue::Number(c.profile.vulnerability),
            Column::SuperWeaknesses => CellValue::Bool(c.profile.super_weak),
            Column::SuperResistances => CellValue::Bool(c.profile.super_resistant),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::enrich::{EnrichRules, enrich_one};
    use crate::types::{BaseStats, Creature, EffectivenessMatrix};

    fn charizard() -> EnrichedCreature {
        let mut creature = Creature::new("Charizard", "Fire", BaseStats::new(534, 100))
            .with_secondary("Flying");
        creature.number = Some(6);
        creature.stats.hp = Some(78);
        enrich_one(
            creature,
            &EffectivenessMatrix::standard(),
            &EnrichRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_headers_are_unique() {
        let mut headers: Vec<&str> = Column::FULL.iter().map(|c| c.header()).collect();
        headers.sort();
        headers.dedup();
        assert_eq!(headers.len(), Column::FULL.len());
    }

    #[test]
    fn test_full_headers() {
        let headers: Vec<&str> = Column::FULL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            vec![
                "#",
                "Name",
                "Type 1",
                "Type 2",
                "Total",
                "HP",
                "Attack",
                "Defense",
                "Sp. Atk",
                "Sp. Def",
                "Speed",
                "Generation",
                "Legendary",
                "Pseudo-Legendary",
                "Weaknesses",
                "Resistances",
                "Immunities",
                "Vulnerability",
                "Super Weaknesses",
                "Super Resistances",
            ]
        );
    }

    #[test]
    fn test_values() {
        let c = charizard();
        assert_eq!(Column::Name.value(&c), CellValue::Text("Charizard".to_string()));
        assert_eq!(Column::Type1.value(&c), CellValue::Text("Fire".to_string()));
        assert_eq!(Column::Type2.value(&c), CellValue::Text("Flying".to_string()));
        assert_eq!(Column::Number.value(&c), CellValue::Number(6.0));
        assert_eq!(Column::Hp.value(&c), CellValue::Number(78.0));
        assert_eq!(Column::Attack.value(&c), CellValue::Empty);
        assert_eq!(Column::Speed.value(&c), CellValue::Number(100.0));
        assert_eq!(Column::Legendary.value(&c), CellValue::Bool(false));
        // Rock deals 4x to Fire/Flying
        assert_eq!(Column::SuperWeaknesses.value(&c), CellValue::Bool(true));
    }

    #[test]
    fn test_missing_secondary_is_empty() {
        let c = enrich_one(
            Creature::new("Charmander", "Fire", BaseStats::new(309, 65)),
            &EffectivenessMatrix::standard(),
            &EnrichRules::default(),
        )
        .unwrap();
        assert_eq!(Column::Type2.value(&c), CellValue::Empty);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Number(18.0).to_string(), "18");
        assert_eq!(CellValue::Number(17.25).to_string(), "17.25");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Empty.to_string(), "");
    }
}
