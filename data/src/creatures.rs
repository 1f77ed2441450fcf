use std::io::Read;

use kazam_dex::{BaseStats, Creature};
use serde::{Deserialize, Deserializer};

use crate::ParseError;

/// Columns every creature dataset must carry (`Type 2` may be blank)
pub const REQUIRED_COLUMNS: [&str; 6] = ["Name", "Type 1", "Type 2", "Total", "Legendary", "Speed"];

#[derive(Debug, Deserialize)]
struct CreatureRow {
    #[serde(rename = "#", default)]
    number: Option<u32>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type 1")]
    type1: String,
    #[serde(rename = "Type 2", default)]
    type2: Option<String>,
    #[serde(rename = "Total")]
    total: u32,
    #[serde(rename = "HP", default)]
    hp: Option<u32>,
    #[serde(rename = "Attack", default)]
    attack: Option<u32>,
    #[serde(rename = "Defense", default)]
    defense: Option<u32>,
    #[serde(rename = "Sp. Atk", default)]
    sp_atk: Option<u32>,
    #[serde(rename = "Sp. Def", default)]
    sp_def: Option<u32>,
    #[serde(rename = "Speed")]
    speed: u32,
    #[serde(rename = "Generation", default)]
    generation: Option<u8>,
    #[serde(rename = "Legendary", deserialize_with = "deserialize_flag")]
    legendary: bool,
}

impl From<CreatureRow> for Creature {
    fn from(row: CreatureRow) -> Self {
        let stats = BaseStats {
            total: row.total,
            speed: row.speed,
            hp: row.hp,
            atk: row.attack,
            def: row.defense,
            spa: row.sp_atk,
            spd: row.sp_def,
        };

        let mut creature = Creature::new(row.name, row.type1, stats)
            .with_secondary(row.type2.unwrap_or_default())
            .with_legendary(row.legendary);
        creature.number = row.number;
        creature.generation = row.generation;
        creature
    }
}

/// Parse a creature dataset with a header row
///
/// Rows keep their file order. Unknown extra columns are ignored.
pub fn read_creatures<R: Read>(input: R) -> Result<Vec<Creature>, ParseError> {
    let mut reader = crate::reader(input);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|&&column| !headers.iter().any(|h| h == column))
    {
        return Err(ParseError::MissingColumn(missing.to_string()));
    }

    reader
        .deserialize::<CreatureRow>()
        .map(|row| row.map(Creature::from).map_err(row_error))
        .collect()
}

/// Field-level failures become `InvalidValue` on their line; structural ones stay `Csv`
fn row_error(err: csv::Error) -> ParseError {
    if let csv::ErrorKind::Deserialize { pos: Some(pos), err: field } = err.kind() {
        return ParseError::InvalidValue {
            line: pos.line(),
            message: field.to_string(),
        };
    }
    ParseError::Csv(err)
}

/// Accepts the spellings pandas and spreadsheets produce for booleans
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean {:?}",
            other
        ))),
    }
}
