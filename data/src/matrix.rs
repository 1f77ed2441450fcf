use std::collections::HashMap;
use std::io::Read;

use kazam_dex::{DexError, EffectivenessMatrix, Type};

use crate::ParseError;

/// Parse an effectiveness matrix
///
/// Layout: the first header cell names the row-label column (`Attacking`),
/// the remaining header cells are defending types. Each row starts with an
/// attacking type followed by one multiplier per defending type. Rows may
/// appear in any order but must cover exactly the header's types.
pub fn read_matrix<R: Read>(input: R) -> Result<EffectivenessMatrix, ParseError> {
    let mut reader = crate::reader(input);

    let headers = reader.headers()?.clone();
    let types = headers
        .iter()
        .skip(1)
        .map(|label| {
            Type::from_name(label).ok_or_else(|| ParseError::InvalidValue {
                line: 1,
                message: format!("unknown defending type {:?}", label),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if types.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut rows: HashMap<Type, Vec<f64>> = HashMap::with_capacity(types.len());
    for record in reader.records() {
        let record = record?;
        let line = crate::line_of(&record);

        let label = record.get(0).unwrap_or_default();
        let attacking = Type::from_name(label).ok_or_else(|| ParseError::InvalidValue {
            line,
            message: format!("unknown attacking type {:?}", label),
        })?;

        let values = record
            .iter()
            .skip(1)
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| ParseError::InvalidValue {
                    line,
                    message: format!("{} row has non-numeric multiplier {:?}", attacking, cell),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if rows.insert(attacking, values).is_some() {
            return Err(ParseError::InvalidValue {
                line,
                message: format!("duplicate row for {}", attacking),
            });
        }
    }

    // Reorder rows to column order so the matrix stays square under one index
    let mut ordered = Vec::with_capacity(types.len());
    for ty in &types {
        let row = rows.remove(ty).ok_or_else(|| {
            DexError::InvalidMatrix(format!("no row for attacking type {}", ty))
        })?;
        ordered.push(row);
    }

    if let Some(extra) = rows.keys().min() {
        return Err(DexError::InvalidMatrix(format!(
            "row {} has no matching defending column",
            extra
        ))
        .into());
    }

    Ok(EffectivenessMatrix::new(types, ordered)?)
}
