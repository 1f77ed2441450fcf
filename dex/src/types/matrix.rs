//! Type effectiveness matrix loaded at runtime

use super::pokemon_type::{TYPE_CHART, Type};
use crate::DexError;

/// Square table of damage multipliers
///
/// Row = attacking type, Column = defending type. The set of types is fixed at
/// construction and every type is mapped to a row/column index once, so a
/// lookup for a type the matrix does not carry fails with
/// [`DexError::TypeNotInMatrix`] instead of falling back to a neutral value.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectivenessMatrix {
    types: Vec<Type>,
    index: [Option<usize>; Type::COUNT],
    /// Row-major, `types.len()` squared entries
    values: Vec<f64>,
}

impl EffectivenessMatrix {
    /// Build a matrix from its type order and row-major multipliers
    ///
    /// `rows[i][j]` is the multiplier of attacking type `types[i]` against
    /// defending type `types[j]`. Multipliers must be finite and non-negative.
    pub fn new(types: Vec<Type>, rows: Vec<Vec<f64>>) -> Result<Self, DexError> {
        if types.is_empty() {
            return Err(DexError::InvalidMatrix("matrix has no types".to_string()));
        }

        let index = index_table(&types)?;
        let n = types.len();

        if rows.len() != n {
            return Err(DexError::InvalidMatrix(format!(
                "expected {} rows, found {}",
                n,
                rows.len()
            )));
        }

        let mut values = Vec::with_capacity(n * n);
        for (attacking, row) in types.iter().zip(&rows) {
            if row.len() != n {
                return Err(DexError::InvalidMatrix(format!(
                    "row {} has {} values, expected {}",
                    attacking,
                    row.len(),
                    n
                )));
            }
            for (defending, &value) in types.iter().zip(row) {
                if !value.is_finite() || value < 0.0 {
                    return Err(DexError::InvalidMatrix(format!(
                        "{} against {} has invalid multiplier {}",
                        attacking, defending, value
                    )));
                }
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            types,
            index,
            values,
        })
    }

    /// The built-in 18x18 chart (Gen 6+)
    pub fn standard() -> Self {
        let types = Type::ALL.to_vec();
        let mut index = [None; Type::COUNT];
        for ty in &types {
            index[ty.index()] = Some(ty.index());
        }

        Self {
            types,
            index,
            values: TYPE_CHART.iter().flatten().copied().collect(),
        }
    }

    /// Types in matrix order (row order equals column order)
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Number of types (attacking types = defending types)
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false for a constructed matrix
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn position(&self, ty: Type) -> Result<usize, DexError> {
        self.index[ty.index()].ok_or(DexError::TypeNotInMatrix(ty))
    }

    /// Multiplier of `attacking` against a single `defending` type
    pub fn get(&self, attacking: Type, defending: Type) -> Result<f64, DexError> {
        let row = self.position(attacking)?;
        let col = self.position(defending)?;
        Ok(self.values[row * self.len() + col])
    }

    /// Every attacking type with its row, in matrix order
    pub fn rows(&self) -> impl Iterator<Item = (Type, &[f64])> + '_ {
        self.types
            .iter()
            .copied()
            .zip(self.values.chunks(self.len()))
    }

    /// Multipliers taken by `defending` from every attacking type, in matrix order
    pub fn defending_column(
        &self,
        defending: Type,
    ) -> Result<impl Iterator<Item = f64> + '_, DexError> {
        let col = self.position(defending)?;
        Ok(self.values.iter().skip(col).step_by(self.len()).copied())
    }

    /// Resolve a dataset label to a type carried by this matrix
    pub fn resolve(&self, label: &str) -> Result<Type, DexError> {
        let ty = Type::from_name(label).ok_or_else(|| DexError::UnknownType(label.to_string()))?;
        self.position(ty)?;
        Ok(ty)
    }
}

fn index_table(types: &[Type]) -> Result<[Option<usize>; Type::COUNT], DexError> {
    let mut index = [None; Type::COUNT];
    for (i, ty) in types.iter().enumerate() {
        if index[ty.index()].replace(i).is_some() {
            return Err(DexError::InvalidMatrix(format!("duplicate type {}", ty)));
        }
    }
    Ok(index)
}
