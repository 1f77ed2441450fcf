//! Top-N views of an enriched collection

use super::column::Column;
use super::enrich::EnrichedCreature;

/// Number of creatures in each standard view
pub const DEFAULT_TOP_N: usize = 10;

/// Ranking metric (always ranked descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Vulnerability,
    Weaknesses,
    Resistances,
    Speed,
}

impl Metric {
    pub fn value(self, c: &EnrichedCreature) -> f64 {
        match self {
            Metric::Vulnerability => c.profile.vulnerability,
            Metric::Weaknesses => c.profile.weaknesses as f64,
            Metric::Resistances => c.profile.resistances as f64,
            Metric::Speed => c.speed() as f64,
        }
    }

    /// Column holding this metric
    pub fn column(self) -> Column {
        match self {
            Metric::Vulnerability => Column::Vulnerability,
            Metric::Weaknesses => Column::Weaknesses,
            Metric::Resistances => Column::Resistances,
            Metric::Speed => Column::Speed,
        }
    }
}

/// The four views produced on every run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    MostVulnerable,
    MostWeaknesses,
    MostResistances,
    Fastest,
}

impl ViewKind {
    /// Views in export order
    pub const ALL: [ViewKind; 4] = [
        ViewKind::MostVulnerable,
        ViewKind::MostWeaknesses,
        ViewKind::MostResistances,
        ViewKind::Fastest,
    ];

    pub fn metric(self) -> Metric {
        match self {
            ViewKind::MostVulnerable => Metric::Vulnerability,
            ViewKind::MostWeaknesses => Metric::Weaknesses,
            ViewKind::MostResistances => Metric::Resistances,
            ViewKind::Fastest => Metric::Speed,
        }
    }

    /// Worksheet name
    pub fn sheet_name(self) -> &'static str {
        match self {
            ViewKind::MostVulnerable => "vul",
            ViewKind::MostWeaknesses => "weak",
            ViewKind::MostResistances => "resist",
            ViewKind::Fastest => "blitz",
        }
    }

    /// Human-readable label (plot legend, console heading)
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::MostVulnerable => "Most Vulnerable",
            ViewKind::MostWeaknesses => "Most Weaknesses",
            ViewKind::MostResistances => "Most Resistances",
            ViewKind::Fastest => "Fastest",
        }
    }

    /// Columns carried by this view, in order
    pub fn columns(self) -> &'static [Column] {
        use Column::*;
        match self {
            ViewKind::MostVulnerable => &[Name, Type1, Type2, Vulnerability, Weaknesses, Total],
            ViewKind::MostWeaknesses => &[Name, Type1, Type2, Weaknesses, Vulnerability, Total],
            ViewKind::MostResistances => &[
                Name,
                Type1,
                Type2,
                Resistances,
                Vulnerability,
                Immunities,
                Total,
            ],
            ViewKind::Fastest => &[Name, Type1, Type2, Speed, Total, Vulnerability],
        }
    }

    /// Rank a collection for this view
    pub fn rank(self, collection: &[EnrichedCreature], n: usize) -> RankedView<'_> {
        rank_top(collection, self.metric(), n).with_columns(self.columns())
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-N slice of an enriched collection, borrowed from it
#[derive(Debug, Clone, PartialEq)]
pub struct RankedView<'a> {
    pub metric: Metric,
    pub columns: Vec<Column>,
    pub rows: Vec<&'a EnrichedCreature>,
}

impl<'a> RankedView<'a> {
    /// Replace the carried columns
    pub fn with_columns(mut self, columns: &[Column]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a EnrichedCreature> + '_ {
        self.rows.iter().copied()
    }
}

/// Select the `n` creatures with the largest `metric`, descending
///
/// The sort is stable, so tied creatures keep their input order. The
/// collection is only read.
pub fn rank_top(collection: &[EnrichedCreature], metric: Metric, n: usize) -> RankedView<'_> {
    let mut rows: Vec<&EnrichedCreature> = collection.iter().collect();
    rows.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
    rows.truncate(n);

    if rows.len() < n {
        tracing::warn!(
            ?metric,
            requested = n,
            available = rows.len(),
            "Ranked view is shorter than requested"
        );
    }

    RankedView {
        metric,
        columns: vec![Column::Name, Column::Type1, Column::Type2, metric.column()],
        rows,
    }
}

/// Build the four standard views, in export order
pub fn standard_views(
    collection: &[EnrichedCreature],
    n: usize,
) -> Vec<(ViewKind, RankedView<'_>)> {
    ViewKind::ALL
        .iter()
        .map(|&kind| {
            let view = kind.rank(collection, n);
            tracing::debug!(view = %kind, rows = view.len(), "Ranked view");
            (kind, view)
        })
        .collect()
}
