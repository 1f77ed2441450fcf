//! Vulnerability vs Total scatter plot

use std::ops::Range;
use std::path::Path;

use kazam_dex::{EnrichedCreature, RankedView, ViewKind};
use plotters::coord::Shift;
use plotters::prelude::*;

pub const TITLE: &str = "Pokémon: Defensive Vulnerability vs Overall Power";
pub const X_LABEL: &str = "Defensive Vulnerability Score";
pub const Y_LABEL: &str = "Total Stats";

const SIZE: (u32, u32) = (1200, 800);
const POINT_RADIUS: i32 = 5;
const PURPLE: RGBColor = RGBColor(128, 0, 128);

pub type DrawError = DrawingAreaErrorKind<std::io::Error>;

/// Series color of each view
pub fn series_color(kind: ViewKind) -> RGBColor {
    match kind {
        ViewKind::MostVulnerable => RED,
        ViewKind::MostWeaknesses => BLUE,
        ViewKind::MostResistances => GREEN,
        ViewKind::Fastest => PURPLE,
    }
}

/// Render every view as one labelled series to an SVG file
pub fn write_scatter(path: &Path, views: &[(ViewKind, RankedView<'_>)]) -> Result<(), DrawError> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    draw_scatter(&root, views)?;
    root.present()?;

    tracing::info!(path = %path.display(), series = views.len(), "Wrote scatter plot");
    Ok(())
}

fn draw_scatter(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    views: &[(ViewKind, RankedView<'_>)],
) -> Result<(), DrawError> {
    root.fill(&WHITE)?;

    let (x_range, y_range) = bounds(views.iter().flat_map(|(_, view)| view.iter()));

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()?;

    for (kind, view) in views {
        let color = series_color(*kind);
        let point_style = color.mix(0.6).filled();
        let label_style = ("sans-serif", 12).into_font().color(&color.mix(0.8));

        chart
            .draw_series(view.iter().map(|c| {
                EmptyElement::at(point(c))
                    + Circle::new((0, 0), POINT_RADIUS, point_style)
                    + Text::new(c.name().to_string(), (5, -15), label_style.clone())
            }))?
            .label(kind.label())
            .legend(move |(x, y)| Circle::new((x, y), POINT_RADIUS, point_style));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn point(c: &EnrichedCreature) -> (f64, f64) {
    (c.profile.vulnerability, c.total() as f64)
}

/// Axis ranges covering every point with a margin
fn bounds<'a>(creatures: impl Iterator<Item = &'a EnrichedCreature>) -> (Range<f64>, Range<f64>) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);

    for c in creatures {
        let (px, py) = point(c);
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }

    (padded(x), padded(y))
}

fn padded((min, max): (f64, f64)) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_empty() {
        assert_eq!(padded((f64::INFINITY, f64::NEG_INFINITY)), 0.0..1.0);
    }

    #[test]
    fn test_padded_single_point() {
        let range = padded((18.0, 18.0));
        assert!(range.start < 18.0 && range.end > 18.0);
    }

    #[test]
    fn test_padded_spread() {
        let range = padded((300.0, 700.0));
        assert_eq!(range, 260.0..740.0);
    }

    #[test]
    fn test_series_colors_distinct() {
        let colors: Vec<RGBColor> = ViewKind::ALL.iter().map(|k| series_color(*k)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
