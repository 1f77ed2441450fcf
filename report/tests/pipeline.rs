use std::fs;
use std::path::Path;

use kazam_dex::ViewKind;
use kazam_report::{ReportConfig, ReportError, run};
use tempfile::TempDir;

const POKEMON_CSV: &str = "\
#,Name,Type 1,Type 2,Total,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed,Generation,Legendary
1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,1,False
3,Venusaur,Grass,Poison,525,80,82,83,100,100,80,1,False
3,VenusaurMega Venusaur,Grass,Poison,625,80,100,123,122,120,80,1,False
4,Charmander,Fire,,309,39,52,43,60,50,65,1,False
6,Charizard,Fire,Flying,534,78,84,78,109,85,100,1,False
7,Squirtle,Water,,314,44,48,65,50,64,43,1,False
";

const MATRIX_CSV: &str = "\
Attacking,Fire,Water,Grass,Poison,Flying
Fire,0.5,0.5,2,1,1
Water,2,0.5,0.5,1,1
Grass,0.5,2,0.5,0.5,0.5
Poison,1,1,2,0.5,1
Flying,1,1,2,1,1
";

fn setup(pokemon: &str) -> (TempDir, ReportConfig) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Pokemon.csv"), pokemon).unwrap();
    fs::write(dir.path().join("effMat.csv"), MATRIX_CSV).unwrap();

    let config = ReportConfig {
        creatures: dir.path().join("Pokemon.csv"),
        matrix: dir.path().join("effMat.csv"),
        workbook: dir.path().join("pkmn.xlsx"),
        plot: dir.path().join("vulnerability.svg"),
        top_n: 3,
        ..ReportConfig::default()
    };
    (dir, config)
}

fn names(summary: &kazam_report::RunSummary, kind: ViewKind) -> Vec<&str> {
    summary
        .views
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, names)| names.iter().map(String::as_str).collect())
        .unwrap()
}

fn is_zip(path: &Path) -> bool {
    fs::read(path).map(|bytes| bytes.starts_with(b"PK")).unwrap_or(false)
}

#[test]
fn test_full_run_writes_outputs() {
    let (_dir, config) = setup(POKEMON_CSV);

    let summary = run(&config, &mut std::io::sink()).unwrap();

    assert_eq!(summary.loaded, 6);
    assert_eq!(summary.enriched, 5);
    assert!(is_zip(&config.workbook));

    let svg = fs::read_to_string(&config.plot).unwrap();
    assert!(svg.contains("Defensive Vulnerability Score"));
    assert!(svg.contains("Total Stats"));
    assert!(svg.contains("Most Vulnerable"));
    assert!(svg.contains("Fastest"));
    assert!(svg.contains("Charizard"));
}

#[test]
fn test_views_are_ranked() {
    let (_dir, config) = setup(POKEMON_CSV);

    let summary = run(&config, &mut std::io::sink()).unwrap();

    let kinds: Vec<ViewKind> = summary.views.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, ViewKind::ALL.to_vec());

    // Charmander and Squirtle tie at 5.0; Charmander comes first in the file
    assert_eq!(
        names(&summary, ViewKind::MostVulnerable),
        vec!["Bulbasaur", "Venusaur", "Charmander"]
    );
    assert_eq!(
        names(&summary, ViewKind::Fastest),
        vec!["Charizard", "Venusaur", "Charmander"]
    );
}

#[test]
fn test_excluded_forms_absent_from_every_view() {
    let (_dir, config) = setup(POKEMON_CSV);
    let config = ReportConfig {
        top_n: 10,
        ..config
    };

    let summary = run(&config, &mut std::io::sink()).unwrap();

    for (_, names) in &summary.views {
        assert_eq!(names.len(), 5);
        assert!(names.iter().all(|n| !n.contains("Mega")));
    }
}

#[test]
fn test_console_output() {
    let (_dir, config) = setup(POKEMON_CSV);
    let mut out = Vec::new();

    run(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Most Vulnerable (vul)"));
    assert!(text.contains("Most Weaknesses (weak)"));
    assert!(text.contains("Most Resistances (resist)"));
    assert!(text.contains("Fastest (blitz)"));
    assert!(!text.contains("Mega"));
}

#[test]
fn test_standard_chart_needs_no_matrix_file() {
    let (dir, config) = setup(POKEMON_CSV);
    fs::remove_file(dir.path().join("effMat.csv")).unwrap();
    let config = ReportConfig {
        standard_chart: true,
        ..config
    };

    let summary = run(&config, &mut std::io::sink()).unwrap();
    assert_eq!(summary.enriched, 5);
}

#[test]
fn test_unknown_type_aborts_before_export() {
    let pokemon = format!("{}10,Caterpie,Bug,,195,45,30,35,20,20,45,1,False\n", POKEMON_CSV);
    let (_dir, config) = setup(&pokemon);

    let result = run(&config, &mut std::io::sink());

    assert!(matches!(result, Err(ReportError::Enrich(_))));
    assert!(!config.workbook.exists());
    assert!(!config.plot.exists());
}

#[test]
fn test_missing_input_is_load_error() {
    let (dir, config) = setup(POKEMON_CSV);
    fs::remove_file(dir.path().join("Pokemon.csv")).unwrap();

    let result = run(&config, &mut std::io::sink());

    assert!(matches!(result, Err(ReportError::Load(_))));
}

#[test]
fn test_unwritable_workbook_is_export_error() {
    let (dir, config) = setup(POKEMON_CSV);
    let config = ReportConfig {
        workbook: dir.path().join("missing-dir").join("pkmn.xlsx"),
        ..config
    };

    let result = run(&config, &mut std::io::sink());

    assert!(matches!(result, Err(ReportError::Export { .. })));
}

#[test]
fn test_invalid_config_is_rejected() {
    let (_dir, config) = setup(POKEMON_CSV);
    let config = ReportConfig { top_n: 0, ..config };

    let result = run(&config, &mut std::io::sink());

    assert!(matches!(result, Err(ReportError::Config(_))));
}
