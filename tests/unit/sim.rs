use super::*;
use crate::{
    catalog::{Catalog, CatalogItem},
    foundation::core::{Direction, Velocity},
    measure::FixedMeasure,
    row::{RowConfig, ScrollerRow},
    surface::SurfaceMetrics,
};

fn spec_row(direction: Direction) -> ScrollerRow {
    let catalog = Catalog::new(
        ["A", "B", "C"]
            .iter()
            .map(|l| CatalogItem {
                label: l.to_string(),
                icon_ref: format!("{l}.svg"),
            })
            .collect(),
    );
    ScrollerRow::new(
        &catalog,
        RowConfig {
            direction,
            velocity: Velocity::DEFAULT,
            metrics: SurfaceMetrics {
                slot_width: 100.0,
                gap: 0.0,
            },
        },
    )
    .unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn forward_spec_scenario() {
    init_tracing();
    let mut row = spec_row(Direction::Forward);
    let measure = FixedMeasure(900.0);

    let report = simulate(&mut row, &measure, 600, true);
    assert_eq!(report.segment_width, 300.0);
    assert_eq!(report.final_offset, 0.0);
    assert_eq!(report.wraps, 1);

    let offsets = report.offsets.unwrap();
    assert_eq!(offsets.len(), 600);
    assert_eq!(offsets[0], 0.5);
    assert_eq!(offsets[598], 299.5);
    assert_eq!(offsets[599], 0.0);

    // Frame 601.
    let report = simulate(&mut row, &measure, 1, false);
    assert_eq!(report.final_offset, 0.5);
    assert_eq!(report.wraps, 0);
}

#[test]
fn reverse_spec_scenario() {
    let mut row = spec_row(Direction::Reverse);
    let measure = FixedMeasure(900.0);

    let report = simulate(&mut row, &measure, 600, false);
    assert_eq!(report.final_offset, 300.0);
    assert_eq!(report.wraps, 1);

    let report = simulate(&mut row, &measure, 1, false);
    assert_eq!(report.final_offset, 299.5);
}

#[test]
fn empty_catalog_scenario() {
    let mut row = ScrollerRow::new(&Catalog::default(), RowConfig::default()).unwrap();
    let measure = FixedMeasure(0.0);

    let report = simulate(&mut row, &measure, 1000, false);
    assert_eq!(report.final_offset, 0.0);
    assert_eq!(report.wraps, 0);
    assert_eq!(report.segment_width, 0.0);
}

#[test]
fn report_serializes_without_offsets_when_not_recorded() {
    let mut row = spec_row(Direction::Forward);
    let report = simulate(&mut row, &FixedMeasure(900.0), 3, false);
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("offsets").is_none());
    assert_eq!(json["frames"], 3);
}

#[test]
fn simulation_is_deterministic() {
    let run = || {
        let mut row = spec_row(Direction::Forward);
        simulate(&mut row, &FixedMeasure(900.0), 1234, true)
    };
    let (a, b) = (run(), run());
    assert_eq!(a.final_offset, b.final_offset);
    assert_eq!(a.wraps, b.wraps);
    assert_eq!(a.offsets, b.offsets);
}
