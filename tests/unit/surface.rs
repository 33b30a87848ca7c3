use super::*;
use crate::catalog::{Catalog, CatalogItem};

fn catalog(n: usize) -> Catalog {
    Catalog::new(
        (0..n)
            .map(|i| CatalogItem {
                label: format!("item{i}"),
                icon_ref: format!("item{i}.svg"),
            })
            .collect(),
    )
}

fn metrics(slot: f64, gap: f64) -> SurfaceMetrics {
    SurfaceMetrics {
        slot_width: slot,
        gap,
    }
}

#[test]
fn metrics_validate() {
    SurfaceMetrics::default().validate().unwrap();
    metrics(0.0, 0.0).validate().unwrap();
    assert!(metrics(-1.0, 0.0).validate().is_err());
    assert!(metrics(80.0, f64::NAN).validate().is_err());
}

#[test]
fn track_width_is_slots_plus_inner_gaps() {
    let track = TripledTrack::from_catalog(&catalog(3));
    // 9 slots of 100 px, 8 inner gaps of 10 px.
    let s = RenderSurface::new(&track, metrics(100.0, 10.0));
    assert_eq!(s.track_width(), 9.0 * 100.0 + 8.0 * 10.0);
    assert_eq!(s.placements().len(), 9);

    // The spec scenario: 100 px slots, no gap => 900 px track.
    let s = RenderSurface::new(&track, metrics(100.0, 0.0));
    assert_eq!(s.track_width(), 900.0);
}

#[test]
fn empty_track_has_zero_width() {
    let track = TripledTrack::from_catalog(&Catalog::default());
    let s = RenderSurface::new(&track, SurfaceMetrics::default());
    assert_eq!(s.track_width(), 0.0);
    assert!(s.placements().is_empty());
    assert!(s.visible(0.0, 1000.0).is_empty());
}

#[test]
fn placements_are_laid_out_left_to_right() {
    let track = TripledTrack::from_catalog(&catalog(2));
    let s = RenderSurface::new(&track, metrics(100.0, 10.0));
    let p = s.placements();
    assert_eq!(p[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(p[1].rect, Rect::new(110.0, 0.0, 210.0, 100.0));
    assert_eq!(p[0].key, "item0-0");
    assert_eq!(p[2].key, "item0-2");
    assert_eq!(p[0].icon_ref, "item0.svg");
}

#[test]
fn visible_clips_and_translates_into_viewport_space() {
    let track = TripledTrack::from_catalog(&catalog(3));
    let s = RenderSurface::new(&track, metrics(100.0, 0.0));

    // Viewport of 250 px at offset 150: slot 1 (100..200) is half out,
    // slots 2 and 3 (200..300, 300..400) straddle and end the window.
    let vis = s.visible(150.0, 250.0);
    let keys: Vec<&str> = vis.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, ["item1-1", "item2-2", "item0-3"]);
    assert_eq!(vis[0].rect, Rect::new(-50.0, 0.0, 50.0, 100.0));
    assert_eq!(vis[1].rect, Rect::new(50.0, 0.0, 150.0, 100.0));
}

#[test]
fn visible_edges_are_half_open() {
    let track = TripledTrack::from_catalog(&catalog(3));
    let s = RenderSurface::new(&track, metrics(100.0, 0.0));

    // A slot ending exactly at the offset is not visible; one starting
    // exactly at the window end is not either.
    let vis = s.visible(100.0, 100.0);
    let keys: Vec<&str> = vis.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, ["item1-1"]);
}

#[test]
fn visible_guards_degenerate_windows() {
    let track = TripledTrack::from_catalog(&catalog(1));
    let s = RenderSurface::new(&track, metrics(100.0, 0.0));
    assert!(s.visible(0.0, 0.0).is_empty());
    assert!(s.visible(f64::NAN, 100.0).is_empty());
    assert!(s.visible(0.0, f64::NAN).is_empty());
}

#[test]
fn rebuild_only_on_fingerprint_change() {
    let c2 = catalog(2);
    let track2 = TripledTrack::from_catalog(&c2);
    let mut s = RenderSurface::new(&track2, metrics(100.0, 0.0));
    let before = s.track_width();

    // Same content: no relayout.
    s.rebuild(&TripledTrack::from_catalog(&c2));
    assert_eq!(s.track_width(), before);

    let track3 = TripledTrack::from_catalog(&catalog(3));
    s.rebuild(&track3);
    assert_eq!(s.track_width(), 900.0);
    assert_eq!(s.fingerprint(), track3.fingerprint());
}

#[test]
fn surface_measures_its_own_track() {
    let track = TripledTrack::from_catalog(&catalog(3));
    let s = RenderSurface::new(&track, metrics(100.0, 0.0));
    assert_eq!(MeasureTrack::track_width(&s), 900.0);
}
