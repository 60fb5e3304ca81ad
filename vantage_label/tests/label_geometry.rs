// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vantage_label` crate.
//!
//! These drive label placement with transforms produced by a real
//! `vantage_view::Viewport` and check the anchor and sizing contracts.

use kurbo::{Point, Rect, Size, Vec2};
use vantage_label::{
    AnchorFraction, HeuristicTextMeasurer, LabelPlacement, LabelPredicate, TextMeasurer,
};
use vantage_view::{Viewport, ViewportFlags};

fn flipped_view() -> Viewport {
    let mut view = Viewport::with_flags(
        Size::new(400.0, 300.0),
        ViewportFlags::FLIPPED_VERTICALLY | ViewportFlags::MAINTAIN_ASPECT_RATIO,
    )
    .unwrap();
    view.set_displayed_world_area(Rect::new(0.0, 0.0, 40.0, 30.0))
        .unwrap();
    view
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn anchor_tracks_location_through_view_edits() {
    let mut view = flipped_view();
    let measurer = HeuristicTextMeasurer::default();
    let bounds = measurer.text_bounds("12.5");
    let placement = LabelPlacement::new(Point::new(12.5, 7.0))
        .unwrap()
        .with_anchor(AnchorFraction::CENTER)
        .with_angle(-0.4)
        .unwrap();

    view.zoom(Point::new(120.0, 80.0), 1.5, 1.5).unwrap();
    view.rotate(Point::new(200.0, 150.0), 0.25).unwrap();
    view.pan(Vec2::new(-30.0, 12.0)).unwrap();

    for transforming in [false, true] {
        let p = placement.with_transforming_labels(transforming);
        let shape = p.shape(bounds, view.world_to_screen());
        let anchor_on_screen = shape.transform() * AnchorFraction::CENTER.resolve(bounds);
        let expected = view.world_to_screen_point(Point::new(12.5, 7.0));
        assert!(close(anchor_on_screen, expected), "{anchor_on_screen:?}");
        assert!(shape.contains(expected), "anchor lies on the footprint");
    }
}

#[test]
fn fixed_labels_keep_pixel_size_under_zoom() {
    let mut view = flipped_view();
    let measurer = HeuristicTextMeasurer::new(10.0);
    let bounds = measurer.text_bounds("label");
    let placement = LabelPlacement::new(Point::new(20.0, 15.0)).unwrap();

    let before = placement.shape(bounds, view.world_to_screen());
    view.zoom(Point::new(200.0, 150.0), 3.0, 3.0).unwrap();
    let after = placement.shape(bounds, view.world_to_screen());

    assert!((before.width() - after.width()).abs() < 1e-9, "width");
    assert!((before.height() - after.height()).abs() < 1e-9, "height");
    assert!((after.width() - 30.0).abs() < 1e-9, "5 glyphs at 6px");
}

#[test]
fn transforming_labels_scale_and_flip_with_view() {
    let mut view = flipped_view();
    let bounds = Rect::new(0.0, 0.0, 4.0, 1.0);
    let placement = LabelPlacement::new(Point::new(20.0, 15.0))
        .unwrap()
        .with_transforming_labels(true);

    let base = placement.shape(bounds, view.world_to_screen());
    view.zoom(Point::new(200.0, 150.0), 2.0, 2.0).unwrap();
    let zoomed = placement.shape(bounds, view.world_to_screen());
    assert!((zoomed.width() - 2.0 * base.width()).abs() < 1e-9, "width doubles");

    // Local +y points up on a flipped view.
    let [tl, _, _, bl] = zoomed.corners();
    assert!(bl.y < tl.y, "{tl:?} {bl:?}");
}

#[test]
fn tick_labels_are_vetoed_when_crowded() {
    let view = flipped_view();
    let measurer = HeuristicTextMeasurer::new(12.0);
    let room = 10.0 * view.scale_x();
    let fits = LabelPredicate::width_between(0.0, room)
        .and(LabelPredicate::within(Rect::from_origin_size(
            Point::ZERO,
            view.size(),
        )));

    let placed: Vec<_> = [0.0, 10.0, 20.0, 30.0, 40.0]
        .into_iter()
        .filter_map(|x| {
            LabelPlacement::new(Point::new(x, 5.0))
                .unwrap()
                .with_anchor(AnchorFraction::TOP_CENTER)
                .layout("10", &measurer, view.world_to_screen(), &fits)
        })
        .collect();
    // The outermost labels hang off the screen edges.
    assert_eq!(placed.len(), 3);
    for pair in placed.windows(2) {
        assert!(!pair[0].overlaps(&pair[1]), "neighbors do not collide");
    }

    let wide = LabelPlacement::new(Point::new(20.0, 5.0))
        .unwrap()
        .with_anchor(AnchorFraction::TOP_CENTER)
        .layout("1000000000000000", &measurer, view.world_to_screen(), &fits);
    assert!(wide.is_none(), "wider than the tick spacing");
}

#[test]
fn rotated_footprint_outline_matches_corners() {
    let placement = LabelPlacement::default()
        .with_anchor(AnchorFraction::CENTER)
        .with_angle(core::f64::consts::FRAC_PI_4)
        .unwrap();
    let shape = placement.shape(Rect::new(0.0, 0.0, 20.0, 4.0), flipped_view().world_to_screen());
    let path = shape.to_path();
    assert_eq!(path.elements().len(), 5);
    let outline = kurbo::Shape::bounding_box(&path);
    let expected = shape.bounding_box();
    assert!(close(outline.origin(), expected.origin()), "origin");
    assert!((outline.width() - expected.width()).abs() < 1e-9, "width");
}
