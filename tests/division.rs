//! Division area layout tests
//!
//! Covers the layout properties over every combination of enabled slots,
//! the concrete single-left and clamping scenarios, divider drags, and the
//! re-entrant layout guard.

mod common;

use common::*;
use viewpane::division::{DivisionArea, NodeRef};
use viewpane::geometry::{Insets, Rect, Side};
use viewpane::position::{DividerPos, EightPos, Slot};

/// Width and height of the positive-area intersection
fn overlap(a: &Rect, b: &Rect) -> (f32, f32) {
    (
        a.right().min(b.right()) - a.x.max(b.x),
        a.bottom().min(b.bottom()) - a.y.max(b.y),
    )
}

fn viewports() -> [Rect; 4] {
    [
        Rect::new(0.0, 0.0, 800.0, 600.0),
        Rect::new(10.0, 20.0, 331.0, 257.0),
        Rect::new(0.0, 0.0, 150.0, 90.0),
        Rect::new(0.0, 0.0, 0.0, 0.0),
    ]
}

// ========================================================================
// Concrete Scenarios
// ========================================================================

#[test]
fn test_single_left_slot_scenario() {
    let config = test_config();
    let left = probe();
    let center = probe();
    let mut area = DivisionArea::new(&config);
    area.set_content(Some(center.clone()));
    area.helper_mut().set_extent(EightPos::LeftTop, 200.0);
    area.set_view(EightPos::LeftTop, Some(left.clone()));
    area.resize_relocate(viewport());

    assert_eq!(left.borrow().bounds, Some(Rect::new(0.0, 0.0, 200.0, 600.0)));
    assert_eq!(center.borrow().bounds, Some(Rect::new(200.0, 0.0, 600.0, 600.0)));

    let dividers: Vec<_> = area.dividers().map(|d| (d.pos(), d.bounds())).collect();
    assert_eq!(
        dividers,
        vec![(DividerPos::Left, Rect::new(198.0, 0.0, 4.0, 600.0))]
    );
}

#[test]
fn test_center_minimum_clamps_right_slot() {
    let config = test_config();
    let mut area = DivisionArea::new(&config);
    area.helper_mut().set_extent(EightPos::LeftTop, 200.0);
    area.helper_mut().set_extent(EightPos::RightTop, 700.0);
    area.set_view(EightPos::LeftTop, Some(probe()));
    area.set_view(EightPos::RightTop, Some(probe()));
    area.resize_relocate(viewport());

    let helper = area.helper();
    let left = helper.bound(EightPos::LeftTop).rect;
    let right = helper.bound(EightPos::RightTop).rect;
    assert_eq!(left.width, 200.0);
    assert!(right.width <= 500.0);
    assert!(helper.center.width >= 100.0);
    assert_eq!(left.width + right.width + helper.center.width, 800.0);
}

// ========================================================================
// Properties Over Every Combination
// ========================================================================

#[test]
fn test_no_overlap_for_every_combination() {
    let config = test_config();
    for mask in 0..=255u8 {
        for vp in viewports() {
            let mut area = area_with(&config, &positions(mask));
            area.resize_relocate(vp);
            let content = area.helper().content();
            let rects = regions(&area);

            for r in &rects {
                assert!(
                    content.contains_rect(r),
                    "mask {:#010b}: {:?} escapes {:?}",
                    mask,
                    r,
                    content
                );
            }
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    let (dx, dy) = overlap(a, b);
                    assert!(
                        dx <= 0.0 || dy <= 0.0,
                        "mask {:#010b}: {:?} overlaps {:?}",
                        mask,
                        a,
                        b
                    );
                }
            }
        }
    }
}

#[test]
fn test_space_is_conserved_for_every_combination() {
    let config = test_config();
    for mask in 0..=255u8 {
        for vp in viewports() {
            let mut area = area_with(&config, &positions(mask));
            area.resize_relocate(vp);
            let helper = area.helper();
            let content = helper.content();

            let across = helper.strip(Side::Left).width
                + helper.center.width
                + helper.strip(Side::Right).width;
            let down = helper.strip(Side::Top).height
                + helper.center.height
                + helper.strip(Side::Bottom).height;
            assert_eq!(across, content.width, "mask {:#010b} at {:?}", mask, vp);
            assert_eq!(down, content.height, "mask {:#010b} at {:?}", mask, vp);

            let covered: f32 = regions(&area).iter().map(area_of).sum();
            assert_eq!(covered, area_of(&content), "mask {:#010b} at {:?}", mask, vp);
        }
    }
}

#[test]
fn test_dividers_exist_only_between_enabled_regions() {
    let config = test_config();
    for mask in 0..=255u8 {
        let mut area = area_with(&config, &positions(mask));
        area.resize_relocate(viewport());
        let helper = area.helper();

        for pos in DividerPos::ALL {
            let [leading, trailing] = pos.positions();
            let live = if pos.is_split() {
                helper.is_enabled(leading) && helper.is_enabled(trailing)
            } else {
                helper.is_enabled(leading) || helper.is_enabled(trailing)
            };
            assert_eq!(area.divider(pos).is_some(), live, "{:?} mask {:#010b}", pos, mask);
            assert_eq!(helper.divider(pos).is_some(), live);
        }
    }
}

#[test]
fn test_layout_is_idempotent() {
    let config = test_config();
    for mask in [0u8, 0b0101_0101, 0b1111_1111, 0b1000_0110] {
        let mut area = area_with(&config, &positions(mask));
        area.resize_relocate(viewport());
        let first = area.helper().clone();

        area.layout_children();
        let second = area.helper();
        assert_eq!(first.bounds, second.bounds);
        assert_eq!(first.center, second.center);
        assert_eq!(first.dividers, second.dividers);
    }
}

#[test]
fn test_center_keeps_minimum_with_huge_extents() {
    let config = test_config();
    let mut area = area_with(&config, &EightPos::ALL);
    for pos in EightPos::ALL {
        area.helper_mut().set_extent(pos, 10_000.0);
    }
    area.resize_relocate(viewport());

    let center = area.helper().center;
    assert_eq!(center.width, 100.0);
    assert_eq!(center.height, 100.0);
}

#[test]
fn test_disabling_everything_gives_center_the_content_rect() {
    let mut config = test_config();
    config.insets = Insets::all(10.0);
    let mut area = area_with(&config, &EightPos::ALL);
    area.resize_relocate(viewport());

    for pos in EightPos::ALL {
        area.set_view(pos, None);
    }
    assert_eq!(area.dividers().count(), 0);
    area.layout_if_needed();

    assert_eq!(area.helper().center, Rect::new(10.0, 10.0, 780.0, 580.0));
    assert_eq!(area.helper().content(), area.helper().center);
}

#[test]
fn test_viewport_below_minimum_center() {
    let config = test_config();
    let mut area = area_with(&config, &EightPos::ALL);
    area.resize_relocate(Rect::new(0.0, 0.0, 60.0, 40.0));

    let helper = area.helper();
    assert_eq!(helper.center, Rect::new(0.0, 0.0, 60.0, 40.0));
    for pos in EightPos::ALL {
        assert!(helper.bound(pos).rect.is_empty(), "{:?}", pos);
    }
}

// ========================================================================
// Enable/Disable
// ========================================================================

#[test]
fn test_disable_enable_round_trip() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::LeftTop, EightPos::BottomLeft]);
    area.helper_mut().set_extent(EightPos::LeftTop, 180.0);
    area.resize_relocate(viewport());
    let before = area.helper().bound(EightPos::LeftTop).rect;

    let removed = area.set_view(EightPos::LeftTop, None);
    assert!(removed.is_some());
    // Divider goes away with its region, before the next pass
    assert!(area.divider(DividerPos::Left).is_none());
    area.layout_if_needed();
    assert!(!area.helper().is_enabled(EightPos::LeftTop));
    assert_eq!(area.helper().extent(EightPos::LeftTop), 180.0);
    assert!(!area.view(EightPos::LeftTop).unwrap().is_managed());

    area.set_view(EightPos::LeftTop, Some(probe()));
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftTop).rect, before);
}

#[test]
fn test_set_view_returns_previous_node() {
    let config = test_config();
    let mut area: DivisionArea<Node> = DivisionArea::new(&config);
    let first = probe();
    let second = probe();
    assert!(area.set_view(EightPos::TopRight, Some(first.clone())).is_none());
    assert_eq!(area.set_view(EightPos::TopRight, Some(second)), Some(first));
    assert!(area.helper().is_enabled(EightPos::TopRight));
}

#[test]
fn test_unchanged_bounds_skip_layout() {
    let config = test_config();
    let node = probe();
    let mut area = DivisionArea::new(&config);
    area.set_content(Some(node.clone()));
    area.resize_relocate(viewport());
    area.resize_relocate(viewport());
    assert_eq!(node.borrow().relocations, 1);

    area.resize_relocate(Rect::new(0.0, 0.0, 640.0, 480.0));
    assert_eq!(node.borrow().relocations, 2);
}

// ========================================================================
// Re-entrancy
// ========================================================================

#[test]
fn test_layout_request_from_child_is_suppressed() {
    let config = test_config();
    let mut area: DivisionArea<Node> = DivisionArea::new(&config);
    let node = NodeRef::new(Probe {
        requester: Some(area.layout_handle()),
        ..Probe::default()
    });
    area.set_view(EightPos::RightBottom, Some(node.clone()));
    area.resize_relocate(viewport());

    assert_eq!(node.borrow().request_results, vec![false]);
    assert!(!area.needs_layout());

    // Outside a pass the same handle works
    assert!(area.layout_handle().request_layout());
    assert!(area.needs_layout());
}

// ========================================================================
// Divider Drags
// ========================================================================

#[test]
fn test_drag_left_divider() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::LeftTop]);
    area.helper_mut().set_extent(EightPos::LeftTop, 200.0);
    area.resize_relocate(viewport());

    area.begin_divider_drag(DividerPos::Left, 200.0, 300.0);
    assert_eq!(area.dragging_divider(), Some(DividerPos::Left));
    assert!(area.drag_divider(DividerPos::Left, 250.0, 300.0));
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftTop).rect.width, 250.0);

    // Past the center minimum
    area.drag_divider(DividerPos::Left, 1000.0, 300.0);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftTop).rect.width, 700.0);
    assert_eq!(area.helper().center.width, 100.0);

    // Past the region minimum
    area.drag_divider(DividerPos::Left, -500.0, 300.0);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftTop).rect.width, 20.0);

    area.end_divider_drag(DividerPos::Left);
    assert_eq!(area.dragging_divider(), None);
    assert!(!area.drag_divider(DividerPos::Left, 300.0, 300.0));
}

#[test]
fn test_drag_right_divider_grows_leftwards() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::RightTop]);
    area.helper_mut().set_extent(EightPos::RightTop, 200.0);
    area.resize_relocate(viewport());

    area.begin_divider_drag(DividerPos::Right, 600.0, 10.0);
    area.drag_divider(DividerPos::Right, 550.0, 10.0);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::RightTop).rect, Rect::new(550.0, 0.0, 250.0, 600.0));
}

#[test]
fn test_drag_in_cramped_viewport_keeps_extent() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::TopLeft]);
    area.resize_relocate(Rect::new(0.0, 0.0, 80.0, 60.0));
    assert_eq!(area.helper().bound(EightPos::TopLeft).rect.height, 0.0);

    area.begin_divider_drag(DividerPos::Top, 40.0, 0.0);
    assert!(!area.drag_divider(DividerPos::Top, 40.0, 0.0));
    // No room for min_region: the drag is refused rather than collapsing
    assert!(!area.drag_divider(DividerPos::Top, 40.0, 30.0));
    area.end_divider_drag(DividerPos::Top);
    assert_eq!(area.helper().extent(EightPos::TopLeft), 150.0);

    area.resize_relocate(viewport());
    assert_eq!(area.helper().bound(EightPos::TopLeft).rect.height, 150.0);
}

#[test]
fn test_press_on_clamped_divider_keeps_requested_extent() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::LeftTop, EightPos::RightTop]);
    area.helper_mut().set_extent(EightPos::LeftTop, 200.0);
    area.helper_mut().set_extent(EightPos::RightTop, 700.0);
    area.resize_relocate(viewport());
    assert_eq!(area.helper().bound(EightPos::RightTop).rect.width, 500.0);

    area.begin_divider_drag(DividerPos::Right, 300.0, 10.0);
    assert!(!area.drag_divider(DividerPos::Right, 300.0, 10.0));
    // Widening past the clamp changes nothing either
    assert!(!area.drag_divider(DividerPos::Right, 290.0, 10.0));
    area.end_divider_drag(DividerPos::Right);
    assert_eq!(area.helper().extent(EightPos::RightTop), 700.0);

    area.resize_relocate(Rect::new(0.0, 0.0, 2000.0, 600.0));
    assert_eq!(area.helper().bound(EightPos::RightTop).rect.width, 700.0);
}

#[test]
fn test_edge_drag_keeps_sibling_difference() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::LeftTop, EightPos::LeftBottom]);
    area.helper_mut().set_extent(EightPos::LeftTop, 200.0);
    area.helper_mut().set_extent(EightPos::LeftBottom, 150.0);
    area.resize_relocate(viewport());

    area.begin_divider_drag(DividerPos::Left, 200.0, 100.0);
    assert!(!area.drag_divider(DividerPos::Left, 200.0, 100.0));
    area.end_divider_drag(DividerPos::Left);

    area.set_view(EightPos::LeftTop, None);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftBottom).rect.width, 150.0);

    area.set_view(EightPos::LeftTop, Some(probe()));
    area.layout_if_needed();
    area.begin_divider_drag(DividerPos::Left, 200.0, 100.0);
    assert!(area.drag_divider(DividerPos::Left, 220.0, 100.0));
    area.end_divider_drag(DividerPos::Left);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftTop).rect.width, 220.0);
    assert_eq!(area.helper().extent(EightPos::LeftBottom), 170.0);

    area.set_view(EightPos::LeftTop, None);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftBottom).rect.width, 170.0);
}

#[test]
fn test_drag_split_divider() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::LeftTop, EightPos::LeftBottom]);
    area.resize_relocate(viewport());
    assert_eq!(area.helper().bound(EightPos::LeftTop).rect.height, 300.0);
    assert_eq!(
        area.divider(DividerPos::LeftSplit).map(|d| d.bounds()),
        Some(Rect::new(0.0, 298.0, 220.0, 4.0))
    );

    area.begin_divider_drag(DividerPos::LeftSplit, 100.0, 300.0);
    area.drag_divider(DividerPos::LeftSplit, 100.0, 400.0);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftTop).rect.height, 400.0);
    assert_eq!(area.helper().bound(EightPos::LeftBottom).rect.height, 200.0);

    area.drag_divider(DividerPos::LeftSplit, 100.0, 10_000.0);
    area.layout_if_needed();
    assert_eq!(area.helper().bound(EightPos::LeftBottom).rect.height, 20.0);
    area.end_divider_drag(DividerPos::LeftSplit);
}

#[test]
#[should_panic(expected = "does not join two enabled regions")]
fn test_dragging_dead_divider_panics() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::LeftTop]);
    area.resize_relocate(viewport());
    area.begin_divider_drag(DividerPos::Right, 700.0, 100.0);
}

// ========================================================================
// Hit Testing
// ========================================================================

#[test]
fn test_hit_testing() {
    let config = test_config();
    let mut area = area_with(&config, &[EightPos::LeftTop, EightPos::LeftBottom]);
    area.helper_mut().set_extent(EightPos::LeftTop, 200.0);
    area.helper_mut().set_extent(EightPos::LeftBottom, 200.0);
    area.resize_relocate(viewport());

    assert_eq!(area.divider_at(199.0, 100.0), Some(DividerPos::Left));
    assert_eq!(area.divider_at(100.0, 299.0), Some(DividerPos::LeftSplit));
    assert_eq!(area.divider_at(500.0, 100.0), None);

    assert_eq!(area.region_at(50.0, 50.0), Some(Slot::Position(EightPos::LeftTop)));
    assert_eq!(area.region_at(50.0, 550.0), Some(Slot::Position(EightPos::LeftBottom)));
    assert_eq!(area.region_at(500.0, 300.0), Some(Slot::Center));
    assert_eq!(area.region_at(900.0, 300.0), None);
}
