//! Carousel behaviour through the public showcase entry points.

use std::time::Duration;

use mindband_contracts::{EasingKind, Transition};
use mindband_model::ItemId;
use mindband_showcase::domains::carousel::{
    CarouselError, Direction, NavigationOutcome, ResizePolicy,
};
use mindband_showcase::domains::features::FeatureRegistry;
use mindband_showcase::infra::RuntimeConfig;
use mindband_showcase::infra::surfaces::{HeadlessTrack, MemoryRegion};
use mindband_showcase::{Outcome, Showcase, ShowcaseMessage};

fn showcase_at(width: u32) -> Showcase<HeadlessTrack, MemoryRegion> {
    Showcase::new(
        HeadlessTrack::new(width, 300.0),
        MemoryRegion::new(),
        &RuntimeConfig::new(),
    )
    .expect("built-in showcase")
}

fn showcase_with(
    width: u32,
    item_count: usize,
    config: &RuntimeConfig,
) -> Showcase<HeadlessTrack, MemoryRegion> {
    let items = (0..item_count)
        .map(|i| ItemId::new(format!("face-{i}")).unwrap())
        .collect();
    Showcase::with_items(
        HeadlessTrack::new(width, 300.0),
        MemoryRegion::new(),
        items,
        FeatureRegistry::default(),
        config,
    )
}

fn index(showcase: &Showcase<HeadlessTrack, MemoryRegion>) -> usize {
    showcase.carousel().state().current_index
}

#[test]
fn wide_viewport_shows_four_of_seven() {
    let showcase = showcase_at(1280);
    let state = showcase.carousel().state();
    assert_eq!(state.total_items, 7);
    assert_eq!(state.visible_count, 4);
    assert_eq!(state.max_start_index(), 3);
    assert_eq!(showcase.visible_items().len(), 4);
}

#[test]
fn forward_from_last_window_wraps_to_first() {
    let mut showcase = showcase_at(1280);
    for expected in [1, 2, 3] {
        assert_eq!(showcase.advance(Direction::Forward).index(), Some(expected));
    }
    assert_eq!(showcase.advance(Direction::Forward).index(), Some(0));
}

#[test]
fn backward_from_first_window_wraps_to_last() {
    let mut showcase = showcase_at(1280);
    let outcome = showcase.advance(Direction::Backward);
    assert_eq!(
        outcome,
        NavigationOutcome::Moved {
            index: 3,
            offset: 900.0
        }
    );
    assert_eq!(
        showcase.visible_items()[0].as_str(),
        "sleep-tracking"
    );
}

#[test]
fn each_advance_issues_exactly_one_animated_shift() {
    let mut showcase = showcase_at(1280);
    showcase.advance(Direction::Forward);
    showcase.advance(Direction::Forward);

    let shifts = showcase.carousel().track().shifts();
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].x, -300.0);
    assert_eq!(shifts[1].x, -600.0);
    for shift in shifts {
        assert_eq!(
            shift.transition,
            Transition::Animated {
                duration: Duration::from_millis(500),
                easing: EasingKind::Ease,
            }
        );
    }
}

#[test]
fn shift_matches_committed_state() {
    let mut showcase = showcase_at(700);
    showcase.advance(Direction::Forward);
    let state = *showcase.carousel().state();
    let last = showcase.carousel().track().last_shift().copied().unwrap();
    assert_eq!(state.visible_count, 2);
    assert_eq!(-last.x, state.offset());
}

#[test]
fn resize_twice_is_idempotent() {
    let mut showcase = showcase_at(1280);
    showcase.advance(Direction::Forward);
    showcase.advance(Direction::Forward);

    showcase.carousel_mut().track_mut().set_viewport_width(600);
    let first = showcase.on_resize();
    let second = showcase.on_resize();

    assert_eq!(first.current_index, 0);
    assert_eq!(second.current_index, 0);
    assert_eq!(first.visible_count, 1);

    let shifts = showcase.carousel().track().shifts();
    let tail = &shifts[shifts.len() - 2..];
    for shift in tail {
        assert_eq!(shift.x, 0.0);
        assert_eq!(shift.transition, Transition::Immediate);
    }
}

#[test]
fn resize_message_reclassifies_viewport() {
    let mut showcase = showcase_at(1280);
    showcase.carousel_mut().track_mut().set_viewport_width(768);
    let outcome = showcase.update(ShowcaseMessage::Resized).unwrap();
    match outcome {
        Outcome::Relaid(state) => {
            assert_eq!(state.visible_count, 2);
            assert_eq!(state.current_index, 0);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn clamp_policy_keeps_position_across_resize() {
    let config = RuntimeConfig {
        resize_policy: Some(ResizePolicy::Clamp),
        ..RuntimeConfig::new()
    };
    let mut showcase = showcase_with(500, 7, &config);
    for _ in 0..5 {
        showcase.advance(Direction::Forward);
    }
    assert_eq!(index(&showcase), 5);

    showcase.carousel_mut().track_mut().set_viewport_width(1280);
    let state = showcase.on_resize();
    assert_eq!(state.current_index, 3);
    assert_eq!(
        showcase.carousel().track().last_shift().unwrap().x,
        -900.0
    );
}

#[test]
fn clamp_policy_degenerate_resize_keeps_track_and_state_aligned() {
    let config = RuntimeConfig {
        resize_policy: Some(ResizePolicy::Clamp),
        ..RuntimeConfig::new()
    };
    let mut showcase = showcase_with(500, 7, &config);
    showcase.advance(Direction::Forward);
    showcase.advance(Direction::Forward);
    assert_eq!(index(&showcase), 2);

    showcase.carousel_mut().track_mut().set_item_width(0.0);
    let state = showcase.on_resize();
    assert_eq!(state.current_index, 0);
    assert_eq!(showcase.carousel().track().last_shift().unwrap().x, 0.0);

    // Geometry recovers: the next press moves one window from where the
    // track actually sits.
    showcase.carousel_mut().track_mut().set_item_width(300.0);
    assert_eq!(
        showcase.advance(Direction::Forward),
        NavigationOutcome::Moved {
            index: 1,
            offset: 300.0
        }
    );
}

#[test]
fn fewer_items_than_slots_never_moves() {
    let mut showcase = showcase_with(1280, 2, &RuntimeConfig::new());
    for direction in [Direction::Forward, Direction::Backward, Direction::Forward] {
        assert_eq!(showcase.advance(direction).index(), Some(0));
    }
    assert!(
        showcase
            .carousel()
            .track()
            .shifts()
            .iter()
            .all(|shift| shift.x == 0.0)
    );
}

#[test]
fn zero_item_width_suppresses_navigation() {
    let mut showcase = showcase_at(1280);
    showcase.advance(Direction::Forward);
    let shifts_before = showcase.carousel().track().shifts().len();

    showcase.carousel_mut().track_mut().set_item_width(0.0);
    let outcome = showcase.advance(Direction::Forward);

    assert!(matches!(
        outcome,
        NavigationOutcome::Suppressed(CarouselError::DegenerateLayout { .. })
    ));
    assert_eq!(index(&showcase), 1);
    assert_eq!(showcase.carousel().track().shifts().len(), shifts_before);
}

#[test]
fn overlapping_shifts_take_the_latest_target() {
    let mut showcase = showcase_at(1280);
    showcase.advance(Direction::Forward);
    showcase
        .carousel_mut()
        .track_mut()
        .advance_clock(Duration::from_millis(100));
    showcase.advance(Direction::Forward);

    let track = showcase.carousel_mut().track_mut();
    assert!(track.is_animating());
    assert_eq!(track.target_x(), -600.0);
    track.advance_clock(Duration::from_millis(500));
    assert_eq!(track.current_x(), -600.0);
}

#[test]
fn arrow_messages_drive_navigation() {
    let mut showcase = showcase_at(900);
    let outcome = showcase
        .update(ShowcaseMessage::Arrow(Direction::Backward))
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Navigated(NavigationOutcome::Moved {
            index: 4,
            offset: 1200.0
        })
    );
}

#[test]
fn arrow_clicks_route_by_control_id() {
    let mut showcase = showcase_at(1280);
    let outcome = showcase
        .update(ShowcaseMessage::ArrowClicked("left-arrow".into()))
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Navigated(NavigationOutcome::Moved {
            index: 3,
            offset: 900.0
        })
    );

    let outcome = showcase
        .update(ShowcaseMessage::ArrowClicked("right-arrow".into()))
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Navigated(NavigationOutcome::Moved {
            index: 0,
            offset: 0.0
        })
    );
    assert_eq!(showcase.carousel().track().shifts().len(), 2);
}

#[test]
fn clicks_on_other_controls_are_ignored() {
    let mut showcase = showcase_at(1280);
    let outcome = showcase
        .update(ShowcaseMessage::ArrowClicked("burger-menu".into()))
        .unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(index(&showcase), 0);
    assert!(showcase.carousel().track().shifts().is_empty());
}
