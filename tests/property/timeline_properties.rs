// Property-based tests for the timeline engine
// Checks geometry, synchronisation and drag invariants with random inputs

use proptest::prelude::*;
use roster_timeline::models::config::TimelineConfig;
use roster_timeline::models::interval::{IntervalStatus, TimeInterval};
use roster_timeline::models::track::Track;
use roster_timeline::services::timeline::mapper::{pixel_offset, pixel_width};
use roster_timeline::services::timeline::placement::{place_interval, DurationStyle};
use roster_timeline::services::timeline::sync::ScrollOffset;
use roster_timeline::services::timeline::{
    PointerKind, Selection, TargetKey, TimelineEngine, TrackScrollSynchronizer,
};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * b.abs().max(1.0)
}

fn engine_with_tracks(count: usize) -> TimelineEngine {
    let tracks: Vec<Track> = (0..count)
        .map(|i| Track::new(format!("t{}", i), format!("Track {}", i), i as u32))
        .collect();
    let mut engine = TimelineEngine::new(TimelineConfig::default());
    engine.mount_tracks(&tracks);
    engine
}

fn drag_sequence(origin_x: f32, moves: &[f32]) -> Vec<f32> {
    let mut engine = engine_with_tracks(3);
    engine.on_pointer_down(origin_x, PointerKind::Mouse);

    let mut offsets = Vec::new();
    for &x in moves {
        engine.on_pointer_move(x);
        engine.on_frame();
        offsets.push(engine.scroll_left());
    }
    engine.on_pointer_up();
    offsets
}

proptest! {
    /// Property: width is proportional to duration
    #[test]
    fn prop_pixel_width_proportional(
        start in 0..1440i32,
        length in 1..1440i32,
        hour_width in 1.0f32..400.0,
    ) {
        let end = (start + length).min(1440);
        prop_assume!(start < end);
        let config = TimelineConfig::with_hour_width(hour_width);

        let expected = (end - start) as f32 / 60.0 * hour_width;
        prop_assert!(close(pixel_width(start, end, &config), expected));
    }

    /// Property: longer intervals are never narrower
    #[test]
    fn prop_pixel_width_monotonic(
        start in 0..1000i32,
        a in 1..200i32,
        b in 1..200i32,
        hour_width in 1.0f32..400.0,
    ) {
        let config = TimelineConfig::with_hour_width(hour_width);
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            pixel_width(start, start + short, &config) <= pixel_width(start, start + long, &config)
        );
    }

    /// Property: the canvas spans exactly 24 hour columns
    #[test]
    fn prop_full_day_canvas(hour_width in 0.5f32..1000.0) {
        let config = TimelineConfig::with_hour_width(hour_width);
        prop_assert_eq!(pixel_offset(0, &config), 0.0);
        prop_assert!(close(pixel_offset(1440, &config), 24.0 * hour_width));
    }

    /// Property: chips stay inside the canvas whatever the input minutes
    #[test]
    fn prop_chips_inside_canvas(
        start in prop_oneof![-2000..3000i32, any::<i32>()],
        end in prop_oneof![-2000..3000i32, any::<i32>()],
    ) {
        let config = TimelineConfig::default();
        let interval = TimeInterval::new("t", start, end, IntervalStatus::Upcoming);

        match place_interval(0, &interval, &config, DurationStyle::Compact) {
            Some(chip) => {
                prop_assert!(start < end);
                prop_assert!(chip.left >= 0.0);
                prop_assert!(chip.width > 0.0);
                prop_assert!(chip.right() <= 2400.0 + 1e-3);
            }
            None => prop_assert!(start >= end || end <= 0 || start >= 1440),
        }
    }

    /// Property: every target holds the same offset after any write sequence
    #[test]
    fn prop_targets_stay_in_sync(
        target_count in 0usize..12,
        writes in prop::collection::vec(-5000.0f32..5000.0, 1..20),
        clamp in any::<bool>(),
    ) {
        let mut sync = TrackScrollSynchronizer::new(2400.0, clamp);
        for i in 0..target_count {
            sync.register(TargetKey::track(format!("t{}", i)), Box::new(ScrollOffset::default()));
        }

        for px in writes {
            let applied = sync.set_scroll_left(px);
            prop_assert!(sync.is_in_sync());
            for i in 0..target_count {
                let offset = sync.offset_of(&TargetKey::track(format!("t{}", i))).unwrap();
                prop_assert_eq!(offset.to_bits(), applied.to_bits());
            }
        }
    }

    /// Property: the same pointer sequence yields the same offsets
    #[test]
    fn prop_drag_is_deterministic(
        origin_x in 0.0f32..2000.0,
        moves in prop::collection::vec(0.0f32..2000.0, 1..30),
    ) {
        let first = drag_sequence(origin_x, &moves);
        let second = drag_sequence(origin_x, &moves);
        prop_assert_eq!(first, second);
    }

    /// Property: coalescing frames never changes where a drag lands
    #[test]
    fn prop_coalescing_keeps_final_value(
        origin_x in 0.0f32..2000.0,
        moves in prop::collection::vec(0.0f32..2000.0, 1..30),
    ) {
        let per_frame = drag_sequence(origin_x, &moves);

        let mut engine = engine_with_tracks(3);
        engine.on_pointer_down(origin_x, PointerKind::Touch);
        for &x in &moves {
            engine.on_pointer_move(x);
        }
        engine.on_pointer_up();
        engine.on_frame();

        prop_assert_eq!(engine.scroll_left(), *per_frame.last().unwrap());
        prop_assert!(engine.synchronizer().is_in_sync());
    }

    /// Property: repeating an unchanged selection does not move the view
    #[test]
    fn prop_auto_scroll_idempotent(
        starts in prop::collection::vec(0..1380i32, 0..8),
        active in prop::option::of(0usize..3),
    ) {
        let tracks: Vec<Track> = (0..3)
            .map(|i| Track::new(format!("t{}", i), format!("Track {}", i), i as u32))
            .collect();
        let intervals: Vec<TimeInterval> = starts
            .iter()
            .enumerate()
            .map(|(i, &s)| TimeInterval::new(format!("t{}", i % 3), s, s + 60, IntervalStatus::Upcoming))
            .collect();

        let mut engine = TimelineEngine::new(TimelineConfig::default());
        engine.layout(&tracks, &intervals);
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let selection = Selection::new(date, active);

        let first = engine.on_selection_change(selection, &tracks, &intervals);
        let second = engine.on_selection_change(selection, &tracks, &intervals);
        prop_assert_eq!(first, second);
        prop_assert!(first.is_some_and(|px| px >= 0.0));
    }
}
