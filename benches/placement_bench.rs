// Benchmark for timeline placement and drag handling
// Measures layout of large rosters and a long pointer drag

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roster_timeline::models::config::TimelineConfig;
use roster_timeline::models::interval::{IntervalStatus, TimeInterval};
use roster_timeline::models::track::Track;
use roster_timeline::services::timeline::placement::{layout_timeline, DurationStyle};
use roster_timeline::services::timeline::{PointerKind, TimelineEngine};

fn roster(track_count: usize, visits_per_track: usize) -> (Vec<Track>, Vec<TimeInterval>) {
    let tracks: Vec<Track> = (0..track_count)
        .map(|i| Track::new(format!("client-{}", i), format!("Client {}", i), i as u32))
        .collect();

    let slot = 1440 / visits_per_track.max(1) as i32;
    let intervals = tracks
        .iter()
        .flat_map(|track| {
            (0..visits_per_track).map(move |v| {
                let start = v as i32 * slot;
                TimeInterval::new(track.id.as_str(), start, start + slot / 2, IntervalStatus::Upcoming)
                    .with_label("Visit")
            })
        })
        .collect();

    (tracks, intervals)
}

fn bench_layout(c: &mut Criterion) {
    let config = TimelineConfig::default();
    let mut group = c.benchmark_group("layout_timeline");

    for track_count in [30usize, 200, 1000] {
        let (tracks, intervals) = roster(track_count, 8);
        group.bench_with_input(BenchmarkId::from_parameter(track_count), &track_count, |b, _| {
            b.iter(|| {
                layout_timeline(
                    black_box(&tracks),
                    black_box(&intervals),
                    &config,
                    DurationStyle::Verbose,
                )
            });
        });
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let (tracks, intervals) = roster(200, 4);
    let mut engine = TimelineEngine::new(TimelineConfig::default());
    engine.layout(&tracks, &intervals);
    engine.set_viewport_width(1200.0);

    c.bench_function("drag_500_moves_200_tracks", |b| {
        b.iter(|| {
            engine.on_pointer_down(1000.0, PointerKind::Mouse);
            for step in 0..500 {
                engine.on_pointer_move(black_box(1000.0 - step as f32));
                if step % 4 == 0 {
                    engine.on_frame();
                }
            }
            engine.on_pointer_up();
            engine.on_frame()
        });
    });
}

criterion_group!(benches, bench_layout, bench_drag);
criterion_main!(benches);
