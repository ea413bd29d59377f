use criterion::{Criterion, black_box, criterion_group, criterion_main};
use verve::fx::{EffectDispatcher, names};
use verve::traits::recording::RecordingBackend;
use verve::tween::{Easing, TweenPlayer, TweenSpec};
use verve::types::{Vec3, Vec2};
use verve::ui::Visual;

fn tween_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tween");

    group.bench_function("advance_scale_fade_position", |b| {
        let mut visual = Visual::new();
        let mut player = TweenPlayer::new();
        let spec = TweenSpec::new(10_000.0)
            .with_scale(Vec3::splat(0.8), Vec3::ONE)
            .with_opacity(0.0, 1.0)
            .with_position(Vec2::ZERO, Vec2::new(100.0, 100.0))
            .with_easing(Easing::QuadInOut)
            .looped();
        player.play(spec, &mut visual);
        b.iter(|| {
            player.advance(black_box(1.0 / 60.0), &mut visual);
        });
    });

    group.finish();
}

fn dispatcher_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatcher");

    group.bench_function("play_and_return_cycle", |b| {
        let mut backend = RecordingBackend::new();
        let template = backend.add_template_with_duration("effects/CoinCollect.vfx", 0.5);
        let mut dispatcher = EffectDispatcher::new();
        dispatcher.register(&mut backend, names::COIN_COLLECT, Some(template), 32);

        b.iter(|| {
            dispatcher.play_at(
                &mut backend,
                names::COIN_COLLECT,
                black_box(Vec3::new(1.0, 2.0, 0.0)),
            );
            dispatcher.advance(&mut backend, black_box(1.0 / 60.0));
        });
    });

    group.finish();
}

criterion_group!(benches, tween_benchmark, dispatcher_benchmark);
criterion_main!(benches);
