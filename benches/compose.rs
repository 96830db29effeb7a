use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_atom::core::lookup;
use tui_atom::term::{encode_frame_into, AtomView};
use tui_atom::types::VisualizationMode;

fn bench_compose_static(c: &mut Criterion) {
    let view = AtomView::default();
    let gold = lookup(79);

    c.bench_function("compose_static_gold", |b| {
        b.iter(|| view.compose(black_box(&gold), VisualizationMode::Static, 0.0))
    });
}

fn bench_compose_animated(c: &mut Criterion) {
    let view = AtomView::default();
    let oganesson = lookup(118);
    let mut time = 0.0;

    c.bench_function("compose_animated_oganesson", |b| {
        b.iter(|| {
            time += 0.08;
            view.compose(&oganesson, VisualizationMode::Animated, black_box(time))
        })
    });
}

fn bench_encode_frame(c: &mut Criterion) {
    let frame = AtomView::default().compose(&lookup(118), VisualizationMode::Animated, 3.2);
    let mut buf = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_frame_oganesson", |b| {
        b.iter(|| {
            buf.clear();
            encode_frame_into(black_box(&frame), &mut buf).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_compose_static,
    bench_compose_animated,
    bench_encode_frame
);
criterion_main!(benches);
