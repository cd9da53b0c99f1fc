use ai_humanities_diagrams::Theme;
use ai_humanities_diagrams::diagrams;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_render_all(c: &mut Criterion) {
    let theme = Theme::pastel();
    c.bench_function("render_all_16", |b| {
        b.iter(|| {
            for diagram in diagrams::all() {
                black_box((diagram.render)(&theme));
            }
        })
    });
}

fn bench_render_radar(c: &mut Criterion) {
    let theme = Theme::pastel();
    let radar = diagrams::find("six-tones-radar").expect("radar diagram registered");
    c.bench_function("render_radar", |b| b.iter(|| black_box((radar.render)(&theme))));
}

criterion_group!(benches, bench_render_all, bench_render_radar);
criterion_main!(benches);
