use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use latex::{LatexContext, Settings, parse, render_to_string};

const CASES: [(&str, &str); 6] = [
    ("Prose", "The quick brown fox, 42 times over (and again)."),
    ("InlineMath", r"Euler: $e^{i\pi} + 1 = 0$ holds."),
    ("Fractions", r"$\frac{a^2 + b^2}{c_1} = \dfrac{\sqrt[3]{x}}{\sqrt{y}}$"),
    ("Delimiters", r"\[ \left( \sum_{i=1}^{n} x_i \right)^2 \leq n \sum x_i^2 \]"),
    ("Fonts", r"\textbf{Theorem.} Let $\mathbb{R}$ and $\operatorname*{argmax}_x f$."),
    ("Nested", r"${{{{{{{{a}}}}}}}}^{{{{b}}}}_{\frac{\frac{1}{2}}{\frac{3}{4}}}$"),
];

fn bench_parsing(c: &mut Criterion) {
    let ctx = LatexContext::default();
    let settings = Settings::default();

    let mut group = c.benchmark_group("latex_parse");
    for (name, source) in CASES {
        // Ensure every case is accepted before measuring.
        parse(&ctx, source, &settings).expect("benchmark case failed to parse");

        group.bench_function(name, |b| {
            b.iter(|| {
                let node = parse(&ctx, black_box(source), &settings)
                    .expect("parsing failed during benchmark");
                black_box(node.children().len());
            });
        });
    }
    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let ctx = LatexContext::default();
    let settings = Settings::default();

    let mut group = c.benchmark_group("latex_render");
    for (name, source) in CASES {
        group.bench_function(name, |b| {
            b.iter(|| {
                let rendered = render_to_string(&ctx, black_box(source), &settings)
                    .expect("rendering failed during benchmark");
                black_box(rendered.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_rendering);
criterion_main!(benches);
