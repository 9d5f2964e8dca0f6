use brewdigest::analysis::{Analysis, analyze_formulae};
use brewdigest::snapshot::{Formula, InstalledVersion, LeafSet, Snapshot};
use brewdigest::{categorize, report};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Synthetic snapshot roughly the size of a busy developer machine
fn synthetic_snapshot(count: usize) -> Snapshot {
    let names = [
        "libpng", "ffmpeg", "git", "openssl@3", "xz", "python@3.12", "cmake", "sqlite", "qemu",
        "ollama", "pnpm", "glib",
    ];

    let formulae = (0..count)
        .map(|i| Formula {
            name: Some(format!("{}-{}", names[i % names.len()], i)),
            desc: Some(format!("Synthetic formula number {}", i)),
            homepage: Some("https://example.com".to_string()),
            installed: vec![InstalledVersion {
                version: Some(format!("1.{}.0", i)),
                installed_on_request: i % 3 == 0,
            }],
        })
        .collect();

    Snapshot {
        formulae,
        casks: Vec::new(),
    }
}

fn bench_categorize(c: &mut Criterion) {
    let samples = [
        ("libpng", "Library for manipulating PNG images"),
        ("ffmpeg", "Play, record, convert, and stream audio and video"),
        ("xz", "General-purpose data compression with high ratio"),
        ("tokei", "Program that allows you to count code, quickly"),
    ];

    c.bench_function("categorize", |b| {
        b.iter(|| {
            for (name, desc) in &samples {
                let _ = categorize(black_box(name), black_box(desc));
            }
        })
    });
}

fn bench_analyze_formulae(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_formulae");

    for count in [50, 250, 1000] {
        let snapshot = synthetic_snapshot(count);
        let leaves: LeafSet = snapshot
            .formulae
            .iter()
            .step_by(4)
            .filter_map(|f| f.name.clone())
            .collect();

        group.bench_with_input(BenchmarkId::new("formulae", count), &snapshot, |b, s| {
            b.iter(|| analyze_formulae(black_box(&s.formulae), black_box(&leaves)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(500);
    let analysis = Analysis::new(&snapshot, &LeafSet::default());

    c.bench_function("render 500 formulae", |b| {
        b.iter(|| report::render(black_box(&analysis)))
    });
}

criterion_group!(benches, bench_categorize, bench_analyze_formulae, bench_render);
criterion_main!(benches);
