//! Performance benchmarks for rs-linkmeta.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A head rich in metadata, where most chains resolve on their first key
//! - A bare document, where every chain runs to exhaustion
//! - Real-world HTML files, when present on disk

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_linkmeta::{extract, extract_bytes};
use std::fs;

const RICH_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <meta name="twitter:title" content="Sample Article">
    <meta name="twitter:description" content="A sample article for benchmarking.">
    <meta name="twitter:creator" content="@johndoe">
    <meta name="twitter:image" content="https://example.com/hero.jpg">
    <meta name="twitter:image:width" content="1200">
    <meta name="twitter:image:height" content="630">
    <meta name="twitter:image:alt" content="Hero image">
    <meta name="twitter:player" content="https://example.com/player">
    <meta property="og:site_name" content="Example">
    <meta property="og:audio" content="https://example.com/audio.mp3">
    <meta name="theme-color" content="white">
    <meta name="twitter:url" content="https://example.com/article">
    <meta name="date" content="2024-01-15">
    <meta name="dc.modified" content="2024-01-16">
    <link rel="icon" href="/favicon.ico">
</head>
<body>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article.</p>
    </article>
</body>
</html>
"#;

const BARE_HTML: &str = "<!DOCTYPE html><html><head></head><body><p>Nothing here.</p></body></html>";

fn bench_extract_rich(c: &mut Criterion) {
    c.bench_function("extract_rich_head", |b| {
        b.iter(|| extract(black_box(RICH_HTML)));
    });
}

fn bench_extract_bare(c: &mut Criterion) {
    c.bench_function("extract_bare_head", |b| {
        b.iter(|| extract(black_box(BARE_HTML)));
    });
}

/// Benchmark with real-world HTML files of varying sizes
fn bench_real_world_html(c: &mut Criterion) {
    let html_dir = "../data/html_files";

    let sample_files = ["0001.html", "0010.html", "0100.html"];

    let mut group = c.benchmark_group("real_world");

    for filename in &sample_files {
        let path = format!("{html_dir}/{filename}");
        if let Ok(html) = fs::read(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("extract_bytes", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| extract_bytes(black_box(html)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_rich,
    bench_extract_bare,
    bench_real_world_html
);
criterion_main!(benches);
