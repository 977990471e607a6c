//! Comparison benchmarks against other Markdown converters
//!
//! - sweepmark (this crate)
//! - pulldown-cmark
//! - comrak
//!
//! The other crates implement full CommonMark, so outputs differ; the
//! numbers show the cost of a single pass without a tree.
//!
//! Run with: cargo bench --bench comparison

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SIMPLE: &str = "Just a plain paragraph of text without any markup at all, \
repeated a few times to give the scanner something to chew on.\n";

    pub const LINKS: &str = r#"See [the docs](https://docs.rs) and [the book](https://doc.rust-lang.org/book/).
An image: ![logo](https://example.com/logo.png) and [another](https://example.com/a/b/c).
"#;

    pub const LISTS: &str = r#"- one
- two
  - two.a
  - two.b
    - two.b.i
- three
1. first
2. second
3. third
"#;

    pub const MIXED: &str = r#"# Title

Some *emphasis*, **strong**, ***both***, `code` and ~~strike~~.

> Quoted text
> > nested quote

```
let x = 1;
```

---
"#;

    pub fn large() -> String {
        [SIMPLE, LINKS, LISTS, MIXED].concat().repeat(100)
    }
}

fn parse_sweepmark(input: &str) -> String {
    sweepmark::to_html(input)
}

/// Parse with pulldown-cmark
fn parse_pulldown_cmark(input: &str) -> String {
    use pulldown_cmark::{Options, Parser, html};
    let parser = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Parse with comrak
fn parse_comrak(input: &str) -> String {
    let mut options = comrak::Options::default();
    options.extension.strikethrough = true;
    comrak::markdown_to_html(input, &options)
}

fn bench_complexity(c: &mut Criterion) {
    let mut group = c.benchmark_group("complexity");

    let cases: Vec<(&str, &str)> = vec![
        ("simple", samples::SIMPLE),
        ("links", samples::LINKS),
        ("lists", samples::LISTS),
        ("mixed", samples::MIXED),
    ];

    for (name, input) in &cases {
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("sweepmark", name), input, |b, s| {
            b.iter(|| parse_sweepmark(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("pulldown-cmark", name), input, |b, s| {
            b.iter(|| parse_pulldown_cmark(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("comrak", name), input, |b, s| {
            b.iter(|| parse_comrak(black_box(s)))
        });
    }

    group.finish();
}

/// Throughput comparison across document sizes
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    let sizes: Vec<(&str, String)> = vec![
        ("tiny", samples::TINY.to_string()),
        ("mixed", samples::MIXED.to_string()),
        ("large", samples::large()),
    ];

    for (name, input) in &sizes {
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("sweepmark", name), input, |b, s| {
            b.iter(|| parse_sweepmark(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("pulldown-cmark", name), input, |b, s| {
            b.iter(|| parse_pulldown_cmark(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("comrak", name), input, |b, s| {
            b.iter(|| parse_comrak(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_complexity, bench_throughput);
criterion_main!(benches);
