use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use html_parser::Parser;

const SMALL_DOCUMENT: &str = "<html><body><p>Hello World</p></body></html>";

const MEDIUM_DOCUMENT: &str = r#"
<html>
<head>
<title>Benchmark Page</title>
<style>body { color: red; } p { margin: 0; }</style>
</head>
<body>
<p class="intro" id="main">Some introductory text goes here.</p>
<script>var x = 1; var y = '</script>'; console.log(x + y);</script>
<p>Another paragraph with <em>nested</em> markup-looking content.</p>
</body>
</html>
"#;

fn bench_parse_small(c: &mut Criterion) {
    c.bench_function("parse small document", |b| {
        b.iter(|| Parser::new().parse(black_box(SMALL_DOCUMENT)).unwrap());
    });
}

fn bench_parse_medium(c: &mut Criterion) {
    c.bench_function("parse medium document", |b| {
        b.iter(|| Parser::new().parse(black_box(MEDIUM_DOCUMENT)).unwrap());
    });
}

fn bench_query_elements_by_tag_name(c: &mut Criterion) {
    let document = Parser::new().parse(MEDIUM_DOCUMENT).unwrap();
    c.bench_function("get_elements_by_tag_name", |b| {
        b.iter(|| black_box(document.get_elements_by_tag_name("p")));
    });
}

criterion_group!(
    benches,
    bench_parse_small,
    bench_parse_medium,
    bench_query_elements_by_tag_name
);
criterion_main!(benches);
