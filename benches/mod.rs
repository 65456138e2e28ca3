use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::bench_parse_head,
    http::bench_encode_request,
    http::bench_simple_get
);
criterion_main!(benches);
