use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ircfmt::Formatter;
use std::hint::black_box;

fn formatter() -> Formatter {
    let mut formatter = Formatter::new();
    formatter.initialise();
    formatter
}

fn exec_benchmark(c: &mut Criterion) {
    let formatter = formatter();
    let mut group = c.benchmark_group("exec");

    let cases = [
        ("plain", "just a regular message without anything special in it"),
        ("formatted", "\x02bold\x02 \x034,2red on navy\x03 \x1ditalic\x1d \x1funder\x0f done"),
        ("links", "see http://example.com/path?q=1&r=2 and (https://a.org) in #rust"),
    ];

    for (name, text) in cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| formatter.exec(black_box(Some(text)), "libera"))
        });
    }

    group.finish();
}

fn long_message_benchmark(c: &mut Criterion) {
    let formatter = formatter();
    let text = "\x02word\x02 \x0312blue\x03 http://a.com/x #chan ".repeat(64);
    let mut group = c.benchmark_group("exec_long");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("mixed", |b| {
        b.iter(|| formatter.exec(black_box(Some(text.as_str())), "libera"))
    });

    group.finish();
}

criterion_group!(benches, exec_benchmark, long_message_benchmark);
criterion_main!(benches);
