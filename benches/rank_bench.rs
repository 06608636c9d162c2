use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memchart::format::smart_truncate_path;
use memchart::system::process::parse_ps_output;
use memchart::system::rank::{DEFAULT_LIMIT, aggregate, rank};
use std::hint::black_box;

fn make_ps_output(n: usize) -> String {
    let mut out = String::from("  RSS COMM\n");
    for i in 0..n {
        out.push_str(&format!(
            "{:>7} /usr/local/lib/service-{}/bin/worker-{}\n",
            (n - i) * 512 + 1,
            i % 64,
            i % 7
        ));
    }
    out
}

fn bench_parse_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rank_500_1000_2000");
    for n in [500usize, 1000, 2000] {
        let output = make_ps_output(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &output, |b, output| {
            b.iter(|| {
                let records = parse_ps_output(black_box(output));
                black_box(rank(aggregate(&records), DEFAULT_LIMIT));
            });
        });
    }
    group.finish();
}

fn bench_truncate(c: &mut Criterion) {
    let path = "/Applications/Google Chrome.app/Contents/Frameworks/Google Chrome Framework.framework/Versions/Current/Helpers/Google Chrome Helper (Renderer).app/Contents/MacOS/Google Chrome Helper (Renderer)";
    c.bench_function("smart_truncate_path_40", |b| {
        b.iter(|| black_box(smart_truncate_path(black_box(path), 40)));
    });
}

criterion_group!(benches, bench_parse_and_rank, bench_truncate);
criterion_main!(benches);
