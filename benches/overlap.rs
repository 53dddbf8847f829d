use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rangefence::{
    CompactionOptions, GrandparentFile, OrdComparator, OverlapTracker, RangeDescriptor,
    RangeRegistry,
};

fn grandparents(count: u64) -> Vec<GrandparentFile<u64>> {
    (0..count)
        .map(|i| GrandparentFile::new(i * 100, i * 100 + 99, 64 * 1024 * 1024))
        .collect()
}

fn should_split_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("should_split");
    for count in [16u64, 256, 4096] {
        let files = grandparents(count);
        let options = CompactionOptions::default();
        group.bench_with_input(BenchmarkId::from_parameter(count), &files, |b, files| {
            b.iter(|| {
                let mut tracker = OverlapTracker::new(&OrdComparator, files, &options);
                let mut splits = 0u32;
                for key in (0..count * 100).step_by(37) {
                    if tracker.should_split(&key, 32 * 1024 * 1024) {
                        splits += 1;
                    }
                }
                splits
            })
        });
    }
    group.finish();
}

fn register_unregister(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    for held in [4usize, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(held), &held, |b, &held| {
            let registry = RangeRegistry::new(OrdComparator);
            for slot in 0..held as u64 {
                assert!(registry.register(RangeDescriptor::half_open(slot * 10, slot * 10 + 9)));
            }
            let probe = RangeDescriptor::half_open(held as u64 * 10, held as u64 * 10 + 9);
            b.iter(|| {
                assert!(registry.register(probe.clone()));
                assert!(registry.unregister(&probe));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, should_split_scan, register_unregister);
criterion_main!(benches);
