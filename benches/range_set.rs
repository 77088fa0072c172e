use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use ordered_ranges::{Range, RangeDict, RangeSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn gen_ranges(n: usize, rng: &mut impl Rng) -> Vec<Range<u32>> {
	let mut out = Vec::with_capacity(n);
	for _ in 0..n {
		let a = rng.random_range(0..100_000);
		let w = rng.random_range(1..=64);
		if let Ok(r) = Range::new(a, a + w) {
			out.push(r)
		}
	}
	out
}

fn bench_add(c: &mut Criterion) {
	let mut group = c.benchmark_group("range_set_add");

	for n in [100usize, 1_000, 10_000] {
		let mut rng = ChaCha8Rng::seed_from_u64(7);
		let ranges = gen_ranges(n, &mut rng);
		group.throughput(Throughput::Elements(n as u64));

		group.bench_function(BenchmarkId::new("add", n), |b| {
			b.iter_batched(
				|| ranges.clone(),
				|ranges| {
					let mut set = RangeSet::new();
					for r in ranges {
						set.add(r).ok();
					}
					black_box(set)
				},
				BatchSize::SmallInput,
			)
		});

		group.bench_function(BenchmarkId::new("bulk", n), |b| {
			b.iter_batched(
				|| ranges.clone(),
				|ranges| black_box(RangeSet::try_from_ranges(ranges).ok()),
				BatchSize::SmallInput,
			)
		});
	}

	group.finish();
}

fn bench_algebra(c: &mut Criterion) {
	let mut group = c.benchmark_group("range_set_algebra");
	let mut rng = ChaCha8Rng::seed_from_u64(11);

	for n in [100usize, 1_000, 10_000] {
		let a = RangeSet::try_from_ranges(gen_ranges(n, &mut rng)).unwrap_or_default();
		let b = RangeSet::try_from_ranges(gen_ranges(n, &mut rng)).unwrap_or_default();
		group.throughput(Throughput::Elements(n as u64));

		group.bench_function(BenchmarkId::new("union", n), |bench| {
			bench.iter(|| black_box(a.union(&b).ok()))
		});
		group.bench_function(BenchmarkId::new("intersection", n), |bench| {
			bench.iter(|| black_box(a.intersection(&b).ok()))
		});
		group.bench_function(BenchmarkId::new("difference", n), |bench| {
			bench.iter(|| black_box(a.difference(&b).ok()))
		});
		group.bench_function(BenchmarkId::new("contains", n), |bench| {
			bench.iter(|| {
				let mut hits = 0;
				for v in (0..100_000).step_by(97) {
					if a.contains(&v).unwrap_or(false) {
						hits += 1
					}
				}
				black_box(hits)
			})
		});
	}

	group.finish();
}

fn bench_dict(c: &mut Criterion) {
	let mut group = c.benchmark_group("range_dict_insert");

	for n in [100usize, 1_000] {
		let mut rng = ChaCha8Rng::seed_from_u64(13);
		let pairs: Vec<_> = gen_ranges(n, &mut rng)
			.into_iter()
			.map(|r| (r, rng.random_range(0..8u8)))
			.collect();
		group.throughput(Throughput::Elements(n as u64));

		group.bench_function(BenchmarkId::new("insert", n), |b| {
			b.iter_batched(
				|| pairs.clone(),
				|pairs| black_box(RangeDict::try_from_iter(pairs).ok()),
				BatchSize::SmallInput,
			)
		});
	}

	group.finish();
}

criterion_group!(benches, bench_add, bench_algebra, bench_dict);
criterion_main!(benches);
