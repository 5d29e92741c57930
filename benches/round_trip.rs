use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use ruhuff::{compress_to_vec, decompress, DecodeStrategy};

/// Bytes drawn from a skewed distribution so the tree has short and long codes
fn skewed_input(size: usize) -> Vec<u8> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    (0..size)
        .map(|_| {
            let a: u8 = rng.gen();
            let b: u8 = rng.gen();
            a.min(b) / 4
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    const DATA_SIZE: usize = 1024 * 1024;
    let input = skewed_input(DATA_SIZE);
    let compressed = compress_to_vec(&input).unwrap();

    let mut group = c.benchmark_group("huffman");
    group.throughput(Throughput::Bytes(DATA_SIZE as u64));
    group.bench_function("compress", |b| {
        b.iter(|| compress_to_vec(black_box(&input)).unwrap())
    });
    for (name, strategy) in [
        ("decompress code lookup", DecodeStrategy::CodeLookup),
        ("decompress tree walk", DecodeStrategy::TreeWalk),
    ] {
        let mut output = Vec::with_capacity(DATA_SIZE);
        group.bench_function(name, |b| {
            b.iter(|| {
                output.clear();
                decompress(black_box(compressed.as_slice()), &mut output, strategy).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
