use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use smol_bits::{
    MortonKey, bitwise_merge, bitwise_split, get_bit, ones, perfect_shuffle, perfect_unshuffle,
    select1, set_bit_to_1, zigzag_decode, zigzag_encode,
};
use std::hint::black_box;

// Fixed xorshift stream so runs are comparable
fn words(n: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select1");
    let input = words(1024);

    for rank in &[1u32, 8, 32, 64] {
        group.bench_with_input(BenchmarkId::new("u64", rank), rank, |b, &rank| {
            b.iter(|| {
                for &w in &input {
                    black_box(select1(black_box(w), rank));
                }
            });
        });
    }

    group.bench_function("ones_iter", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &w in &input {
                for pos in ones(w) {
                    sum += u64::from(pos);
                }
            }
            black_box(sum)
        });
    });

    group.finish();
}

fn bench_zigzag(c: &mut Criterion) {
    let mut group = c.benchmark_group("zigzag");
    let input: Vec<i64> = words(1024).into_iter().map(|w| (w as i64) >> 40).collect();
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("encode_decode_i64", |b| {
        b.iter(|| {
            for &v in &input {
                black_box(zigzag_decode(zigzag_encode(black_box(v))));
            }
        });
    });

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    let input = words(1024);
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("perfect_shuffle", |b| {
        b.iter(|| {
            for &w in &input {
                black_box(perfect_unshuffle(perfect_shuffle(black_box(w as u32))));
            }
        });
    });

    group.bench_function("bitwise_merge", |b| {
        b.iter(|| {
            for &w in &input {
                black_box(bitwise_merge(black_box(w as u32), black_box((w >> 32) as u32)));
            }
        });
    });

    group.bench_function("bitwise_split", |b| {
        b.iter(|| {
            for &w in &input {
                black_box(bitwise_split(black_box(w)));
            }
        });
    });

    group.bench_function("morton_sort", |b| {
        let keys: Vec<MortonKey> = input
            .iter()
            .map(|&w| MortonKey::new(w as u32 & 0xFFFF, (w >> 32) as u32 & 0xFFFF))
            .collect();
        b.iter(|| {
            let mut keys = keys.clone();
            keys.sort_unstable();
            black_box(keys)
        });
    });

    group.finish();
}

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes");
    let offsets: Vec<usize> = words(1024).into_iter().map(|w| (w % 8192) as usize).collect();

    group.bench_function("set_then_get", |b| {
        let mut buf = vec![0u8; 1024];
        b.iter(|| {
            let mut hits = 0u32;
            for &o in &offsets {
                set_bit_to_1(&mut buf, o);
                hits += u32::from(get_bit(&buf, black_box(o)));
            }
            black_box(hits)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_select,
    bench_zigzag,
    bench_shuffle,
    bench_bytes
);
criterion_main!(benches);
