use arise_spec::{decode, encode, Program};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode", |b| {
        b.iter(|| encode(black_box(5), black_box(6), black_box(7), black_box(1)))
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode", |b| b.iter(|| decode(black_box(0x0139_8A2B))));
}

fn bench_program_bytes(c: &mut Criterion) {
    let program = Program::from_words(vec![0x0139_8A2B; 1024]);
    let bytes = program.to_bytes().unwrap();
    c.bench_function("program_from_bytes_1k", |b| {
        b.iter(|| Program::from_bytes(black_box(&bytes)))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_program_bytes);
criterion_main!(benches);
