use bu8_decoder::{PaddedBuf, decode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Walk the whole buffer and fold every decoded value and flag word into one
/// number so nothing is optimised away.
fn scan(buf: &PaddedBuf) -> u64 {
    let mut acc = 0u64;
    let mut offset = 0;
    while let Some(d) = buf.decode_at(offset) {
        acc = acc.wrapping_add(u64::from(d.ch) ^ u64::from(d.flags.raw()));
        offset += d.consumed;
    }
    acc
}

/// Same walk over std's validating iterator, for scale. Only meaningful for
/// valid input.
fn scan_std(bytes: &[u8]) -> u64 {
    std::str::from_utf8(bytes)
        .map(|s| s.chars().fold(0u64, |acc, c| acc.wrapping_add(u64::from(c))))
        .unwrap_or(0)
}

/// Deterministic pseudo-random bytes (xorshift), no extra dependency needed.
fn garbage(len: usize) -> Vec<u8> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state.to_le_bytes()[0]
        })
        .collect()
}

fn corpus(size_kb: usize) -> Vec<(&'static str, Vec<u8>)> {
    let target = size_kb * 1024;
    // Repeat `unit` and cut back to a character boundary at or below `target`.
    let fill = |unit: &str| {
        let text = unit.repeat(target / unit.len() + 1);
        let mut end = target;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.as_bytes()[..end].to_vec()
    };
    vec![
        ("ascii", fill("The quick brown fox jumps over the lazy dog. ")),
        ("mixed", fill("na\u{ef}ve caf\u{e9} \u{20ac}5 \u{65e5}\u{672c}\u{8a9e} ")),
        ("astral", fill("\u{1f600}\u{1f680}\u{10348}\u{1d11e}")),
        ("garbage", garbage(target)),
    ]
}

fn bench_single_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_window");

    for (label, window) in [
        ("ascii", [b'A', 0, 0, 0]),
        ("two_byte", [0xC3, 0xA9, 0, 0]),
        ("three_byte", [0xE2, 0x82, 0xAC, 0]),
        ("four_byte", [0xF0, 0x9F, 0x98, 0x80]),
        ("invalid_lead", [0x80, 0x80, 0x80, 0x80]),
    ] {
        group.bench_function(label, |b| b.iter(|| decode(black_box(&window))));
    }

    group.finish();
}

fn bench_scan_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_throughput");

    for size_kb in [1, 64] {
        for (label, bytes) in corpus(size_kb) {
            let buf = PaddedBuf::new(bytes);
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(label, format!("{size_kb}kb")),
                &buf,
                |b, buf| b.iter(|| scan(black_box(buf))),
            );
        }
    }

    group.finish();
}

fn bench_against_std(c: &mut Criterion) {
    let mut group = c.benchmark_group("branchless_vs_std");

    // std rejects the whole buffer on the first defect, so compare on valid
    // text only.
    for (label, bytes) in corpus(64).into_iter().filter(|(label, _)| *label != "garbage") {
        let buf = PaddedBuf::from(bytes.as_slice());
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("branchless", label), &buf, |b, buf| {
            b.iter(|| scan(black_box(buf)));
        });
        group.bench_with_input(BenchmarkId::new("std_chars", label), &bytes, |b, bytes| {
            b.iter(|| scan_std(black_box(bytes)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_window,
    bench_scan_throughput,
    bench_against_std
);
criterion_main!(benches);
