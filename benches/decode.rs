//! Throughput of feeding a synthetic block stream through [`rds::Decoder`].

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use rds::{Decoder, RawBlock};

/// Builds `groups` synthetic, well-formed groups of the given `group_id`
/// (so the benchmark exercises a specific decoder, not just the
/// assembler), each repeated twice so double-reception fields validate.
fn synthetic_blocks(group_id: u8, groups: usize) -> Vec<RawBlock> {
    let mut rng = rand::rng();
    let mut blocks = Vec::with_capacity(groups * 8);
    for _ in 0..groups {
        let pi_msb = rng.random::<u8>();
        let pi_lsb = rng.random::<u8>();
        let b_msb = (group_id << 4) | (rng.random::<u8>() & 0x07);
        let b_lsb = rng.random::<u8>();
        let c_msb = rng.random::<u8>();
        let c_lsb = rng.random::<u8>();
        let d_msb = rng.random::<u8>();
        let d_lsb = rng.random::<u8>();
        for _ in 0..2 {
            blocks.push(RawBlock::new(pi_msb, pi_lsb, 0));
            blocks.push(RawBlock::new(b_msb, b_lsb, 1));
            blocks.push(RawBlock::new(c_msb, c_lsb, 2));
            blocks.push(RawBlock::new(d_msb, d_lsb, 3));
        }
    }
    blocks
}

fn decode_group_0a(c: &mut Criterion) {
    let blocks = synthetic_blocks(0, 2000);
    c.bench_function("decode_group0a_4000_groups", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(false);
            for block in &blocks {
                decoder.add(*block);
            }
            criterion::black_box(decoder.state().pi)
        })
    });
}

fn decode_group_8a(c: &mut Criterion) {
    let blocks = synthetic_blocks(8, 2000);
    c.bench_function("decode_group8a_4000_groups", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(false);
            for block in &blocks {
                decoder.add(*block);
            }
            criterion::black_box(decoder.state().tmc_msg)
        })
    });
}

criterion_group!(benches, decode_group_0a, decode_group_8a);
criterion_main!(benches);
