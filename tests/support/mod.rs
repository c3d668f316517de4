//! Shared helpers for the integration tests under `tests/`: building raw
//! blocks and feeding whole groups through a [`rds::Decoder`].

use rds::{RawBlock, UpdatedFields};

/// A raw block with the given block-id (0=A, 1=B, 2=C, 3=D, 4=C′) and no
/// error flags.
pub fn block(msb: u8, lsb: u8, id: u8) -> RawBlock {
    RawBlock::new(msb, lsb, id)
}

/// A raw block flagged `uncorrectable`.
pub fn uncorrectable_block(msb: u8, lsb: u8, id: u8) -> RawBlock {
    RawBlock::new(msb, lsb, id | 0x80)
}

/// A raw block flagged `corrected`.
pub fn corrected_block(msb: u8, lsb: u8, id: u8) -> RawBlock {
    RawBlock::new(msb, lsb, id | 0x40)
}

/// Feeds one full A/B/C/D group and returns the bitmask from the D block
/// (the one that completes the group).
pub fn feed_group(
    decoder: &mut rds::Decoder,
    a: (u8, u8),
    b: (u8, u8),
    c: (u8, u8),
    d: (u8, u8),
) -> UpdatedFields {
    decoder.add(block(a.0, a.1, 0));
    decoder.add(block(b.0, b.1, 1));
    decoder.add(block(c.0, c.1, 2));
    decoder.add(block(d.0, d.1, 3))
}
