//! `spec.md` §8 scenario 4: alternative-frequency announcement count and
//! deduplicated VHF entries.

#[path = "support/mod.rs"]
mod support;

use rds::{Decoder, UpdatedFields};

#[test]
fn af_set_completes_once_the_announced_count_is_reached() {
    let mut decoder = Decoder::new(false);

    // group_id 0, version A (b.msb bit 0x08 clear); announces 2 AFs and
    // delivers code 0x40 -> 87_500_000 + 64*100_000 = 93_900_000 Hz.
    let first = support::feed_group(&mut decoder, (0x12, 0x34), (0x00, 0x00), (0xE2, 0x40), (0, 0));
    assert!(!first.contains(UpdatedFields::AF));
    assert_eq!(decoder.state().af.frequencies(), &[93_900_000]);

    // second group carries two more VHF codes, but only the first (c_msb)
    // is accepted: the set is bounded by the announced count (2), which is
    // reached as soon as this addition lands, so the second code (c_lsb)
    // is silently dropped (`spec.md` §4.3's "bounded ... by the announced
    // count", matching `rds_add_af_to_list`'s `size >= announced_af` guard
    // in the original source).
    let second = support::feed_group(&mut decoder, (0x12, 0x34), (0x00, 0x00), (0x50, 0x51), (0, 0));
    assert!(second.contains(UpdatedFields::AF));
    assert_eq!(decoder.state().af.frequencies(), &[93_900_000, 95_500_000]);
    assert!(decoder.state().valid_fields.contains(UpdatedFields::AF));
}

#[test]
fn duplicate_frequencies_are_not_added_twice() {
    let mut decoder = Decoder::new(false);

    support::feed_group(&mut decoder, (0x12, 0x34), (0x00, 0x00), (0xE1, 0x40), (0, 0));
    support::feed_group(&mut decoder, (0x12, 0x34), (0x00, 0x00), (0x40, 0x40), (0, 0));
    assert_eq!(decoder.state().af.frequencies(), &[93_900_000]);
}
