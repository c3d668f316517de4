//! `spec.md` §8 scenario 5: a single-group TMC message only publishes once
//! the same group has arrived bit-identically twice in a row.

#[path = "support/mod.rs"]
mod support;

use rds::{Decoder, MessageKind, UpdatedFields};

#[test]
fn single_group_tmc_message_publishes_on_second_identical_reception() {
    let mut decoder = Decoder::new(false);

    // group_id 8, version A (b.msb = 8<<4). b.lsb = 0x08 sets the
    // SINGLE_GROUP bit with duration 0.
    let a = (0x12, 0x34);
    let b = (0x80, 0x08);
    let c = (0xC0, 0x05);
    let d = (0x12, 0x34);

    let first = support::feed_group(&mut decoder, a, b, c, d);
    assert!(!first.contains(UpdatedFields::TMC_SG));

    let second = support::feed_group(&mut decoder, a, b, c, d);
    assert!(second.contains(UpdatedFields::TMC_SG));

    let msg = decoder.state().tmc_msg;
    assert_eq!(msg.kind, MessageKind::Single);
    assert!(msg.follow_diversion);
    assert!(msg.neg_direction);
    assert_eq!(msg.extent, 0);
    assert_eq!(msg.event, 5);
    assert_eq!(msg.location, 0x1205);
    assert!(!decoder.state().valid_fields.contains(UpdatedFields::TMC_MG));
}

#[test]
fn third_identical_reception_does_not_republish() {
    let mut decoder = Decoder::new(false);
    let a = (0x12, 0x34);
    let b = (0x80, 0x08);
    let c = (0xC0, 0x05);
    let d = (0x12, 0x34);

    support::feed_group(&mut decoder, a, b, c, d);
    support::feed_group(&mut decoder, a, b, c, d);
    let third = support::feed_group(&mut decoder, a, b, c, d);
    assert!(!third.contains(UpdatedFields::TMC_SG));
}
