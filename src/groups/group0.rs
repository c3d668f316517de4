//! Group 0 — basic tuning: program service name, decoder identification,
//! traffic announcement/music-speech flags, alternative frequencies
//! (`spec.md` §4.3).

use crate::block::{Group, Version};
use crate::fields::UpdatedFields;
use crate::state::{Buffers, DecoderState, DiFlags};

pub(crate) fn decode(group: &Group, state: &mut DecoderState, buffers: &mut Buffers) -> UpdatedFields {
    let mut updated = UpdatedFields::empty();
    let lsb = group.data_b_lsb;
    let segment = (lsb & 0x03) as usize;

    let ta = lsb & 0x10 != 0;
    let ms = lsb & 0x08 != 0;
    state.ta = ta;
    state.ms = ms;
    updated |= UpdatedFields::TA | UpdatedFields::MS;

    decode_ps(group, state, buffers, segment, &mut updated);
    decode_di(lsb, state, buffers, segment, &mut updated);
    if group.version() == Version::A {
        decode_af(group, state, &mut updated);
    }

    state.mark_valid(updated);
    updated
}

fn decode_ps(group: &Group, state: &mut DecoderState, buffers: &mut Buffers, segment: usize, updated: &mut UpdatedFields) {
    let pos = 2 * segment;
    buffers.ps.set(pos, group.data_d_msb);
    let all_valid = buffers.ps.set(pos + 1, group.data_d_lsb);
    if all_valid {
        let chars = buffers.ps.chars();
        if chars != state.ps {
            state.ps = chars;
            *updated |= UpdatedFields::PS;
        }
    }
}

fn decode_di(lsb: u8, state: &mut DecoderState, buffers: &mut Buffers, segment: usize, updated: &mut UpdatedFields) {
    let flag_bit = lsb & 0x04 != 0;
    let segment = segment as u8;

    if segment != buffers.di_next_segment {
        buffers.di_next_segment = 0;
        buffers.di_accum = DiFlags::empty();
    }
    if segment != buffers.di_next_segment {
        return;
    }

    if flag_bit {
        buffers.di_accum.insert(DiFlags::from_bits_truncate(1 << segment));
    }
    if segment == 3 {
        if state.di != buffers.di_accum {
            state.di = buffers.di_accum;
            *updated |= UpdatedFields::DI;
        }
        state.valid_fields.insert(UpdatedFields::DI);
        buffers.di_next_segment = 0;
        buffers.di_accum = DiFlags::empty();
    } else {
        buffers.di_next_segment = segment + 1;
    }
}

/// IEC 62106 §6.2.1.6 alternative-frequency coding.
fn decode_af(group: &Group, state: &mut DecoderState, updated: &mut UpdatedFields) {
    let c_msb = group.data_c_msb;
    let c_lsb = group.data_c_lsb;
    let mut complete = false;

    match c_msb {
        250 => {
            let code = c_lsb;
            let hz = if code <= 15 {
                152_000 + code as u32 * 9_000
            } else {
                531_000 + code as u32 * 9_000
            };
            complete |= state.add_af(hz);
        },
        224..=249 => {
            complete |= state.announce_af_count(c_msb - 224);
            if (1..=204).contains(&c_lsb) {
                complete |= state.add_af(87_500_000 + c_lsb as u32 * 100_000);
            }
        },
        1..=204 => {
            complete |= state.add_af(87_500_000 + c_msb as u32 * 100_000);
            if (1..=204).contains(&c_lsb) {
                complete |= state.add_af(87_500_000 + c_lsb as u32 * 100_000);
            }
        },
        _ => {
            if (1..=204).contains(&c_lsb) {
                complete |= state.add_af(87_500_000 + c_lsb as u32 * 100_000);
            }
        },
    }

    if complete {
        *updated |= UpdatedFields::AF;
    }
}
