//! Group 2 — radio text (`spec.md` §4.5).

use crate::block::{Group, Version};
use crate::fields::UpdatedFields;
use crate::state::{Buffers, DecoderState};

const CARRIAGE_RETURN: u8 = 0x0D;

pub(crate) fn decode(group: &Group, state: &mut DecoderState, buffers: &mut Buffers) -> UpdatedFields {
    let mut updated = UpdatedFields::empty();
    let b_lsb = group.data_b_lsb;
    let segment = b_lsb & 0x0F;
    let ab = b_lsb & 0x10 != 0;

    if buffers.rt_ab != Some(ab) {
        buffers.rt_ab = Some(ab);
        buffers.rt_next_segment = 0;
        buffers.rt_staging = [0; 64];
        state.rt = [0; 64];
        state.rt_length = 0;
        state.valid_fields.remove(UpdatedFields::RT);
    }

    if segment != 0 && segment != buffers.rt_next_segment {
        return updated;
    }

    // Segments accumulate into the private staging buffer; nothing is
    // published to the public `rt`/RT-valid bit until the message completes
    // at segment 15 or a carriage return is found below.
    let published_length = match group.version() {
        Version::A => {
            let offset = 4 * segment as usize;
            buffers.rt_staging[offset] = group.data_c_msb;
            buffers.rt_staging[offset + 1] = group.data_c_lsb;
            buffers.rt_staging[offset + 2] = group.data_d_msb;
            buffers.rt_staging[offset + 3] = group.data_d_lsb;
            if segment == 15 { Some(64) } else { None }
        },
        Version::B => {
            let offset = 2 * segment as usize;
            buffers.rt_staging[offset] = group.data_d_msb;
            buffers.rt_staging[offset + 1] = group.data_d_lsb;
            if segment == 15 { Some(32) } else { None }
        },
    };
    buffers.rt_next_segment = segment + 1;

    if let Some(terminator_pos) = buffers.rt_staging.iter().position(|&b| b == CARRIAGE_RETURN) {
        buffers.rt_staging[terminator_pos] = 0;
        state.rt = buffers.rt_staging;
        state.rt_length = terminator_pos;
        buffers.rt_next_segment = 0;
        updated |= UpdatedFields::RT;
    } else if let Some(length) = published_length {
        state.rt = buffers.rt_staging;
        state.rt_length = length;
        buffers.rt_next_segment = 0;
        updated |= UpdatedFields::RT;
    }

    state.mark_valid(updated);
    updated
}
