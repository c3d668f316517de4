//! Group 10A — program type name (`spec.md` §4.10).

use crate::block::Group;
use crate::fields::UpdatedFields;
use crate::state::{Buffers, DecoderState};

pub(crate) fn decode(group: &Group, state: &mut DecoderState, buffers: &mut Buffers) -> UpdatedFields {
    let mut updated = UpdatedFields::empty();
    let b_lsb = group.data_b_lsb;
    let segment = (b_lsb & 0x01) as usize;
    let ab = b_lsb & 0x10 != 0;

    if buffers.ptyn_ab != Some(ab) {
        buffers.ptyn_ab = Some(ab);
        buffers.ptyn.reset();
        state.ptyn = [0; 8];
        state.valid_fields.remove(UpdatedFields::PTYN);
        updated |= UpdatedFields::PTYN;
    }

    let bytes = [
        group.data_c_msb,
        group.data_c_lsb,
        group.data_d_msb,
        group.data_d_lsb,
    ];
    buffers.ptyn.set(segment, bytes);

    if buffers.ptyn.complete() {
        state.ptyn = buffers.ptyn.combined();
        updated |= UpdatedFields::PTYN;
    }

    state.mark_valid(updated);
    updated
}
