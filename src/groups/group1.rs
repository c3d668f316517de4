//! Group 1 — slow labelling, version A only: extended country code and
//! language code (`spec.md` §4.4).

use crate::block::{Group, Version};
use crate::fields::UpdatedFields;
use crate::state::{Buffers, DecoderState};

pub(crate) fn decode(group: &Group, state: &mut DecoderState, buffers: &mut Buffers) -> UpdatedFields {
    if group.version() != Version::A {
        return UpdatedFields::empty();
    }

    let mut updated = UpdatedFields::empty();
    let variant = (group.data_c_msb & 0x70) >> 4;

    match variant {
        0 => {
            if let Some(ecc) = buffers.ecc.observe(group.data_c_lsb) {
                if state.ecc != ecc {
                    state.ecc = ecc;
                    updated |= UpdatedFields::ECC;
                }
                state.valid_fields.insert(UpdatedFields::ECC);
            }
        },
        3 => {
            if let Some(lc) = buffers.lc.observe(group.data_c_lsb) {
                if state.lc != lc {
                    state.lc = lc;
                    updated |= UpdatedFields::LC;
                }
                state.valid_fields.insert(UpdatedFields::LC);
            }
        },
        _ => {},
    }

    state.mark_valid(updated);
    updated
}
