//! Group 3A — open-data announcements, and the entry point for TMC system
//! decoding when the announced AID is a TMC one (`spec.md` §4.6, §4.9).

use crate::block::{Group, Version};
use crate::fields::UpdatedFields;
use crate::state::DecoderState;
use crate::tmc::TmcEngine;

const TMC_AID_A: u16 = 0xCD46;
const TMC_AID_B: u16 = 0xCD47;

pub(crate) fn decode(group: &Group, state: &mut DecoderState, tmc: &mut TmcEngine) -> UpdatedFields {
    if group.version() != Version::A {
        return UpdatedFields::empty();
    }

    let mut updated = UpdatedFields::empty();
    let announced_version = if group.data_b_lsb & 0x01 != 0 {
        crate::block::VersionRepr::B
    } else {
        crate::block::VersionRepr::A
    };
    let announced_group_id = (group.data_b_lsb >> 1) & 0x0F;
    let aid = ((group.data_d_msb as u16) << 8) | group.data_d_lsb as u16;

    state.upsert_oda(announced_group_id, announced_version, aid);
    updated |= UpdatedFields::ODA;

    if aid == TMC_AID_A || aid == TMC_AID_B {
        if tmc.dispatch_system(group, &mut state.tmc_system) {
            updated |= UpdatedFields::TMC_SYS;
        }
    }

    state.mark_valid(updated);
    updated
}
