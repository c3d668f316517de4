//! Group 8A — TMC (`spec.md` §4.8): dispatches into the TMC engine and
//! republishes the resulting single- or multi-group message.

use crate::block::{Group, Version};
use crate::fields::UpdatedFields;
use crate::state::DecoderState;
use crate::tmc::{TmcEngine, TmcOutcome};

pub(crate) fn decode(group: &Group, state: &mut DecoderState, tmc: &mut TmcEngine) -> UpdatedFields {
    if group.version() != Version::A {
        return UpdatedFields::empty();
    }

    let mut updated = UpdatedFields::empty();
    match tmc.dispatch(group) {
        TmcOutcome::None => {},
        TmcOutcome::Single(msg) => {
            state.tmc_msg = msg;
            updated |= UpdatedFields::TMC_SG;
            state.valid_fields.remove(UpdatedFields::TMC_MG);
        },
        TmcOutcome::Multi(msg) => {
            state.tmc_msg = msg;
            updated |= UpdatedFields::TMC_MG;
            state.valid_fields.remove(UpdatedFields::TMC_SG);
        },
    }

    state.mark_valid(updated);
    updated
}
