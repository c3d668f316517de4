//! Per-group-id decoders and the tagged dispatch over group id
//! (`spec.md` §9 design note: "tagged dispatch over group id" replacing the
//! source's function-pointer table).

mod group0;
mod group1;
mod group10;
mod group2;
mod group3;
mod group4;
mod group8;

use crate::block::Group;
use crate::fields::UpdatedFields;
use crate::state::{Buffers, DecoderState};
use crate::tmc::TmcEngine;

/// The supported group ids, tagged by the decoder that handles them.
/// `spec.md` §7: unsupported ids (5, 6, 7, 9, 11..15) still count toward
/// `group_type_count` in the caller but invoke no decoder.
pub(crate) enum GroupKind {
    Tuning,
    SlowLabelling,
    RadioText,
    OpenData,
    DateTime,
    Tmc,
    ProgramTypeName,
    Unsupported,
}

impl GroupKind {
    pub(crate) fn from_id(id: u8) -> Self {
        match id {
            0 => GroupKind::Tuning,
            1 => GroupKind::SlowLabelling,
            2 => GroupKind::RadioText,
            3 => GroupKind::OpenData,
            4 => GroupKind::DateTime,
            8 => GroupKind::Tmc,
            10 => GroupKind::ProgramTypeName,
            _ => GroupKind::Unsupported,
        }
    }
}

pub(crate) fn dispatch(
    group: &Group,
    state: &mut DecoderState,
    buffers: &mut Buffers,
    tmc: &mut TmcEngine,
) -> UpdatedFields {
    match GroupKind::from_id(group.group_id) {
        GroupKind::Tuning => group0::decode(group, state, buffers),
        GroupKind::SlowLabelling => group1::decode(group, state, buffers),
        GroupKind::RadioText => group2::decode(group, state, buffers),
        GroupKind::OpenData => group3::decode(group, state, tmc),
        GroupKind::DateTime => group4::decode(group, state, buffers),
        GroupKind::Tmc => group8::decode(group, state, tmc),
        GroupKind::ProgramTypeName => group10::decode(group, state, buffers),
        GroupKind::Unsupported => UpdatedFields::empty(),
    }
}
