//! Traffic Message Channel engine: single-group messages, multi-group
//! reassembly with bit-array extraction of additional fields, and TMC
//! system (type-3A) decoding (`spec.md` §4.8, §4.9).

use crate::block::Group;
use crate::fixed_vec::FixedVec;
use crate::pending::Pending;
use crate::tables::TMC_ADDITIONAL_LEN;

/// Maximum number of additional (label, data) pairs retained on a decoded
/// [`TmcMessage`]. Four 28-bit slots hold at most 112 bits; even with the
/// shortest 7-bit (4-bit label + 3-bit data) fields that's 16 pairs.
pub const MAX_ADDITIONAL: usize = 16;
/// Slots available per multi-group message (`spec.md` §4.8.2: "up to four
/// 28-bit fields").
const MAX_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditionalField {
    pub label: u8,
    pub data: u16,
}

impl AdditionalField {
    /// The §4.8.3 LUT: length in bits of the data field following `label`.
    pub fn data_len_for(label: u8) -> u8 {
        TMC_ADDITIONAL_LEN[(label & 0x0F) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    Single,
    Multi,
}

/// A decoded TMC message, either single-group or the result of a completed
/// multi-group reassembly (`spec.md` §4.8.1, §4.8.2).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TmcMessage {
    pub kind: MessageKind,
    /// Only set for single-group messages; multi-group messages carry no
    /// duration field (`spec.md` §4.8.1 vs §4.8.2).
    pub duration: Option<u8>,
    pub follow_diversion: bool,
    pub neg_direction: bool,
    pub extent: u8,
    pub event: u16,
    /// Mirrors the documented source behavior of combining block D's msb
    /// with block C's lsb (`spec.md` §9, "Open question — location field"):
    /// `(data_d_msb << 8) | data_c_lsb`, not `data_d_msb << 8 | data_d_lsb`.
    pub location: u16,
    pub additional: FixedVec<AdditionalField, MAX_ADDITIONAL>,
}

impl Default for TmcMessage {
    fn default() -> Self {
        Self {
            kind: MessageKind::Single,
            duration: None,
            follow_diversion: false,
            neg_direction: false,
            extent: 0,
            event: 0,
            location: 0,
            additional: FixedVec::new(),
        }
    }
}

/// TMC system parameters decoded from type-3A groups carrying AID 0xCD46 /
/// 0xCD47 (`spec.md` §4.9).
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TmcSystem {
    pub ltn: u8,
    pub afi: bool,
    pub enhanced_mode: bool,
    pub mgs: u8,
    pub gap: u8,
    pub sid: u8,
    pub t_a: u8,
    pub t_w: u8,
    pub t_d: u8,
}

fn shared_fields_from(group: &Group) -> (bool, bool, u8, u16, u16) {
    let follow_diversion = group.data_c_msb & 0x80 != 0;
    let neg_direction = group.data_c_msb & 0x40 != 0;
    let extent = (group.data_c_msb & 0x38) >> 3;
    let event = (((group.data_c_msb & 0x07) as u16) << 8) | group.data_c_lsb as u16;
    let location = ((group.data_d_msb as u16) << 8) | group.data_c_lsb as u16;
    (follow_diversion, neg_direction, extent, event, location)
}

/// §4.8.1: single-group message fields.
pub fn decode_single_group(group: &Group) -> TmcMessage {
    let (follow_diversion, neg_direction, extent, event, location) = shared_fields_from(group);
    TmcMessage {
        kind: MessageKind::Single,
        duration: Some(group.data_b_lsb & 0x07),
        follow_diversion,
        neg_direction,
        extent,
        event,
        location,
        additional: FixedVec::new(),
    }
}

/// §4.9: TMC system variant decoding. `prev_enhanced_mode` carries forward
/// the enhanced-mode bit observed from a variant-0 group so a variant-1
/// group's timing fields can be conditionally decoded, matching the
/// source's single shared `enhanced_mode` field.
pub fn decode_system(group: &Group, system: &mut TmcSystem) {
    let variant = group.data_c_msb >> 6;
    match variant {
        0 => {
            system.ltn = ((group.data_c_msb & 0x0F) << 2) | (group.data_c_lsb >> 6);
            system.afi = group.data_c_lsb & 0x20 != 0;
            system.enhanced_mode = group.data_c_lsb & 0x10 != 0;
            system.mgs = group.data_c_lsb & 0x0F;
        },
        1 => {
            system.gap = (group.data_c_msb & 0x30) >> 4;
            system.sid = ((group.data_c_msb & 0x0F) << 2) | (group.data_c_lsb >> 6);
            if system.enhanced_mode {
                system.t_a = (group.data_c_lsb & 0x30) >> 4;
                system.t_w = (group.data_c_lsb & 0x0C) >> 2;
                system.t_d = group.data_c_lsb & 0x03;
            }
        },
        _ => {},
    }
}

/// A 28-bit-per-slot bit array read MSB-first, spanning slot boundaries
/// transparently (`spec.md` §9 design note).
struct BitCursor<'a> {
    slots: &'a [u32],
    pos: usize,
}

impl<'a> BitCursor<'a> {
    fn total_bits(&self) -> usize {
        self.slots.len() * 28
    }

    fn read(&mut self, n: usize) -> Option<u32> {
        if n == 0 {
            return Some(0);
        }
        if self.pos + n > self.total_bits() {
            return None;
        }
        let mut result: u32 = 0;
        let mut remaining = n;
        while remaining > 0 {
            let slot_idx = self.pos / 28;
            let bit_in_slot = self.pos % 28;
            let available = 28 - bit_in_slot;
            let take = remaining.min(available);
            let shift = available - take;
            let mask = (1u32 << take) - 1;
            let chunk = (self.slots[slot_idx] >> shift) & mask;
            result = (result << take) | chunk;
            self.pos += take;
            remaining -= take;
        }
        Some(result)
    }
}

/// §4.8.3: decode the labelled additional-data bit array out of the `len`
/// used slots. Label 15 is reserved and skipped; extraction stops once the
/// next read would run past the available bits.
fn decode_additional(slots: &[u32], len: usize) -> FixedVec<AdditionalField, MAX_ADDITIONAL> {
    let mut out = FixedVec::new();
    let mut cursor = BitCursor {
        slots: &slots[..len],
        pos: 0,
    };
    loop {
        let Some(label) = cursor.read(4) else { break };
        let label = label as u8;
        let data_len = AdditionalField::data_len_for(label) as usize;
        let Some(data) = cursor.read(data_len) else {
            break;
        };
        if label != 15 {
            out.push(AdditionalField {
                label,
                data: data as u16,
            });
        }
    }
    out
}

/// Packs the 28 meaningful optional-data bits of a multi-group's block C/D
/// into the low 28 bits of a `u32`: the low nibble of block C msb (bit 11
/// down to bit 8 of block C, where the first label starts per ISO 14819-1),
/// all of block C lsb, and all of block D.
fn pack_slot(group: &Group) -> u32 {
    ((group.data_c_msb & 0x0F) as u32) << 24
        | (group.data_c_lsb as u32) << 16
        | (group.data_d_msb as u32) << 8
        | (group.data_d_lsb as u32)
}

/// Staging area for an in-progress multi-group message (`spec.md` §4.8.2).
#[derive(Debug, Clone, Copy, Default)]
struct MultiStaging {
    in_progress: bool,
    continuity_id: u8,
    seq_id: u8,
    follow_diversion: bool,
    neg_direction: bool,
    extent: u8,
    event: u16,
    location: u16,
    slots: [u32; MAX_SLOTS],
    len: usize,
}

/// The TMC engine's cross-group state: double-reception buffers for 8A and
/// TMC-system groups, plus multi-group reassembly staging.
#[derive(Debug, Clone, Copy, Default)]
pub struct TmcEngine {
    prev_group: Pending<Group>,
    prev_sys_group: Pending<Group>,
    multi: MultiStaging,
}

/// Outcome of feeding a completed group-8A group through the engine.
pub enum TmcOutcome {
    /// No update yet (first of the double-reception pair, or tuning info).
    None,
    Single(TmcMessage),
    Multi(TmcMessage),
}

impl TmcEngine {
    pub const fn new() -> Self {
        Self {
            prev_group: Pending::new(),
            prev_sys_group: Pending::new(),
            multi: MultiStaging {
                in_progress: false,
                continuity_id: 0,
                seq_id: 0,
                follow_diversion: false,
                neg_direction: false,
                extent: 0,
                event: 0,
                location: 0,
                slots: [0; MAX_SLOTS],
                len: 0,
            },
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `spec.md` §4.8 bit layout: bit 3 = `SINGLE_GROUP`, bit 4 =
    /// `TUNING_INFO` of block B's low bits.
    pub fn dispatch(&mut self, group: &Group) -> TmcOutcome {
        // The same 8A group must be bit-identical twice in a row before it
        // is decoded; once accepted, the buffer is invalidated so a third
        // repeat (the common triple-transmission pattern) does not
        // re-decode the same message (`spec.md` §4.8).
        if self.prev_group.observe(*group).is_none() {
            return TmcOutcome::None;
        }
        self.prev_group.reset();

        const SINGLE_GROUP: u8 = 0x08;
        const TUNING_INFO: u8 = 0x10;
        let b = group.data_b_lsb;

        if b & SINGLE_GROUP != 0 && b & TUNING_INFO == 0 {
            TmcOutcome::Single(decode_single_group(group))
        } else if b & SINGLE_GROUP == 0 && b & TUNING_INFO == 0 {
            match self.decode_multi_group(group) {
                Some(msg) => TmcOutcome::Multi(msg),
                None => TmcOutcome::None,
            }
        } else {
            // TUNING_INFO variants 4..9: stub, no update (`spec.md` §4.8).
            TmcOutcome::None
        }
    }

    /// `spec.md` §4.9: requires the same 3A group twice in a row.
    pub fn dispatch_system(&mut self, group: &Group, system: &mut TmcSystem) -> bool {
        if self.prev_sys_group.observe(*group).is_none() {
            return false;
        }
        decode_system(group, system);
        true
    }

    fn decode_multi_group(&mut self, group: &Group) -> Option<TmcMessage> {
        let continuity_id = group.data_b_lsb & 0x07;
        let first_group = group.data_c_msb & 0x80 != 0;
        let second_group = group.data_c_msb & 0x40 != 0;
        let seq_id = (group.data_c_msb & 0x30) >> 4;

        if first_group {
            let (follow_diversion, neg_direction, extent, event, location) =
                shared_fields_from(group);
            self.multi = MultiStaging {
                in_progress: true,
                continuity_id,
                seq_id: 0,
                follow_diversion,
                neg_direction,
                extent,
                event,
                location,
                slots: [0; MAX_SLOTS],
                len: 0,
            };
            return None;
        }

        if second_group {
            if !self.multi.in_progress || continuity_id != self.multi.continuity_id {
                return None;
            }
            self.multi.seq_id = seq_id;
            self.multi.slots[0] = pack_slot(group);
            self.multi.len = 1;
            if seq_id == 0 {
                return self.complete_multi_group();
            }
            return None;
        }

        // Subsequent group: continuity must match and the sequence id must
        // be exactly one less than the previous one seen.
        if !self.multi.in_progress
            || continuity_id != self.multi.continuity_id
            || self.multi.len == 0
            || seq_id != self.multi.seq_id.wrapping_sub(1)
        {
            return None;
        }
        self.multi.seq_id = seq_id;
        if self.multi.len < MAX_SLOTS {
            self.multi.slots[self.multi.len] = pack_slot(group);
            self.multi.len += 1;
        }
        if seq_id == 0 {
            return self.complete_multi_group();
        }
        None
    }

    fn complete_multi_group(&mut self) -> Option<TmcMessage> {
        let staging = self.multi;
        self.multi.in_progress = false;
        Some(TmcMessage {
            kind: MessageKind::Multi,
            duration: None,
            follow_diversion: staging.follow_diversion,
            neg_direction: staging.neg_direction,
            extent: staging.extent,
            event: staging.event,
            location: staging.location,
            additional: decode_additional(&staging.slots, staging.len),
        })
    }
}
