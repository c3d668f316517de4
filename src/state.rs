//! The public decoder snapshot (`spec.md` §3) and the private staging
//! buffers the group-type decoders accumulate into before a field
//! validates.

use bitflags::bitflags;

use crate::block::VersionRepr;
use crate::fixed_vec::FixedVec;
use crate::pending::{Pending, PsBuffer, SegmentHalves};
use crate::time::DecodedTime;
use crate::tmc::{TmcMessage, TmcSystem};
use crate::UpdatedFields;

/// Maximum alternative-frequency entries retained (IEC 62106 §6.2.1.6 Method
/// A lists up to 25).
pub const MAX_AF: usize = 25;
/// Maximum open-data-announcement entries retained: one per possible
/// group-id (`spec.md` §4.6 replaces in place per group-id, and there are
/// 16 group ids).
pub const MAX_ODA: usize = 16;

bitflags! {
    /// Decoder identification flags (`spec.md` §4.3): one bit set per
    /// accepted segment 0..3.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DiFlags: u8 {
        const STEREO          = 1 << 0;
        const ARTIFICIAL_HEAD = 1 << 1;
        const COMPRESSED      = 1 << 2;
        const STATIC_PTY      = 1 << 3;
    }
}

/// Alternative-frequency set with deduplication and an announced-count
/// completion bound (`spec.md` §4.3).
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternativeFrequencies {
    frequencies: FixedVec<u32, MAX_AF>,
    announced: u8,
}

impl AlternativeFrequencies {
    pub const fn new() -> Self {
        Self {
            frequencies: FixedVec::new(),
            announced: 0,
        }
    }

    pub fn frequencies(&self) -> &[u32] {
        self.frequencies.as_slice()
    }

    pub fn announced(&self) -> u8 {
        self.announced
    }

    fn set_announced(&mut self, count: u8) {
        self.announced = count;
    }

    /// Adds `hz` if it is not already present and there is room, bounded by
    /// both `MAX_AF` and the announced count (if one has arrived yet).
    fn try_add(&mut self, hz: u32) {
        if self.frequencies.as_slice().contains(&hz) {
            return;
        }
        if self.announced != 0 && self.frequencies.len() >= self.announced as usize {
            return;
        }
        self.frequencies.push(hz);
    }

    /// `spec.md` §3: "announced count controls completion".
    fn is_complete(&self) -> bool {
        self.announced != 0 && self.frequencies.len() >= self.announced as usize
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

/// One open-data-announcement entry (`spec.md` §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OdaEntry {
    pub group_id: u8,
    pub version: VersionRepr,
    pub aid: u16,
}

impl Default for VersionRepr {
    fn default() -> Self {
        VersionRepr::A
    }
}

/// The public, incrementally-updated decoder snapshot (`spec.md` §3).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderState {
    pub pi: u16,
    pub pty: u8,
    pub ps: [u8; 8],
    pub rt: [u8; 64],
    pub rt_length: usize,
    pub di: DiFlags,
    pub ecc: u8,
    pub lc: u8,
    pub ptyn: [u8; 8],
    pub time: Option<DecodedTime>,
    pub tp: bool,
    pub ta: bool,
    pub ms: bool,
    pub af: AlternativeFrequencies,
    pub oda: FixedVec<OdaEntry, MAX_ODA>,
    pub tmc_msg: TmcMessage,
    pub tmc_system: TmcSystem,
    pub valid_fields: UpdatedFields,
}

impl Default for DecoderState {
    fn default() -> Self {
        Self {
            pi: 0,
            pty: 0,
            ps: [0; 8],
            rt: [0; 64],
            rt_length: 0,
            di: DiFlags::empty(),
            ecc: 0,
            lc: 0,
            ptyn: [0; 8],
            time: None,
            tp: false,
            ta: false,
            ms: false,
            af: AlternativeFrequencies::new(),
            oda: FixedVec::new(),
            tmc_msg: TmcMessage::default(),
            tmc_system: TmcSystem::default(),
            valid_fields: UpdatedFields::empty(),
        }
    }
}

impl DecoderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mark_valid(&mut self, fields: UpdatedFields) {
        self.valid_fields |= fields;
    }

    pub(crate) fn add_af(&mut self, hz: u32) -> bool {
        self.af.try_add(hz);
        self.af.is_complete()
    }

    pub(crate) fn announce_af_count(&mut self, count: u8) -> bool {
        self.af.set_announced(count);
        self.af.is_complete()
    }

    pub(crate) fn upsert_oda(&mut self, group_id: u8, version: VersionRepr, aid: u16) {
        for entry in self.oda.iter_mut() {
            if entry.group_id == group_id {
                entry.version = version;
                entry.aid = aid;
                return;
            }
        }
        self.oda.push(OdaEntry {
            group_id,
            version,
            aid,
        });
    }
}

/// Per-field staging state private to the group-type decoders: everything a
/// field needs to remember between ingests before it validates into
/// [`DecoderState`] (`spec.md` §4.2's "pending buffers are opaque").
#[derive(Debug, Clone, Copy)]
pub(crate) struct Buffers {
    pub pi: Pending<u16>,
    pub pty: Pending<u8>,
    pub ecc: Pending<u8>,
    pub lc: Pending<u8>,
    pub mjd: Pending<u32>,
    pub ps: PsBuffer,
    pub ptyn: SegmentHalves,
    pub ptyn_ab: Option<bool>,
    pub rt_ab: Option<bool>,
    pub rt_next_segment: u8,
    /// Staging buffer for radio-text segments; copied into
    /// `DecoderState::rt` only once the message completes or is terminated
    /// early (`spec.md` §4.5), never exposed a segment at a time.
    pub rt_staging: [u8; 64],
    pub di_next_segment: u8,
    pub di_accum: DiFlags,
}

impl Default for Buffers {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffers {
    pub const fn new() -> Self {
        Self {
            pi: Pending::new(),
            pty: Pending::new(),
            ecc: Pending::new(),
            lc: Pending::new(),
            mjd: Pending::new(),
            ps: PsBuffer::new(),
            ptyn: SegmentHalves::new(),
            ptyn_ab: None,
            rt_ab: None,
            rt_next_segment: 0,
            rt_staging: [0; 64],
            di_next_segment: 0,
            di_accum: DiFlags::empty(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
