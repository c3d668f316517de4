//! The public facade: [`Decoder`] owns the block assembler, the validation
//! buffers, the TMC engine and the published [`DecoderState`] snapshot
//! (`spec.md` §6).

use crate::block::{Assembler, Group, RawBlock, VersionRepr};
use crate::fields::UpdatedFields;
use crate::groups;
use crate::state::{Buffers, DecoderState};
use crate::statistics::Statistics;
use crate::tables;
use crate::tmc::TmcEngine;

/// An RDS/RBDS decoder instance. Owns all of its buffers; allocation-free
/// after construction (`spec.md` §5).
#[derive(Debug, Clone)]
pub struct Decoder {
    is_rbds: bool,
    assembler: Assembler,
    buffers: Buffers,
    tmc: TmcEngine,
    group: Group,
    state: DecoderState,
    statistics: Statistics,
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Decoder>();
};

impl Decoder {
    /// A zero-initialized decoder for the given variant. The RDS/RBDS
    /// choice is immutable for the lifetime of the instance
    /// (`spec.md` §3 invariant 5).
    pub fn new(is_rbds: bool) -> Self {
        Self {
            is_rbds,
            assembler: Assembler::new(),
            buffers: Buffers::new(),
            tmc: TmcEngine::new(),
            group: Group::default(),
            state: DecoderState::new(),
            statistics: Statistics::new(),
        }
    }

    /// Clears decoder state; `reset_statistics` also zeroes the counters
    /// (`spec.md` §6, invariant 4).
    pub fn reset(&mut self, reset_statistics: bool) {
        self.assembler.reset();
        self.buffers.reset();
        self.tmc.reset();
        self.group = Group::default();
        self.state = DecoderState::new();
        if reset_statistics {
            self.statistics = Statistics::new();
        }
    }

    /// Ingest one raw block. Returns the bitmask of fields updated by this
    /// call (`spec.md` §4.1, §4.2).
    pub fn add(&mut self, block: RawBlock) -> UpdatedFields {
        self.statistics.block_count += 1;
        if block.corrected() {
            self.statistics.block_corrected_count += 1;
        }
        if block.uncorrectable() {
            self.statistics.block_error_count += 1;
        }

        let outcome = self.assembler.push(block);
        if outcome.errored {
            self.statistics.group_error_count += 1;
        }

        let Some((a, b, c, d)) = outcome.completed else {
            return UpdatedFields::empty();
        };

        self.statistics.group_count += 1;
        let group_id = (b.msb >> 4) & 0x0F;
        self.statistics.group_type_count[group_id as usize] += 1;

        let raw_pi = ((a.msb as u16) << 8) | a.lsb as u16;
        let version = if b.msb & 0x08 != 0 { VersionRepr::B } else { VersionRepr::A };
        let tp = b.msb & 0x04 != 0;
        let raw_pty = ((b.msb & 0x03) << 3) | (b.lsb >> 5);

        self.group = Group {
            pi: raw_pi,
            group_id,
            version: Some(version),
            data_b_lsb: b.lsb,
            data_c_msb: c.msb,
            data_c_lsb: c.lsb,
            data_d_msb: d.msb,
            data_d_lsb: d.lsb,
        };

        let mut updated = UpdatedFields::empty();

        self.state.tp = tp;
        updated |= UpdatedFields::TP;

        if let Some(pi) = self.buffers.pi.observe(raw_pi) {
            if self.state.pi != pi {
                self.state.pi = pi;
                updated |= UpdatedFields::PI;
            }
        }
        if let Some(pty) = self.buffers.pty.observe(raw_pty) {
            if self.state.pty != pty {
                self.state.pty = pty;
                updated |= UpdatedFields::PTY;
            }
        }
        self.state.mark_valid(updated);

        updated | groups::dispatch(&self.group, &mut self.state, &mut self.buffers, &mut self.tmc)
    }

    pub fn state(&self) -> &DecoderState {
        &self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn is_rbds(&self) -> bool {
        self.is_rbds
    }

    /// The raw view of the last fully assembled group (`spec.md` §6
    /// `get_group`).
    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn pty_str(&self) -> Option<&'static str> {
        tables::pty_str(self.state.pty, self.is_rbds)
    }

    pub fn country_str(&self) -> &'static str {
        tables::country_str(self.state.ecc, (self.state.pi >> 12) as u8)
    }

    pub fn language_str(&self) -> &'static str {
        tables::language_str(self.state.lc)
    }

    pub fn coverage_str(&self) -> &'static str {
        tables::coverage_str(self.state.pi)
    }
}
