//! Raw blocks, the assembled group they combine into, and the four-state
//! block assembler (`spec.md` §3, §4.1).

use bitflags::bitflags;

bitflags! {
    /// Error flags carried on the raw block's status byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BlockFlags: u8 {
        /// The upstream driver corrected a bit error in this block; it is
        /// used normally but counted separately.
        const CORRECTED = 0x40;
        /// The upstream driver could not correct this block; it is treated
        /// as having no valid block id and aborts assembly at its stage.
        const UNCORRECTABLE = 0x80;
    }
}

const BLOCK_ID_MASK: u8 = 0x07;

/// Block position within a group, after collapsing C′ onto C
/// (`spec.md` §3: "values 2 and 4 are both treated as block C").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
    A,
    B,
    C,
    D,
}

impl BlockId {
    /// Decode the low 3 bits of a status byte into a block position.
    /// Values 5..7 are not produced by valid upstream drivers and are
    /// rejected (`spec.md` §6).
    fn from_raw(raw: u8) -> Option<Self> {
        match raw & BLOCK_ID_MASK {
            0 => Some(BlockId::A),
            1 => Some(BlockId::B),
            2 | 4 => Some(BlockId::C),
            3 => Some(BlockId::D),
            _ => None,
        }
    }
}

/// One 16-bit payload unit received from the tuner demodulator, plus the
/// upstream-supplied block-id and error flags (`spec.md` §3, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock {
    pub msb: u8,
    pub lsb: u8,
    status: u8,
    flags: BlockFlags,
}

impl RawBlock {
    pub fn new(msb: u8, lsb: u8, status: u8) -> Self {
        Self {
            msb,
            lsb,
            status,
            flags: BlockFlags::from_bits_truncate(status),
        }
    }

    pub fn corrected(&self) -> bool {
        self.flags.contains(BlockFlags::CORRECTED)
    }

    pub fn uncorrectable(&self) -> bool {
        self.flags.contains(BlockFlags::UNCORRECTABLE)
    }

    fn block_id(&self) -> Option<BlockId> {
        if self.uncorrectable() {
            None
        } else {
            BlockId::from_raw(self.status)
        }
    }
}

/// 1-bit group-version field (`spec.md` glossary: "version B replaces block
/// C's data with a repeat of the PI code").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Version {
    A,
    B,
}

/// An assembled RDS group: the invariant parts already split out by the
/// pre-decoder, plus the raw bytes of blocks C and D for the group-type
/// dispatcher to interpret (`spec.md` §3, §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub pi: u16,
    pub group_id: u8,
    pub version: Option<VersionRepr>,
    pub data_b_lsb: u8,
    pub data_c_msb: u8,
    pub data_c_lsb: u8,
    pub data_d_msb: u8,
    pub data_d_lsb: u8,
}

/// `serde`/`Default`-friendly mirror of [`Version`] stored on [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VersionRepr {
    A,
    B,
}

impl From<Version> for VersionRepr {
    fn from(v: Version) -> Self {
        match v {
            Version::A => VersionRepr::A,
            Version::B => VersionRepr::B,
        }
    }
}

impl Group {
    pub fn version(&self) -> Version {
        match self.version {
            Some(VersionRepr::B) => Version::B,
            _ => Version::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    AReceived,
    BReceived,
    CReceived,
}

/// Four consecutive raw blocks staged until a full group arrives.
#[derive(Debug, Clone, Copy, Default)]
struct Staged {
    a: RawBlock,
    b: RawBlock,
    c: RawBlock,
    d: RawBlock,
}

impl Default for RawBlock {
    fn default() -> Self {
        RawBlock::new(0, 0, 0)
    }
}

/// Outcome of feeding one raw block to the [`Assembler`].
pub struct PushOutcome {
    /// Whether this block carried a `corrected` or `uncorrectable` flag.
    pub corrected: bool,
    pub errored: bool,
    /// Set when the block completed the 4th position of a group; the
    /// caller is responsible for pre-decoding and dispatching it.
    pub completed: Option<(RawBlock, RawBlock, RawBlock, RawBlock)>,
}

/// The four-state block reassembly machine (`spec.md` §4.1).
///
/// States: `EMPTY`, `A_RECEIVED`, `B_RECEIVED`, `C_RECEIVED`. A group is only
/// emitted once all four expected block ids were seen in order
/// A→B→C|C′→D with no error flag on any of them (invariant 3).
#[derive(Debug, Clone, Copy)]
pub struct Assembler {
    state: State,
    staged: Staged,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            staged: Staged::default(),
        }
    }

    pub fn reset(&mut self) {
        self.state = State::Empty;
    }

    /// Feed one raw block through the state machine.
    pub fn push(&mut self, block: RawBlock) -> PushOutcome {
        let corrected = block.corrected();
        let errored_flag = block.uncorrectable();
        let id = block.block_id();

        let mut group_error = false;
        let mut completed = None;

        match (self.state, id) {
            (State::Empty, Some(BlockId::A)) => {
                self.staged.a = block;
                self.state = State::AReceived;
            },
            (State::Empty, _) => {
                group_error = true;
            },
            (State::AReceived, Some(BlockId::B)) => {
                self.staged.b = block;
                self.state = State::BReceived;
            },
            (State::AReceived, _) => {
                group_error = true;
                self.state = State::Empty;
            },
            (State::BReceived, Some(BlockId::C)) => {
                self.staged.c = block;
                self.state = State::CReceived;
            },
            (State::BReceived, _) => {
                group_error = true;
                self.state = State::Empty;
            },
            (State::CReceived, Some(BlockId::D)) => {
                self.staged.d = block;
                self.state = State::Empty;
                completed = Some((self.staged.a, self.staged.b, self.staged.c, self.staged.d));
            },
            (State::CReceived, _) => {
                group_error = true;
                self.state = State::Empty;
            },
        }

        PushOutcome {
            corrected,
            errored: errored_flag || group_error,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u8) -> RawBlock {
        RawBlock::new(0xAB, 0xCD, id)
    }

    #[test]
    fn full_sequence_completes_a_group() {
        let mut asm = Assembler::new();
        assert!(asm.push(block(0)).completed.is_none());
        assert!(asm.push(block(1)).completed.is_none());
        assert!(asm.push(block(2)).completed.is_none());
        assert!(asm.push(block(3)).completed.is_some());
    }

    #[test]
    fn c_prime_is_accepted_as_c() {
        let mut asm = Assembler::new();
        asm.push(block(0));
        asm.push(block(1));
        assert!(asm.push(block(4)).completed.is_none());
        assert!(asm.push(block(3)).completed.is_some());
    }

    #[test]
    fn out_of_order_block_resets_to_empty() {
        let mut asm = Assembler::new();
        asm.push(block(0));
        let outcome = asm.push(block(3)); // expected B, got D
        assert!(outcome.errored);
        assert!(outcome.completed.is_none());
        // machine is back at EMPTY, a fresh A restarts it
        assert!(asm.push(block(0)).completed.is_none());
        assert!(asm.push(block(1)).completed.is_none());
        assert!(asm.push(block(2)).completed.is_none());
        assert!(asm.push(block(3)).completed.is_some());
    }

    #[test]
    fn uncorrectable_block_aborts_assembly() {
        let mut asm = Assembler::new();
        asm.push(block(0));
        let bad = RawBlock::new(0, 0, 1 | BlockFlags::UNCORRECTABLE.bits());
        let outcome = asm.push(bad);
        assert!(outcome.errored);
        assert!(outcome.completed.is_none());
    }

    #[test]
    fn invalid_block_id_values_abort_assembly() {
        let mut asm = Assembler::new();
        for invalid in [5u8, 6, 7] {
            asm.reset();
            asm.push(block(0));
            asm.push(block(1));
            asm.push(block(2));
            let outcome = asm.push(block(invalid));
            assert!(outcome.errored);
            assert!(outcome.completed.is_none());
        }
    }
}
