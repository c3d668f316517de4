/// Monotonic reception counters (`spec.md` §3, §7). Never decrease except on
/// a full [`crate::Decoder::reset`]; `reset(.., reset_statistics = false)`
/// preserves them across a state reset (invariant 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Total raw blocks fed to [`crate::Decoder::add`].
    pub block_count: u64,
    /// Blocks flagged `uncorrectable` or otherwise rejected by the
    /// assembler's block-id check.
    pub block_error_count: u64,
    /// Blocks flagged `corrected` by the upstream driver.
    pub block_corrected_count: u64,
    /// Groups fully assembled (A→B→C|C′→D with no error flag).
    pub group_count: u64,
    /// Out-of-order or error-flagged blocks that aborted assembly.
    pub group_error_count: u64,
    /// Per-group-id reception counts, indexed `0..16`.
    pub group_type_count: [u64; 16],
}

impl Statistics {
    pub const fn new() -> Self {
        Self {
            block_count: 0,
            block_error_count: 0,
            block_corrected_count: 0,
            group_count: 0,
            group_error_count: 0,
            group_type_count: [0; 16],
        }
    }
}
