use bitflags::bitflags;

bitflags! {
    /// Bitset of decoder-state fields. Used both as the return value of
    /// [`crate::Decoder::add`] (which fields were just updated) and as the
    /// `valid_fields` member of [`crate::DecoderState`] (which fields have
    /// validated at least once since creation or reset) — `spec.md` §3.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct UpdatedFields: u32 {
        const PI      = 1 << 0;
        const PTY     = 1 << 1;
        const TP      = 1 << 2;
        const TA      = 1 << 3;
        const MS      = 1 << 4;
        const PS      = 1 << 5;
        const RT      = 1 << 6;
        const DI      = 1 << 7;
        const AF      = 1 << 8;
        const ECC     = 1 << 9;
        const LC      = 1 << 10;
        const PTYN    = 1 << 11;
        const TIME    = 1 << 12;
        const ODA     = 1 << 13;
        const TMC_SG  = 1 << 14;
        const TMC_MG  = 1 << 15;
        const TMC_SYS = 1 << 16;
    }
}

/// Alias kept distinct from [`UpdatedFields`] in the public API so call
/// sites read intent (`valid_fields: ValidFields` vs. a per-call
/// `UpdatedFields` delta) even though the bit layout is identical.
pub type ValidFields = UpdatedFields;
