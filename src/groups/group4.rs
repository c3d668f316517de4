//! Group 4A — date/time: Modified Julian Day assembly, UTC hour/minute and
//! GMT offset extraction, and the Annex G calendar conversion
//! (`spec.md` §4.7).

use crate::block::{Group, Version};
use crate::fields::UpdatedFields;
use crate::state::{Buffers, DecoderState};
use crate::time;

pub(crate) fn decode(group: &Group, state: &mut DecoderState, buffers: &mut Buffers) -> UpdatedFields {
    if group.version() != Version::A {
        return UpdatedFields::empty();
    }

    let mut updated = UpdatedFields::empty();

    let b_low2 = (group.data_b_lsb & 0x03) as u32;
    let mjd = (b_low2 << 15) | (group.data_c_msb as u32) << 7 | (group.data_c_lsb as u32) >> 1;

    if let Some(mjd) = buffers.mjd.observe(mjd) {
        let utc_hour = ((group.data_c_lsb & 0x01) << 4) | (group.data_d_msb >> 4);
        let utc_minute = ((group.data_d_msb & 0x0F) << 2) | (group.data_d_lsb >> 6);
        let offset = group.data_d_lsb & 0x3F;

        if let Ok(decoded) = time::decode(mjd, utc_hour, utc_minute, offset) {
            state.time = Some(decoded);
            updated |= UpdatedFields::TIME;
        }
    }

    state.mark_valid(updated);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(b_lsb: u8, c_msb: u8, c_lsb: u8, d_msb: u8, d_lsb: u8) -> Group {
        Group {
            pi: 0x1234,
            group_id: 4,
            version: Some(crate::block::VersionRepr::A),
            data_b_lsb: b_lsb,
            data_c_msb: c_msb,
            data_c_lsb: c_lsb,
            data_d_msb: d_msb,
            data_d_lsb: d_lsb,
        }
    }

    #[test]
    fn time_publishes_only_after_mjd_double_reception() {
        // mjd = 61250 (2026-07-29) -> b_low2=1, c_msb=(61250>>7)&0xFF, c_lsb top7=low7 bits<<1
        let mjd: u32 = 61250;
        let b_low2 = ((mjd >> 15) & 0x03) as u8;
        let c_msb = ((mjd >> 7) & 0xFF) as u8;
        let c_lsb = ((mjd & 0x7F) << 1) as u8;
        let g = group(b_low2, c_msb, c_lsb, 12 << 4, 0);

        let mut state = DecoderState::new();
        let mut buffers = Buffers::new();
        assert!(!decode(&g, &mut state, &mut buffers).contains(UpdatedFields::TIME));
        assert!(decode(&g, &mut state, &mut buffers).contains(UpdatedFields::TIME));
        assert!(state.time.is_some());
    }
}
