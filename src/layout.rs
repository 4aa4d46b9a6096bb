//! Index layout: fixed bit allocation of a 64-bit H3 cell index, and the
//! normalization between full indices and short payloads.
//!
//! ## Index Layout (u64)
//!
//! ```text
//! ┌──────┬────────┬──────────┬────────────┬───────────┬─────────┬─────────┬─────┬──────────┐
//! │ Rsvd │ Mode   │ Rsvd     │ Resolution │ Base cell │ Digit 1 │ Digit 2 │ ... │ Digit 15 │
//! │ 1    │ 4 bits │ 3 bits   │ 4 bits     │ 7 bits    │ 3 bits  │ 3 bits  │     │ 3 bits   │
//! │ [63] │[62:59] │ [58:56]  │ [55:52]    │ [51:45]   │ [44:42] │ [41:39] │     │ [2:0]    │
//! └──────┴────────┴──────────┴────────────┴───────────┴─────────┴─────────┴─────┴──────────┘
//! ```
//!
//! The top 12 bits never carry location and are the same for every cell at a
//! given resolution: they form the [`Header`]. Digits finer than the cell's
//! resolution hold [`UNUSED_DIGIT`].
//!
//! ## Short payload
//!
//! ```text
//! full index ──(+ BASE_CELL_INCREMENT) mod 2^52──▶ base cell + 15 digits
//!            ──>> 9──────────────────────────────▶ base cell + digits 1..=12
//! ```
//!
//! The payload keeps 7 + 36 = 43 bits. Digits 13..=15 are always unused for a
//! resolution 10 cell and are refilled on the way back.

/// Finest resolution of the layout (number of digit slots).
pub use placekey_h3::MAX_RESOLUTION;

/// Resolution at which coordinates are indexed.
pub const TARGET_RESOLUTION: u8 = 10;

/// Resolution depth retained by the short payload.
pub const BASE_RESOLUTION: u8 = 12;

/// Bits per resolution digit.
pub const DIGIT_BITS: u8 = 3;

/// Value held by a digit slot finer than the cell's resolution.
pub const UNUSED_DIGIT: u64 = 0b111;

/// Bits below the header (base cell + all digits).
pub const LOCATION_BITS: u8 = 52;

/// Mask selecting the location bits.
pub const LOCATION_MASK: u64 = (1 << LOCATION_BITS) - 1;

/// Bit position of the 4 resolution bits.
pub const RESOLUTION_SHIFT: u8 = 52;

/// Added before truncation so the base-cell field never borrows.
pub const BASE_CELL_INCREMENT: u64 = 1 << (DIGIT_BITS as u32 * MAX_RESOLUTION as u32);

/// Number of low bits dropped by [`shorten`].
pub const DROPPED_BITS: u32 = DIGIT_BITS as u32 * (MAX_RESOLUTION - BASE_RESOLUTION) as u32;

/// All-ones filler for the dropped digits.
pub const UNUSED_RESOLUTION_FILLER: u64 = (1 << DROPPED_BITS) - 1;

/// Upper bound (exclusive) of the payloads [`shorten`] can produce.
pub const PAYLOAD_LIMIT: u64 = 1 << (LOCATION_BITS as u32 - DROPPED_BITS);

/// Static assertion: a short payload must fit in nine base-28 symbols.
const _: () = {
    let mut limit: u64 = 1;
    let mut i = 0;
    while i < crate::alphabet::CODE_LENGTH {
        limit *= crate::alphabet::ALPHABET_LEN;
        i += 1;
    }
    assert!(
        PAYLOAD_LIMIT <= limit,
        "short payload must fit in CODE_LENGTH base-28 symbols"
    );
};

/// The 12 non-location bits shared by every cell at the target resolution.
///
/// Derived once from the provider's index of the coordinate origin and then
/// passed to every decode. Encode does not need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header(u64);

impl Header {
    /// Keep only the header bits of `index`.
    #[inline]
    pub const fn from_origin_index(index: u64) -> Self {
        Self(index & !LOCATION_MASK)
    }

    /// Header value, still in place in the top 12 bits.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Resolution recorded in the header bits.
    #[inline]
    pub const fn resolution(self) -> u8 {
        ((self.0 >> RESOLUTION_SHIFT) & 0xf) as u8
    }
}

// =============================================================================
// Standalone index operations
// =============================================================================

/// Extract digit `res` (1..=15) from an index.
#[inline]
pub const fn digit_of(index: u64, res: u8) -> u64 {
    debug_assert!(res >= 1 && res <= MAX_RESOLUTION, "digit out of range");
    (index >> (DIGIT_BITS as u32 * (MAX_RESOLUTION - res) as u32)) & UNUSED_DIGIT
}

/// Infer a cell's resolution from its digits.
///
/// Counts unused digits from digit 15 towards digit 1; the resolution is
/// whatever is left. Pure bit arithmetic, no header lookup.
#[inline]
pub const fn resolution_of(index: u64) -> u8 {
    let mut res = MAX_RESOLUTION;
    while res > 0 && digit_of(index, res) == UNUSED_DIGIT {
        res -= 1;
    }
    res
}

/// Truncate a full index to the short payload.
///
/// Only meaningful for cells at [`TARGET_RESOLUTION`] or coarser down to the
/// base resolution; other digits are dropped silently.
#[inline]
pub const fn shorten(index: u64) -> u64 {
    (index.wrapping_add(BASE_CELL_INCREMENT) & LOCATION_MASK) >> DROPPED_BITS
}

/// Rebuild a full index from a short payload and the header.
#[inline]
pub const fn unshorten(payload: u64, header: Header) -> u64 {
    (payload << DROPPED_BITS)
        .wrapping_add(header.value())
        .wrapping_add(UNUSED_RESOLUTION_FILLER)
        .wrapping_sub(BASE_CELL_INCREMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: u64 = 0x8a754e64992ffff;
    const HEADER: Header = Header::from_origin_index(ORIGIN);

    #[test]
    fn layout_constants_are_valid() {
        assert_eq!(BASE_CELL_INCREMENT, 1 << 45);
        assert_eq!(DROPPED_BITS, 9);
        assert_eq!(UNUSED_RESOLUTION_FILLER, 0b111_111_111);
        assert_eq!(PAYLOAD_LIMIT, 1 << 43);
        // One digit slot per resolution the grid supports.
        assert_eq!(MAX_RESOLUTION, 15);
        assert_eq!(
            BASE_CELL_INCREMENT,
            1 << (DIGIT_BITS as u32 * placekey_h3::MAX_RESOLUTION as u32)
        );
        // Filler must not reach into retained digits.
        assert_eq!(UNUSED_RESOLUTION_FILLER >> DROPPED_BITS, 0);
    }

    #[test]
    fn header_of_origin() {
        assert_eq!(HEADER.value(), 621496748577128448);
        assert_eq!(HEADER.resolution(), TARGET_RESOLUTION);
        assert_eq!(HEADER.value() & LOCATION_MASK, 0);
    }

    #[test]
    fn resolution_inference() {
        assert_eq!(resolution_of(ORIGIN), 10);
        assert_eq!(resolution_of(0x8a2a1072b59ffff), 10);
        assert_eq!(resolution_of(0x8c194ad30d067ff), 12);
        // Resolution 0 cell: every digit unused.
        assert_eq!(resolution_of(0x8001fffffffffff), 0);
    }

    #[test]
    fn digit_extraction() {
        assert_eq!(digit_of(ORIGIN, 15), UNUSED_DIGIT);
        assert_eq!(digit_of(ORIGIN, 11), UNUSED_DIGIT);
        assert_ne!(digit_of(ORIGIN, 10), UNUSED_DIGIT);
    }

    #[test]
    fn shorten_known_indices() {
        assert_eq!(shorten(ORIGIN), 4099330591103);
        assert_eq!(shorten(0x8a283082a677fff), 1449619960767);
    }

    #[test]
    fn unshorten_inverts_shorten() {
        for index in [
            ORIGIN,
            0x8a2830828767fff,
            0x8a283082a677fff,
            0x8ac2e31064effff,
            0x8ac200000007fff,
            0x8a2a1072b59ffff,
        ] {
            let payload = shorten(index);
            assert!(payload < PAYLOAD_LIMIT);
            assert_eq!(unshorten(payload, HEADER), index, "index {:#x}", index);
        }
    }

    #[test]
    fn shorten_inverts_unshorten_at_the_edges() {
        for payload in [0, 1, PAYLOAD_LIMIT / 2, PAYLOAD_LIMIT - 1] {
            assert_eq!(shorten(unshorten(payload, HEADER)), payload);
        }
    }

    #[test]
    fn other_resolutions_do_not_roundtrip() {
        // Resolution 12 cell: digits 11 and 12 survive but the header says 10.
        let res12 = 0x8c194ad30d067ff;
        assert_ne!(unshorten(shorten(res12), HEADER), res12);
    }
}
