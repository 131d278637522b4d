//! SMS part tables.
//!
//! The gateway bills by part. Each table maps an inclusive length range to the
//! number of parts the carrier splits the message into.

use super::encoding::EncodingClass;

/// One row of a part table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRange {
    pub min: usize,
    pub max: usize,
    pub parts: u32,
}

const fn range(min: usize, max: usize, parts: u32) -> SegmentRange {
    SegmentRange { min, max, parts }
}

/// GSM-7 part table, up to 1224 characters.
pub const GSM7_TABLE: &[SegmentRange] = &[
    range(1, 160, 1),
    range(161, 306, 2),
    range(307, 459, 3),
    range(460, 612, 4),
    range(613, 765, 5),
    range(766, 918, 6),
    range(919, 1071, 7),
    range(1072, 1224, 8),
];

/// Unicode (UCS-2) part table, up to 851 characters.
pub const UNICODE_TABLE: &[SegmentRange] = &[
    range(1, 70, 1),
    range(71, 134, 2),
    range(135, 201, 3),
    range(202, 268, 4),
    range(269, 335, 5),
    range(336, 402, 6),
    range(403, 469, 7),
    range(470, 536, 8),
    range(537, 605, 9),
    range(606, 672, 10),
    range(673, 739, 11),
    range(740, 796, 12),
    range(797, 851, 13),
];

pub fn table_for(encoding: EncodingClass) -> &'static [SegmentRange] {
    match encoding {
        EncodingClass::Gsm7 => GSM7_TABLE,
        EncodingClass::Unicode => UNICODE_TABLE,
    }
}

/// Look up the row covering `length`, if any.
pub fn lookup(encoding: EncodingClass, length: usize) -> Option<&'static SegmentRange> {
    table_for(encoding)
        .iter()
        .find(|r| length >= r.min && length <= r.max)
}

/// Number of parts for a message of `length` characters.
///
/// Lengths outside the table (0, or past the last row) count as one part.
pub fn segment_count(encoding: EncodingClass, length: usize) -> u32 {
    lookup(encoding, length).map(|r| r.parts).unwrap_or(1)
}
