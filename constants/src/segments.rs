/// Seven-segment digit geometry: a classic a-g layout in the digit's local
/// XY plane, lifted into boxes. Which segments light up for which digit
/// follows the usual seven-segment display convention.
pub struct SegmentSpec {
    pub name: &'static str,
    /// Segment centre offset in the digit-local XY plane.
    pub offset: [f32; 2],
    /// Vertical segments are the horizontal bar rotated a quarter turn.
    pub vertical: bool,
    /// Digit values this segment is part of.
    pub digits: &'static [u8],
}

pub const SEGMENT_LENGTH: f32 = 1.2;
pub const SEGMENT_THICKNESS: f32 = 0.2;
pub const SEGMENT_DEPTH: f32 = 0.4;
pub const SEGMENT_SPACING: f32 = 1.5;

pub const SEGMENTS: &[SegmentSpec] = &[
    SegmentSpec {
        name: "a",
        offset: [0.0, SEGMENT_SPACING],
        vertical: false,
        digits: &[0, 2, 3, 5, 6, 7, 8, 9],
    },
    SegmentSpec {
        name: "b",
        offset: [SEGMENT_SPACING / 2.0, SEGMENT_SPACING / 2.0],
        vertical: true,
        digits: &[0, 1, 2, 3, 4, 7, 8, 9],
    },
    SegmentSpec {
        name: "c",
        offset: [SEGMENT_SPACING / 2.0, -SEGMENT_SPACING / 2.0],
        vertical: true,
        digits: &[0, 1, 3, 4, 5, 6, 7, 8, 9],
    },
    SegmentSpec {
        name: "d",
        offset: [0.0, -SEGMENT_SPACING],
        vertical: false,
        digits: &[0, 2, 3, 5, 6, 8, 9],
    },
    SegmentSpec {
        name: "e",
        offset: [-SEGMENT_SPACING / 2.0, -SEGMENT_SPACING / 2.0],
        vertical: true,
        digits: &[0, 2, 6, 8],
    },
    SegmentSpec {
        name: "f",
        offset: [-SEGMENT_SPACING / 2.0, SEGMENT_SPACING / 2.0],
        vertical: true,
        digits: &[0, 4, 5, 6, 8, 9],
    },
    SegmentSpec {
        name: "g",
        offset: [0.0, 0.0],
        vertical: false,
        digits: &[2, 3, 4, 5, 6, 8, 9],
    },
];
