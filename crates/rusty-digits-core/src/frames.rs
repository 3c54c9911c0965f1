use crate::layout::PIXEL_COUNT;

/// Number of glyphs, digits 0 to 9.
pub const FRAME_COUNT: usize = 10;

/// One 5x5 on/off pattern in row-major order.
pub type Glyph = [bool; PIXEL_COUNT];

const O: bool = false;
const X: bool = true;

#[rustfmt::skip]
pub static FRAMES: [Glyph; FRAME_COUNT] = [
    [
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, O, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
    ],
    [
        O, O, X, O, O,
        O, X, X, O, O,
        O, O, X, O, O,
        O, O, X, O, O,
        O, O, X, O, O,
    ],
    [
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
        O, X, O, O, O,
        O, X, X, X, O,
    ],
    [
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
    ],
    [
        O, X, O, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
        O, O, O, X, O,
        O, O, O, X, O,
    ],
    [
        O, X, X, X, O,
        O, X, O, O, O,
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
    ],
    [
        O, X, X, X, O,
        O, X, O, O, O,
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
    ],
    [
        O, X, X, X, O,
        O, O, O, X, O,
        O, O, O, X, O,
        O, O, O, X, O,
        O, O, O, X, O,
    ],
    [
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
    ],
    [
        O, X, X, X, O,
        O, X, O, X, O,
        O, X, X, X, O,
        O, O, O, X, O,
        O, X, X, X, O,
    ],
];

/// Index of a glyph in [`FRAMES`], always below [`FRAME_COUNT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameIndex(u8);

impl FrameIndex {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(FRAME_COUNT as u8 - 1);

    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < FRAME_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Pattern for the given digit.
pub fn glyph(frame: FrameIndex) -> &'static Glyph {
    &FRAMES[usize::from(frame.0)]
}
