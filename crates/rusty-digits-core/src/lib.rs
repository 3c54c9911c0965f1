//! Hardware-independent core of the digit matrix: the glyph table, the
//! wiring correction of the 5x5 strip, frame rendering and the debounced
//! two-button selection.
#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod frames;
pub mod layout;
pub mod renderer;
pub mod selection;

pub use color::{color_word, Color, LED_COLOR, OFF};
pub use frames::{glyph, FrameIndex, Glyph, FRAMES, FRAME_COUNT};
pub use layout::{corrected_index, CORRECTED_INDEX, MATRIX_SIZE, PIXEL_COUNT};
pub use renderer::{render, PixelWriter};
pub use selection::{Button, ButtonEvent, Command, Instant, SelectionMachine, DEBOUNCE_WINDOW};
