//! Board wiring and timing.
//!
//! WS2812 data on GPIO7, button A on GPIO5, button B on GPIO6 (both to
//! ground), status LED on GPIO13. The pins themselves are picked in `main`.

use fugit::{HertzU32, MicrosDurationU32};

/// Half period of the status LED blink.
pub const BLINK_INTERVAL: MicrosDurationU32 = MicrosDurationU32::millis(100);

/// Bit rate of the WS2812 data line.
pub const STRIP_FREQUENCY: HertzU32 = HertzU32::kHz(800);

/// Slots in the button event queue; one is always kept free.
pub const EVENT_QUEUE_CAPACITY: usize = 8;
