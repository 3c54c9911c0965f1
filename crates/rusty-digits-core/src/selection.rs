//! Debounced selection of the displayed digit.
//!
//! Both buttons share a single debounce gate: an edge is accepted only when
//! strictly more than the window has passed since the last accepted edge,
//! whichever button produced it. Edges inside the window are dropped.

use fugit::MicrosDurationU32;

use crate::frames::{FrameIndex, FRAME_COUNT};

/// Microsecond timestamp from the 1 MHz system timer, wrapping at 32 bits.
pub type Instant = fugit::TimerInstantU32<1_000_000>;

/// Minimum spacing between two accepted edges.
pub const DEBOUNCE_WINDOW: MicrosDurationU32 = MicrosDurationU32::millis(250);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Steps back one digit.
    A,
    /// Steps forward one digit.
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Increment,
    Decrement,
}

impl Button {
    pub const fn command(self) -> Command {
        match self {
            Button::A => Command::Decrement,
            Button::B => Command::Increment,
        }
    }
}

/// A falling edge on one of the buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    pub at: Instant,
}

impl ButtonEvent {
    pub const fn new(button: Button, at: Instant) -> Self {
        Self { button, at }
    }
}

pub struct SelectionMachine {
    selected: FrameIndex,
    last_accepted: Instant,
    debounce_window: MicrosDurationU32,
}

impl Default for SelectionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionMachine {
    /// Starts on digit 0 with the last accepted edge at time 0.
    pub const fn new() -> Self {
        Self::with_debounce_window(DEBOUNCE_WINDOW)
    }

    pub const fn with_debounce_window(debounce_window: MicrosDurationU32) -> Self {
        Self {
            selected: FrameIndex::FIRST,
            last_accepted: Instant::from_ticks(0),
            debounce_window,
        }
    }

    pub fn selected(&self) -> FrameIndex {
        self.selected
    }

    pub fn last_accepted(&self) -> Instant {
        self.last_accepted
    }

    /// Runs one edge through the debounce gate.
    ///
    /// Returns the new selection when the edge was accepted, `None` when it
    /// fell inside the window. The caller re-renders on `Some`.
    pub fn handle(&mut self, event: ButtonEvent) -> Option<FrameIndex> {
        // Same arithmetic as the 32-bit hardware counter, so a counter wrap reads as a short gap.
        let elapsed = event.at.ticks().wrapping_sub(self.last_accepted.ticks());
        if elapsed <= self.debounce_window.ticks() {
            #[cfg(feature = "defmt")]
            defmt::trace!("dropped {} after {} us", event.button, elapsed);
            return None;
        }

        self.last_accepted = event.at;
        self.apply(event.button.command());

        #[cfg(feature = "defmt")]
        defmt::debug!("selected frame = {}", self.selected.get());
        Some(self.selected)
    }

    /// Steps the selection without consulting the debounce gate.
    pub fn apply(&mut self, command: Command) {
        let count = FRAME_COUNT as u16;
        let current = u16::from(self.selected.get());
        let next = match command {
            Command::Increment => (current + 1) % count,
            Command::Decrement => {
                let next = current.wrapping_sub(1);
                if next >= count {
                    count - 1
                } else {
                    next
                }
            }
        };
        self.selected = u8::try_from(next)
            .ok()
            .and_then(FrameIndex::new)
            .unwrap_or(FrameIndex::LAST);
    }
}
