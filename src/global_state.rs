use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use hal::gpio::{bank0, FunctionSioInput, Interrupt::EdgeLow, Pin, PullUp};
use hal::timer::{Alarm, Alarm0};
use hal::Timer;
use heapless::spsc::Producer;
use rp_pico::hal;

use fugit::MicrosDurationU32;
use portable_atomic::AtomicBool;
use rusty_digits_core::{Button, ButtonEvent, Instant};

use crate::config::EVENT_QUEUE_CAPACITY;

pub type ButtonAPin = Pin<bank0::Gpio5, FunctionSioInput, PullUp>;
pub type ButtonBPin = Pin<bank0::Gpio6, FunctionSioInput, PullUp>;
pub type EventProducer = Producer<'static, ButtonEvent, EVENT_QUEUE_CAPACITY>;

pub static SHARED_STATE: Mutex<RefCell<Option<SharedState>>> = Mutex::new(RefCell::new(None));
pub static ATOMIC_STATE: AtomicState = AtomicState::new();

pub fn shared_state_interrupt_free<F>(f: F)
where
    F: FnOnce(&mut SharedState),
{
    cortex_m::interrupt::free(|cs| {
        SHARED_STATE
            .borrow(cs)
            .borrow_mut()
            .as_mut()
            .map(f)
            .unwrap();
    });
}

pub struct AtomicState {
    pub toggle_status_led: AtomicBool,
}

impl AtomicState {
    pub const fn new() -> Self {
        Self {
            toggle_status_led: AtomicBool::new(false),
        }
    }
}

/// Everything the interrupt handlers touch.
pub struct SharedState {
    pub alarm0: Alarm0,
    pub timer: Timer,
    pub button_a: ButtonAPin,
    pub button_b: ButtonBPin,
    pub events: EventProducer,
}

impl SharedState {
    pub fn alarm0_schedule(&mut self, duration: MicrosDurationU32) {
        self.alarm0.schedule(duration).unwrap();
    }

    pub fn alarm0_clear_interrupt(&mut self) {
        self.alarm0.clear_interrupt();
    }

    /// Low 32 bits of the 1 MHz timer.
    pub fn now(&self) -> Instant {
        Instant::from_ticks(self.timer.get_counter_low())
    }

    /// Acknowledges pending falling edges and queues one event per button.
    ///
    /// Debouncing happens on the consumer side; a full queue drops the edge.
    pub fn queue_button_edges(&mut self) {
        let at = self.now();
        if self.button_a.interrupt_status(EdgeLow) {
            self.button_a.clear_interrupt(EdgeLow);
            self.push(ButtonEvent::new(Button::A, at));
        }
        if self.button_b.interrupt_status(EdgeLow) {
            self.button_b.clear_interrupt(EdgeLow);
            self.push(ButtonEvent::new(Button::B, at));
        }
    }

    fn push(&mut self, event: ButtonEvent) {
        if let Err(event) = self.events.enqueue(event) {
            defmt::warn!("event queue full, dropped {}", event);
        }
    }
}
