#![no_std]
#![no_main]

mod config;
mod global_state;
mod strip;

use rp_pico::entry;
use defmt_rtt as _;
use panic_halt as _;
use rp_pico::hal; // Hardware Abstraction Layer (higher-level drivers)
use rp_pico::hal::pac; // Peripheral Access Crate (low-level register access)
use rp_pico::hal::pac::interrupt;
use rp_pico::hal::gpio::Interrupt::EdgeLow;
use rp_pico::hal::pio::PIOExt;
use rp_pico::hal::timer::Alarm;
use rp_pico::hal::Clock;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};
use heapless::spsc::Queue;
use portable_atomic::Ordering;
use static_cell::StaticCell;

use rusty_digits_core::{render, ButtonEvent, SelectionMachine, LED_COLOR};

use config::{BLINK_INTERVAL, EVENT_QUEUE_CAPACITY};
use global_state::{ButtonAPin, ButtonBPin, SharedState, ATOMIC_STATE, SHARED_STATE};
use strip::Ws2812Writer;

static EVENT_QUEUE: StaticCell<Queue<ButtonEvent, EVENT_QUEUE_CAPACITY>> = StaticCell::new();

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

    // Configure the clocks (125 MHz system clock)
    let clocks = hal::clocks::init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ).unwrap();

    let sio = hal::Sio::new(pac.SIO); // single-cycle IO
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let mut status_led = pins.gpio13.into_push_pull_output();
    status_led.set_low().unwrap();

    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let mut strip = Ws2812Writer::new(
        pins.gpio7.into_function(),
        &mut pio,
        sm0,
        clocks.system_clock.freq(),
    );

    let mut selection = SelectionMachine::new();
    render(&mut strip, selection.selected(), LED_COLOR).unwrap();
    defmt::info!("showing frame {}", selection.selected().get());

    let button_a: ButtonAPin = pins.gpio5.reconfigure();
    let button_b: ButtonBPin = pins.gpio6.reconfigure();
    button_a.set_interrupt_enabled(EdgeLow, true);
    button_b.set_interrupt_enabled(EdgeLow, true);

    let (events, mut pending) = EVENT_QUEUE.init(Queue::new()).split();

    let mut timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut alarm0 = timer.alarm_0().unwrap();
    alarm0.enable_interrupt();
    cortex_m::interrupt::free(|cs| {
        SHARED_STATE.borrow(cs).replace(Some(SharedState {
            alarm0,
            timer,
            button_a,
            button_b,
            events,
        }));
    });
    global_state::shared_state_interrupt_free(reschedule_blink);

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    loop {
        // sleep until the status LED is due or a button edge arrived
        while !ATOMIC_STATE.toggle_status_led.load(Ordering::Acquire) && !pending.ready() {
            cortex_m::asm::wfi();
        }

        if ATOMIC_STATE.toggle_status_led.swap(false, Ordering::AcqRel) {
            status_led.toggle().unwrap();
        }

        while let Some(event) = pending.dequeue() {
            if let Some(frame) = selection.handle(event) {
                render(&mut strip, frame, LED_COLOR).unwrap();
            }
        }
    }
}

fn reschedule_blink(state: &mut SharedState) {
    state.alarm0_schedule(BLINK_INTERVAL);
    state.alarm0_clear_interrupt();
}

#[interrupt]
fn TIMER_IRQ_0() {
    ATOMIC_STATE.toggle_status_led.store(true, Ordering::Release);
    global_state::shared_state_interrupt_free(reschedule_blink);
}

#[interrupt]
fn IO_IRQ_BANK0() {
    global_state::shared_state_interrupt_free(SharedState::queue_button_edges);
}
