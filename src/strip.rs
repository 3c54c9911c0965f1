use core::convert::Infallible;

use fugit::HertzU32;
use hal::gpio::{FunctionPio0, Pin, PinId, PullType};
use hal::pac;
use hal::pio::{Buffers, PIOBuilder, PinDir, ShiftDirection, StateMachineIndex, Tx, UninitStateMachine, PIO};
use rp_pico::hal;
use rusty_digits_core::PixelWriter;

use crate::config::STRIP_FREQUENCY;

/// PIO cycles spent on one bit: T1 + T2 + T3 of the program below.
const CYCLES_PER_BIT: u32 = 2 + 5 + 3;

/// One WS2812 strip on a PIO0 state machine, fed a GRB word per pixel.
pub struct Ws2812Writer<I: PinId, M: PullType, SM: StateMachineIndex> {
    tx: Tx<(pac::PIO0, SM)>,
    _pin: Pin<I, FunctionPio0, M>,
}

impl<I: PinId, M: PullType, SM: StateMachineIndex> Ws2812Writer<I, M, SM> {
    pub fn new(
        pin: Pin<I, FunctionPio0, M>,
        pio: &mut PIO<pac::PIO0>,
        sm: UninitStateMachine<(pac::PIO0, SM)>,
        system_clock: HertzU32,
    ) -> Self {
        // T1 = 2, T2 = 5, T3 = 3
        let program = pio_proc::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]",
            "    jmp !x do_zero  side 1 [1]",
            "do_one:",
            "    jmp bitloop     side 1 [4]",
            "do_zero:",
            "    nop             side 0 [4]",
            ".wrap",
        );
        let installed = pio.install(&program.program).unwrap();

        let bit_frequency = STRIP_FREQUENCY.to_Hz() * CYCLES_PER_BIT;
        let clock = system_clock.to_Hz();
        let int = clock / bit_frequency;
        let frac = ((clock - int * bit_frequency) * 256) / bit_frequency;

        let pin_id = pin.id().num;
        let (mut sm, _, tx) = PIOBuilder::from_installed_program(installed)
            .buffers(Buffers::OnlyTx)
            .side_set_pin_base(pin_id)
            .clock_divisor_fixed_point(int as u16, frac as u8)
            .out_shift_direction(ShiftDirection::Left)
            .autopull(true)
            .pull_threshold(24)
            .build(sm);
        sm.set_pindirs([(pin_id, PinDir::Output)]);
        sm.start();

        Self { tx, _pin: pin }
    }
}

impl<I: PinId, M: PullType, SM: StateMachineIndex> PixelWriter for Ws2812Writer<I, M, SM> {
    type Error = Infallible;

    /// Blocks until the TX FIFO has room. The word is left-aligned for the 24-bit autopull.
    fn write_pixel(&mut self, word: u32) -> Result<(), Self::Error> {
        while !self.tx.write(word << 8) {
            core::hint::spin_loop();
        }
        Ok(())
    }
}
