//! Host-level tests driving button edges through selection and rendering.

use rusty_digits_core::{
    color_word, corrected_index, glyph, render, Button, ButtonEvent, FrameIndex, Instant, PixelWriter,
    SelectionMachine, FRAME_COUNT, LED_COLOR, OFF, PIXEL_COUNT,
};

#[derive(Default)]
struct Strip {
    frames: Vec<Vec<u32>>,
    pending: Vec<u32>,
}

impl PixelWriter for Strip {
    type Error = core::convert::Infallible;

    fn write_pixel(&mut self, word: u32) -> Result<(), Self::Error> {
        self.pending.push(word);
        if self.pending.len() == PIXEL_COUNT {
            self.frames.push(core::mem::take(&mut self.pending));
        }
        Ok(())
    }
}

fn expected_words(frame: FrameIndex) -> Vec<u32> {
    (0..PIXEL_COUNT)
        .map(|i| if glyph(frame)[corrected_index(i)] { color_word(LED_COLOR) } else { OFF })
        .collect()
}

fn press(machine: &mut SelectionMachine, strip: &mut Strip, button: Button, ms: u32) {
    if let Some(frame) = machine.handle(ButtonEvent::new(button, Instant::from_ticks(ms * 1_000))) {
        render(strip, frame, LED_COLOR).unwrap();
    }
}

#[test]
fn startup_frame_is_digit_zero() {
    let machine = SelectionMachine::new();
    let mut strip = Strip::default();
    render(&mut strip, machine.selected(), LED_COLOR).unwrap();

    assert_eq!(strip.frames.len(), 1);
    assert!(strip.pending.is_empty());
    assert_eq!(strip.frames[0], expected_words(FrameIndex::FIRST));
}

#[test]
fn every_accepted_press_renders_exactly_one_frame() {
    let mut machine = SelectionMachine::new();
    let mut strip = Strip::default();

    // B at 1 s, bounce at 1.01 s, B at 2 s, A at 2.1 s (dropped), A at 3 s.
    press(&mut machine, &mut strip, Button::B, 1_000);
    press(&mut machine, &mut strip, Button::B, 1_010);
    press(&mut machine, &mut strip, Button::B, 2_000);
    press(&mut machine, &mut strip, Button::A, 2_100);
    press(&mut machine, &mut strip, Button::A, 3_000);

    let shown: Vec<u8> = vec![1, 2, 1];
    assert_eq!(strip.frames.len(), shown.len());
    for (words, digit) in strip.frames.iter().zip(shown) {
        assert_eq!(*words, expected_words(FrameIndex::new(digit).unwrap()));
    }
    assert_eq!(machine.selected(), FrameIndex::new(1).unwrap());
}

#[test]
fn stepping_backwards_visits_every_digit() {
    let mut machine = SelectionMachine::new();
    let mut strip = Strip::default();
    for step in 1..=FRAME_COUNT as u32 {
        press(&mut machine, &mut strip, Button::A, step * 1_000);
    }

    let digits: Vec<u8> = strip
        .frames
        .iter()
        .map(|words| {
            (0..FRAME_COUNT as u8)
                .find(|&d| expected_words(FrameIndex::new(d).unwrap()) == *words)
                .unwrap()
        })
        .collect();
    assert_eq!(digits, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}
