use crate::color::{color_word, Color, OFF};
use crate::frames::{glyph, FrameIndex};
use crate::layout::CORRECTED_INDEX;

/// Sink for one pixel at a time, in strip transmission order.
pub trait PixelWriter {
    type Error;

    /// Sends one 24-bit GRB word. May block until the strip can take it.
    fn write_pixel(&mut self, word: u32) -> Result<(), Self::Error>;
}

impl<W: PixelWriter + ?Sized> PixelWriter for &mut W {
    type Error = W::Error;

    fn write_pixel(&mut self, word: u32) -> Result<(), Self::Error> {
        (**self).write_pixel(word)
    }
}

/// Pushes the whole matrix for `frame`, one write per cell.
///
/// Cell `i` is lit when the glyph is set at `corrected_index(i)`. A failed
/// write stops the render and is handed back to the caller.
pub fn render<W: PixelWriter>(writer: &mut W, frame: FrameIndex, color: Color) -> Result<(), W::Error> {
    let glyph = glyph(frame);
    let lit = color_word(color);
    for &corrected in CORRECTED_INDEX.iter() {
        let word = if glyph[usize::from(corrected)] { lit } else { OFF };
        writer.write_pixel(word)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{corrected_index, PIXEL_COUNT};
    use smart_leds::RGB8;

    const LED_ON: RGB8 = RGB8 { r: 0, g: 0, b: 20 };

    #[derive(Default)]
    struct Recorder {
        words: Vec<u32>,
    }

    impl PixelWriter for Recorder {
        type Error = core::convert::Infallible;

        fn write_pixel(&mut self, word: u32) -> Result<(), Self::Error> {
            self.words.push(word);
            Ok(())
        }
    }

    struct FailAfter(usize);

    impl PixelWriter for FailAfter {
        type Error = &'static str;

        fn write_pixel(&mut self, _word: u32) -> Result<(), Self::Error> {
            if self.0 == 0 {
                return Err("fifo stalled");
            }
            self.0 -= 1;
            Ok(())
        }
    }

    #[test]
    fn zero_renders_through_corrected_lookup() {
        let color = RGB8 { r: 1, g: 2, b: 3 };
        let mut recorder = Recorder::default();
        render(&mut recorder, FrameIndex::FIRST, color).unwrap();

        assert_eq!(recorder.words.len(), PIXEL_COUNT);
        let zero = glyph(FrameIndex::FIRST);
        for (i, word) in recorder.words.iter().enumerate() {
            let expected = if zero[corrected_index(i)] { color_word(color) } else { OFF };
            assert_eq!(*word, expected, "pixel {i}");
        }
    }

    #[test]
    fn four_lands_on_strip_in_wiring_order() {
        let four = FrameIndex::new(4).unwrap();
        let mut recorder = Recorder::default();
        render(&mut recorder, four, LED_ON).unwrap();

        let pattern: Vec<u8> = recorder.words.iter().map(|&w| u8::from(w != OFF)).collect();
        #[rustfmt::skip]
        let expected = [
            0, 1, 0, 0, 0,
            0, 0, 0, 1, 0,
            0, 1, 1, 1, 0,
            0, 1, 0, 1, 0,
            0, 1, 0, 1, 0,
        ];
        assert_eq!(pattern, expected);

        let raw: Vec<u8> = glyph(four).iter().map(|&cell| u8::from(cell)).collect();
        assert_ne!(pattern, raw);
    }

    #[test]
    fn black_color_writes_only_off_words() {
        let mut recorder = Recorder::default();
        render(&mut recorder, FrameIndex::LAST, RGB8 { r: 0, g: 0, b: 0 }).unwrap();
        assert_eq!(recorder.words, vec![OFF; PIXEL_COUNT]);
    }

    #[test]
    fn writer_error_stops_render() {
        let mut writer = FailAfter(3);
        assert_eq!(render(&mut writer, FrameIndex::FIRST, LED_ON), Err("fifo stalled"));
        assert_eq!(writer.0, 0);
    }
}
