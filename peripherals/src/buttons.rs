use stm32f3xx_hal as stm32f303;

use stm32f303::hal::digital::v2::InputPin;

use core::convert::Infallible;

use simon::ButtonMask;

/// Four push buttons wired between their line and ground, read through
/// pull-ups: a low line is a pressed button.
pub struct ButtonPad<'a> {
    lines: [&'a dyn InputPin<Error = Infallible>; 4],
}

impl<'a> ButtonPad<'a> {
    pub fn new(lines: [&'a dyn InputPin<Error = Infallible>; 4]) -> Self {
        Self { lines }
    }

    /// Raw state of the lines, bit `n` set when button `n` is down
    pub fn read(&self) -> ButtonMask {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_low().unwrap_or(false))
            .fold(ButtonMask::EMPTY, |mask, (n, _)| {
                mask | ButtonMask::single(n as u8)
            })
    }
}
