use stm32f3xx_hal as stm32f303;

use stm32f303::hal::digital::v2::OutputPin;

use core::convert::Infallible;

use simon::ButtonMask;

/// One indicator light per button, lit when its line is high
pub struct LightBar<'a> {
    lines: [&'a mut dyn OutputPin<Error = Infallible>; 4],
}

impl<'a> LightBar<'a> {
    pub fn new(lines: [&'a mut dyn OutputPin<Error = Infallible>; 4]) -> Self {
        Self { lines }
    }

    pub fn show(&mut self, mask: ButtonMask) {
        for (n, line) in self.lines.iter_mut().enumerate() {
            let _ = if mask.contains(n as u8) {
                line.set_high()
            } else {
                line.set_low()
            };
        }
    }
}
