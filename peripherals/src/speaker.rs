//! Piezo speaker between two GPIO lines, toggled from the TIM2 update
//! interrupt.
//!
//! Driving the legs in antiphase doubles the voltage swing across the piezo
//! compared to a single line against ground.

use stm32f3xx_hal as stm32f303;

use core::convert::Infallible;

use stm32f303::{
    hal::{digital::v2::OutputPin, timer::CountDown},
    rcc,
    stm32::TIM2,
    time::Hertz,
    timer::{Event, Timer},
};

use simon::{timing::TICK_HZ, ToneTimer};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub struct Speaker<A, B> {
    timer: Timer<TIM2>,
    leg_a: A,
    leg_b: B,
    a_high: bool,
}

/// Take over TIM2 for the speaker on legs `leg_a` and `leg_b`.
///
/// The timer runs but its update interrupt stays disabled until a tone is
/// armed; the NVIC line still has to be unmasked by the caller.
pub fn init_tim2_speaker<A, B>(
    tim2: TIM2,
    leg_a: A,
    leg_b: B,
    clocks: rcc::Clocks,
    apb1: &mut rcc::APB1,
) -> Speaker<A, B>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
{
    info!("configuring timer2 as tone timer");
    debug!("tone tick rate: {}hz", TICK_HZ);
    let mut timer = Timer::tim2(tim2, Hertz(1_000), clocks, apb1);
    timer.unlisten(Event::Update);
    let mut speaker = Speaker {
        timer,
        leg_a,
        leg_b,
        a_high: false,
    };
    speaker.rest();
    speaker
}

impl<A, B> Speaker<A, B>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
{
    fn drive(&mut self, a_high: bool) {
        self.a_high = a_high;
        let _ = if a_high {
            self.leg_a.set_high().and(self.leg_b.set_low())
        } else {
            self.leg_a.set_low().and(self.leg_b.set_high())
        };
    }
}

impl<A, B> ToneTimer for Speaker<A, B>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
{
    fn begin(&mut self) {
        self.drive(false);
    }

    fn arm(&mut self, half_period: u16) {
        let rate = TICK_HZ / half_period.max(1) as u32;
        self.timer.start(Hertz(rate));
        self.timer.listen(Event::Update);
    }

    fn disarm(&mut self) {
        self.timer.unlisten(Event::Update);
    }

    fn flip(&mut self) {
        let a_high = !self.a_high;
        self.drive(a_high);
    }

    fn rest(&mut self) {
        self.a_high = false;
        let _ = self.leg_a.set_low().and(self.leg_b.set_low());
    }

    fn acknowledge(&mut self) {
        // reading the update flag through `wait` also clears it
        let _ = self.timer.wait();
    }
}
