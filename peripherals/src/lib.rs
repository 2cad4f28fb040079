#![no_std]

use stm32f3xx_hal as stm32f303;

use stm32f303::{flash, pac, rcc, time::Hertz, time::MegaHertz};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub mod buttons;
pub mod lights;
pub mod logger;
pub mod speaker;

pub use buttons::ButtonPad;
pub use lights::LightBar;
pub use speaker::{init_tim2_speaker, Speaker};

/// tpiu is a bridge for ITM, it's asynchronous clock prescaller
/// has to be updated, otherwise logging through ITM won't work
pub trait ClocksExt {
    fn set_tpiu_async_cpr(self, baud_rate: MegaHertz) -> Self;
}

impl ClocksExt for rcc::Clocks {
    fn set_tpiu_async_cpr(self, baud_rate: MegaHertz) -> Self {
        let tpiu_async_presc = self.hclk().0 / (baud_rate.0 * 1_000_000) - 1;
        unsafe { (*pac::TPIU::ptr()).acpr.write(tpiu_async_presc) }
        trace!("HCLK set to: {}hz", self.hclk().0);
        trace!("setting tpiu async prescaller to {} for {}mhz", tpiu_async_presc, baud_rate.0);
        self
    }
}

/// Run the core at `sysclk` from the internal oscillator
pub fn freeze_clocks<F>(sysclk: F, cfgr: rcc::CFGR, flash: &mut flash::Parts) -> rcc::Clocks
where
    F: Into<Hertz>,
{
    let clocks = cfgr.sysclk(sysclk).freeze(&mut flash.acr);
    debug!("sysclk: {}hz, pclk1: {}hz", clocks.sysclk().0, clocks.pclk1().0);
    clocks
}
