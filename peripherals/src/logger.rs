//! Logging sinks for the `log` facade, built on the cortex_m_log crate.
//!
//! - Instrumentation Trace Macrocell, the default: cheap enough to keep on
//!   while the game runs
//! - Semihosting stdout: needs a debugger attached and halts the core on
//!   every write, only useful while bringing a board up
//!
//! Both sinks take the critical-section mode as a type parameter:
//! `InterruptFree` masks interrupts for each record so a tone interrupt never
//! lands in the middle of a line, `InterruptOk` leaves them enabled.
//!
//! # Examples
//!
//! ```no_run
//! # use peripherals::logger::*;
//! # use log::info;
//! let p = cortex_m::Peripherals::take().unwrap();
//!
//! let logger = create_itm_logger::<InterruptFree>(LevelFilter::Info, p.ITM);
//! unsafe {
//!     init(&logger);
//! }
//!
//! info!("waiting for the opening chord");
//! ```

use core::marker::{Send, Sync};
use cortex_m::peripheral::ITM;
use cortex_m_log::{
    destination,
    log::{trick_init, Logger},
    modes::InterruptModer,
    printer::{
        itm::ItmSync,
        semihosting::{hio::HStdout, Semihosting},
        Printer,
    },
};

pub use log::LevelFilter;

pub use cortex_m_log::modes::{InterruptFree, InterruptOk};

/// Logger writing to ITM stimulus port 0
///
/// gdb:
/// ```gdb
/// monitor tpiu config internal itm.out uart off 36000000
/// monitor itm port 0 on
/// ```
///
/// shell:
/// ```sh
/// itmdump -F -f itm.out
/// ```
pub fn create_itm_logger<M>(level: LevelFilter, itm_reg: ITM) -> Logger<ItmSync<M>>
where
    M: InterruptModer + Send + Sync + 'static,
{
    Logger {
        level,
        inner: ItmSync::<M>::new(destination::Itm::new(itm_reg)),
    }
}

/// Logger writing to the host's stdout over semihosting
///
/// gdb:
/// ```gdb
/// monitor arm semihosting enable
/// ```
pub fn create_semihosting_logger<M>(level: LevelFilter) -> Logger<Semihosting<M, HStdout>>
where
    M: InterruptModer + Send + Sync + 'static,
{
    Logger {
        level,
        inner: Semihosting::<M, _>::stdout().expect("Failed to retreive semihosting stdout"),
    }
}

/// Install `logger` behind the `log` macros.
///
/// # Safety
///
/// Call once, before any log record is emitted. The logger's lifetime is
/// stretched to `'static`, so it must outlive every logging call; in practice
/// it lives on the stack of a `main` that never returns.
pub unsafe fn init<P>(logger: &Logger<P>)
where
    P: Printer + Send + Sync + 'static,
{
    trick_init(logger).expect("Failed to initialize logger");
}
