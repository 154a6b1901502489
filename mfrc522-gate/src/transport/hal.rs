// mfrc522-gate/src/transport/hal.rs

//! Adapters from `embedded-hal` 1.0 peripherals to the crate's transport
//! traits. Enabled with `--features embedded-hal`.

use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::transport::traits::{Bus, Delay, OutputLine};
use crate::{Error, Result};

/// `Bus` over an `embedded_hal::spi::SpiBus`. Chip select stays with the
/// caller, so pair it with a `HalLine` in `SpiTransport`.
pub struct HalBus<S>(pub S);

impl<S: SpiBus<u8>> Bus for HalBus<S> {
    fn exchange(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        self.0
            .transfer(rx, tx)
            .map_err(|e| Error::TransportFault(format!("spi transfer: {:?}", e)))?;
        // Chip select must not rise before the last bit is clocked.
        self.0
            .flush()
            .map_err(|e| Error::TransportFault(format!("spi flush: {:?}", e)))
    }
}

/// `OutputLine` over an `embedded_hal::digital::OutputPin`.
pub struct HalLine<P>(pub P);

impl<P: OutputPin> OutputLine for HalLine<P> {
    fn set_high(&mut self) -> Result<()> {
        self.0
            .set_high()
            .map_err(|e| Error::TransportFault(format!("gpio set_high: {:?}", e)))
    }

    fn set_low(&mut self) -> Result<()> {
        self.0
            .set_low()
            .map_err(|e| Error::TransportFault(format!("gpio set_low: {:?}", e)))
    }
}

/// `Delay` over an `embedded_hal::delay::DelayNs`.
pub struct HalDelay<D>(pub D);

impl<D: DelayNs> Delay for HalDelay<D> {
    fn delay(&mut self, duration: Duration) {
        let us = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
        self.0.delay_us(us);
    }
}
