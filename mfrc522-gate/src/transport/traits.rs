// mfrc522-gate/src/transport/traits.rs

use std::time::Duration;

use crate::Result;
use crate::types::Register;

/// Full-duplex byte exchange on a synchronous serial bus. `rx` has the same
/// length as `tx` and receives the bytes clocked in while `tx` is clocked out.
pub trait Bus {
    fn exchange(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()>;
}

/// Digital output line (chip select, reset).
pub trait OutputLine {
    fn set_high(&mut self) -> Result<()>;
    fn set_low(&mut self) -> Result<()>;
}

/// Monotonic blocking delay.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

/// Register-level access to the reader. Abstracts the bus framing away from
/// the device and protocol logic.
pub trait RegisterTransport {
    /// Write one register
    fn write(&mut self, reg: Register, value: u8) -> Result<()>;

    /// Read one register
    fn read(&mut self, reg: Register) -> Result<u8>;

    /// Put the link into its idle state before first use. Default
    /// implementation does nothing.
    fn configure(&mut self) -> Result<()> {
        Ok(())
    }

    /// Read-modify-write that ORs `mask` into a register.
    fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read(reg)?;
        self.write(reg, value | mask)
    }
}

/// `Delay` backed by `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
