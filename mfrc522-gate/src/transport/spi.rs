// mfrc522-gate/src/transport/spi.rs

use crate::Result;
use crate::transport::traits::{Bus, OutputLine, RegisterTransport};
use crate::types::Register;

/// Address byte for an SPI register access (datasheet section 8.1.2.3).
/// Bit 7 selects read, bits 6..1 carry the address, bit 0 is always zero.
pub fn address_byte(reg: Register, read: bool) -> u8 {
    let addr = (reg.address() << 1) & 0x7E;
    if read { addr | 0x80 } else { addr }
}

/// Register transport over a duplex bus with a host-driven chip select.
///
/// Each register access is exactly one two-byte exchange framed by its own
/// chip-select assertion. No burst transfers, no retries.
pub struct SpiTransport<B, CS> {
    bus: B,
    cs: CS,
}

impl<B: Bus, CS: OutputLine> SpiTransport<B, CS> {
    pub fn new(bus: B, cs: CS) -> Self {
        Self { bus, cs }
    }

    /// Give back the bus and chip-select line.
    pub fn release(self) -> (B, CS) {
        (self.bus, self.cs)
    }

    fn exchange_frame(&mut self, tx: [u8; 2]) -> Result<[u8; 2]> {
        let mut rx = [0u8; 2];

        self.cs.set_low()?;
        let exchanged = self.bus.exchange(&tx, &mut rx);
        // Release the device even when the exchange failed.
        let released = self.cs.set_high();

        exchanged?;
        released?;
        Ok(rx)
    }
}

impl<B: Bus, CS: OutputLine> RegisterTransport for SpiTransport<B, CS> {
    fn write(&mut self, reg: Register, value: u8) -> Result<()> {
        self.exchange_frame([address_byte(reg, false), value])?;
        Ok(())
    }

    fn read(&mut self, reg: Register) -> Result<u8> {
        // The register value is clocked in with the second byte.
        let rx = self.exchange_frame([address_byte(reg, true), 0x00])?;
        Ok(rx[1])
    }

    fn configure(&mut self) -> Result<()> {
        self.cs.set_high()
    }
}
