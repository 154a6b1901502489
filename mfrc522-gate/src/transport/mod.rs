// mfrc522-gate/src/transport/mod.rs

#[cfg(feature = "embedded-hal")]
pub mod hal;
pub mod mock;
pub mod spi;
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub use hal::{HalBus, HalDelay, HalLine};
pub use mock::{MockBus, MockChip, MockDelay, MockLine};
pub use spi::SpiTransport;
#[cfg(feature = "std")]
pub use traits::StdDelay;
pub use traits::{Bus, Delay, OutputLine, RegisterTransport};
