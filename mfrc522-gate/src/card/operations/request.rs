use log::debug;

use crate::device::{Device, Initialized};
use crate::protocol::Exchange;
use crate::transport::{Delay, OutputLine, RegisterTransport};
use crate::types::Atqa;
use crate::Result;

/// Send REQA and return the card's ATQA.
///
/// An empty field surfaces as `Error::NoCardPresent`.
pub fn request<T, R, D>(device: &mut Device<T, R, D, Initialized>) -> Result<Atqa>
where
    T: RegisterTransport,
    R: OutputLine,
    D: Delay,
{
    let response = device.transceive(&Exchange::PRESENCE)?;
    // transceive already enforced the exact length
    let atqa = Atqa::from_bytes([response[0], response[1]]);
    debug!(
        "ATQA: {:02X} {:02X} (uid size code {})",
        atqa.as_bytes()[0],
        atqa.as_bytes()[1],
        atqa.uid_size_code()
    );
    Ok(atqa)
}
