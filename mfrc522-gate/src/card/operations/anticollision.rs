use log::debug;

use crate::card::CardIdentifier;
use crate::device::{Device, Initialized};
use crate::protocol::Exchange;
use crate::transport::{Delay, OutputLine, RegisterTransport};
use crate::Result;

/// Cascade level 1 anticollision. Returns the UID with its check byte
/// validated according to the device's `BccPolicy`.
pub fn anticollision<T, R, D>(device: &mut Device<T, R, D, Initialized>) -> Result<CardIdentifier>
where
    T: RegisterTransport,
    R: OutputLine,
    D: Delay,
{
    let response = device.transceive(&Exchange::ANTICOLLISION)?;
    let id = CardIdentifier::assemble(&response, device.config().bcc_policy)?;
    debug!("UID: {} (BCC: {:02X})", id, id.bcc());
    Ok(id)
}

/// REQA then anticollision. A failed REQA is returned as-is without
/// attempting anticollision.
pub fn acquire_identifier<T, R, D>(
    device: &mut Device<T, R, D, Initialized>,
) -> Result<CardIdentifier>
where
    T: RegisterTransport,
    R: OutputLine,
    D: Delay,
{
    device.request()?;
    anticollision(device)
}
