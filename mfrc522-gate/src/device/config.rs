//! Reader configuration: front-end register values, poll budgets and the
//! two tolerance policies.

use std::time::Duration;

use crate::types::Register;
use crate::utils::PollPolicy;

/// Soft-reset power-down poll attempts
pub const RESET_POLL_ATTEMPTS: usize = 3;

/// Delay before each power-down poll (ms)
pub const RESET_POLL_INTERVAL_MS: u64 = 50;

/// Transceive completion poll attempts
pub const TRANSCEIVE_POLL_ATTEMPTS: usize = 50;

/// Delay after each inconclusive completion poll (us). 50 x 0.5 ms bounds
/// one exchange at 25 ms.
pub const TRANSCEIVE_POLL_INTERVAL_US: u64 = 500;

/// What to do when PowerDown is still set after the reset poll budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResetPolicy {
    /// Log a warning and continue configuring the chip.
    #[default]
    Lenient,
    /// Fail initialization with `Error::ResetTimeout`.
    Strict,
}

/// What to do when the anticollision BCC does not match the UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BccPolicy {
    /// Log a warning and return the identifier flagged as unverified.
    #[default]
    Lenient,
    /// Fail the read with `Error::BccMismatch`.
    Strict,
}

/// Analog/digital front-end register values programmed after reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontEndConfig {
    /// TxModeReg: 106 kBd, no CRC on transmit
    pub tx_mode: u8,
    /// RxModeReg: 106 kBd, no CRC on receive
    pub rx_mode: u8,
    /// ModWidthReg: Miller pulse width
    pub mod_width: u8,
    /// TModeReg: TAuto plus prescaler high nibble
    pub timer_mode: u8,
    /// TPrescalerReg: prescaler low byte
    pub timer_prescaler: u8,
    /// TReloadReg (H,L)
    pub timer_reload: u16,
    /// TxASKReg: force 100% ASK
    pub tx_ask: u8,
    /// ModeReg: TxWaitRF, CRC preset 0x6363
    pub mode: u8,
}

impl Default for FrontEndConfig {
    fn default() -> Self {
        Self {
            tx_mode: 0x00,
            rx_mode: 0x00,
            mod_width: 0x1A,
            timer_mode: 0x80,
            timer_prescaler: 0x20,
            timer_reload: 0x0020,
            tx_ask: 0x40,
            mode: 0x3D,
        }
    }
}

impl FrontEndConfig {
    /// Register writes in the order they are issued.
    pub fn register_writes(&self) -> [(Register, u8); 9] {
        let [reload_hi, reload_lo] = self.timer_reload.to_be_bytes();
        [
            (Register::TxMode, self.tx_mode),
            (Register::RxMode, self.rx_mode),
            (Register::ModWidth, self.mod_width),
            (Register::TMode, self.timer_mode),
            (Register::TPrescaler, self.timer_prescaler),
            (Register::TReloadH, reload_hi),
            (Register::TReloadL, reload_lo),
            (Register::TxAsk, self.tx_ask),
            (Register::Mode, self.mode),
        ]
    }
}

/// Complete reader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    pub front_end: FrontEndConfig,
    pub reset_poll: PollPolicy,
    pub transceive_poll: PollPolicy,
    pub reset_policy: ResetPolicy,
    pub bcc_policy: BccPolicy,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            front_end: FrontEndConfig::default(),
            reset_poll: PollPolicy::new(
                RESET_POLL_ATTEMPTS,
                Duration::from_millis(RESET_POLL_INTERVAL_MS),
            )
            .settle_first(),
            transceive_poll: PollPolicy::new(
                TRANSCEIVE_POLL_ATTEMPTS,
                Duration::from_micros(TRANSCEIVE_POLL_INTERVAL_US),
            ),
            reset_policy: ResetPolicy::Lenient,
            bcc_policy: BccPolicy::Lenient,
        }
    }
}

impl ReaderConfig {
    /// Fail on reset timeout and on BCC mismatch.
    pub fn strict() -> Self {
        Self {
            reset_policy: ResetPolicy::Strict,
            bcc_policy: BccPolicy::Strict,
            ..Self::default()
        }
    }
}
