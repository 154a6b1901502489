// mfrc522-gate/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::card::{CardIdentifier, operations};
use crate::constants::*;
use crate::device::config::{ReaderConfig, ResetPolicy};
use crate::protocol::Exchange;
use crate::transport::{Bus, Delay, OutputLine, RegisterTransport, SpiTransport};
use crate::types::{Atqa, Command, ErrorFlags, IrqFlags, Register};
use crate::utils::{PollOutcome, poll_until};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader session that enforces initialization state at compile time.
///
/// Owns the register transport, the reset line and the delay source. Card
/// operations only exist on `Device<_, _, _, Initialized>`.
pub struct Device<T, R, D, State = Uninitialized> {
    transport: T,
    reset: R,
    delay: D,
    config: ReaderConfig,
    _state: PhantomData<State>,
}

impl<B, CS, R, D> Device<SpiTransport<B, CS>, R, D, Uninitialized>
where
    B: Bus,
    CS: OutputLine,
    R: OutputLine,
    D: Delay,
{
    /// Wire a reader behind a duplex bus with host-driven chip select.
    pub fn over_spi(bus: B, chip_select: CS, reset: R, delay: D) -> Self {
        Self::new(SpiTransport::new(bus, chip_select), reset, delay)
    }
}

impl<T, R, D> Device<T, R, D, Uninitialized>
where
    T: RegisterTransport,
    R: OutputLine,
    D: Delay,
{
    pub fn new(transport: T, reset: R, delay: D) -> Self {
        Self::with_config(transport, reset, delay, ReaderConfig::default())
    }

    pub fn with_config(transport: T, reset: R, delay: D, config: ReaderConfig) -> Self {
        Self {
            transport,
            reset,
            delay,
            config,
            _state: PhantomData,
        }
    }

    /// Bring the reader from power-on to ready: release reset, soft reset,
    /// program the front-end and switch the antenna on.
    pub fn initialize(self) -> Result<Device<T, R, D, Initialized>> {
        let mut this = self;
        this.power_up()?;

        Ok(Device {
            transport: this.transport,
            reset: this.reset,
            delay: this.delay,
            config: this.config,
            _state: PhantomData,
        })
    }
}

impl<T, R, D, S> Device<T, R, D, S>
where
    T: RegisterTransport,
    R: OutputLine,
    D: Delay,
{
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Tear the session down and hand back its parts.
    pub fn release(self) -> (T, R, D) {
        (self.transport, self.reset, self.delay)
    }

    fn power_up(&mut self) -> Result<()> {
        self.reset.set_high()?;
        self.transport.configure()?;

        self.transport
            .write(Register::Command, Command::SoftReset.into())?;
        self.wait_for_power_up()?;

        for (reg, value) in self.config.front_end.register_writes() {
            self.transport.write(reg, value)?;
        }

        self.enable_antenna()
    }

    fn wait_for_power_up(&mut self) -> Result<()> {
        let policy = self.config.reset_poll;
        let transport = &mut self.transport;

        let outcome = poll_until(
            &mut self.delay,
            &policy,
            || transport.read(Register::Command),
            |cmd| cmd & COMMAND_POWER_DOWN == 0,
            |_| false,
        )?;

        match outcome {
            PollOutcome::Completed(_) => Ok(()),
            _ => match self.config.reset_policy {
                ResetPolicy::Lenient => {
                    warn!(
                        "reader still powered down after {} polls, continuing",
                        policy.attempts
                    );
                    Ok(())
                }
                ResetPolicy::Strict => Err(Error::ResetTimeout),
            },
        }
    }

    fn enable_antenna(&mut self) -> Result<()> {
        let tx_control = self.transport.read(Register::TxControl)?;
        if tx_control & TX_CONTROL_ANTENNA_ON == 0 {
            self.transport
                .set_bits(Register::TxControl, TX_CONTROL_ANTENNA_ON)?;
            debug!("antenna drivers enabled");
        }
        Ok(())
    }
}

impl<T, R, D> Device<T, R, D, Initialized>
where
    T: RegisterTransport,
    R: OutputLine,
    D: Delay,
{
    /// Re-run the power-up sequence on a live session. Antenna drivers that
    /// are already on are left alone.
    pub fn reinitialize(&mut self) -> Result<()> {
        self.power_up()
    }

    /// VersionReg contents (0x91 / 0x92 for genuine MFRC522 v1 / v2).
    pub fn version(&mut self) -> Result<u8> {
        self.transport.read(Register::Version)
    }

    /// Wake the field with REQA and return the ATQA.
    pub fn request(&mut self) -> Result<Atqa> {
        operations::request(self)
    }

    /// Cascade level 1 anticollision.
    pub fn anticollision(&mut self) -> Result<CardIdentifier> {
        operations::anticollision(self)
    }

    /// REQA followed by anticollision. No retries; call again on the next
    /// polling cycle.
    pub fn acquire_identifier(&mut self) -> Result<CardIdentifier> {
        operations::acquire_identifier(self)
    }

    /// Run one card exchange and return the bytes the card sent back.
    ///
    /// Idle, clear IRQs, flush FIFO, clear errors, load the frame, start
    /// Transceive, poll ComIrqReg, then check ErrorReg and FIFOLevelReg.
    pub(crate) fn transceive(&mut self, exchange: &Exchange) -> Result<Vec<u8>> {
        let policy = self.config.transceive_poll;
        let t = &mut self.transport;

        t.write(Register::Command, Command::Idle.into())?;
        t.write(Register::ComIrq, IRQ_CLEAR_ALL)?;
        t.write(Register::FifoLevel, FIFO_FLUSH)?;
        t.write(Register::Error, 0x00)?;

        for &byte in exchange.frame.bytes() {
            t.write(Register::FifoData, byte)?;
        }

        // Transceive must be active before StartSend is raised.
        let framing = exchange.frame.bit_framing();
        t.write(Register::BitFraming, framing)?;
        t.write(Register::Command, Command::Transceive.into())?;
        t.write(Register::BitFraming, framing | BIT_FRAMING_START_SEND)?;

        let outcome = poll_until(
            &mut self.delay,
            &policy,
            || t.read(Register::ComIrq).map(IrqFlags::from),
            IrqFlags::is_complete,
            IrqFlags::timer_expired,
        )?;

        match outcome {
            PollOutcome::Completed(_) => {}
            PollOutcome::Failed(_) => {
                trace!("{} timer expired", exchange.stage);
                return Err(exchange.timer_expired());
            }
            PollOutcome::Exhausted => {
                debug!(
                    "{} saw no completion after {} polls",
                    exchange.stage, policy.attempts
                );
                return Err(exchange.poll_exhausted());
            }
        }

        let errors = ErrorFlags::from(t.read(Register::Error)?);
        if let Some(flags) = errors.masked(exchange.error_mask) {
            debug!("{} error flags {:#04x}", exchange.stage, flags);
            return Err(Error::ProtocolError {
                stage: exchange.stage,
                flags,
            });
        }
        if errors.collision() {
            trace!("{} reported a bit collision", exchange.stage);
        }

        let level = (t.read(Register::FifoLevel)? & 0x7F) as usize;
        if !exchange.response.accepts(level) {
            debug!("{} returned {} bytes", exchange.stage, level);
            return Err(exchange.malformed(level));
        }

        let mut response = Vec::with_capacity(level);
        for _ in 0..level {
            response.push(t.read(Register::FifoData)?);
        }
        Ok(response)
    }
}
