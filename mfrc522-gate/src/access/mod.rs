// mfrc522-gate/src/access/mod.rs

//! Access node built around the reader: authorize the presented card and
//! swing the gate open on a grant.

use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info, trace, warn};

use crate::card::CardIdentifier;
use crate::device::{Device, Initialized};
use crate::transport::{Delay, OutputLine, RegisterTransport};
use crate::types::Uid;
use crate::utils::{ms, parse_hex};
use crate::{Error, Result};

pub mod servo;

pub use servo::ServoConfig;
#[cfg(feature = "embedded-hal")]
pub use servo::ServoGate;

/// Outcome of an authorization lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessDecision {
    Granted,
    Denied,
}

/// Decides whether a card may pass.
pub trait Authorizer {
    /// Errors are reported as `Error::Authorization`.
    fn authorize(&mut self, card: &CardIdentifier) -> Result<AccessDecision>;
}

impl<A: Authorizer + ?Sized> Authorizer for Box<A> {
    fn authorize(&mut self, card: &CardIdentifier) -> Result<AccessDecision> {
        (**self).authorize(card)
    }
}

/// Moves the physical barrier.
pub trait GateActuator {
    fn set_angle(&mut self, degrees: f32) -> Result<()>;
}

impl<G: GateActuator + ?Sized> GateActuator for Box<G> {
    fn set_angle(&mut self, degrees: f32) -> Result<()> {
        (**self).set_angle(degrees)
    }
}

/// In-memory set of accepted UIDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    uids: HashSet<Vec<u8>>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uid: &Uid) -> bool {
        self.uids.insert(uid.as_bytes().to_vec())
    }

    pub fn remove(&mut self, uid: &Uid) -> bool {
        self.uids.remove(uid.as_bytes())
    }

    pub fn contains(&self, uid: &Uid) -> bool {
        self.uids.contains(uid.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.uids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uids.is_empty()
    }

    /// Build from hex strings such as `"A2:FC:4F:05"` or `"a2fc4f05"`.
    pub fn from_hex<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            let bytes = parse_hex(entry)
                .map_err(|e| Error::Authorization(format!("bad uid {:?}: {}", entry, e)))?;
            let uid = Uid::try_from(bytes.as_slice())?;
            list.insert(&uid);
        }
        Ok(list)
    }
}

impl Authorizer for AllowList {
    fn authorize(&mut self, card: &CardIdentifier) -> Result<AccessDecision> {
        Ok(if self.contains(card.uid()) {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        })
    }
}

/// Timing and gate positions for the control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessConfig {
    /// Pause between polling cycles
    pub poll_interval: Duration,
    pub open_angle: f32,
    pub closed_angle: f32,
    /// How long the gate stays open after a grant
    pub hold_open: Duration,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            poll_interval: ms(500),
            open_angle: 180.0,
            closed_angle: 0.0,
            hold_open: ms(2000),
        }
    }
}

/// Result of one polling cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Field was empty.
    NoCard,
    /// Card authorized; the gate was opened and closed again.
    Granted(CardIdentifier),
    Denied(CardIdentifier),
    /// Transient read failure; the next cycle retries.
    ReadFailed(Error),
}

/// One reader, one authorizer, one gate.
pub struct AccessPoint<T, R, D, A, G, W> {
    reader: Device<T, R, D, Initialized>,
    authorizer: A,
    gate: G,
    delay: W,
    config: AccessConfig,
}

impl<T, R, D, A, G, W> AccessPoint<T, R, D, A, G, W>
where
    T: RegisterTransport,
    R: OutputLine,
    D: Delay,
    A: Authorizer,
    G: GateActuator,
    W: Delay,
{
    pub fn new(
        reader: Device<T, R, D, Initialized>,
        authorizer: A,
        gate: G,
        delay: W,
        config: AccessConfig,
    ) -> Self {
        Self {
            reader,
            authorizer,
            gate,
            delay,
            config,
        }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    pub fn reader_mut(&mut self) -> &mut Device<T, R, D, Initialized> {
        &mut self.reader
    }

    pub fn authorizer_mut(&mut self) -> &mut A {
        &mut self.authorizer
    }

    /// Drive the gate to the closed position.
    pub fn close_gate(&mut self) -> Result<()> {
        self.gate.set_angle(self.config.closed_angle)
    }

    /// Read a card, authorize it and cycle the gate on a grant.
    ///
    /// Transient reader errors are returned as `CycleOutcome::ReadFailed`.
    /// A failing authorizer denies the card. Transport and actuator
    /// failures are returned as errors.
    pub fn poll_once(&mut self) -> Result<CycleOutcome> {
        let card = match self.reader.acquire_identifier() {
            Ok(card) => card,
            Err(Error::NoCardPresent) => {
                trace!("no card in field");
                return Ok(CycleOutcome::NoCard);
            }
            Err(e) if e.is_transient() => {
                debug!("card read failed: {}", e);
                return Ok(CycleOutcome::ReadFailed(e));
            }
            Err(e) => return Err(e),
        };

        info!("card detected: {}", card);
        if !card.bcc_valid() {
            warn!("card {} has an unverified check byte", card);
        }

        let decision = match self.authorizer.authorize(&card) {
            Ok(decision) => decision,
            Err(e) => {
                warn!("authorization lookup for {} failed: {}", card, e);
                AccessDecision::Denied
            }
        };

        match decision {
            AccessDecision::Granted => {
                info!("access granted: {}", card);
                self.gate.set_angle(self.config.open_angle)?;
                self.delay.delay(self.config.hold_open);
                self.gate.set_angle(self.config.closed_angle)?;
                Ok(CycleOutcome::Granted(card))
            }
            AccessDecision::Denied => {
                info!("access denied: {}", card);
                Ok(CycleOutcome::Denied(card))
            }
        }
    }

    /// Repeat `poll_once` with `poll_interval` between cycles while
    /// `keep_running` returns true. Returns the number of cycles run.
    pub fn run<F>(&mut self, mut keep_running: F) -> Result<usize>
    where
        F: FnMut() -> bool,
    {
        let mut cycles = 0;
        while keep_running() {
            self.poll_once()?;
            cycles += 1;
            self.delay.delay(self.config.poll_interval);
        }
        Ok(cycles)
    }

    /// Tear down and return the reader.
    pub fn release(self) -> (Device<T, R, D, Initialized>, A, G, W) {
        (self.reader, self.authorizer, self.gate, self.delay)
    }
}
