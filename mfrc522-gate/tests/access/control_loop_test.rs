#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use mfrc522_gate::access::{
    AccessConfig, AccessDecision, AccessPoint, AllowList, Authorizer, CycleOutcome, GateActuator,
};
use mfrc522_gate::card::CardIdentifier;
use mfrc522_gate::transport::mock::{MockCard, MockChip, MockDelay};
use mfrc522_gate::utils::ms;
use mfrc522_gate::Result;

/// Gate that shares its angle log with the test.
#[derive(Clone, Default)]
struct SharedGate(Rc<RefCell<Vec<f32>>>);

impl GateActuator for SharedGate {
    fn set_angle(&mut self, degrees: f32) -> Result<()> {
        self.0.borrow_mut().push(degrees);
        Ok(())
    }
}

/// Authorizer that records every lookup.
#[derive(Default)]
struct CountingAuthorizer {
    inner: AllowList,
    lookups: Vec<String>,
}

impl Authorizer for CountingAuthorizer {
    fn authorize(&mut self, card: &CardIdentifier) -> Result<AccessDecision> {
        self.lookups.push(card.to_colon_hex());
        self.inner.authorize(card)
    }
}

#[test]
fn grants_denies_and_reports_failures() -> anyhow::Result<()> {
    common::init_logging();
    let chip = MockChip::new();
    let (reader, _) = common::initialized_mock_device(&chip);
    let gate = SharedGate::default();
    let clock = MockDelay::new();
    let authorizer = CountingAuthorizer {
        inner: AllowList::from_hex(["A2:FC:4F:05"])?,
        lookups: Vec::new(),
    };
    let mut ap = AccessPoint::new(reader, authorizer, gate.clone(), clock.clone(), AccessConfig::default());

    assert!(matches!(ap.poll_once()?, CycleOutcome::NoCard));

    chip.set_card(Some(common::reference_card()));
    assert!(matches!(ap.poll_once()?, CycleOutcome::Granted(_)));
    assert_eq!(*gate.0.borrow(), vec![180.0, 0.0]);
    assert_eq!(clock.elapsed(), ms(2000));

    chip.set_card(Some(MockCard::new([0x04, 0x00], &[0xDE, 0xAD, 0xBE, 0xEF])));
    assert!(matches!(ap.poll_once()?, CycleOutcome::Denied(_)));
    assert_eq!(gate.0.borrow().len(), 2);

    let mut broken = common::reference_card();
    broken.anticollision = broken.anticollision.with_error(0x08);
    chip.set_card(Some(broken));
    match ap.poll_once()? {
        CycleOutcome::ReadFailed(e) => assert!(e.is_transient()),
        other => panic!("expected ReadFailed, got {:?}", other),
    }

    assert_eq!(
        ap.authorizer_mut().lookups,
        vec!["A2:FC:4F:05".to_string(), "DE:AD:BE:EF".to_string()]
    );
    Ok(())
}

#[test]
fn run_stops_when_predicate_fails() -> anyhow::Result<()> {
    let chip = common::chip_with_reference_card();
    let (reader, _) = common::initialized_mock_device(&chip);
    let gate = SharedGate::default();
    let clock = MockDelay::new();
    let config = AccessConfig {
        hold_open: ms(1000),
        ..AccessConfig::default()
    };
    let mut ap = AccessPoint::new(
        reader,
        AllowList::from_hex(["a2fc4f05"])?,
        gate.clone(),
        clock.clone(),
        config,
    );

    let mut budget = 2;
    let cycles = ap.run(|| {
        budget -= 1;
        budget >= 0
    })?;

    assert_eq!(cycles, 2);
    assert_eq!(gate.0.borrow().len(), 4);
    // two holds plus two poll intervals
    assert_eq!(clock.elapsed(), ms(3000));
    Ok(())
}
