//! Stake ledger ranking and concurrency.

use std::sync::Arc;
use std::thread;

use stakeboard::application::ledger::StakeLedger;
use stakeboard::domain::{BettingError, Stake, StakeOutcome};
use stakeboard::port::StakeService;
use stakeboard::testkit::domain::{customer, ledger_with_ladder, market, rendered};

#[test]
fn leaderboard_is_capped_at_twenty_highest_first() {
    let ledger = ledger_with_ladder(888, 25);
    let top = ledger.top_stakes(888).unwrap();

    assert_eq!(top.len(), 20);
    assert_eq!(top[0].to_string(), "25=2500");
    assert_eq!(top[19].to_string(), "6=600");
    assert!(top.windows(2).all(|w| w[0].stake >= w[1].stake));
}

#[test]
fn only_the_maximum_per_customer_is_listed() {
    let ledger = StakeLedger::default();
    for stake in [100, 900, 300, 900, 50] {
        ledger.submit_stake(4, 1, stake).unwrap();
    }
    ledger.submit_stake(5, 1, 400).unwrap();

    assert_eq!(rendered(&ledger.top_stakes(1).unwrap()), ["4=900", "5=400"]);
    assert_eq!(ledger.customer_count(market(1)), 2);
}

#[test]
fn submit_reports_whether_the_maximum_moved() {
    let ledger = StakeLedger::default();
    assert_eq!(
        ledger.submit_stake(1, 2, 300),
        Ok(StakeOutcome::Raised { previous: None })
    );
    let raised = ledger.submit_stake(1, 2, 500).unwrap();
    assert!(raised.is_raised());
    let unchanged = ledger.submit_stake(1, 2, 500).unwrap();
    assert!(!unchanged.is_raised());
    assert_eq!(
        ledger.max_stake(customer(1), market(2)).map(Stake::value),
        Some(500)
    );
}

#[test]
fn zero_and_ceiling_stakes_are_accepted() {
    let ledger = StakeLedger::default();
    ledger.submit_stake(1, 3, 0).unwrap();
    ledger.submit_stake(2, 3, 1_000_000).unwrap();

    assert_eq!(
        rendered(&ledger.top_stakes(3).unwrap()),
        ["2=1000000", "1=0"]
    );
    assert_eq!(
        ledger.submit_stake(3, 3, 1_000_001),
        Err(BettingError::StakeTooHigh {
            value: 1_000_001,
            limit: 1_000_000
        })
    );
}

#[test]
fn top_stakes_limited_respects_explicit_limits() {
    let ledger = ledger_with_ladder(9, 5);
    assert_eq!(rendered(&ledger.top_stakes_limited(9, 2).unwrap()), ["5=500", "4=400"]);
    assert!(ledger.top_stakes_limited(9, 0).unwrap().is_empty());
    assert_eq!(ledger.top_stakes_limited(9, 100).unwrap().len(), 5);
}

#[test]
fn concurrent_raises_converge_on_each_customers_maximum() {
    let ledger = Arc::new(StakeLedger::default());
    let handles: Vec<_> = (0..8i64)
        .map(|worker| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for round in 0..500i64 {
                    let customer = round % 50 + 1;
                    let stake = (round * 7 + worker * 13) % 10_000;
                    ledger.submit_stake(customer, 1, stake).unwrap();
                    ledger.submit_stake(customer, 2, 10_000 - stake).unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for _ in 0..500 {
                    let top = ledger.top_stakes(1).unwrap();
                    assert!(top.len() <= 20);
                    assert!(top.windows(2).all(|w| w[0].stake >= w[1].stake));
                    let mut seen: Vec<_> = top.iter().map(|e| e.customer_id).collect();
                    seen.sort();
                    seen.dedup();
                    assert_eq!(seen.len(), top.len(), "customer listed twice");
                }
            })
        })
        .collect();

    for handle in handles.into_iter().chain(readers) {
        handle.join().expect("thread panicked");
    }

    assert!(ledger.is_consistent());
    for customer_id in 1..=50u32 {
        let expected = (0..8i64)
            .flat_map(|worker| {
                (0..500i64)
                    .filter(move |round| round % 50 + 1 == i64::from(customer_id))
                    .map(move |round| (round * 7 + worker * 13) % 10_000)
            })
            .max()
            .unwrap();
        assert_eq!(
            ledger
                .max_stake(customer(customer_id), market(1))
                .map(|s| i64::from(s.value())),
            Some(expected),
            "customer {customer_id}"
        );
    }
}

#[test]
fn markets_are_created_lazily() {
    let ledger = StakeLedger::default();
    assert!(ledger.top_stakes(5).unwrap().is_empty());
    assert_eq!(ledger.market_count(), 0);

    ledger.submit_stake(1, 5, 10).unwrap();
    assert_eq!(ledger.market_count(), 1);
}

#[test]
fn invalid_inputs_report_the_first_failing_rule() {
    let ledger = StakeLedger::default();
    assert_eq!(
        ledger.submit_stake(0, 0, -1),
        Err(BettingError::InvalidCustomerId { value: 0 })
    );
    assert_eq!(
        ledger.submit_stake(1, -4, -1),
        Err(BettingError::InvalidMarketId { value: -4 })
    );
    assert_eq!(
        ledger.submit_stake(1, 1, -1),
        Err(BettingError::InvalidStakeAmount { value: -1 })
    );
    assert_eq!(
        ledger.top_stakes(0),
        Err(BettingError::InvalidMarketId { value: 0 })
    );
    assert_eq!(ledger.market_count(), 0);
}
