extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal, Val, Vec,
};

use crate::constants::{MIN_LOCK_PERIOD, SECONDS_PER_DAY, UNIT};
use crate::events::{
    EmergencyWithdrawal, FundingDurationUpdated, InvestmentCancelled, InvestmentCreated,
    InvestmentFunded, InvestmentRepaid, InvestmentWithdrawn, OwnershipTransferred,
    PlatformFeeUpdated,
};
use crate::test::Fixture;

/// Return the topics and data of the last event, asserting it came from the escrow.
fn last_event(f: &Fixture) -> (Vec<Val>, Val) {
    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, f.client.address);
    (last_event.1, last_event.2)
}

#[test]
fn test_investment_created_event() {
    let f = Fixture::new();
    let investor = f.funded_account(UNIT);
    let id = f.create_offer(&investor);

    let (topics, data) = last_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("created").into_val(&f.env),
        id.into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);

    let event_data: InvestmentCreated = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        InvestmentCreated {
            investment_id: id,
            investor,
            amount: UNIT,
            equity_percentage: 5,
            valuation: 20 * UNIT,
            funding_deadline: SECONDS_PER_DAY,
        }
    );
}

#[test]
fn test_investment_funded_event() {
    let f = Fixture::new();
    let (id, investor, startup) = f.funded_offer();

    let (topics, data) = last_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("funded").into_val(&f.env),
        id.into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);

    let event_data: InvestmentFunded = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        InvestmentFunded {
            investment_id: id,
            investor,
            startup,
            amount: UNIT,
        }
    );
}

#[test]
fn test_investment_repaid_event() {
    let f = Fixture::new();
    let (id, investor, startup) = f.funded_offer();
    f.client.repay_investment(&id, &startup, &UNIT);

    let (topics, data) = last_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("repaid").into_val(&f.env),
        id.into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);

    let event_data: InvestmentRepaid = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        InvestmentRepaid {
            investment_id: id,
            investor,
            startup,
            investor_amount: UNIT - UNIT / 100,
            platform_fee: UNIT / 100,
        }
    );
}

#[test]
fn test_investment_withdrawn_event() {
    let f = Fixture::new();
    let (id, investor, _startup) = f.funded_offer();
    let deadline = f.client.get_investment_info(&id).funding_deadline;
    f.set_time(deadline + MIN_LOCK_PERIOD);
    f.client.withdraw_investment(&id, &investor);

    let (topics, data) = last_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("withdrawn").into_val(&f.env),
        id.into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);

    let event_data: InvestmentWithdrawn = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        InvestmentWithdrawn {
            investment_id: id,
            investor,
            amount: UNIT,
        }
    );
}

#[test]
fn test_investment_cancelled_event_reports_refund() {
    let f = Fixture::new();
    let investor = f.funded_account(2 * UNIT);
    let refunded = f.create_offer(&investor);
    let stranded = f.create_offer(&investor);
    f.set_time(SECONDS_PER_DAY + 1);

    f.client.cancel_investment(&refunded, &investor);
    let (topics, data) = last_event(&f);
    let expected_topics = vec![
        &f.env,
        symbol_short!("cancelled").into_val(&f.env),
        refunded.into_val(&f.env),
    ];
    assert_eq!(topics, expected_topics);
    let event_data: InvestmentCancelled = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        InvestmentCancelled {
            investment_id: refunded,
            investor: investor.clone(),
            amount: UNIT,
            refunded: true,
        }
    );

    f.client.emergency_withdraw(&f.owner);
    f.client.cancel_investment(&stranded, &investor);
    let (_, data) = last_event(&f);
    let event_data: InvestmentCancelled = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        InvestmentCancelled {
            investment_id: stranded,
            investor,
            amount: UNIT,
            refunded: false,
        }
    );
}

#[test]
fn test_admin_events() {
    let f = Fixture::new();

    f.client.update_platform_fee(&f.owner, &3);
    let (topics, data) = last_event(&f);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("fee_upd").into_val(&f.env)]
    );
    let event_data: PlatformFeeUpdated = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        PlatformFeeUpdated {
            old_percentage: 1,
            new_percentage: 3,
        }
    );

    f.client.update_funding_duration(&f.owner, &14);
    let (topics, data) = last_event(&f);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("dur_upd").into_val(&f.env)]
    );
    let event_data: FundingDurationUpdated = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        FundingDurationUpdated {
            old_days: 1,
            new_days: 14,
        }
    );

    let investor = f.funded_account(UNIT);
    f.create_offer(&investor);
    f.client.emergency_withdraw(&f.owner);
    let (topics, data) = last_event(&f);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("emergency").into_val(&f.env)]
    );
    let event_data: EmergencyWithdrawal = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        EmergencyWithdrawal {
            owner: f.owner.clone(),
            amount: UNIT,
        }
    );

    let new_owner = Address::generate(&f.env);
    f.client.transfer_ownership(&f.owner, &new_owner);
    let (topics, data) = last_event(&f);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("owner_set").into_val(&f.env)]
    );
    let event_data: OwnershipTransferred = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        OwnershipTransferred {
            previous_owner: f.owner.clone(),
            new_owner,
        }
    );
}
