#![allow(dead_code)]

extern crate std;

use crate::constants::{
    MAX_EQUITY_PERCENTAGE, MAX_INVESTMENT_AMOUNT, MIN_EQUITY_PERCENTAGE, MIN_INVESTMENT_AMOUNT,
};
use crate::types::{Investment, InvestmentStatus};

/// Amount and equity stay inside the bounds enforced at creation.
pub fn assert_terms_in_bounds(investment: &Investment) {
    assert!(
        (MIN_INVESTMENT_AMOUNT..=MAX_INVESTMENT_AMOUNT).contains(&investment.amount),
        "investment {} has out-of-range amount ({})",
        investment.id,
        investment.amount
    );
    assert!(
        (MIN_EQUITY_PERCENTAGE..=MAX_EQUITY_PERCENTAGE).contains(&investment.equity_percentage),
        "investment {} has out-of-range equity ({})",
        investment.id,
        investment.equity_percentage
    );
    assert!(
        investment.valuation > 0,
        "investment {} has non-positive valuation",
        investment.id
    );
}

/// `repaid` and `withdrawn` never hold together, and both imply `funded`
/// and not `active`.
pub fn assert_flags_consistent(investment: &Investment) {
    assert!(
        !(investment.is_repaid() && investment.is_withdrawn()),
        "investment {} is both repaid and withdrawn",
        investment.id
    );
    if investment.is_repaid() || investment.is_withdrawn() {
        assert!(investment.is_funded());
        assert!(!investment.is_active());
    }
    if investment.is_active() {
        assert!(!investment.is_funded());
    }
}

/// A startup is recorded exactly when the record has been funded, and it is
/// never the investor.
pub fn assert_startup_matches_status(investment: &Investment) {
    match &investment.startup {
        Some(startup) => {
            assert!(
                investment.is_funded(),
                "investment {} has a startup but status {:?}",
                investment.id,
                investment.status
            );
            assert_ne!(
                *startup, investment.investor,
                "investment {} was funded by its own investor",
                investment.id
            );
        }
        None => assert!(
            !investment.is_funded(),
            "investment {} is funded without a startup",
            investment.id
        ),
    }
}

/// Identifiers are sequential starting from 0.
pub fn assert_sequential_ids(investments: &[Investment]) {
    for (i, investment) in investments.iter().enumerate() {
        assert_eq!(
            investment.id, i as u64,
            "expected id {}, got {}",
            i, investment.id
        );
    }
}

/// Only forward transitions of the lifecycle are allowed:
///   Open   -> Funded | Cancelled
///   Funded -> Repaid | Withdrawn
///   terminal states -> (none)
pub fn assert_valid_status_transition(from: &InvestmentStatus, to: &InvestmentStatus) {
    let valid = matches!(
        (from, to),
        (InvestmentStatus::Open, InvestmentStatus::Funded)
            | (InvestmentStatus::Open, InvestmentStatus::Cancelled)
            | (InvestmentStatus::Funded, InvestmentStatus::Repaid)
            | (InvestmentStatus::Funded, InvestmentStatus::Withdrawn)
    );

    assert!(
        valid,
        "invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// Fields fixed at creation are unchanged by any transition.
pub fn assert_terms_unchanged(original: &Investment, current: &Investment) {
    assert_eq!(original.id, current.id, "investment id changed");
    assert_eq!(original.investor, current.investor, "investor changed");
    assert_eq!(original.amount, current.amount, "amount changed");
    assert_eq!(
        original.equity_percentage, current.equity_percentage,
        "equity percentage changed"
    );
    assert_eq!(original.valuation, current.valuation, "valuation changed");
    assert_eq!(
        original.funding_deadline, current.funding_deadline,
        "funding deadline changed"
    );
    assert_eq!(
        original.startup_name, current.startup_name,
        "startup name changed"
    );
    assert_eq!(
        original.description, current.description,
        "description changed"
    );
    if original.startup.is_some() {
        assert_eq!(original.startup, current.startup, "startup changed");
    }
}

/// Run all stateless investment invariants.
pub fn assert_all_investment_invariants(investment: &Investment) {
    assert_terms_in_bounds(investment);
    assert_flags_consistent(investment);
    assert_startup_matches_status(investment);
}
