//! # Lifecycle
//!
//! The per-investment state machine: create, fund, repay, withdraw, cancel.
//!
//! Each operation follows the same order:
//!
//! 1. load the record and check status, caller and timing preconditions;
//! 2. apply the transition and persist it;
//! 3. move value through the [`ValueGateway`];
//! 4. publish the event.
//!
//! Step 2 always precedes step 3, so anything observing the record while a
//! transfer is in flight sees the post-transition status. A failed transfer
//! returns `Err` and the host discards steps 2 and 3 together.
//!
//! Authentication and the pause gate are checked by the entry points in
//! `lib.rs` before any of these functions run.

use soroban_sdk::{log, Address, Env, String};

use crate::constants::{
    MAX_DESCRIPTION_LENGTH, MAX_EQUITY_PERCENTAGE, MAX_INVESTMENT_AMOUNT, MAX_NAME_LENGTH,
    MIN_EQUITY_PERCENTAGE, MIN_INVESTMENT_AMOUNT, MIN_LOCK_PERIOD, MIN_PLATFORM_FEE,
    SECONDS_PER_DAY,
};
use crate::events::{
    self, InvestmentCancelled, InvestmentCreated, InvestmentFunded, InvestmentRepaid,
};
use crate::types::{InvestmentState, InvestmentTerms, ProtocolConfig};
use crate::transfer::ValueGateway;
use crate::{storage, Error};

/// Offer parameters supplied by the investor.
pub struct Offer {
    pub amount: i128,
    pub equity_percentage: u32,
    pub startup_name: String,
    pub description: String,
    pub valuation: i128,
}

impl Offer {
    fn validate(&self) -> Result<(), Error> {
        if !(MIN_INVESTMENT_AMOUNT..=MAX_INVESTMENT_AMOUNT).contains(&self.amount) {
            return Err(Error::InvalidAmount);
        }
        if !(MIN_EQUITY_PERCENTAGE..=MAX_EQUITY_PERCENTAGE).contains(&self.equity_percentage) {
            return Err(Error::InvalidEquity);
        }
        let name_len = self.startup_name.len();
        if name_len == 0 || name_len > MAX_NAME_LENGTH {
            return Err(Error::InvalidName);
        }
        if self.description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(Error::InvalidDescription);
        }
        if self.valuation <= 0 {
            return Err(Error::InvalidValuation);
        }
        Ok(())
    }
}

/// Split a repayment into `(platform_fee, investor_amount)`.
///
/// `platform_fee = max(MIN_PLATFORM_FEE, amount * fee_percentage / 100)` and the
/// two parts always sum to `amount`.
pub fn split_repayment(amount: i128, fee_percentage: u32) -> Result<(i128, i128), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let proportional = amount
        .checked_mul(i128::from(fee_percentage))
        .ok_or(Error::Overflow)?
        / 100;
    let platform_fee = proportional.max(MIN_PLATFORM_FEE);
    if platform_fee > amount {
        return Err(Error::InvalidAmount);
    }
    Ok((platform_fee, amount - platform_fee))
}

/// Timestamp from which the investor may reclaim a funded, unpaid principal.
pub fn lock_expiry(funding_deadline: u64) -> Result<u64, Error> {
    funding_deadline
        .checked_add(MIN_LOCK_PERIOD)
        .ok_or(Error::Overflow)
}

fn funding_deadline(now: u64, duration_days: u64) -> Result<u64, Error> {
    duration_days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|span| now.checked_add(span))
        .ok_or(Error::Overflow)
}

/// Open a new offer and escrow `value_sent` from the investor.
pub fn create(
    env: &Env,
    config: &ProtocolConfig,
    gateway: &impl ValueGateway,
    investor: Address,
    offer: Offer,
    value_sent: i128,
) -> Result<u64, Error> {
    offer.validate()?;
    if value_sent != offer.amount {
        return Err(Error::AmountMismatch);
    }

    let funding_deadline = funding_deadline(env.ledger().timestamp(), config.funding_duration_days)?;
    let id = storage::allocate(env)?;

    let terms = InvestmentTerms {
        id,
        investor: investor.clone(),
        amount: offer.amount,
        equity_percentage: offer.equity_percentage,
        valuation: offer.valuation,
        funding_deadline,
        startup_name: offer.startup_name,
        description: offer.description,
    };
    storage::save_investment(env, &terms, &InvestmentState::open());

    gateway.collect(env, &investor, value_sent)?;

    events::emit_investment_created(
        env,
        InvestmentCreated {
            investment_id: id,
            investor,
            amount: terms.amount,
            equity_percentage: terms.equity_percentage,
            valuation: terms.valuation,
            funding_deadline,
        },
    );
    Ok(id)
}

/// Open → Funded. `startup` escrows a matching `amount`.
pub fn fund(
    env: &Env,
    gateway: &impl ValueGateway,
    id: u64,
    startup: Address,
    value_sent: i128,
) -> Result<(), Error> {
    let (terms, mut state) = storage::load_investment_pair(env, id)?;

    state.fund(startup.clone())?;
    if startup == terms.investor {
        return Err(Error::SelfFunding);
    }
    if value_sent != terms.amount {
        return Err(Error::AmountMismatch);
    }
    // Inclusive: funding exactly at the deadline is allowed.
    if env.ledger().timestamp() > terms.funding_deadline {
        return Err(Error::DeadlineExpired);
    }

    storage::save_investment_state(env, id, &state);
    gateway.collect(env, &startup, value_sent)?;

    events::emit_investment_funded(
        env,
        InvestmentFunded {
            investment_id: id,
            investor: terms.investor,
            startup,
            amount: value_sent,
        },
    );
    Ok(())
}

/// Funded → Repaid. Pays the investor `amount - platform_fee` and the
/// owner `platform_fee`.
pub fn repay(
    env: &Env,
    config: &ProtocolConfig,
    gateway: &impl ValueGateway,
    owner: &Address,
    id: u64,
    startup: Address,
    value_sent: i128,
) -> Result<(), Error> {
    let (terms, mut state) = storage::load_investment_pair(env, id)?;

    state.require_funded()?;
    if state.startup.as_ref() != Some(&startup) {
        return Err(Error::NotAuthorized);
    }
    if value_sent != terms.amount {
        return Err(Error::AmountMismatch);
    }
    let (platform_fee, investor_amount) =
        split_repayment(value_sent, config.platform_fee_percentage)?;

    state.repay()?;
    storage::save_investment_state(env, id, &state);

    gateway.collect(env, &startup, value_sent)?;
    gateway.disburse(env, &terms.investor, investor_amount)?;
    gateway.disburse(env, owner, platform_fee)?;

    events::emit_investment_repaid(
        env,
        InvestmentRepaid {
            investment_id: id,
            investor: terms.investor,
            startup,
            investor_amount,
            platform_fee,
        },
    );
    Ok(())
}

/// Funded → Withdrawn, once the lock period after the deadline has elapsed.
pub fn withdraw(
    env: &Env,
    gateway: &impl ValueGateway,
    id: u64,
    investor: Address,
) -> Result<(), Error> {
    let (terms, mut state) = storage::load_investment_pair(env, id)?;

    state.require_funded()?;
    if investor != terms.investor {
        return Err(Error::NotAuthorized);
    }
    if env.ledger().timestamp() < lock_expiry(terms.funding_deadline)? {
        return Err(Error::LockNotElapsed);
    }

    state.withdraw()?;
    storage::save_investment_state(env, id, &state);

    gateway.disburse(env, &investor, terms.amount)?;

    events::emit_investment_withdrawn(env, id, investor, terms.amount);
    Ok(())
}

/// Open → Cancelled, strictly after the deadline.
///
/// The refund is only attempted when the contract holds at least `amount`.
/// Otherwise the record is still cancelled and the event reports
/// `refunded: false`.
pub fn cancel(
    env: &Env,
    gateway: &impl ValueGateway,
    id: u64,
    investor: Address,
) -> Result<bool, Error> {
    let (terms, mut state) = storage::load_investment_pair(env, id)?;

    state.cancel()?;
    if investor != terms.investor {
        return Err(Error::NotAuthorized);
    }
    if env.ledger().timestamp() <= terms.funding_deadline {
        return Err(Error::DeadlineNotPassed);
    }

    storage::save_investment_state(env, id, &state);

    let refunded = gateway.held_balance(env) >= terms.amount;
    if refunded {
        gateway.disburse(env, &investor, terms.amount)?;
    } else {
        log!(env, "investment {} cancelled without refund", id);
    }

    events::emit_investment_cancelled(
        env,
        InvestmentCancelled {
            investment_id: id,
            investor,
            amount: terms.amount,
            refunded,
        },
    );
    Ok(refunded)
}
