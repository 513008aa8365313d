//! # Events
//!
//! Append-only notifications for off-chain consumers. Every lifecycle
//! transition publishes exactly one event with the topic
//! `(symbol, investment_id)`; admin changes publish `(symbol,)`.
//!
//! Events are published as the last step of an entry point, so a reverted
//! invocation never leaves one behind.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentCreated {
    pub investment_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub equity_percentage: u32,
    pub valuation: i128,
    pub funding_deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentFunded {
    pub investment_id: u64,
    pub investor: Address,
    pub startup: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentRepaid {
    pub investment_id: u64,
    pub investor: Address,
    pub startup: Address,
    pub investor_amount: i128,
    pub platform_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentWithdrawn {
    pub investment_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentCancelled {
    pub investment_id: u64,
    pub investor: Address,
    pub amount: i128,
    /// `false` when the held balance could not cover the refund.
    pub refunded: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformFeeUpdated {
    pub old_percentage: u32,
    pub new_percentage: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingDurationUpdated {
    pub old_days: u64,
    pub new_days: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawal {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

// ── Lifecycle ────────────────────────────────────────────────────────

pub fn emit_investment_created(env: &Env, payload: InvestmentCreated) {
    let topics = (symbol_short!("created"), payload.investment_id);
    env.events().publish(topics, payload);
}

pub fn emit_investment_funded(env: &Env, payload: InvestmentFunded) {
    let topics = (symbol_short!("funded"), payload.investment_id);
    env.events().publish(topics, payload);
}

pub fn emit_investment_repaid(env: &Env, payload: InvestmentRepaid) {
    let topics = (symbol_short!("repaid"), payload.investment_id);
    env.events().publish(topics, payload);
}

pub fn emit_investment_withdrawn(env: &Env, investment_id: u64, investor: Address, amount: i128) {
    let topics = (symbol_short!("withdrawn"), investment_id);
    let payload = InvestmentWithdrawn {
        investment_id,
        investor,
        amount,
    };
    env.events().publish(topics, payload);
}

pub fn emit_investment_cancelled(env: &Env, payload: InvestmentCancelled) {
    let topics = (symbol_short!("cancelled"), payload.investment_id);
    env.events().publish(topics, payload);
}

// ── Administration ───────────────────────────────────────────────────

pub fn emit_platform_fee_updated(env: &Env, old_percentage: u32, new_percentage: u32) {
    let payload = PlatformFeeUpdated {
        old_percentage,
        new_percentage,
    };
    env.events().publish((symbol_short!("fee_upd"),), payload);
}

pub fn emit_funding_duration_updated(env: &Env, old_days: u64, new_days: u64) {
    let payload = FundingDurationUpdated { old_days, new_days };
    env.events().publish((symbol_short!("dur_upd"),), payload);
}

pub fn emit_emergency_withdrawal(env: &Env, owner: Address, amount: i128) {
    let payload = EmergencyWithdrawal { owner, amount };
    env.events().publish((symbol_short!("emergency"),), payload);
}

pub fn emit_protocol_paused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("paused"),), caller);
}

pub fn emit_protocol_unpaused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("unpaused"),), caller);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    let payload = OwnershipTransferred {
        previous_owner,
        new_owner,
    };
    env.events().publish((symbol_short!("owner_set"),), payload);
}
