//! # Investment Escrow Contract
//!
//! Peer-to-peer investment escrow. An investor escrows funds for a startup
//! under fixed terms, a startup claims the offer by funding it, and the offer
//! later settles by repayment (minus a platform fee), by the investor
//! withdrawing after a lock period, or by cancellation if nobody funded it.
//!
//! | Phase        | Entry Point(s)                                              |
//! |--------------|-------------------------------------------------------------|
//! | Bootstrap    | [`InvestmentEscrow::init`]                                  |
//! | Lifecycle    | `create_investment`, `fund_investment`, `repay_investment`, `withdraw_investment`, `cancel_investment` |
//! | Owner admin  | `update_platform_fee`, `update_funding_duration`, `emergency_withdraw`, `pause`, `unpause`, `transfer_ownership` |
//! | Queries      | `get_investment_info`, `get_investment_status`, `get_investment_count`, `get_config`, `calculate_platform_fee`, `held_balance`, `owner`, `is_paused` |
//!
//! ## Architecture
//!
//! The ledger of records lives in [`storage`], the state machine in
//! [`lifecycle`], token movements in [`transfer`], and the owner/pause gate
//! in [`access`]. This file contains **only** the public entry points.
//!
//! Every fallible entry point returns `Result<_, Error>`. Returning `Err`
//! reverts every storage write and token transfer made by the invocation.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

mod access;
mod admin;
pub mod constants;
pub mod events;
mod lifecycle;
mod storage;
mod transfer;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use lifecycle::Offer;
use transfer::TokenGateway;
pub use types::{Investment, InvestmentStatus, ProtocolConfig};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    ProtocolPaused = 4,
    InvalidAmount = 5,
    InvalidEquity = 6,
    InvalidName = 7,
    InvalidDescription = 8,
    InvalidValuation = 9,
    CapacityExceeded = 10,
    InvalidId = 11,
    NotOpen = 12,
    SelfFunding = 13,
    AmountMismatch = 14,
    DeadlineExpired = 15,
    NotFunded = 16,
    AlreadyRepaid = 17,
    AlreadyWithdrawn = 18,
    AlreadyFunded = 19,
    LockNotElapsed = 20,
    DeadlineNotPassed = 21,
    TransferFailed = 22,
    FeeTooHigh = 23,
    FeeUpdateTooSoon = 24,
    InvalidDuration = 25,
    NothingToWithdraw = 26,
    Overflow = 27,
}

/// Coarse classification of [`Error`] for callers deciding how to react.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// Malformed or out-of-range input; retry with corrected input.
    Validation,
    /// Wrong state for the requested transition.
    Precondition,
    /// Wrong caller identity.
    Authorization,
    /// Deadline or lock period not satisfied.
    Timing,
    /// A token movement failed; nothing was applied.
    Transfer,
    /// The registry is full.
    Capacity,
    /// Contract not set up, or set up twice.
    Configuration,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidAmount
            | Error::InvalidEquity
            | Error::InvalidName
            | Error::InvalidDescription
            | Error::InvalidValuation
            | Error::InvalidId
            | Error::AmountMismatch
            | Error::FeeTooHigh
            | Error::InvalidDuration
            | Error::Overflow => ErrorCategory::Validation,
            Error::NotOpen
            | Error::NotFunded
            | Error::AlreadyRepaid
            | Error::AlreadyWithdrawn
            | Error::AlreadyFunded
            | Error::ProtocolPaused
            | Error::NothingToWithdraw => ErrorCategory::Precondition,
            Error::NotAuthorized | Error::SelfFunding => ErrorCategory::Authorization,
            Error::DeadlineExpired
            | Error::LockNotElapsed
            | Error::DeadlineNotPassed
            | Error::FeeUpdateTooSoon => ErrorCategory::Timing,
            Error::TransferFailed => ErrorCategory::Transfer,
            Error::CapacityExceeded => ErrorCategory::Capacity,
            Error::AlreadyInitialized | Error::NotInitialized => ErrorCategory::Configuration,
        }
    }
}

#[contract]
pub struct InvestmentEscrow;

#[contractimpl]
impl InvestmentEscrow {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with its owner and the token carrying all value.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    pub fn init(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        owner.require_auth();
        access::init_owner(&env, &owner)?;
        storage::save_config(&env, &admin::default_config(token));
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Investment lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open a new offer and escrow `value_sent` (which must equal `amount`).
    ///
    /// Returns the new investment ID.
    #[allow(clippy::too_many_arguments)]
    pub fn create_investment(
        env: Env,
        investor: Address,
        amount: i128,
        equity_percentage: u32,
        startup_name: String,
        description: String,
        valuation: i128,
        value_sent: i128,
    ) -> Result<u64, Error> {
        access::require_not_paused(&env)?;
        investor.require_auth();
        let config = storage::load_config(&env)?;
        let offer = Offer {
            amount,
            equity_percentage,
            startup_name,
            description,
            valuation,
        };
        let gateway = TokenGateway::new(&config.token);
        lifecycle::create(&env, &config, &gateway, investor, offer, value_sent)
    }

    /// Claim an open offer as `startup`, escrowing a matching amount.
    pub fn fund_investment(
        env: Env,
        id: u64,
        startup: Address,
        value_sent: i128,
    ) -> Result<(), Error> {
        access::require_not_paused(&env)?;
        startup.require_auth();
        let config = storage::load_config(&env)?;
        lifecycle::fund(&env, &TokenGateway::new(&config.token), id, startup, value_sent)
    }

    /// Repay a funded investment. The platform fee goes to the owner.
    pub fn repay_investment(
        env: Env,
        id: u64,
        startup: Address,
        value_sent: i128,
    ) -> Result<(), Error> {
        access::require_not_paused(&env)?;
        startup.require_auth();
        let config = storage::load_config(&env)?;
        let owner = storage::get_owner(&env)?;
        let gateway = TokenGateway::new(&config.token);
        lifecycle::repay(&env, &config, &gateway, &owner, id, startup, value_sent)
    }

    /// Reclaim the principal of an unpaid, funded investment after the lock period.
    pub fn withdraw_investment(env: Env, id: u64, investor: Address) -> Result<(), Error> {
        access::require_not_paused(&env)?;
        investor.require_auth();
        let config = storage::load_config(&env)?;
        lifecycle::withdraw(&env, &TokenGateway::new(&config.token), id, investor)
    }

    /// Cancel an offer nobody funded before its deadline.
    ///
    /// Returns whether the principal was refunded.
    pub fn cancel_investment(env: Env, id: u64, investor: Address) -> Result<bool, Error> {
        access::require_not_paused(&env)?;
        investor.require_auth();
        let config = storage::load_config(&env)?;
        lifecycle::cancel(&env, &TokenGateway::new(&config.token), id, investor)
    }

    // ─────────────────────────────────────────────────────────
    // Owner administration
    // ─────────────────────────────────────────────────────────

    /// Change the percentage of each repayment kept as the platform fee.
    ///
    /// - `owner` must be the current owner and must authorize.
    /// - `percentage` must not exceed `MAX_PLATFORM_FEE_PERCENTAGE` (5).
    /// - At most one change per `FEE_UPDATE_INTERVAL` (1 day), whatever the
    ///   new value; the first change is always allowed.
    pub fn update_platform_fee(env: Env, owner: Address, percentage: u32) -> Result<(), Error> {
        access::require_owner(&env, &owner)?;
        admin::update_platform_fee(&env, percentage)
    }

    /// Set the funding window, in days, for offers created from now on.
    ///
    /// - `owner` must be the current owner and must authorize.
    /// - `days` must be non-zero.
    /// - Deadlines of existing offers are not touched.
    pub fn update_funding_duration(env: Env, owner: Address, days: u64) -> Result<(), Error> {
        access::require_owner(&env, &owner)?;
        admin::update_funding_duration(&env, days)
    }

    /// Sweep the entire held balance to the owner. Returns the swept amount.
    pub fn emergency_withdraw(env: Env, owner: Address) -> Result<i128, Error> {
        access::require_owner(&env, &owner)?;
        admin::emergency_withdraw(&env, &owner)
    }

    /// Halt every lifecycle operation. Admin operations stay available.
    pub fn pause(env: Env, owner: Address) -> Result<(), Error> {
        access::pause(&env, &owner)
    }

    /// Resume lifecycle operations after a [`pause`](Self::pause).
    ///
    /// - `owner` must be the current owner and must authorize.
    pub fn unpause(env: Env, owner: Address) -> Result<(), Error> {
        access::unpause(&env, &owner)
    }

    /// Hand the owner role, and with it the fee recipient, to `new_owner`.
    ///
    /// - `owner` must be the current owner and must authorize.
    /// - `new_owner` must also authorize.
    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        access::transfer_ownership(&env, &owner, &new_owner)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Full record for `id`; `Error::InvalidId` when `id >= get_investment_count()`.
    pub fn get_investment_info(env: Env, id: u64) -> Result<Investment, Error> {
        storage::load_investment(&env, id)
    }

    pub fn get_investment_status(env: Env, id: u64) -> Result<InvestmentStatus, Error> {
        storage::load_investment(&env, id).map(|investment| investment.status)
    }

    pub fn get_investment_count(env: Env) -> u64 {
        storage::investment_count(&env)
    }

    pub fn get_config(env: Env) -> Result<ProtocolConfig, Error> {
        storage::load_config(&env)
    }

    /// `(platform_fee, investor_amount)` for repaying `amount` at the current rate.
    pub fn calculate_platform_fee(env: Env, amount: i128) -> Result<(i128, i128), Error> {
        let config = storage::load_config(&env)?;
        lifecycle::split_repayment(amount, config.platform_fee_percentage)
    }

    /// Total value held across all records.
    pub fn held_balance(env: Env) -> Result<i128, Error> {
        let config = storage::load_config(&env)?;
        Ok(transfer::held_balance(&env, &config.token))
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }
}
