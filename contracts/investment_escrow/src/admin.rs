//! # Admin
//!
//! Owner-gated changes to [`ProtocolConfig`] and the emergency sweep.
//! Callers authenticate through [`crate::access::require_owner`] first.

use soroban_sdk::{Address, Env};

use crate::constants::{
    DEFAULT_FUNDING_DURATION_DAYS, DEFAULT_PLATFORM_FEE_PERCENTAGE, FEE_UPDATE_INTERVAL,
    MAX_PLATFORM_FEE_PERCENTAGE,
};
use crate::types::ProtocolConfig;
use crate::{events, storage, transfer, Error};

pub fn default_config(token: Address) -> ProtocolConfig {
    ProtocolConfig {
        token,
        platform_fee_percentage: DEFAULT_PLATFORM_FEE_PERCENTAGE,
        fee_updated_at: None,
        funding_duration_days: DEFAULT_FUNDING_DURATION_DAYS,
    }
}

/// Change the platform fee percentage.
///
/// At most one change per `FEE_UPDATE_INTERVAL`, whatever the new value is.
pub fn update_platform_fee(env: &Env, new_percentage: u32) -> Result<(), Error> {
    if new_percentage > MAX_PLATFORM_FEE_PERCENTAGE {
        return Err(Error::FeeTooHigh);
    }

    let mut config = storage::load_config(env)?;
    let now = env.ledger().timestamp();
    if let Some(last) = config.fee_updated_at {
        let next_allowed = last
            .checked_add(FEE_UPDATE_INTERVAL)
            .ok_or(Error::Overflow)?;
        if now < next_allowed {
            return Err(Error::FeeUpdateTooSoon);
        }
    }

    let old_percentage = config.platform_fee_percentage;
    config.platform_fee_percentage = new_percentage;
    config.fee_updated_at = Some(now);
    storage::save_config(env, &config);

    events::emit_platform_fee_updated(env, old_percentage, new_percentage);
    Ok(())
}

/// Change the funding window applied to offers created from now on.
pub fn update_funding_duration(env: &Env, days: u64) -> Result<(), Error> {
    if days == 0 {
        return Err(Error::InvalidDuration);
    }

    let mut config = storage::load_config(env)?;
    let old_days = config.funding_duration_days;
    config.funding_duration_days = days;
    storage::save_config(env, &config);

    events::emit_funding_duration_updated(env, old_days, days);
    Ok(())
}

/// Sweep everything the contract holds to `owner`. Returns the swept amount.
pub fn emergency_withdraw(env: &Env, owner: &Address) -> Result<i128, Error> {
    let config = storage::load_config(env)?;
    let balance = transfer::held_balance(env, &config.token);
    if balance <= 0 {
        return Err(Error::NothingToWithdraw);
    }

    transfer::disburse(env, &config.token, owner, balance)?;

    events::emit_emergency_withdrawal(env, owner.clone(), balance);
    Ok(balance)
}
