//! # Storage
//!
//! The investment ledger: typed helpers over Soroban's two storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key               | Type             | Description                        |
//! |-------------------|------------------|------------------------------------|
//! | `Owner`           | `Address`        | Platform owner / fee recipient     |
//! | `Paused`          | `bool`           | Pause gate                         |
//! | `Config`          | `ProtocolConfig` | Token, fee and funding duration    |
//! | `InvestmentCount` | `u64`            | Next identifier to assign          |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key         | Type              | Description                   |
//! |-------------|-------------------|-------------------------------|
//! | `Terms(id)` | `InvestmentTerms` | Immutable offer terms         |
//! | `State(id)` | `InvestmentState` | Status and funding startup    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining. Records are never removed; terminal records stay readable.
//!
//! The ledger is a bare keyed store. It validates identifiers and capacity
//! but leaves every status precondition to `lifecycle`.

use soroban_sdk::{contracttype, Address, Env};

use crate::constants::MAX_INVESTMENTS;
use crate::types::{Investment, InvestmentState, InvestmentTerms, ProtocolConfig};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Platform owner (Instance).
    Owner,
    /// Pause flag (Instance).
    Paused,
    /// Protocol configuration (Instance).
    Config,
    /// Number of identifiers issued so far (Instance).
    InvestmentCount,
    /// Immutable offer terms keyed by ID (Persistent).
    Terms(u64),
    /// Mutable investment state keyed by ID (Persistent).
    State(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn save_config(env: &Env, config: &ProtocolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Result<ProtocolConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn investment_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::InvestmentCount)
        .unwrap_or(0)
}

/// Reserve the next identifier.
///
/// Returns the pre-increment value; fails with `CapacityExceeded` once
/// `MAX_INVESTMENTS` identifiers have been issued.
pub fn allocate(env: &Env) -> Result<u64, Error> {
    bump_instance(env);
    let current = investment_count(env);
    if current >= MAX_INVESTMENTS {
        return Err(Error::CapacityExceeded);
    }
    env.storage()
        .instance()
        .set(&DataKey::InvestmentCount, &(current + 1));
    Ok(current)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn require_valid_id(env: &Env, id: u64) -> Result<(), Error> {
    if id >= investment_count(env) {
        return Err(Error::InvalidId);
    }
    Ok(())
}

/// Write the terms and initial state of a freshly allocated record.
pub fn save_investment(env: &Env, terms: &InvestmentTerms, state: &InvestmentState) {
    let terms_key = DataKey::Terms(terms.id);
    let state_key = DataKey::State(terms.id);

    env.storage().persistent().set(&terms_key, terms);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &terms_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Investment` by combining terms and state.
pub fn load_investment(env: &Env, id: u64) -> Result<Investment, Error> {
    let (terms, state) = load_investment_pair(env, id)?;
    Ok(Investment::from_parts(terms, state))
}

/// Load terms and state together, bumping both TTLs.
pub fn load_investment_pair(
    env: &Env,
    id: u64,
) -> Result<(InvestmentTerms, InvestmentState), Error> {
    require_valid_id(env, id)?;

    let terms_key = DataKey::Terms(id);
    let state_key = DataKey::State(id);

    let terms: InvestmentTerms = env
        .storage()
        .persistent()
        .get(&terms_key)
        .ok_or(Error::InvalidId)?;
    let state: InvestmentState = env
        .storage()
        .persistent()
        .get(&state_key)
        .ok_or(Error::InvalidId)?;

    bump_persistent(env, &terms_key);
    bump_persistent(env, &state_key);
    Ok((terms, state))
}

/// Rewrite only the mutable state of an existing record.
pub fn save_investment_state(env: &Env, id: u64, state: &InvestmentState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}
