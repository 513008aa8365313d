//! # Value Transfer Gateway
//!
//! Every movement of escrowed value goes through this module.
//!
//! Lifecycle operations move value through a [`ValueGateway`]; the contract
//! wires in [`TokenGateway`], backed by the configured token.
//!
//! Callers must persist all state for the current operation **before**
//! calling into the gateway. A reentrant call made from inside a token transfer
//! therefore reads the post-transition record and is rejected by the
//! lifecycle preconditions. Any `Err` returned here must be propagated so the
//! host reverts the whole invocation; nothing is committed partially.

use soroban_sdk::{log, token, Address, Env};

use crate::Error;

/// Value movements available to the lifecycle operations.
pub trait ValueGateway {
    /// Pull `amount` from `from` into the contract.
    fn collect(&self, env: &Env, from: &Address, amount: i128) -> Result<(), Error>;
    /// Send `amount` of held value to `to`.
    fn disburse(&self, env: &Env, to: &Address, amount: i128) -> Result<(), Error>;
    /// Total value currently held by the contract.
    fn held_balance(&self, env: &Env) -> i128;
}

/// Gateway over a single token contract.
pub struct TokenGateway<'a> {
    token: &'a Address,
}

impl<'a> TokenGateway<'a> {
    pub fn new(token: &'a Address) -> Self {
        TokenGateway { token }
    }
}

impl ValueGateway for TokenGateway<'_> {
    fn collect(&self, env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        collect(env, self.token, from, amount)
    }

    fn disburse(&self, env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        disburse(env, self.token, to, amount)
    }

    fn held_balance(&self, env: &Env) -> i128 {
        held_balance(env, self.token)
    }
}

/// Pull `amount` from `from` into the contract.
pub fn collect(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "collect of {} from {} failed", amount, from.clone());
            Err(Error::TransferFailed)
        }
    }
}

/// Send `amount` of held value to `to`.
///
/// A zero amount is a no-op.
pub fn disburse(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "disbursement of {} to {} failed", amount, to.clone());
            Err(Error::TransferFailed)
        }
    }
}

/// Total value currently held by the contract, across all records.
pub fn held_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
