//! # Access
//!
//! The authorization and pause gate consulted at the entry of every mutating
//! operation. A single owner administers the protocol, receives platform
//! fees and is the target of emergency sweeps.

use soroban_sdk::{Address, Env};

use crate::{events, storage, Error};

/// Store the first owner. Fails if the contract was already initialised.
pub fn init_owner(env: &Env, owner: &Address) -> Result<(), Error> {
    if storage::is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }
    storage::set_owner(env, owner);
    storage::set_paused(env, false);
    Ok(())
}

/// Authenticate `caller` and check that it is the owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if storage::is_paused(env) {
        return Err(Error::ProtocolPaused);
    }
    Ok(())
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    storage::set_paused(env, true);
    events::emit_protocol_paused(env, caller.clone());
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    storage::set_paused(env, false);
    events::emit_protocol_unpaused(env, caller.clone());
    Ok(())
}

/// Hand the owner role to `new_owner`. The previous owner loses it immediately.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    new_owner.require_auth();
    storage::set_owner(env, new_owner);
    events::emit_ownership_transferred(env, caller.clone(), new_owner.clone());
    Ok(())
}
