use soroban_sdk::{Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT_THRESHOLD, TTL_PERSISTENT);
}

/// Load the admin address, failing if the contract was never initialized.
pub fn read_admin(env: &Env) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VotingError::NotInitialized)
}

/// Authenticate `caller` and check it is the election admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    let admin = read_admin(env)?;
    caller.require_auth();
    if *caller != admin {
        return Err(VotingError::NotAdmin);
    }
    Ok(())
}

pub fn require_initialized(env: &Env) -> Result<(), VotingError> {
    if !env.storage().instance().has(&DataKey::Admin) {
        return Err(VotingError::NotInitialized);
    }
    Ok(())
}
