use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::*;
use crate::utils::extend_persistent;

pub fn voter_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::VoterCount).unwrap_or(0)
}

pub fn read_voter(env: &Env, address: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Voter(address.clone()))
}

pub fn write_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = PersistentKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    extend_persistent(env, &key);
}

/// Add `address` to the registry and the registration-order index.
pub fn register(env: &Env, address: &Address) -> Result<Voter, VotingError> {
    if read_voter(env, address).is_some() {
        return Err(VotingError::AlreadyRegistered);
    }

    let voter = Voter {
        is_registered: true,
        has_voted: false,
        voted_candidate_id: 0,
        registered_at: env.ledger().timestamp(),
    };
    write_voter(env, address, &voter);

    let index = voter_count(env);
    let index_key = PersistentKey::VoterAt(index);
    env.storage().persistent().set(&index_key, address);
    extend_persistent(env, &index_key);
    env.storage()
        .instance()
        .set(&DataKey::VoterCount, &(index + 1));

    Ok(voter)
}

/// Status tuple for any address; unknown addresses read as unregistered.
pub fn status(env: &Env, address: &Address) -> (bool, bool, CandidateId) {
    match read_voter(env, address) {
        Some(voter) => (voter.is_registered, voter.has_voted, voter.voted_candidate_id),
        None => (false, false, 0),
    }
}

pub fn all_voters(env: &Env) -> Vec<VoterRecord> {
    let mut out = Vec::new(env);
    for index in 0..voter_count(env) {
        let address: Option<Address> = env
            .storage()
            .persistent()
            .get(&PersistentKey::VoterAt(index));
        let Some(address) = address else { continue };
        extend_persistent(env, &PersistentKey::VoterAt(index));
        if let Some(voter) = read_voter(env, &address) {
            extend_persistent(env, &PersistentKey::Voter(address.clone()));
            out.push_back(VoterRecord {
                address,
                has_voted: voter.has_voted,
                registered_at: voter.registered_at,
            });
        }
    }
    out
}
