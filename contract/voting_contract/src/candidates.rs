use soroban_sdk::{Env, String, Vec};

use crate::storage_types::*;
use crate::utils::extend_persistent;

pub fn candidate_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CandidateCount)
        .unwrap_or(0)
}

pub fn read_candidate(env: &Env, id: CandidateId) -> Option<Candidate> {
    env.storage().persistent().get(&PersistentKey::Candidate(id))
}

pub fn write_candidate(env: &Env, candidate: &Candidate) {
    let key = PersistentKey::Candidate(candidate.id);
    env.storage().persistent().set(&key, candidate);
    extend_persistent(env, &key);
}

/// Append a candidate with a zero tally. The new id is the prior count, so
/// ids run 0, 1, 2, ... with no reuse.
pub fn append_candidate(
    env: &Env,
    name: String,
    party: String,
    manifesto: String,
) -> Result<Candidate, VotingError> {
    if name.len() == 0 || party.len() == 0 {
        return Err(VotingError::EmptyField);
    }

    let id = candidate_count(env);
    let candidate = Candidate {
        id,
        name,
        party,
        manifesto,
        vote_count: 0,
    };

    write_candidate(env, &candidate);
    env.storage()
        .instance()
        .set(&DataKey::CandidateCount, &(id + 1));

    Ok(candidate)
}

/// All candidates in id order. Each entry read has its TTL bumped so tallies
/// stay live for as long as results are being read.
pub fn all_candidates(env: &Env) -> Vec<Candidate> {
    let mut out = Vec::new(env);
    for id in 0..candidate_count(env) {
        if let Some(candidate) = read_candidate(env, id) {
            extend_persistent(env, &PersistentKey::Candidate(id));
            out.push_back(candidate);
        }
    }
    out
}
