use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CandidateId;

#[contracttype]
#[derive(Clone)]
pub struct CandidateAddedEvent {
    pub candidate_id: CandidateId,
    pub name: String,
    pub party: String,
}

#[contracttype]
#[derive(Clone)]
pub struct VoterRegisteredEvent {
    pub voter: Address,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct VotingStartedEvent {
    pub round: u32,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct VotingEndedEvent {
    pub round: u32,
    pub end_time: u64,
    pub total_votes: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub candidate_id: CandidateId,
    pub vote_count: u32,
}

pub fn emit_candidate_added(env: &Env, event: CandidateAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "candidate_added"),), event);
}

pub fn emit_voter_registered(env: &Env, event: VoterRegisteredEvent) {
    env.events()
        .publish((Symbol::new(env, "voter_registered"),), event);
}

pub fn emit_voting_started(env: &Env, event: VotingStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "voting_started"),), event);
}

pub fn emit_voting_ended(env: &Env, event: VotingEndedEvent) {
    env.events()
        .publish((Symbol::new(env, "voting_ended"),), event);
}

// Voter address goes in the topics so indexers can filter per voter.
pub fn emit_vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish(
        (Symbol::new(env, "vote_cast"), event.voter.clone()),
        event,
    );
}
