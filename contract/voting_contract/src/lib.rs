#![no_std]

mod candidates;
mod clock;
mod events;
mod storage_types;
mod tally;
mod utils;
mod voters;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use clock::{derive_effective_state, EffectiveState};
pub use storage_types::*;
use utils::{extend_instance, read_admin, require_admin, require_initialized};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Initialize the election with its admin and display name. The admin
    /// is fixed for the lifetime of the contract.
    pub fn initialize(env: Env, admin: Address, election_name: String) -> Result<(), VotingError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(VotingError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::ElectionName, &election_name);
        env.storage().instance().set(&DataKey::CandidateCount, &0u32);
        env.storage().instance().set(&DataKey::VoterCount, &0u32);
        clock::write_clock(&env, &ElectionClock::default());

        extend_instance(&env);
        log!(&env, "election initialized", admin);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, VotingError> {
        read_admin(&env)
    }

    pub fn election_name(env: Env) -> Result<String, VotingError> {
        env.storage()
            .instance()
            .get(&DataKey::ElectionName)
            .ok_or(VotingError::NotInitialized)
    }

    /// Add a candidate while voting is closed. Returns the new candidate id.
    pub fn add_candidate(
        env: Env,
        caller: Address,
        name: String,
        party: String,
        manifesto: String,
    ) -> Result<CandidateId, VotingError> {
        require_admin(&env, &caller)?;

        if clock::current_state(&env).is_open {
            return Err(VotingError::VotingInProgress);
        }

        let candidate = candidates::append_candidate(&env, name, party, manifesto)?;
        extend_instance(&env);

        events::emit_candidate_added(
            &env,
            events::CandidateAddedEvent {
                candidate_id: candidate.id,
                name: candidate.name,
                party: candidate.party,
            },
        );

        Ok(candidate.id)
    }

    /// Candidate as `(id, name, party, manifesto, vote_count)`.
    pub fn get_candidate(
        env: Env,
        candidate_id: CandidateId,
    ) -> Result<(CandidateId, String, String, String, u32), VotingError> {
        require_initialized(&env)?;
        let c = candidates::read_candidate(&env, candidate_id).ok_or(VotingError::NotFound)?;
        Ok((c.id, c.name, c.party, c.manifesto, c.vote_count))
    }

    pub fn get_candidates_count(env: Env) -> Result<u32, VotingError> {
        require_initialized(&env)?;
        Ok(candidates::candidate_count(&env))
    }

    /// All candidates in id order.
    pub fn get_candidates(env: Env) -> Result<Vec<Candidate>, VotingError> {
        require_initialized(&env)?;
        Ok(candidates::all_candidates(&env))
    }

    pub fn register_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;

        let record = voters::register(&env, &voter)?;
        extend_instance(&env);

        events::emit_voter_registered(
            &env,
            events::VoterRegisteredEvent {
                voter,
                registered_at: record.registered_at,
            },
        );

        Ok(())
    }

    /// Voter as `(is_registered, has_voted, voted_candidate_id)`. Unknown
    /// addresses report `(false, false, 0)`.
    pub fn get_voter_status(env: Env, voter: Address) -> Result<(bool, bool, CandidateId), VotingError> {
        require_initialized(&env)?;
        Ok(voters::status(&env, &voter))
    }

    /// Registered voters in registration order.
    pub fn get_registered_voters(env: Env) -> Result<Vec<VoterRecord>, VotingError> {
        require_initialized(&env)?;
        Ok(voters::all_voters(&env))
    }

    pub fn get_voters_count(env: Env) -> Result<u32, VotingError> {
        require_initialized(&env)?;
        Ok(voters::voter_count(&env))
    }

    /// Open the voting window for `duration_minutes`. Also re-opens an
    /// election that was closed earlier.
    pub fn start_voting(env: Env, caller: Address, duration_minutes: u64) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;

        let now = env.ledger().timestamp();
        let stored = clock::read_clock(&env);
        if derive_effective_state(&stored, now).is_open {
            return Err(VotingError::VotingInProgress);
        }
        if candidates::candidate_count(&env) == 0 {
            return Err(VotingError::NoCandidates);
        }

        let next = clock::open_window(&stored, now, duration_minutes)?;
        clock::write_clock(&env, &next);
        extend_instance(&env);

        log!(&env, "voting started", next.rounds, next.end_time);
        events::emit_voting_started(
            &env,
            events::VotingStartedEvent {
                round: next.rounds,
                start_time: next.start_time,
                end_time: next.end_time,
            },
        );

        Ok(())
    }

    /// Close the voting window. Accepted after natural expiry as well, so the
    /// admin can always settle the stored state.
    pub fn end_voting(env: Env, caller: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;

        let stored = clock::read_clock(&env);
        if !stored.is_open {
            return Err(VotingError::VotingClosed);
        }

        let next = clock::close_window(&stored, env.ledger().timestamp());
        clock::write_clock(&env, &next);
        extend_instance(&env);

        let total_votes = tally::total_votes(candidates::all_candidates(&env));
        log!(&env, "voting ended", next.rounds, total_votes);
        events::emit_voting_ended(
            &env,
            events::VotingEndedEvent {
                round: next.rounds,
                end_time: next.end_time,
                total_votes,
            },
        );

        Ok(())
    }

    /// Window as `(is_open, start_time, end_time, remaining_time)`, derived
    /// from the current ledger time.
    pub fn get_voting_status(env: Env) -> Result<(bool, u64, u64, u64), VotingError> {
        require_initialized(&env)?;
        Ok(clock::current_state(&env).as_tuple())
    }

    pub fn get_phase(env: Env) -> Result<ElectionPhase, VotingError> {
        require_initialized(&env)?;
        Ok(clock::current_state(&env).phase)
    }

    /// Cast `voter`'s single vote. Rejected once the window has expired even
    /// if `end_voting` has not been called yet.
    pub fn vote(env: Env, voter: Address, candidate_id: CandidateId) -> Result<(), VotingError> {
        require_initialized(&env)?;
        voter.require_auth();

        if !clock::current_state(&env).is_open {
            return Err(VotingError::VotingClosed);
        }

        let mut record = voters::read_voter(&env, &voter)
            .filter(|v| v.is_registered)
            .ok_or(VotingError::NotRegistered)?;
        if record.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut candidate =
            candidates::read_candidate(&env, candidate_id).ok_or(VotingError::InvalidCandidate)?;

        tally::record_vote(&mut candidate)?;
        record.has_voted = true;
        record.voted_candidate_id = candidate_id;

        candidates::write_candidate(&env, &candidate);
        voters::write_voter(&env, &voter, &record);
        extend_instance(&env);

        events::emit_vote_cast(
            &env,
            events::VoteCastEvent {
                voter,
                candidate_id,
                vote_count: candidate.vote_count,
            },
        );

        Ok(())
    }

    /// Winner as `(id, name, vote_count)`; only available once a round has
    /// closed. Ties go to the lowest candidate id.
    pub fn get_winner(env: Env) -> Result<(CandidateId, String, u32), VotingError> {
        require_initialized(&env)?;

        match clock::current_state(&env).phase {
            ElectionPhase::Setup => return Err(VotingError::NotStarted),
            ElectionPhase::Open => return Err(VotingError::VotingInProgress),
            ElectionPhase::Closed => {}
        }

        let winner =
            tally::pick_winner(candidates::all_candidates(&env)).ok_or(VotingError::NotFound)?;
        Ok((winner.id, winner.name, winner.vote_count))
    }

    pub fn get_total_votes(env: Env) -> Result<u32, VotingError> {
        require_initialized(&env)?;
        Ok(tally::total_votes(candidates::all_candidates(&env)))
    }
}
