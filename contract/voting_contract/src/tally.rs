use crate::storage_types::{Candidate, VotingError};

/// Count one vote for `candidate`.
pub fn record_vote(candidate: &mut Candidate) -> Result<(), VotingError> {
    candidate.vote_count = candidate
        .vote_count
        .checked_add(1)
        .ok_or(VotingError::TallyOverflow)?;
    Ok(())
}

/// Candidate with the highest tally. Candidates are visited in id order and
/// only a strictly larger count replaces the leader, so ties go to the
/// lowest id.
pub fn pick_winner<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut leader: Option<Candidate> = None;
    for candidate in candidates {
        let replace = match &leader {
            Some(best) => candidate.vote_count > best.vote_count,
            None => true,
        };
        if replace {
            leader = Some(candidate);
        }
    }
    leader
}

pub fn total_votes<I>(candidates: I) -> u32
where
    I: IntoIterator<Item = Candidate>,
{
    candidates
        .into_iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.vote_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{Env, String, Vec};

    fn candidate(env: &Env, id: u32, name: &str, votes: u32) -> Candidate {
        Candidate {
            id,
            name: String::from_str(env, name),
            party: String::from_str(env, "Party"),
            manifesto: String::from_str(env, ""),
            vote_count: votes,
        }
    }

    #[test]
    fn clear_winner() {
        let env = Env::default();
        let list = Vec::from_array(
            &env,
            [
                candidate(&env, 0, "A", 1),
                candidate(&env, 1, "B", 4),
                candidate(&env, 2, "C", 2),
            ],
        );
        let winner = pick_winner(list.iter()).unwrap();
        assert_eq!(winner.id, 1);
        assert_eq!(winner.vote_count, 4);
        assert_eq!(total_votes(list.iter()), 7);
    }

    #[test]
    fn tie_goes_to_lowest_id() {
        let env = Env::default();
        let list = Vec::from_array(
            &env,
            [
                candidate(&env, 0, "A", 0),
                candidate(&env, 1, "B", 3),
                candidate(&env, 2, "C", 3),
            ],
        );
        assert_eq!(pick_winner(list.iter()).unwrap().id, 1);
    }

    #[test]
    fn no_votes_picks_first_candidate() {
        let env = Env::default();
        let list = Vec::from_array(&env, [candidate(&env, 0, "A", 0), candidate(&env, 1, "B", 0)]);
        assert_eq!(pick_winner(list.iter()).unwrap().id, 0);
    }

    #[test]
    fn record_vote_refuses_to_wrap() {
        let env = Env::default();
        let mut c = candidate(&env, 0, "A", 41);
        record_vote(&mut c).unwrap();
        assert_eq!(c.vote_count, 42);

        let mut full = candidate(&env, 1, "B", u32::MAX);
        assert_eq!(record_vote(&mut full), Err(VotingError::TallyOverflow));
        assert_eq!(full.vote_count, u32::MAX);
    }

    #[test]
    fn empty_has_no_winner() {
        let env = Env::default();
        let list: Vec<Candidate> = Vec::new(&env);
        assert!(pick_winner(list.iter()).is_none());
        assert_eq!(total_votes(list.iter()), 0);
    }
}
