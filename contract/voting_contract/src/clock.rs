use soroban_sdk::Env;

use crate::storage_types::*;

/// The voting window as observed at a given ledger time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveState {
    pub is_open: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub remaining_time: u64,
    pub phase: ElectionPhase,
}

impl EffectiveState {
    pub fn as_tuple(&self) -> (bool, u64, u64, u64) {
        (self.is_open, self.start_time, self.end_time, self.remaining_time)
    }
}

/// Apply expiry to the stored clock. A window whose `end_time` has been
/// reached reads as closed whether or not `end_voting` was called.
pub fn derive_effective_state(clock: &ElectionClock, now: u64) -> EffectiveState {
    let is_open = clock.is_open && now < clock.end_time;
    let phase = if is_open {
        ElectionPhase::Open
    } else if clock.rounds == 0 {
        ElectionPhase::Setup
    } else {
        ElectionPhase::Closed
    };

    EffectiveState {
        is_open,
        start_time: clock.start_time,
        end_time: clock.end_time,
        remaining_time: if is_open { clock.end_time - now } else { 0 },
        phase,
    }
}

/// Next clock after a successful `start_voting`.
pub fn open_window(
    clock: &ElectionClock,
    now: u64,
    duration_minutes: u64,
) -> Result<ElectionClock, VotingError> {
    if duration_minutes == 0 {
        return Err(VotingError::InvalidDuration);
    }
    let end_time = duration_minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .and_then(|secs| now.checked_add(secs))
        .ok_or(VotingError::InvalidDuration)?;

    Ok(ElectionClock {
        is_open: true,
        start_time: now,
        end_time,
        rounds: clock.rounds + 1,
    })
}

/// Next clock after `end_voting`. An early close pulls `end_time` back to now.
pub fn close_window(clock: &ElectionClock, now: u64) -> ElectionClock {
    ElectionClock {
        is_open: false,
        end_time: clock.end_time.min(now),
        ..*clock
    }
}

pub fn read_clock(env: &Env) -> ElectionClock {
    env.storage()
        .instance()
        .get(&DataKey::Clock)
        .unwrap_or_default()
}

pub fn write_clock(env: &Env, clock: &ElectionClock) {
    env.storage().instance().set(&DataKey::Clock, clock);
}

pub fn current_state(env: &Env) -> EffectiveState {
    derive_effective_state(&read_clock(env), env.ledger().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000;

    #[test]
    fn fresh_clock_is_setup() {
        let state = derive_effective_state(&ElectionClock::default(), T0);
        assert!(!state.is_open);
        assert_eq!(state.phase, ElectionPhase::Setup);
        assert_eq!(state.remaining_time, 0);
    }

    #[test]
    fn remaining_time_counts_down_then_sticks_at_zero() {
        let clock = open_window(&ElectionClock::default(), T0, 30).unwrap();
        assert_eq!(clock.end_time, T0 + 30 * 60);

        let mut last = u64::MAX;
        for elapsed in [0u64, 1, 600, 1799] {
            let state = derive_effective_state(&clock, T0 + elapsed);
            assert!(state.is_open);
            assert!(state.remaining_time < last);
            last = state.remaining_time;
        }
        assert_eq!(last, 1);

        for elapsed in [1800u64, 1801, 86_400] {
            let state = derive_effective_state(&clock, T0 + elapsed);
            assert!(!state.is_open);
            assert_eq!(state.remaining_time, 0);
            assert_eq!(state.phase, ElectionPhase::Closed);
        }
    }

    #[test]
    fn zero_or_overflowing_duration_is_rejected() {
        let clock = ElectionClock::default();
        assert_eq!(open_window(&clock, T0, 0), Err(VotingError::InvalidDuration));
        assert_eq!(
            open_window(&clock, T0, u64::MAX / 2),
            Err(VotingError::InvalidDuration)
        );
    }

    #[test]
    fn early_close_clamps_end_time() {
        let open = open_window(&ElectionClock::default(), T0, 10).unwrap();
        let closed = close_window(&open, T0 + 60);
        assert!(!closed.is_open);
        assert_eq!(closed.end_time, T0 + 60);
        assert_eq!(closed.rounds, 1);

        // closing after natural expiry keeps the scheduled end
        let late = close_window(&open, T0 + 3_600);
        assert_eq!(late.end_time, T0 + 600);
    }

    #[test]
    fn reopening_counts_rounds() {
        let first = open_window(&ElectionClock::default(), T0, 5).unwrap();
        let closed = close_window(&first, T0 + 10);
        let second = open_window(&closed, T0 + 20, 5).unwrap();
        assert_eq!(second.rounds, 2);
        assert_eq!(second.start_time, T0 + 20);
        assert_eq!(
            derive_effective_state(&second, T0 + 21).phase,
            ElectionPhase::Open
        );
    }
}
