use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    ElectionName,
    CandidateCount,
    VoterCount,
    Clock,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Candidate(CandidateId),
    Voter(Address),
    VoterAt(u32), // registration index -> address
}

pub type CandidateId = u32;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub manifesto: String,
    pub vote_count: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_candidate_id: CandidateId, // meaningless until has_voted
    pub registered_at: u64,
}

// Admin-facing view of a registry entry
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct VoterRecord {
    pub address: Address,
    pub has_voted: bool,
    pub registered_at: u64,
}

/// Stored voting window. `is_open` is only flipped by explicit
/// `start_voting` / `end_voting` calls; expiry is applied on read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[contracttype]
pub struct ElectionClock {
    pub is_open: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub rounds: u32, // number of times voting has been started
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum ElectionPhase {
    Setup,
    Open,
    Closed,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAdmin = 3,
    VotingInProgress = 4,
    VotingClosed = 5,
    NotRegistered = 6,
    AlreadyRegistered = 7,
    AlreadyVoted = 8,
    InvalidCandidate = 9,
    NotFound = 10,
    NoCandidates = 11,
    InvalidDuration = 12,
    EmptyField = 13,
    NotStarted = 14,
    TallyOverflow = 15,
}

// Constants
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30; // 30 days
pub const TTL_INSTANCE_THRESHOLD: u32 = TTL_INSTANCE - DAY_IN_LEDGERS;
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days
pub const TTL_PERSISTENT_THRESHOLD: u32 = TTL_PERSISTENT - DAY_IN_LEDGERS;
