use super::debate::DebateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

#[derive(Clone, Hash, PartialEq, Eq, Debug, Deserialize, Serialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct VoteId(pub Uuid);

impl VoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl Default for VoteId {
    fn default() -> Self {
        Self::new()
    }
}

/// The two sides a tallied vote can back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteChoice {
    User,
    Bot,
}

impl VoteChoice {
    /// Choices are stored verbatim; legacy rows may carry other labels
    /// ("for"/"against" has been seen) and those decode to `None` so the
    /// tally skips them.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "User" => Some(VoteChoice::User),
            "Bot" => Some(VoteChoice::Bot),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug, sqlx::FromRow)]
pub struct InternalVote {
    pub id: VoteId,
    pub debate_id: DebateId,
    pub choice: String,
    pub voter_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewVote {
    pub debate_id: DebateId,
    pub choice: String,
    pub voter_id: String,
}
