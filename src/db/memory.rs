use super::debate::{DebateId, InternalDebate};
use super::vote::{InternalVote, NewVote, VoteId};
use super::{DebateReader, InsertVoteError, VoteStore};
use async_trait::async_trait;
use chrono::Utc;
use color_eyre::eyre::Report;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory store used by the test suite and local development. Holding the
/// vote lock across check and push keeps the (debate, voter) uniqueness
/// invariant atomic, same as the unique index in Postgres.
#[derive(Default)]
pub struct MemStore {
    debates: Mutex<HashMap<DebateId, InternalDebate>>,
    votes: Mutex<Vec<InternalVote>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_debate(&self, debate: InternalDebate) {
        self.debates.lock().await.insert(debate.id.clone(), debate);
    }
}

#[async_trait]
impl DebateReader for MemStore {
    async fn debate_by_id(&self, id: DebateId) -> Result<Option<InternalDebate>, Report> {
        Ok(self.debates.lock().await.get(&id).cloned())
    }
}

#[async_trait]
impl VoteStore for MemStore {
    async fn insert_vote(&self, vote: NewVote) -> Result<InternalVote, InsertVoteError> {
        let mut votes = self.votes.lock().await;
        let duplicate = votes
            .iter()
            .any(|v| v.debate_id == vote.debate_id && v.voter_id == vote.voter_id);
        if duplicate {
            return Err(InsertVoteError::Duplicate);
        }
        let inserted = InternalVote {
            id: VoteId::new(),
            debate_id: vote.debate_id,
            choice: vote.choice,
            voter_id: vote.voter_id,
            created_at: Utc::now(),
        };
        votes.push(inserted.clone());
        Ok(inserted)
    }

    async fn votes_by_debate(&self, debate_id: DebateId) -> Result<Vec<InternalVote>, Report> {
        let votes = self
            .votes
            .lock()
            .await
            .iter()
            .filter(|v| v.debate_id == debate_id)
            .cloned()
            .collect();
        Ok(votes)
    }
}
