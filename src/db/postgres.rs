use super::debate::{DebateId, InternalDebate};
use super::vote::{InternalVote, NewVote, VoteId};
use super::{DebateReader, InsertVoteError, VoteStore};
use async_trait::async_trait;
use color_eyre::eyre::Report;
use sqlx::PgPool;
use tracing::debug;

/// Postgres-backed store. The compound unique index on
/// `votes (debate_id, voter_id)` is what turns a duplicate submission into
/// `InsertVoteError::Duplicate`.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DebateReader for PgStore {
    async fn debate_by_id(&self, id: DebateId) -> Result<Option<InternalDebate>, Report> {
        debug!("Retrieving debate by id {id}", id = id.as_string());
        let debate =
            sqlx::query_as::<_, InternalDebate>("SELECT id, topic, outcome FROM debates WHERE id = $1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await?;

        Ok(debate)
    }
}

#[async_trait]
impl VoteStore for PgStore {
    async fn insert_vote(&self, vote: NewVote) -> Result<InternalVote, InsertVoteError> {
        let id = VoteId::new();
        debug!(
            "Inserting vote {id} for debate {debate_id}",
            id = id.as_string(),
            debate_id = vote.debate_id.as_string()
        );
        let inserted = sqlx::query_as::<_, InternalVote>(
            r#"
            INSERT INTO votes (id, debate_id, choice, voter_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, debate_id, choice, voter_id, created_at
            "#,
        )
        .bind(id.0)
        .bind(vote.debate_id.0)
        .bind(&vote.choice)
        .bind(&vote.voter_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                InsertVoteError::Duplicate
            }
            other => InsertVoteError::Storage(other.into()),
        })?;

        Ok(inserted)
    }

    async fn votes_by_debate(&self, debate_id: DebateId) -> Result<Vec<InternalVote>, Report> {
        debug!(
            "Retrieving votes for debate {debate_id}",
            debate_id = debate_id.as_string()
        );
        let votes = sqlx::query_as::<_, InternalVote>(
            "SELECT id, debate_id, choice, voter_id, created_at FROM votes WHERE debate_id = $1",
        )
        .bind(debate_id.0)
        .fetch_all(&self.pool)
        .await?;

        Ok(votes)
    }
}
