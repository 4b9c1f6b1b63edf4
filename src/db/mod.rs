pub mod debate;
pub mod memory;
pub mod postgres;
pub mod vote;

use async_trait::async_trait;
use color_eyre::eyre::Report;
use debate::{DebateId, InternalDebate};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use vote::{InternalVote, NewVote};

/// Read access to debates. The debate lifecycle is owned elsewhere; this
/// service only ever looks one up.
#[async_trait]
pub trait DebateReader: Send + Sync {
    async fn debate_by_id(&self, id: DebateId) -> Result<Option<InternalDebate>, Report>;
}

#[derive(Debug)]
pub enum InsertVoteError {
    /// The store already holds a vote for this (debate, voter) pair. The
    /// uniqueness check lives in the store so concurrent submissions cannot
    /// race past it.
    Duplicate,
    Storage(Report),
}

#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn insert_vote(&self, vote: NewVote) -> Result<InternalVote, InsertVoteError>;
    async fn votes_by_debate(&self, debate_id: DebateId) -> Result<Vec<InternalVote>, Report>;
}

pub async fn new_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    new_pool_with(database_url.parse()?).await
}

pub async fn new_pool_with(connect_options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await
}
