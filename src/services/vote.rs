use crate::db::debate::DebateId;
use crate::db::vote::NewVote;
use crate::db::{DebateReader, InsertVoteError, VoteStore};
use crate::error::ApiError;
use crate::identity::VoterIdentity;
use tracing::{debug, info};

/// Casts a spectator vote on a finalized debate.
///
/// There is no read-before-write duplicate check; the store enforces the one
/// vote per (debate, voter) invariant and its violation is the conflict
/// signal, so concurrent submissions cannot both slip through.
pub async fn submit_vote(
    debates: &dyn DebateReader,
    votes: &dyn VoteStore,
    debate_id: DebateId,
    choice: String,
    voter: VoterIdentity,
) -> Result<(), ApiError> {
    debug!(
        "Handling vote submission for debate {debate_id}",
        debate_id = debate_id.as_string()
    );
    let debate = debates
        .debate_by_id(debate_id.clone())
        .await
        .map_err(|report| ApiError::internal("Failed to look up debate", report))?
        .ok_or(ApiError::DebateNotFound)?;

    if !debate.is_finalized() {
        return Err(ApiError::DebateNotFinalized);
    }

    let vote = votes
        .insert_vote(NewVote {
            debate_id,
            choice,
            voter_id: voter.into_string(),
        })
        .await
        .map_err(|err| match err {
            InsertVoteError::Duplicate => ApiError::DuplicateVote,
            InsertVoteError::Storage(report) => ApiError::internal("Failed to submit vote", report),
        })?;

    info!("Vote {id} recorded", id = vote.id.as_string());
    Ok(())
}
