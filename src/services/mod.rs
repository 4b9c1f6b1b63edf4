pub mod verdict;
pub mod vote;
