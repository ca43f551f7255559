//! Ranking: order every other item by similarity to the query.

pub mod top_n;

pub use top_n::rank;
