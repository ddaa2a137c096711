//! Core voting types and pure logic.
//!
//! Nothing in this module performs I/O: it holds the catalog descriptor,
//! the vote summary, the result envelope, and search-term extraction.

pub mod outcome;
pub mod resource;
pub mod search_term;
pub mod summary;

pub use outcome::OperationResult;
pub use resource::{
    NO_DATE, NO_DESCRIPTION, NO_URL, ResourceDescriptor, UNKNOWN_FORMAT, UNKNOWN_MODIFIED,
};
pub use search_term::{BALLOT_PREFIX, extract_search_term};
pub use summary::{NO_TITLE, VoteSummary};
