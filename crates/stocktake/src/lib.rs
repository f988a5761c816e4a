//! Stocktaking: per-location verification of physical counts.
//!
//! A [`StocktakingSession`] is an explicitly owned state machine. Every
//! location starts `Pending`; a worker verifies it with the counted quantity,
//! may reopen it for editing, and the whole session can be reset. Reports
//! join the verified entries back onto the record set.

pub mod report;
pub mod session;

pub use report::{Progress, StocktakeReportRow};
pub use session::{
    StocktakeCommand, StocktakeEvent, StocktakeId, StocktakingEntry, StocktakingSession,
    VerificationState,
};
