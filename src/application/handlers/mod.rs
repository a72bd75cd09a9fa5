//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod intake;

pub use intake::{
    EndIntakeCommand, EndIntakeHandler, GetIntakeSessionHandler, GetIntakeSessionQuery,
    StartIntakeCommand, StartIntakeHandler, StartIntakeResult, SubmitTurnCommand,
    SubmitTurnHandler, SubmitTurnResult,
};
