//! Intake handlers.
//!
//! Command and query handlers for candidate intake sessions.

mod end_intake;
mod get_intake_session;
mod start_intake;
mod submit_turn;

#[cfg(test)]
pub(crate) mod test_support;

pub use end_intake::{EndIntakeCommand, EndIntakeHandler};
pub use get_intake_session::{GetIntakeSessionHandler, GetIntakeSessionQuery};
pub use start_intake::{StartIntakeCommand, StartIntakeHandler, StartIntakeResult};
pub use submit_turn::{SubmitTurnCommand, SubmitTurnHandler, SubmitTurnResult};
