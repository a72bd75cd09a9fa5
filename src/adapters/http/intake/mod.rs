//! HTTP adapter for intake endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, SessionResponse, SubmitTurnRequest, SubmitTurnResponse, TurnResponse,
};
pub use handlers::IntakeHandlers;
pub use routes::intake_routes;
