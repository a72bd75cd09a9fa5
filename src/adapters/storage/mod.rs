//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Keeps live sessions in process memory
//! - **SessionSweeper** - Periodically evicts expired sessions from a store
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySessionStore;
//!
//! let store = Arc::new(InMemorySessionStore::new());
//! ```

mod in_memory_session_store;
mod session_sweeper;

pub use in_memory_session_store::InMemorySessionStore;
pub use session_sweeper::SessionSweeper;
