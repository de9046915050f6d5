//! # Backlog Search Agent
//!
//! Action-group handler for a conversational agent. Each invocation carries an
//! API path and a list of named parameters; the dispatcher routes it to the
//! issue or wiki search and wraps the result in the envelope the agent
//! framework expects.

mod dispatcher;
mod envelope;
mod error;

pub use dispatcher::{Dispatcher, Route};
pub use envelope::{ActionRequest, ActionResponse, ActionResult, AgentInfo, JsonBody, Parameter, ResponseBody};
pub use error::DispatchError;
