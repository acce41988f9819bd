//! Plain services handed to handlers through [`AppState`](crate::state::AppState).

pub mod greeter;
