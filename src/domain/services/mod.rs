mod chat;
mod controller;
pub mod markup;
mod triage;

pub use chat::*;
pub use controller::*;
pub use triage::*;
