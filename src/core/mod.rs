pub mod demo;
pub mod script;

pub use crate::domain::model::{Counter, Person, RunReport, ScriptRecord};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::Result;
