pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{MemorySink, StdoutSink};
pub use crate::config::RuntimeSettings;
pub use crate::core::{
    demo::{app_info, greet, increment_counter, say_hello, DemoContext},
    script::ScriptRunner,
};
pub use crate::domain::model::{Counter, Person, RunReport, ScriptRecord};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::{DemoError, Result};
