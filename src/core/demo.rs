//! Demo operations. Every operation that touches the counter or prints a line
//! takes the [`DemoContext`] that owns both.

use crate::core::{Counter, OutputSink, Person, Result};
use crate::domain::model::APP_NAME;

pub struct DemoContext<S: OutputSink> {
    counter: Counter,
    sink: S,
    emitted: Vec<String>,
}

impl<S: OutputSink> DemoContext<S> {
    pub fn new(sink: S) -> Self {
        Self::with_counter(sink, Counter::new())
    }

    pub fn with_counter(sink: S, counter: Counter) -> Self {
        Self {
            counter,
            sink,
            emitted: Vec::new(),
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter.value()
    }

    /// Lines written through this context, in order.
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn emit(&mut self, line: &str) -> Result<()> {
        tracing::debug!("emit: {}", line);
        self.sink.emit(line)?;
        self.emitted.push(line.to_string());
        Ok(())
    }
}

/// Builds `Hello, {name}!`, prints it, and hands it back. Any name is accepted.
pub fn greet<S: OutputSink>(ctx: &mut DemoContext<S>, name: &str) -> Result<String> {
    let greeting = format!("Hello, {}!", name);
    ctx.emit(&greeting)?;
    Ok(greeting)
}

pub fn increment_counter<S: OutputSink>(ctx: &mut DemoContext<S>) -> u64 {
    ctx.counter.increment()
}

pub fn say_hello<S: OutputSink>(ctx: &mut DemoContext<S>, person: &Person) -> Result<()> {
    ctx.emit(&format!(
        "Hi, my name is {} and I am {} years old.",
        person.name, person.age
    ))
}

pub fn app_info<S: OutputSink>(ctx: &mut DemoContext<S>) -> Result<()> {
    ctx.emit(&format!("Running on {}", APP_NAME))
}
