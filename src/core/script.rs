use crate::core::demo::{app_info, greet, increment_counter, say_hello, DemoContext};
use crate::core::{OutputSink, Person, Result, RunReport, ScriptRecord};
use crate::domain::model::{
    fruits, GREETED_NAME, INCREMENT_STEPS, INCREMENT_THRESHOLD, PERSON_AGE, PERSON_NAME,
};

/// Runs the demo script top to bottom against one sink.
pub struct ScriptRunner<S: OutputSink> {
    ctx: DemoContext<S>,
}

impl<S: OutputSink> ScriptRunner<S> {
    pub fn new(sink: S) -> Self {
        Self::from_context(DemoContext::new(sink))
    }

    pub fn from_context(ctx: DemoContext<S>) -> Self {
        Self { ctx }
    }

    pub fn run(mut self) -> Result<(RunReport, S)> {
        tracing::info!("Starting demo script");

        // Always true on a fresh context.
        if self.ctx.counter() < INCREMENT_THRESHOLD {
            for _ in 0..INCREMENT_STEPS {
                increment_counter(&mut self.ctx);
            }
        }
        tracing::debug!("Counter after increments: {}", self.ctx.counter());

        greet(&mut self.ctx, GREETED_NAME)?;
        app_info(&mut self.ctx)?;

        let john = Person::new(PERSON_NAME, PERSON_AGE);
        say_hello(&mut self.ctx, &john)?;

        let fruits = fruits();
        let record = ScriptRecord::default();
        self.ctx.emit(&fruits[0])?;
        self.ctx.emit(&record.url)?;

        let report = RunReport {
            counter: self.ctx.counter(),
            lines: self.ctx.emitted().to_vec(),
            fruits,
            record,
        };
        tracing::info!(
            "Demo script finished: {} lines, counter = {}",
            report.lines.len(),
            report.counter
        );
        tracing::debug!("Run report: {:?}", report);

        Ok((report, self.ctx.into_sink()))
    }
}
