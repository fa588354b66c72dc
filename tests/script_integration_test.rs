use anyhow::Result;
use counter_demo::{
    app_info, greet, increment_counter, say_hello, Counter, DemoContext, MemorySink, OutputSink,
    Person, ScriptRunner,
};

const EXPECTED_LINES: [&str; 5] = [
    "Hello, World!",
    "Running on MyJSApp",
    "Hi, my name is John Doe and I am 30 years old.",
    "apple",
    "http://example.com",
];

#[test]
fn test_end_to_end_script() -> Result<()> {
    let (report, sink) = ScriptRunner::new(MemorySink::new()).run()?;

    assert_eq!(sink.lines(), EXPECTED_LINES);
    assert_eq!(report.counter, 3);
    assert_eq!(report.lines, EXPECTED_LINES);
    Ok(())
}

#[test]
fn test_resumed_counter_skips_increments() -> Result<()> {
    let ctx = DemoContext::with_counter(MemorySink::new(), Counter::starting_at(5));
    let (report, sink) = ScriptRunner::from_context(ctx).run()?;

    assert_eq!(report.counter, 5);
    assert_eq!(sink.lines(), EXPECTED_LINES);
    Ok(())
}

#[test]
fn test_operations_share_one_context() -> Result<()> {
    let mut sink = MemorySink::new();
    let mut ctx = DemoContext::new(&mut sink);

    for expected in 1..=3 {
        assert_eq!(increment_counter(&mut ctx), expected);
    }
    let greeting = greet(&mut ctx, "Rustacean")?;
    app_info(&mut ctx)?;
    say_hello(&mut ctx, &Person::new("", 0))?;
    assert_eq!(ctx.counter(), 3);
    drop(ctx);

    assert_eq!(greeting, "Hello, Rustacean!");
    assert_eq!(
        sink.lines(),
        [
            "Hello, Rustacean!",
            "Running on MyJSApp",
            "Hi, my name is  and I am 0 years old.",
        ]
    );
    Ok(())
}

#[test]
fn test_report_serializes_record_field_names() -> Result<()> {
    let (report, _) = ScriptRunner::new(MemorySink::new()).run()?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["counter"], 3);
    assert_eq!(json["fruits"][0], "apple");
    assert_eq!(json["record"]["url"], "http://example.com");
    assert_eq!(json["record"]["timeout"], 5000);
    assert_eq!(json["record"]["isActive"], true);
    Ok(())
}

struct ClosedPipe;

impl OutputSink for ClosedPipe {
    fn emit(&mut self, _line: &str) -> counter_demo::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into())
    }
}

#[test]
fn test_sink_failure_propagates() {
    let err = ScriptRunner::new(ClosedPipe).run().err().unwrap();

    assert!(matches!(err, counter_demo::DemoError::IoError(_)));
    assert_eq!(err.exit_code(), 2);
}
