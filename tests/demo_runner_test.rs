use anyhow::Result;
use clap::Parser;
use small_patterns::utils::validation::Validate;
use small_patterns::{run_demo, DemoError, MemoryConsole, RunnerConfig, DEMO_NAMES};

#[test]
fn test_decorator_demo_transcript() -> Result<()> {
    let console = MemoryConsole::new();

    run_demo("decorator", console.clone())?;

    assert_eq!(
        console.lines(),
        vec![
            "Before execution",
            "Executing base service logic",
            "After execution",
        ]
    );
    Ok(())
}

#[test]
fn test_factory_demo_transcript() -> Result<()> {
    let console = MemoryConsole::new();

    run_demo("factory", console.clone())?;

    assert_eq!(console.lines(), vec!["SMS sent: Hello from the factory"]);
    Ok(())
}

#[test]
fn test_repository_demo_transcript() -> Result<()> {
    let console = MemoryConsole::new();

    run_demo("repository", console.clone())?;

    assert_eq!(
        console.lines(),
        vec![
            r#"{"id":1,"name":"Milton"}"#.to_string(),
            r#"[{"id":1,"name":"Milton"},{"id":2,"name":"Matias"}]"#.to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_strategy_demo_transcript() -> Result<()> {
    let console = MemoryConsole::new();

    run_demo("strategy", console.clone())?;

    assert_eq!(console.lines(), vec!["Paid 100 with PayPal"]);
    Ok(())
}

#[test]
fn test_default_run_executes_all_demos_in_order() -> Result<()> {
    let config = RunnerConfig::try_parse_from(["small-patterns"])?;
    config.validate()?;

    let console = MemoryConsole::new();
    for name in config.selected_demos() {
        run_demo(name, console.clone())?;
    }

    let lines = console.lines();
    assert_eq!(lines.len(), 7);

    // 依序：decorator 三行、factory 一行、repository 兩行、strategy 一行
    assert_eq!(lines[0], "Before execution");
    assert_eq!(lines[3], "SMS sent: Hello from the factory");
    assert_eq!(lines[4], r#"{"id":1,"name":"Milton"}"#);
    assert_eq!(lines[6], "Paid 100 with PayPal");
    Ok(())
}

#[test]
fn test_only_flag_limits_and_orders_the_run() -> Result<()> {
    let config =
        RunnerConfig::try_parse_from(["small-patterns", "--only", "strategy,decorator"])?;
    config.validate()?;

    let console = MemoryConsole::new();
    for name in config.selected_demos() {
        run_demo(name, console.clone())?;
    }

    let lines = console.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Paid 100 with PayPal");
    assert_eq!(lines[1], "Before execution");
    Ok(())
}

#[test]
fn test_unknown_demo_name_fails_validation_before_running() -> Result<()> {
    let config = RunnerConfig::try_parse_from(["small-patterns", "--only", "singleton"])?;

    let error = config.validate().unwrap_err();
    assert_eq!(error.exit_code(), 2);
    assert!(error.to_string().contains("singleton"));
    Ok(())
}

#[test]
fn test_run_demo_rejects_name_outside_closed_set() {
    let console = MemoryConsole::new();

    let result = run_demo("builder", console.clone());

    assert!(matches!(
        result,
        Err(DemoError::InvalidConfigValueError { .. })
    ));
    assert!(console.lines().is_empty());
}

#[test]
fn test_demo_name_set_is_stable() {
    assert_eq!(
        DEMO_NAMES,
        &["decorator", "factory", "repository", "strategy"]
    );
}
