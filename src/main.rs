use clap::Parser;
use small_patterns::utils::{logger, validation::Validate};
use small_patterns::{demos, RunnerConfig, StdoutConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunnerConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-patterns demos");
    if config.verbose {
        tracing::debug!("Runner config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let console = StdoutConsole::new();
    let selected = config.selected_demos();

    for name in &selected {
        tracing::info!("🎬 Running {} demo", name);
        if let Err(e) = demos::run_demo(name, console) {
            tracing::error!("❌ {} demo failed: {}", name, e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    println!("✅ {} demo(s) completed successfully!", selected.len());

    Ok(())
}
