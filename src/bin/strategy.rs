use small_patterns::demos::strategy;
use small_patterns::utils::logger;
use small_patterns::StdoutConsole;

fn main() {
    logger::init_cli_logger(false);

    if let Err(e) = strategy::run(StdoutConsole::new()) {
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
