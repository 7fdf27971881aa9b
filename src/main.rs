use parseropt::config::Config;
use parseropt::logging::{self, LogFormat};
use parseropt::status::ExitStatus;
use parseropt::{cmdline, demo, init_process_table, lookup};

/// Entry point - loads config, sets up logging, then runs the demo
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            let config = Config::default();
            eprintln!(
                "Warning: Failed to load config {}: {}",
                config.config_file().display(),
                e
            );
            config
        }
    };

    let raw_args = cmdline::process_args();
    let no_args = raw_args.len() <= 1;
    let args = config.merge_into(raw_args);

    // Config defaults reach the functional lookups too
    init_process_table(&args);

    let log_format = lookup(String::new(), &["--log-format"]);
    let debug = lookup(false, &["--debug"]);
    logging::init(LogFormat::from_name(&log_format), debug);

    let mut stdout = std::io::stdout().lock();
    match demo::run(&args, no_args, &mut stdout) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("parseropt: {}", e);
            ExitStatus::Error
        }
    }
}
