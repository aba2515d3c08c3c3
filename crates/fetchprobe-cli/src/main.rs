use fetchprobe_core::logging;

mod cli;

fn main() {
    // Logging goes to the XDG state dir; fall back to stderr if unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and run. Only setup failures reach here; per-attempt
    // transfer failures are reported on stdout and still exit 0.
    if let Err(err) = cli::run_from_args() {
        eprintln!("fetchprobe error: {:#}", err);
        std::process::exit(1);
    }
}
