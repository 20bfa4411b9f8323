//! Sample launcher for a shared scene session.
//!
//! Picks one of the bundled configuration profiles from the first CLI
//! argument, starts the engine with it, and stops again. Everything
//! interesting happens in the engine; this binary is deliberately thin.

use std::path::PathBuf;
use std::process::ExitCode;

use arbor::Engine;

const PROFILES: [&str; 5] = ["host", "guest", "local", "local_cave", "host_cave"];

/// Resolves a participant profile to its bundled config directory.
/// `None` for anything outside the closed profile set.
fn config_dir_for(participant: &str) -> Option<PathBuf> {
    if !PROFILES.contains(&participant) {
        return None;
    }
    Some(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("configs")
            .join(participant),
    )
}

fn print_usage() {
    println!("usage: host | guest | local | local_cave | host_cave");
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(participant) = std::env::args().nth(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };
    let Some(config_dir) = config_dir_for(&participant) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    let mut engine = match Engine::start(&config_dir, true) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("engine failed to start: {err}");
            return ExitCode::FAILURE;
        }
    };

    let bind = engine.bind_manager();
    log::info!("running from {}", bind.folder_path().display());

    engine.stop();
    ExitCode::SUCCESS
}
