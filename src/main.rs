// src/main.rs

use env_logger::Env;
use log::warn;
use std::io;
use std::process;

use monster_group::config::MonsterConfig;
use monster_group::presentation::run_command;

fn main() {
    let (config, config_error) = match MonsterConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (MonsterConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("MONSTER_LOG", config.log_level.as_str())
        .write_style_or("MONSTER_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("all");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_command(command, &mut out, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
