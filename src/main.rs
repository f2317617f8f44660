#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod command;
mod config;
mod error;
mod http_handler;
mod keychain;
mod logger;
mod session;
mod views;

use crate::command::{Command, Completion, USAGE};
use crate::config::ConsoleConfig;
use crate::keychain::Keychain;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(command) => command,
        Err(e) => {
            error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = ConsoleConfig::from_env();
    log!("Using fleet service at {}", config.api_url());
    let keychain = match Keychain::new(&config) {
        Ok(keychain) => keychain,
        Err(e) => {
            error!("Could not set up the HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match command::execute(&keychain, command).await {
        Ok(Completion::Done) => ExitCode::SUCCESS,
        Ok(Completion::RedirectedToLogin) => ExitCode::from(3),
        Err(e) => {
            error!("{e}: {}", e.detail());
            ExitCode::FAILURE
        }
    }
}
