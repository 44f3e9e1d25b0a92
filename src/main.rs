#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

use crate::{config::RuntimeConfiguration, console::LineConsole, session::Session};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod console;
mod data;
mod error;
mod menu;
mod session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    //a missing .env is fine, everything has a default
    let dotenv_outcome = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    debug!("`tracing` online");
    match dotenv_outcome {
        Ok(path) => debug!(?path, "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(?e, "Unable to load .env"),
    }

    let config = match RuntimeConfiguration::new() {
        Ok(config) => config,
        Err(e) => {
            error!(?e, "Unable to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(LineConsole::stdio(), config);
    match session.run().await {
        Ok(Some(student)) => {
            info!(
                id = student.id(),
                name = student.name(),
                courses = student.enrolled_courses().len(),
                balance = %student.balance(),
                "Session finished"
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("Session finished without a student");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(?e, "Session failed");
            ExitCode::FAILURE
        }
    }
}
