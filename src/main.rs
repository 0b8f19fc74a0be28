use anyhow::{Context, Result};
use log::{debug, info};
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

mod commands;
mod config;
mod gateway;
mod output;
mod quiz;
mod session;

use crate::commands::Command;
use crate::config::Config;
use crate::gateway::http::HttpGateway;
use crate::output::terminal::{TerminalOutput, BANNER};
use crate::session::dispatch::Dispatcher;
use crate::session::{Session, SessionHandle};

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Config::load()?;
    let gateway = HttpGateway::new(config.endpoint(), config.request_timeout())?;
    info!("Using backend endpoint {}", gateway.get_endpoint());

    let session: SessionHandle<TerminalOutput> = Arc::new(Mutex::new(Session::new(
        config.question_count,
        TerminalOutput,
    )));
    let dispatcher = Dispatcher::new(gateway, session.clone());

    println!("{}\n", BANNER);
    session.lock().show();
    println!("Type `help` to list commands.\n");

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from standard input")?;
        if line.trim().is_empty() {
            prompt();
            continue;
        }

        let result = commands::parse(&line).and_then(|command| {
            if command == Command::Quit {
                return Ok(false);
            }
            commands::execute(command, &session, &dispatcher)?;
            Ok(true)
        });

        match result {
            Ok(false) => break,
            Ok(true) => (),
            Err(e) => {
                debug!("{:?}", e);
                println!("{:#}\n", e);
            }
        }
        prompt();
    }

    Ok(())
}
