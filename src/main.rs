use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_referee::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_referee::session::config::SessionConfig;
use chess_referee::session::session::Session;

#[derive(Debug, Parser)]
#[command(name = "chess_referee", version, about = "Chess rules referee over stdio")]
struct Opt {
    /// Starting position in FEN
    #[arg(long, env = "CHESS_REFEREE_POSITION", default_value = STARTING_POSITION_FEN)]
    position: String,
    /// Log filter used when RUST_LOG is unset (for example "debug")
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&opt.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig {
        position: opt.position,
    };
    let mut session = Session::new(&config)?;

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        stdout.write_all(&session.handle_line(&line))?;
        stdout.flush()?;
    }

    info!("input closed");
    Ok(())
}
