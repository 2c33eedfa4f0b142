//! Console to-do list
//!
//! A numbered menu for keeping work tasks (with a due date) and personal
//! tasks in memory for the length of a session.

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use std::io;

mod app;

use app::config::Settings;
use app::ui::App;

/// Interactive to-do list for work and personal tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Never clear the terminal between actions
    #[arg(long)]
    no_clear: bool,

    /// Print without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Log debug events to stderr (same as setting TODO_CONSOLE_DEBUG)
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug || std::env::var("TODO_CONSOLE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_console=debug")
            .with_writer(io::stderr)
            .init();
    }

    let stdout = io::stdout();
    let settings = Settings::for_terminal(args.no_clear, args.no_color, stdout.is_tty());
    let mut app = App::new(settings);

    app::ui::run_app(io::stdin().lock(), stdout.lock(), &mut app)?;

    Ok(())
}
