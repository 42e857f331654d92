#![forbid(unsafe_code)]

//! # Demo Console
//!
//! Admin console for a demo exam catalog, built on the trellis data
//! grid: paginated listing, per-row expansion into plan/material detail
//! tables, and delete with immediate refresh.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p demo_console
//! ```

mod app;
mod cli;
mod dataset;
mod store;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, KeyEventKind};
use crossterm::{cursor, event, execute, queue, style, terminal};
use tracing_subscriber::EnvFilter;
use trellis::event::{KeyMsg, Msg};

use app::App;
use cli::Cli;
use store::Store;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = Store::seeded(cli.seed, cli.records);
    let app = App::new(store, cli.page_size, cli.plain);

    if cli.headless {
        println!("{}", app.view());
        return Ok(());
    }

    run_tui(app)
}

/// Runs the interactive loop inside the alternate screen, restoring the
/// terminal on the way out even when the loop errors.
fn run_tui(mut app: App) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut app, &mut out);

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(app: &mut App, out: &mut impl Write) -> Result<()> {
    loop {
        draw(app, out)?;

        if let Event::Key(ev) = event::read()? {
            if ev.kind == KeyEventKind::Release {
                continue;
            }
            let key = KeyMsg::from(ev);
            match key.to_string().as_str() {
                "q" | "esc" | "ctrl+c" => return Ok(()),
                _ => app.update(&Msg::from(key)),
            }
        }
    }
}

fn draw(app: &App, out: &mut impl Write) -> Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )?;
    for line in app.view().lines() {
        queue!(out, style::Print(line), style::Print("\r\n"))?;
    }
    out.flush()?;
    Ok(())
}
