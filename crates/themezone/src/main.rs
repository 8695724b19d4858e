#![forbid(unsafe_code)]

//! # ThemeZone
//!
//! Terminal front-end and theme preference tool.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p themezone
//! cargo run -p themezone -- set colorful
//! ```

use anyhow::Context;
use theme_state::{FileStore, MemoryStore, Mode, ThemeAuthority};
use tracing::{error, info};

use themezone::app::App;
use themezone::catalog::CatalogState;
use themezone::cli::{Cli, Command, RenderArgs};
use themezone::config::Config;
use themezone::headless::{self_check, render_frame};
use themezone::logging::{self, LogTarget};
use themezone::marker::TerminalTitle;
use themezone::messages::Msg;
use themezone::program::Program;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli);

    let target = if cli.is_interactive() {
        LogTarget::File(config.log_path())
    } else {
        LogTarget::Stderr
    };
    // Logging is best effort: an unwritable log file must not block the UI.
    if let Err(err) = logging::init(&target, config.verbosity) {
        eprintln!("warning: {err}");
    }

    config.validate()?;

    if config.self_check {
        return run_self_check(&config);
    }

    match cli.command {
        Some(Command::Get) => run_get(&config),
        Some(Command::Set { mode }) => run_set(&config, &mode),
        Some(Command::Render(args)) => run_render(&config, &args),
        Some(Command::Diagnostics) => run_diagnostics(&config),
        None => run_interactive(&config),
    }
}

fn run_get(config: &Config) -> anyhow::Result<()> {
    let theme = ThemeAuthority::new(FileStore::in_dir(&config.state_dir));
    let state = theme.initialize();
    println!("{}", state.current);
    Ok(())
}

fn run_set(config: &Config, name: &str) -> anyhow::Result<()> {
    let theme = ThemeAuthority::new(FileStore::in_dir(&config.state_dir));
    let _ = theme.initialize();
    let persistence = theme.set_mode_named(name)?;
    if let Some(err) = persistence.error() {
        return Err(anyhow::anyhow!("theme set to {name} but not saved: {err}"));
    }
    println!("{}", theme.current());
    Ok(())
}

fn run_diagnostics(config: &Config) -> anyhow::Result<()> {
    println!("{}", config.to_diagnostic_string());

    let theme = ThemeAuthority::new(FileStore::in_dir(&config.state_dir));
    let state = theme.initialize();
    println!("Theme: {}", state.current);
    let counters = serde_json::to_string_pretty(&theme.diagnostics())
        .context("cannot serialize theme diagnostics")?;
    println!("Theme store: {counters}");
    Ok(())
}

fn run_render(config: &Config, args: &RenderArgs) -> anyhow::Result<()> {
    let theme = match &args.mode {
        Some(name) => {
            let mode: Mode = name.parse()?;
            ThemeAuthority::new(MemoryStore::with_value(mode.as_str()))
        }
        None => ThemeAuthority::new(FileStore::in_dir(&config.state_dir)),
    }
    .into_handle();
    let _ = theme.initialize();

    let catalog = CatalogState::load(&config.catalog_source());
    let frame = render_frame(
        theme,
        args.page.into(),
        catalog,
        args.width,
        args.height,
        config.use_color(),
    );
    println!("{frame}");
    Ok(())
}

fn run_self_check(config: &Config) -> anyhow::Result<()> {
    let catalog = CatalogState::load(&config.catalog_source());
    let frames = self_check(&catalog, config.use_color())?;
    println!("self-check ok: {frames} frames rendered");
    Ok(())
}

fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let theme = ThemeAuthority::new(FileStore::in_dir(&config.state_dir))
        .with_marker(TerminalTitle)
        .into_handle();

    let app = App::new(theme.clone(), config.catalog_source()).with_color(config.use_color());
    let program = Program::new(app).with_alt_screen(config.alt_screen);

    // Held for the whole session; dropping it unsubscribes.
    let sender = program.sender();
    let _subscription = theme.subscribe(move |state| {
        let _ = sender.send(Msg::ThemeChanged(*state));
    });

    info!(state_dir = %config.state_dir.display(), "Starting ThemeZone");
    let result = program.run().context("terminal session failed");
    if let Err(err) = &result {
        error!(error = %err, "Session ended with error");
    }
    result?;
    info!(theme = %theme.current(), "ThemeZone exited");
    Ok(())
}
