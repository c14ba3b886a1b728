use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use crmdash::app::App;
use crmdash::config::{self, Config};
use crmdash::modules::dashboard::DashboardData;
use crmdash::nav::state::dangling_overrides;
use crmdash::nav::{ExpandOverride, NavForest};
use crmdash::theme::ThemeVariant;
use crmdash::{input, ui};

#[derive(Debug, Parser)]
#[command(
    name = "crmdash",
    version,
    about = "crmdash: a terminal CRM admin dashboard"
)]
struct Args {
    /// Route to open at startup (e.g. /crm, /analytics)
    #[arg(long)]
    path: Option<String>,

    /// Config file (default: ~/.config/crmdash/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeVariant>,

    /// Log file (default: ~/.local/share/crmdash/crmdash.log)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone().or_else(config::log_path).as_deref());

    let mut config = load_config(args.config.clone().or_else(config::config_path).as_deref());
    if let Some(path) = args.path {
        config.initial_path = path;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let forest = NavForest::default_forest();
    let overrides = config.overrides();
    check_navigation(&forest, &overrides);
    tracing::info!(path = %config.initial_path, theme = config.theme.name(), "starting crmdash");

    let mut app = App::with_forest(&config, forest, &overrides, DashboardData::sample());
    app.set_status("Press ? for help", crmdash::app::StatusLevel::Info);
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(10));

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}

/// Logs go to a file since stdout belongs to the TUI. No file, no logs.
fn init_logging(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crmdash=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match config::load(path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
            Config::default()
        }
    }
}

/// Authoring mistakes in the nav data are reported, never fatal.
fn check_navigation(forest: &NavForest, overrides: &[ExpandOverride]) {
    for key in forest.duplicate_keys() {
        tracing::warn!(key = %key, "duplicate navigation key");
    }
    for rule in dangling_overrides(forest, overrides) {
        tracing::warn!(
            prefix = %rule.prefix,
            key = %rule.key,
            "expand override names no parent node"
        );
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if let Some(title) = app.take_title_request() {
            set_title(&title);
        }
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    if let Some(size) = terminal_rect() {
                        input::handle_mouse(&mut app, mouse, size);
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

/// Best effort. Terminals without title support are left alone.
fn set_title(title: &str) {
    if let Err(err) = execute!(io::stdout(), SetTitle(title)) {
        tracing::warn!(error = %err, "failed to set terminal title");
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
