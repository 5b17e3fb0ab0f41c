use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keyrace::{
    app::App,
    config::{ConfigStore, FileConfigStore},
    content::{Category, ContentBank},
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, stdin},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

/// typing speed trainer: quotes, paragraphs and code against a sixty second clock
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the text shown as fast and as accurately as you can. The clock starts on your first keystroke and the session locks after sixty seconds. Tab restarts, left/right switch between quotes, paragraphs and code."
)]
pub struct Cli {
    /// category of text to start with (defaults to the config file, then quotes)
    #[clap(short = 'm', long, value_enum)]
    mode: Option<Category>,

    /// seed for the text shuffle, for a reproducible order
    #[clap(long)]
    seed: Option<u64>,

    /// write logs to this file (the terminal is busy drawing the session)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// log at debug level (only with --log-file)
    #[clap(short = 'v', long, requires = "log_file")]
    verbose: bool,

    /// config file to read instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// write the effective config to the config file and exit
    #[clap(long)]
    write_config: bool,
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // try_init so a second subscriber (e.g. in tests) is not fatal
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let mut config = store.load();
    if let Some(mode) = cli.mode {
        config.default_mode = mode;
    }
    tracing::debug!(?config, path = %store.path().display(), "loaded configuration");

    if cli.write_config {
        store.save(&config)?;
        println!("{}", store.path().display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // empty or unreadable embedded texts stop us here, before the terminal is touched
    let bank = match cli.seed {
        Some(seed) => ContentBank::seeded(seed)?,
        None => ContentBank::new()?,
    };
    let mut app = App::new(bank, config.default_mode);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(%err, "session loop failed");
    }
    res
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(CrosstermEventSource::new(), FixedTicker::seconds());

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    while !app.should_quit {
        match runner.step() {
            AppEvent::Key(key) => app.on_key(key),
            AppEvent::Tick(token) => app.on_tick(token),
            AppEvent::Resize => {}
            AppEvent::Idle => continue,
            AppEvent::Closed => break,
        }

        // arm on the first keystroke, disarm on restart or expiry
        runner.sync(app.tick_token());
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
