use ibex::app::{load_detail, App, DetailLoad, HomeFocus, ListRequest, NavLink, PageLoad};
use ibex::config::{Cli, Command, Config};
use ibex::logging::init_logging;
use ibex::search::{self, SearchRequest, SearchResult};
use ibex::ui;

use anyhow::Result;
use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tui_input::backend::crossterm::EventHandler;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?;

    match &cli.command {
        Some(Command::SetIndexer { url }) => {
            config.set_indexer(url.clone())?;
            println!("Indexer set to {url}");
            return Ok(());
        }
        Some(Command::SetChain { chain_id }) => {
            config.set_chain(chain_id.clone())?;
            println!("Chain set to {chain_id}");
            return Ok(());
        }
        None => {}
    }

    config.apply_overrides(&cli);
    info!(chain = %config.chain_id, indexer = ?config.indexer_url, "starting");

    run_tui(config).await?;

    Ok(())
}

/// Messages from async tasks back to the main loop
enum AsyncMessage {
    Search {
        generation: u64,
        results: Vec<SearchResult>,
    },
    Page(PageLoad),
    Detail {
        seq: u64,
        load: DetailLoad,
    },
}

async fn run_tui(config: Config) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(32);

    let result = run_event_loop(&mut terminal, &mut app, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Fire a due debounce
        if let Some(request) = app.search.poll(Instant::now()) {
            spawn_search(app, request, tx.clone());
        }

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AsyncMessage::Search {
                    generation,
                    results,
                } => {
                    app.search.apply(generation, results);
                }
                AsyncMessage::Page(load) => {
                    app.apply_page(load);
                }
                AsyncMessage::Detail { seq, load } => {
                    app.apply_detail(seq, load);
                }
            }
        }

        // Poll for input events
        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.should_quit = true;
                } else if app.is_on_home() {
                    handle_home_key(app, key.code, &ev, &tx);
                } else {
                    handle_screen_key(app, key.code, &tx);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_home_key(app: &mut App, code: KeyCode, ev: &Event, tx: &mpsc::Sender<AsyncMessage>) {
    if app.needs_indexer_setup() {
        // Indexer setup mode
        match code {
            KeyCode::Enter => {
                if let Err(e) = app.submit_indexer() {
                    app.status = Some(e);
                }
            }
            KeyCode::Esc => app.should_quit = true,
            _ => {
                app.indexer_input.handle_event(ev);
            }
        }
        return;
    }

    if code == KeyCode::Tab {
        app.focus_next();
        return;
    }

    match app.home_focus {
        HomeFocus::Sections => match code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.select_section_prev(),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.select_section_next(),
            KeyCode::Enter => {
                let request = app.open_section();
                spawn_page(app, request, tx.clone());
            }
            KeyCode::Esc => app.home_focus = HomeFocus::Search,
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
        HomeFocus::Chain => match code {
            KeyCode::Enter => {
                if let Some(request) = app.submit_chain() {
                    spawn_page(app, request, tx.clone());
                }
            }
            KeyCode::Esc => app.home_focus = HomeFocus::Search,
            _ => {
                app.chain_input.handle_event(ev);
            }
        },
        HomeFocus::Search => match code {
            KeyCode::Enter => {
                if let Some(link) = app.commit_search() {
                    open_link(app, link, tx.clone());
                }
            }
            KeyCode::Up => {
                if app.search.is_open() {
                    app.search.select_prev();
                } else {
                    app.select_history_prev();
                }
            }
            KeyCode::Down => {
                if app.search.is_open() {
                    app.search.select_next();
                } else {
                    app.select_history_next();
                }
            }
            KeyCode::Delete if app.selected_history_index.is_some() => {
                app.delete_selected_history();
            }
            KeyCode::Esc => {
                // First Esc closes the panel, the next one quits
                if app.search.is_open() {
                    app.search.close();
                } else if app.selected_history_index.is_some() {
                    app.clear_history_selection();
                } else {
                    app.should_quit = true;
                }
            }
            _ => {
                app.clear_history_selection();
                let changed = app.search_input.handle_event(ev);
                if changed.is_some_and(|c| c.value) {
                    app.on_search_input(Instant::now());
                }
            }
        },
    }
}

fn handle_screen_key(app: &mut App, code: KeyCode, tx: &mpsc::Sender<AsyncMessage>) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Esc => {
            if let Some(request) = app.go_back() {
                spawn_page(app, request, tx.clone());
            }
        }
        KeyCode::Char('h') => app.go_home(),
        _ if app.is_loading() => {}
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Right | KeyCode::Char('n') => {
            if let Some(request) = app.next_page() {
                spawn_page(app, request, tx.clone());
            }
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if let Some(request) = app.prev_page() {
                spawn_page(app, request, tx.clone());
            }
        }
        KeyCode::Enter => {
            if let Some(link) = app.get_selected_link() {
                open_link(app, link, tx.clone());
            }
        }
        _ => {}
    }
}

fn spawn_search(app: &App, request: SearchRequest, tx: mpsc::Sender<AsyncMessage>) {
    let Some(client) = app.client.clone() else {
        return;
    };
    let chain_id = app.chain_id().to_string();

    tokio::spawn(async move {
        let results = search::lookup(&client, &chain_id, &request.query).await;
        let _ = tx
            .send(AsyncMessage::Search {
                generation: request.generation,
                results,
            })
            .await;
    });
}

fn spawn_page(app: &App, request: ListRequest, tx: mpsc::Sender<AsyncMessage>) {
    let Some(client) = app.client.clone() else {
        warn!("no indexer configured, page request dropped");
        return;
    };

    tokio::spawn(async move {
        let load = request.run(&client).await;
        let _ = tx.send(AsyncMessage::Page(load)).await;
    });
}

fn open_link(app: &mut App, link: NavLink, tx: mpsc::Sender<AsyncMessage>) {
    let Some(client) = app.client.clone() else {
        app.set_error("No indexer configured. Use 'ibex set-indexer <url>' first.".into());
        return;
    };
    let chain_id = app.chain_id().to_string();
    let seq = app.begin_detail(&link);

    tokio::spawn(async move {
        let load = load_detail(&client, &chain_id, link).await;
        let _ = tx.send(AsyncMessage::Detail { seq, load }).await;
    });
}
