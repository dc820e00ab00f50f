//! CLI command implementations

use std::sync::Arc;

use anyhow::Context;
use clap::Subcommand;
use marquee_core::{MarqueeConfig, SessionConfig};
use marquee_search::{
    Localizer, MessageCatalog, SearchQuery, SearchService, SessionHandle, ViewModel, ViewState,
    spawn_search_session,
};
use marquee_web::AppState;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search once and print one page of results
    Search {
        /// Movie title to search for
        term: String,
        /// Page of results to show
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Type search terms line by line; results follow the debounce delay
    ///
    /// Lines are treated as the new contents of the search field. `:n` and
    /// `:p` change page, `:q` quits and an empty line clears the search.
    Interactive,
    /// Start the web server
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// - Invalid configuration or unreadable locale file
/// - A failed one-shot search
/// - Web server bind or serve failure
pub async fn handle_command(command: Commands, mut config: MarqueeConfig) -> anyhow::Result<()> {
    if let Commands::Server { host, port } = &command {
        if let Some(host) = host {
            config.web.host = host.clone();
        }
        if let Some(port) = port {
            config.web.port = *port;
        }
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let localizer = load_localizer(&config)?;
    let service = Arc::new(SearchService::from_config(&config.search)?);

    match command {
        Commands::Search { term, page } => {
            search_once(&service, localizer.as_ref(), &config.session, term, page).await
        }
        Commands::Interactive => run_interactive(service, localizer, &config.session).await,
        Commands::Server { .. } => {
            let state = AppState::new(service, localizer, config.session.clone());
            marquee_web::run_server(&config.web, state).await?;
            Ok(())
        }
    }
}

fn load_localizer(config: &MarqueeConfig) -> anyhow::Result<Arc<dyn Localizer>> {
    let catalog = match &config.locale_file {
        Some(path) => MessageCatalog::from_file(path)
            .with_context(|| format!("failed to load locale file {}", path.display()))?,
        None => MessageCatalog::english(),
    };
    Ok(Arc::new(catalog))
}

/// Runs a single search and prints the resulting view.
///
/// # Errors
/// - The search failed; the localized message is returned as the error
async fn search_once(
    service: &SearchService,
    localizer: &dyn Localizer,
    session: &SessionConfig,
    term: String,
    page: u32,
) -> anyhow::Result<()> {
    let query = SearchQuery::new(term, page);
    let outcome = service.search(&query).await;
    let state = ViewState::settle(query, outcome, localizer);

    if let ViewState::Error { message, .. } = &state {
        anyhow::bail!("{message}");
    }

    print!(
        "{}",
        ViewModel::build(&state, localizer, session.placeholder_tiles).render_text()
    );
    Ok(())
}

/// Feeds stdin lines into a search session, printing every state change.
async fn run_interactive(
    service: Arc<SearchService>,
    localizer: Arc<dyn Localizer>,
    session: &SessionConfig,
) -> anyhow::Result<()> {
    let handle = spawn_search_session(service, localizer.clone(), session);
    let renderer = spawn_renderer(&handle, localizer, session.placeholder_tiles);

    println!("Type to search. :n next page, :p previous page, :q quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":q" => break,
            ":n" => handle.next_page().await?,
            ":p" => handle.prev_page().await?,
            _ => handle.input(line).await?,
        }
    }

    handle.shutdown().await?;
    renderer.abort();
    Ok(())
}

fn spawn_renderer(
    handle: &SessionHandle,
    localizer: Arc<dyn Localizer>,
    placeholder_tiles: usize,
) -> JoinHandle<()> {
    let mut states = handle.subscribe();

    tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            let view = ViewModel::build(&state, localizer.as_ref(), placeholder_tiles);

            match state.query() {
                Some(query) => println!("-- {query} [{}]", state.name()),
                None => println!("-- [{}]", state.name()),
            }
            print!("{}", view.render_text());
        }
    })
}
