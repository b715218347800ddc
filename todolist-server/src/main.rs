//! To-do list GraphQL server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use todolist::Store;
use todolist::config::{ServerConfig, load_config};
use todolist_server::schema::build_schema;
use todolist_server::state::AppState;
use tracing::info;

#[derive(Parser)]
#[command(name = "todolist-server")]
#[command(about = "GraphQL API for managing to-do lists held in memory")]
struct Args {
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, default_value = "todolist.toml")]
    config: PathBuf,

    /// Address to bind the server to (overrides config)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Directory containing the front end's static files (overrides config)
    #[arg(long)]
    ui_dir: Option<PathBuf>,

    /// Print the GraphQL schema (SDL) and exit
    #[arg(long)]
    print_schema: bool,
}

impl Args {
    /// Load the config file and apply command-line overrides.
    fn resolve_config(&self) -> anyhow::Result<ServerConfig> {
        let mut cfg = load_config(&self.config)?;
        if let Some(bind) = &self.bind {
            cfg.bind = bind.clone();
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(ui_dir) = &self.ui_dir {
            cfg.ui_dir = Some(ui_dir.clone());
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todolist::logging::init("todolist=info,todolist_server=info");

    let args = Args::parse();
    let cfg = args.resolve_config()?;

    let store = Store::seeded(cfg.id_policy, &cfg.lists).context("seed store from config")?;
    let violations = store.check_invariants();
    if !violations.is_empty() {
        bail!("seeded store is inconsistent:\n- {}", violations.join("\n- "));
    }

    let id_policy = store.id_policy();
    let state = AppState::new(store, cfg.require_list_id);
    let schema = build_schema(state.clone());

    if args.print_schema {
        print!("{}", schema.sdl());
        return Ok(());
    }

    info!(
        config = %args.config.display(),
        lists = cfg.lists.len(),
        id_policy = ?id_policy,
        require_list_id = cfg.require_list_id,
        "starting todolist-server"
    );

    let app = todolist_server::build_app(state, schema, cfg.ui_dir.as_deref());

    let addr: SocketAddr = format!("{}:{}", cfg.bind, cfg.port)
        .parse()
        .with_context(|| format!("parse listen address {}:{}", cfg.bind, cfg.port))?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
