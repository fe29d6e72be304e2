use std::path::PathBuf;

use clap::{Parser, Subcommand};
use df_api::{ErpClient, StockQuery};
use df_config::ErpConfig;

mod commands;

#[derive(Parser)]
#[command(name = "df", version, about = "Dragonfish ERP - MCP server and query tools")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdio
    Mcp,
    /// Dump MCP tool definitions as JSON
    Tools {
        /// Pretty-print output
        #[arg(short, long)]
        pretty: bool,
    },
    /// List articles
    Articles {
        /// Maximum number of articles to show
        #[arg(short, long)]
        limit: Option<u32>,
        /// Database to query (defaults to the configured one)
        #[arg(short, long)]
        database: Option<String>,
    },
    /// List colors
    Colors {
        /// Database to query
        #[arg(short, long)]
        database: Option<String>,
    },
    /// List sizes
    Sizes {
        /// Database to query
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Query stock and prices
    Stock {
        /// Maximum number of records to fetch
        #[arg(short, long)]
        limit: Option<u32>,
        /// Free-text search over article code and description
        #[arg(short, long)]
        query: Option<String>,
        /// Restrict to a specific price list
        #[arg(long)]
        lista: Option<String>,
        /// Include articles with zero price
        #[arg(long)]
        preciocero: bool,
        /// Include articles with zero stock
        #[arg(long)]
        stockcero: bool,
        /// Exact match instead of substring search
        #[arg(long)]
        exacto: bool,
        /// Database to query
        #[arg(short, long)]
        database: Option<String>,
    },
    /// List barcode equivalences
    Equivalences {
        /// Maximum number of equivalences to show
        #[arg(short, long)]
        limit: Option<u32>,
        /// Database to query
        #[arg(short, long)]
        database: Option<String>,
    },
    /// List one article taxonomy (familia, linea, grupo, ...)
    Taxonomy {
        /// Taxonomy to list
        kind: String,
        /// Database to query
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Item counts across every article taxonomy
    Summary {
        /// Database to query
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Show effective configuration
    Config,
}

fn find_config() -> Option<PathBuf> {
    // 1. DF_CONFIG environment variable
    if let Ok(path) = std::env::var("DF_CONFIG") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. dragonfish.yaml in current directory
    let cwd_config = PathBuf::from("dragonfish.yaml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }

    // 3. ~/.config/dragonfish/config.yaml
    if let Some(home) = dirs_next::home_dir() {
        let home_config = home.join(".config/dragonfish/config.yaml");
        if home_config.exists() {
            return Some(home_config);
        }
    }

    None
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout is reserved for command output and, under
    // `df mcp`, the JSON-RPC stream.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Find config file
    let config_path = cli.config.or_else(find_config).ok_or(
        "No configuration file found. Use --config, set DF_CONFIG, or create dragonfish.yaml",
    )?;

    // Load and parse config
    let config = ErpConfig::from_file(&config_path)?;

    // Create API client
    let client = ErpClient::new(config)?;

    // Execute command
    match cli.command {
        Commands::Mcp => {
            commands::mcp::run(client).await?;
        }
        Commands::Tools { pretty } => {
            commands::tools::run(client, pretty)?;
        }
        Commands::Articles { limit, database } => {
            commands::articles::run(&client, limit, database.as_deref()).await?;
        }
        Commands::Colors { database } => {
            commands::colors::run(&client, database.as_deref()).await?;
        }
        Commands::Sizes { database } => {
            commands::sizes::run(&client, database.as_deref()).await?;
        }
        Commands::Stock {
            limit,
            query,
            lista,
            preciocero,
            stockcero,
            exacto,
            database,
        } => {
            let mut stock_query = StockQuery::new();
            if let Some(limit) = limit {
                stock_query = stock_query.limit(limit);
            }
            if let Some(text) = query {
                stock_query = stock_query.query(text);
            }
            if let Some(lista) = lista {
                stock_query = stock_query.lista(lista);
            }
            // Absent and explicit false are different filters server-side,
            // so only set the flags the user passed.
            if preciocero {
                stock_query = stock_query.preciocero(true);
            }
            if stockcero {
                stock_query = stock_query.stockcero(true);
            }
            if exacto {
                stock_query = stock_query.exacto(true);
            }
            commands::stock::run(&client, &stock_query, database.as_deref()).await?;
        }
        Commands::Equivalences { limit, database } => {
            commands::equivalences::run(&client, limit, database.as_deref()).await?;
        }
        Commands::Taxonomy { kind, database } => {
            commands::taxonomy::run(&client, &kind, database.as_deref()).await?;
        }
        Commands::Summary { database } => {
            commands::summary::run(&client, database.as_deref()).await?;
        }
        Commands::Config => {
            commands::config::run(&client)?;
        }
    }

    Ok(())
}
