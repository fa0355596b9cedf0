//! CLI entry point for devops-feed

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "devops-feed")]
#[command(version)]
#[command(about = "Serve an RSS feed generated from a directory of Markdown posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a config file and content directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name of the new post (defaults to the slugified title)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Generate the feed once
    #[command(alias = "g")]
    Generate {
        /// Write the feed to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the feed at /rss
    #[command(alias = "s")]
    Server {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides the config file)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List feed content
    List {
        /// Type of content to list (post, tag, author)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "devops_feed=debug,tower_http=debug,info"
    } else {
        "devops_feed=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing feed in {:?}", target_dir);
            devops_feed::commands::init::init_site(&target_dir)?;
            println!("Initialized feed in {:?}", target_dir);
        }

        Commands::New { title, name } => {
            let site = devops_feed::FeedSite::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            devops_feed::commands::new::create_post(&site, &title, name.as_deref())?;
        }

        Commands::Generate { output } => {
            let site = devops_feed::FeedSite::new(&base_dir)?;
            devops_feed::commands::generate::run(&site, output.as_deref())?;
        }

        Commands::Server { port, ip } => {
            let site = devops_feed::FeedSite::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            devops_feed::server::start(&site, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let site = devops_feed::FeedSite::new(&base_dir)?;
            devops_feed::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("devops-feed version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
