use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use mini_http::config::Config;
use mini_http::server::listener;
use mini_http::static_files::StaticFiles;

#[derive(Parser)]
#[command(name = "mini-http")]
#[command(about = "Serve a directory over a minimal HTTP/1.1 subset", long_about = None)]
struct Cli {
    /// Directory to serve
    root: Option<PathBuf>,

    /// YAML config file; MINI_HTTP_* environment variables and flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,

    /// Maximum bytes read from a connection before parsing
    #[arg(long)]
    max_request_bytes: Option<usize>,

    /// Log every request and response
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_yaml_file(path)?,
            None => Config::default(),
        };
        let mut cfg = base.with_env(|key| std::env::var(key).ok())?;

        if let Some(root) = self.root {
            cfg.root = root;
        }
        if let Some(host) = self.host {
            cfg.host = host;
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(max) = self.max_request_bytes {
            cfg.max_request_bytes = max;
        }
        cfg.verbose |= self.verbose;

        cfg.validate()?;
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Cli::parse().into_config()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if cfg.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    tracing::info!("Serving {}", cfg.root.display());
    let handler = StaticFiles::new(cfg.root.clone());

    tokio::select! {
        res = listener::run(&cfg, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
