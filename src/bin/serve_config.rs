//! CLI: serve the Config Pads API standalone for development.
//!
//! The host normally mounts the extension's router under its own web server;
//! this binary stands the same router up on a local listener so the config
//! endpoints can be exercised without a host runtime.
//!
//! Usage: `serve_config [--addr 127.0.0.1:8188] [--dir .]`
//!
//! Set RUST_LOG=a1r_workshop=trace for TRACE-level events.

use a1r_workshop::extension::{Extension, entrypoint};
use a1r_workshop::{ConfigStore, router};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve the extension's config API on a local listener.
#[derive(Parser, Debug)]
#[command(name = "serve_config")]
struct Args {
  /// Address to listen on.
  #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:8188")]
  addr: SocketAddr,

  /// Extension directory holding config.json.
  #[arg(long, value_name = "DIR", default_value = ".")]
  dir: PathBuf,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();
  info!(addr = %args.addr, dir = %args.dir.display(), "serve_config starting");

  let extension = entrypoint().await;
  for node in extension.node_list().await {
    let schema = node.schema();
    info!(node_id = %schema.node_id, display_name = %schema.display_name, "node registered");
  }

  let app = router(ConfigStore::new(&args.dir)).layer(TraceLayer::new_for_http());

  let listener = match tokio::net::TcpListener::bind(args.addr).await {
    Ok(listener) => listener,
    Err(e) => {
      eprintln!("Error binding {}: {}", args.addr, e);
      process::exit(1);
    }
  };
  if let Err(e) = axum::serve(listener, app).await {
    eprintln!("Server error: {}", e);
    process::exit(1);
  }
}
