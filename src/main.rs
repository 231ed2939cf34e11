use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use quiz_admin::{DEFAULT_PORT, Server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// JSON file holding the questions
    #[arg(short, long, env = "QUESTIONS_FILE", default_value = "questions.json")]
    questions: PathBuf,

    /// Directory with index.html, admin.html and js/
    #[arg(long, env = "STATIC_DIR", default_value = ".")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    tracing::info!("Starting quiz-admin v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig {
        addr: SocketAddr::new(args.host, args.port),
        questions_path: args.questions,
        static_root: args.static_dir,
    };

    Server::new(config).run().await?;
    Ok(())
}
