use clap::Parser;
use quizroom::{
    services::{Catalog, JsonFileSource},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file holding the quiz catalog.
    #[arg(short, long, env = "QUIZ_DATA", default_value = "data/quizzes.json")]
    data: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Mark cookies `Secure` (serve behind HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,tower_http=debug,quizroom=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let catalog = Catalog::load(&JsonFileSource::new(&args.data));
    let app = quizroom::router(AppState::new(catalog, args.secure_cookies));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
