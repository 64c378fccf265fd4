//! Server entrypoint: env config, tracing, pool, schema, seed, serve.

use axum::Router;
use bookshelf_api::{book_routes, common_routes, connect, ensure_books_table, seed_if_empty, AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookshelf_api=info,tower_http=info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:books.db".into());
    let pool = connect(&database_url).await?;
    ensure_books_table(&pool).await?;
    seed_if_empty(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
