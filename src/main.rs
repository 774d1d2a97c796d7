use axum::serve;
use tokio::net::TcpListener;
use tracing::info;

use greeniq_backend::routes::make_app;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let app = match make_app().await {
        Ok(app) => app,
        Err(err) => panic!("Failed to initialize application: {}", err),
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = TcpListener::bind(("127.0.0.1", port)).await;
    info!("Listening on http://127.0.0.1:{port}");

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
