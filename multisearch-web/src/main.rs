//! Multisearch server binary.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    multisearch_web::run_server().await
}
