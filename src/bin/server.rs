use std::error::Error;
use std::sync::Arc;

use crud_service::{http, Customer, CustomerService, HashMapRepository, ServiceConfig};
use tokio::net::TcpListener;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() {
    match ServiceConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = serve(&config).await {
                error!("server error: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("configuration error: {}", error)
        }
    }
}

async fn serve(config: &ServiceConfig) -> Result<(), Box<dyn Error>> {
    let repository = HashMapRepository::<Customer>::new();
    let service = Arc::new(CustomerService::from_config(repository, config));
    let app = http::router(service);

    let listener = TcpListener::bind(&config.server.address).await?;
    info!(address = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
