use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error, server};

pub async fn serve() {
    if let Err(e) = server::start_api_server(Arc::new(Mutex::new(None))).await {
        error!("Server failed: {}", e);
    }
}
