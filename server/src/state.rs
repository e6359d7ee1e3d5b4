use std::sync::Arc;

use lecturai::{Config, Controller};
use tokio::sync::{Mutex, MutexGuard};

/// The single UI session. Every request locks the controller, so mutations
/// never interleave.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<Controller>>,
}

impl AppState {
    pub async fn open(config: &Config) -> lecturai::Result<Self> {
        let controller = Controller::open(config).await?;
        Ok(Self {
            inner: Arc::new(Mutex::new(controller)),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, Controller> {
        self.inner.lock().await
    }
}
