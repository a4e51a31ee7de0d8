use crate::config::Config;
use crate::models::LocalState;
use std::{path::Path, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub data: Arc<Mutex<LocalState>>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, data: LocalState) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            config: Arc::new(config),
            data: Arc::new(Mutex::new(data)),
            http,
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.config.data_path
    }
}
