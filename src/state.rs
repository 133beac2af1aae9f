use crate::achievements::Catalog;
use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, catalog: Catalog) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            catalog: Arc::new(catalog),
        }
    }
}
