use crate::models::AppData;
use std::{
    path::PathBuf,
    sync::{Arc, atomic::AtomicBool},
};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    /// Session-scoped latch for the follow-up backfill: set before the first
    /// write pass starts so rapid repeated requests cannot double-trigger it.
    /// Lives for the server process, which is one signed-in session here.
    pub backfill_done: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            backfill_done: Arc::new(AtomicBool::new(false)),
        }
    }
}
