use crate::selection::Selection;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub selection: Arc<Mutex<Selection>>,
}

impl AppState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection: Arc::new(Mutex::new(selection)),
        }
    }
}
