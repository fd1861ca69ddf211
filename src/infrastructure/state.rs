use crate::domain::donors::DonorRepository;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub donors: Arc<dyn DonorRepository>,
}

impl AppState {
    pub fn new(donors: Arc<dyn DonorRepository>) -> Self {
        Self { donors }
    }
}
