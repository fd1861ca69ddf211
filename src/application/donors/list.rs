use crate::domain::donors::{Donor, DonorRepository};
use std::sync::Arc;

pub struct ListDonorsUseCase {
    repo: Arc<dyn DonorRepository>,
}

impl ListDonorsUseCase {
    pub fn new(repo: Arc<dyn DonorRepository>) -> Self {
        Self { repo }
    }

    /// All donors in insertion order; never fails.
    pub async fn execute(&self) -> Vec<Donor> {
        self.repo.list().await
    }
}
