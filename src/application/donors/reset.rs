use crate::domain::donors::DonorRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ResetDonorsUseCase {
    repo: Arc<dyn DonorRepository>,
}

impl ResetDonorsUseCase {
    pub fn new(repo: Arc<dyn DonorRepository>) -> Self {
        Self { repo }
    }

    /// Irreversibly empties the donor collection.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<(), AppError> {
        self.repo.reset().await?;
        tracing::warn!("Donor collection reset");
        Ok(())
    }
}
