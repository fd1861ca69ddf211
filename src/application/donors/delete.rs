use crate::domain::donors::DonorRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteDonorUseCase {
    repo: Arc<dyn DonorRepository>,
}

impl DeleteDonorUseCase {
    pub fn new(repo: Arc<dyn DonorRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            tracing::warn!("Delete requested for unknown donor");
            return Err(AppError::NotFound);
        }

        tracing::info!("Donor deleted");
        Ok(())
    }
}
