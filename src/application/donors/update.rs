use crate::application::donors::validate_blood_group;
use crate::domain::donors::{Donor, DonorPatch, DonorRepository, lenient_bool_opt};
use crate::shared::error::AppError;
use crate::shared::validation::describe;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

/// Partial donor update. An `id` in the payload is ignored; the path id wins.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDonorRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Rahim Uddin")]
    pub name: Option<String>,
    #[validate(custom(function = "validate_blood_group"))]
    #[schema(example = "O-")]
    pub blood_group: Option<String>,
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Address cannot be empty"))]
    pub address: Option<String>,
    pub donated_before: Option<String>,
    #[serde(rename = "isVerified", default, deserialize_with = "lenient_bool_opt")]
    #[schema(value_type = Option<bool>)]
    pub is_verified: Option<bool>,
}

impl From<UpdateDonorRequest> for DonorPatch {
    fn from(req: UpdateDonorRequest) -> Self {
        DonorPatch {
            name: req.name,
            blood_group: req.blood_group,
            phone: req.phone,
            address: req.address,
            donated_before: req.donated_before,
            is_verified: req.is_verified,
        }
    }
}

pub struct UpdateDonorUseCase {
    repo: Arc<dyn DonorRepository>,
}

impl UpdateDonorUseCase {
    pub fn new(repo: Arc<dyn DonorRepository>) -> Self {
        Self { repo }
    }

    /// An unknown id is reported as not found before the payload is validated.
    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, id: &str, req: UpdateDonorRequest) -> Result<Donor, AppError> {
        let unknown = || {
            tracing::warn!("Update requested for unknown donor");
            AppError::NotFound
        };

        if !self.repo.list().await.iter().any(|d| d.id == id) {
            return Err(unknown());
        }

        req.validate()
            .map_err(|e| AppError::ValidationError(describe(&e)))?;

        let donor = self.repo.update(id, req.into()).await?.ok_or_else(unknown)?;

        tracing::info!("Donor updated");
        Ok(donor)
    }
}
