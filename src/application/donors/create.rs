use crate::application::donors::validate_blood_group;
use crate::domain::donors::{Donor, DonorRepository, NewDonor, lenient_bool};
use crate::shared::error::AppError;
use crate::shared::validation::describe;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateDonorRequest {
    /// Requested id; replaced by the server when missing or already taken.
    #[serde(default)]
    #[schema(example = "1718000000000")]
    pub id: Option<String>,
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    #[schema(example = "Rahim Uddin")]
    pub name: Option<String>,
    #[validate(
        required(message = "Blood group is required"),
        custom(function = "validate_blood_group")
    )]
    #[schema(example = "A+")]
    pub blood_group: Option<String>,
    #[validate(
        required(message = "Phone is required"),
        length(min = 1, message = "Phone is required")
    )]
    #[schema(example = "01711000000")]
    pub phone: Option<String>,
    #[validate(
        required(message = "Address is required"),
        length(min = 1, message = "Address is required")
    )]
    #[schema(example = "Mirpur, Dhaka")]
    pub address: Option<String>,
    #[serde(default)]
    #[schema(example = "yes")]
    pub donated_before: Option<String>,
    #[serde(rename = "isVerified", default, deserialize_with = "lenient_bool")]
    pub is_verified: bool,
}

impl From<CreateDonorRequest> for NewDonor {
    fn from(req: CreateDonorRequest) -> Self {
        NewDonor {
            id: req.id,
            name: req.name.unwrap_or_default(),
            blood_group: req.blood_group.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            address: req.address.unwrap_or_default(),
            donated_before: req.donated_before.unwrap_or_default(),
            is_verified: req.is_verified,
        }
    }
}

pub struct CreateDonorUseCase {
    repo: Arc<dyn DonorRepository>,
}

impl CreateDonorUseCase {
    pub fn new(repo: Arc<dyn DonorRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req), fields(requested_id = ?req.id))]
    pub async fn execute(&self, req: CreateDonorRequest) -> Result<Donor, AppError> {
        req.validate().map_err(|e| {
            tracing::warn!("Rejected donor registration: {}", e);
            AppError::ValidationError(describe(&e))
        })?;

        let donor = self.repo.create(req.into()).await?;
        tracing::info!("Donor {} registered", donor.id);

        Ok(donor)
    }
}
