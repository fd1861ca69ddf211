use crate::application::donors::create::CreateDonorRequest;
use crate::application::donors::update::UpdateDonorRequest;
use crate::domain::donors::Donor;
use crate::shared::error::{ErrorObject, ErrorResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Donor Registry API",
        version = "0.1.0",
        description = "Blood donor registry backed by a single JSON document"
    ),
    paths(
        crate::presentation::handlers::health::health_check,
        crate::presentation::handlers::donors::list_donors,
        crate::presentation::handlers::donors::create_donor,
        crate::presentation::handlers::donors::update_donor,
        crate::presentation::handlers::donors::delete_donor,
        crate::presentation::handlers::donors::reset_donors,
    ),
    components(
        schemas(
            Donor,
            CreateDonorRequest,
            UpdateDonorRequest,
            ErrorResponse,
            ErrorObject,
        )
    ),
    tags(
        (name = "donors", description = "Donor registration and management"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
