pub mod create;
pub mod delete;
pub mod list;
pub mod reset;
pub mod update;

use crate::domain::donors::BloodGroup;
use validator::ValidationError;

pub(crate) fn validate_blood_group(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message("Blood group is required".into()));
    }
    value.parse::<BloodGroup>().map(|_| ()).map_err(|e| {
        ValidationError::new("blood_group").with_message(e.to_string().into())
    })
}
