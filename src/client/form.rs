use crate::client::api::DonorPayload;
use crate::domain::donors::Donor;

/// Contents of a donor form, shared by the registration and admin pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorForm {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
    pub donated_before: String,
    pub is_verified: bool,
}

impl DonorForm {
    pub fn from_donor(donor: &Donor) -> Self {
        Self {
            name: donor.name.clone(),
            blood_group: donor.blood_group.clone(),
            phone: donor.phone.clone(),
            address: donor.address.clone(),
            donated_before: donor.donated_before.clone(),
            is_verified: donor.is_verified,
        }
    }

    pub fn to_payload(&self, id: Option<String>) -> DonorPayload {
        DonorPayload {
            id,
            name: self.name.clone(),
            blood_group: self.blood_group.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            donated_before: self.donated_before.clone(),
            is_verified: self.is_verified,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
