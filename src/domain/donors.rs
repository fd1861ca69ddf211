use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// A registered blood donor as stored and served over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Donor {
    #[serde(default, deserialize_with = "lenient_string")]
    #[schema(example = "1718000000000")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schema(example = "Rahim Uddin")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schema(example = "A+")]
    pub blood_group: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schema(example = "01711000000")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schema(example = "Mirpur, Dhaka")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schema(example = "yes")]
    pub donated_before: String,
    #[serde(rename = "isVerified", default, deserialize_with = "lenient_bool")]
    pub is_verified: bool,
}

/// Creation payload after validation. The id is only a request; the
/// repository decides the final one.
#[derive(Debug, Clone, Default)]
pub struct NewDonor {
    pub id: Option<String>,
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
    pub donated_before: String,
    pub is_verified: bool,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct DonorPatch {
    pub name: Option<String>,
    pub blood_group: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub donated_before: Option<String>,
    pub is_verified: Option<bool>,
}

impl Donor {
    pub fn from_new(id: String, new_donor: NewDonor) -> Self {
        Self {
            id,
            name: new_donor.name,
            blood_group: new_donor.blood_group,
            phone: new_donor.phone,
            address: new_donor.address,
            donated_before: new_donor.donated_before,
            is_verified: new_donor.is_verified,
        }
    }

    /// Merge the present fields of `patch` into this record. The id never changes.
    pub fn apply(&mut self, patch: DonorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(blood_group) = patch.blood_group {
            self.blood_group = blood_group;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(donated_before) = patch.donated_before {
            self.donated_before = donated_before;
        }
        if let Some(is_verified) = patch.is_verified {
            self.is_verified = is_verified;
        }
    }
}

/// Reads stored text fields. Numbers keep their textual form; null and
/// other non-string values read as an empty string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accepts any JSON value; only a literal `true` counts as true.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Like [`lenient_bool`] but keeps "field present" information for patches.
pub fn lenient_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(value.as_bool().unwrap_or(false)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown blood group: {0}")]
pub struct UnknownBloodGroup(pub String);

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = UnknownBloodGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| UnknownBloodGroup(s.to_string()))
    }
}

/// Current Unix time in milliseconds.
pub fn now_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

/// Timestamp id as issued for new registrations.
pub fn timestamp_id() -> String {
    now_millis().to_string()
}

/// Pick the id a new record is stored under.
///
/// A requested id is kept when it is non-empty and not already taken.
/// Otherwise the timestamp `now_ms` is used, stepping forward one
/// millisecond at a time until it no longer collides.
pub fn assign_id(requested: Option<&str>, existing: &[Donor], now_ms: i128) -> String {
    let taken = |id: &str| existing.iter().any(|d| d.id == id);

    if let Some(id) = requested {
        if !id.is_empty() && !taken(id) {
            return id.to_string();
        }
    }

    let mut candidate = now_ms;
    while taken(&candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Search criteria used by the donor search view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorFilter {
    /// Exact blood group, e.g. "O-".
    pub blood_group: Option<String>,
    /// Location term matched against the address, case-insensitively.
    pub district: Option<String>,
}

impl DonorFilter {
    pub fn new(blood_group: Option<String>, district: Option<String>) -> Self {
        Self {
            blood_group,
            district,
        }
    }

    pub fn matches(&self, donor: &Donor) -> bool {
        if let Some(group) = self.blood_group.as_deref().filter(|g| !g.is_empty()) {
            if donor.blood_group != group {
                return false;
            }
        }

        let district = self
            .district
            .as_deref()
            .map(|d| d.trim().to_lowercase())
            .unwrap_or_default();
        if !district.is_empty() && !donor.address.to_lowercase().contains(&district) {
            return false;
        }

        true
    }

    pub fn apply(&self, donors: Vec<Donor>) -> Vec<Donor> {
        donors.into_iter().filter(|d| self.matches(d)).collect()
    }
}

/// Storage capability for the donor collection.
///
/// Errors are storage failures only; "not found" is reported through the
/// `Option`/`bool` return values.
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// All records in insertion order. Read failures yield an empty list.
    async fn list(&self) -> Vec<Donor>;
    async fn create(&self, new_donor: NewDonor) -> Result<Donor, anyhow::Error>;
    async fn update(&self, id: &str, patch: DonorPatch) -> Result<Option<Donor>, anyhow::Error>;
    async fn delete(&self, id: &str) -> Result<bool, anyhow::Error>;
    async fn reset(&self) -> Result<(), anyhow::Error>;
}
