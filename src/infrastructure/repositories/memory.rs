use crate::domain::donors::{
    Donor, DonorPatch, DonorRepository, NewDonor, assign_id, now_millis,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Process-local donor collection with the same semantics as the JSON store.
#[derive(Clone, Default)]
pub struct InMemoryDonorRepository {
    donors: Arc<Mutex<Vec<Donor>>>,
}

impl InMemoryDonorRepository {
    pub fn with_donors(donors: Vec<Donor>) -> Self {
        Self {
            donors: Arc::new(Mutex::new(donors)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Donor>>, anyhow::Error> {
        self.donors
            .lock()
            .map_err(|_| anyhow::anyhow!("Donor collection lock poisoned"))
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn list(&self) -> Vec<Donor> {
        match self.lock() {
            Ok(donors) => donors.clone(),
            Err(e) => {
                tracing::error!("Error reading donor data: {}", e);
                Vec::new()
            }
        }
    }

    async fn create(&self, new_donor: NewDonor) -> Result<Donor, anyhow::Error> {
        let mut donors = self.lock()?;
        let id = assign_id(new_donor.id.as_deref(), &donors, now_millis());
        let donor = Donor::from_new(id, new_donor);
        donors.push(donor.clone());
        Ok(donor)
    }

    async fn update(&self, id: &str, patch: DonorPatch) -> Result<Option<Donor>, anyhow::Error> {
        let mut donors = self.lock()?;
        Ok(donors.iter_mut().find(|d| d.id == id).map(|donor| {
            donor.apply(patch);
            donor.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, anyhow::Error> {
        let mut donors = self.lock()?;
        let initial_len = donors.len();
        donors.retain(|d| d.id != id);
        Ok(donors.len() < initial_len)
    }

    async fn reset(&self) -> Result<(), anyhow::Error> {
        self.lock()?.clear();
        Ok(())
    }
}
