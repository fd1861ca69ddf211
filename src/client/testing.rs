use crate::application::donors::create::{CreateDonorRequest, CreateDonorUseCase};
use crate::application::donors::update::{UpdateDonorRequest, UpdateDonorUseCase};
use crate::client::api::{DonorGateway, DonorPayload};
use crate::client::dialog::Dialog;
use crate::domain::donors::{Donor, DonorRepository};
use crate::infrastructure::repositories::memory::InMemoryDonorRepository;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Gateway that runs the real use cases against an in-memory store.
#[derive(Default)]
pub struct FakeGateway {
    pub repo: Arc<InMemoryDonorRepository>,
    pub offline: AtomicBool,
    pub list_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn with_donors(donors: Vec<Donor>) -> Self {
        Self {
            repo: Arc::new(InMemoryDonorRepository::with_donors(donors)),
            ..Default::default()
        }
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DonorGateway for FakeGateway {
    async fn list(&self) -> Vec<Donor> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline() {
            return Vec::new();
        }
        self.repo.list().await
    }

    async fn create(&self, payload: &DonorPayload) -> Option<Donor> {
        if self.is_offline() {
            return None;
        }
        let req = CreateDonorRequest {
            id: payload.id.clone(),
            name: Some(payload.name.clone()),
            blood_group: Some(payload.blood_group.clone()),
            phone: Some(payload.phone.clone()),
            address: Some(payload.address.clone()),
            donated_before: Some(payload.donated_before.clone()),
            is_verified: payload.is_verified,
        };
        CreateDonorUseCase::new(self.repo.clone()).execute(req).await.ok()
    }

    async fn update(&self, id: &str, payload: &DonorPayload) -> Option<Donor> {
        if self.is_offline() {
            return None;
        }
        let req = UpdateDonorRequest {
            name: Some(payload.name.clone()),
            blood_group: Some(payload.blood_group.clone()),
            phone: Some(payload.phone.clone()),
            address: Some(payload.address.clone()),
            donated_before: Some(payload.donated_before.clone()),
            is_verified: Some(payload.is_verified),
        };
        UpdateDonorUseCase::new(self.repo.clone())
            .execute(id, req)
            .await
            .ok()
    }

    async fn delete(&self, id: &str) -> bool {
        !self.is_offline() && self.repo.delete(id).await.unwrap_or(false)
    }

    async fn reset(&self) -> bool {
        !self.is_offline() && self.repo.reset().await.is_ok()
    }
}

/// Dialog that answers confirmations from a script and records alerts.
#[derive(Default)]
pub struct ScriptedDialog {
    pub answers: VecDeque<bool>,
    pub confirmations: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedDialog {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Dialog for ScriptedDialog {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub fn donor(id: &str, name: &str, blood_group: &str, address: &str) -> Donor {
    Donor {
        id: id.to_string(),
        name: name.to_string(),
        blood_group: blood_group.to_string(),
        phone: "01700000000".to_string(),
        address: address.to_string(),
        donated_before: "no".to_string(),
        is_verified: false,
    }
}
