use crate::domain::donors::{
    Donor, DonorPatch, DonorRepository, NewDonor, assign_id, now_millis,
};
use anyhow::Context;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Donor collection persisted as one JSON array document.
///
/// Every operation reads the whole document and mutations write it back in
/// full. There is no lock between requests, so concurrent writers race and
/// the last one wins.
#[derive(Clone, Debug)]
pub struct JsonFileDonorRepository {
    path: PathBuf,
}

impl JsonFileDonorRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection, creating an empty store if the file is missing.
    /// A blank document reads as an empty collection.
    pub async fn load(&self) -> Result<Vec<Donor>, anyhow::Error> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.trim_ascii().is_empty() => Ok(Vec::new()),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Invalid donor data in {}", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Donor store {} not found, creating it", self.path.display());
                self.save(&[]).await?;
                Ok(Vec::new())
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to read donor data from {}", self.path.display()))),
        }
    }

    /// Replace the stored document with `donors`.
    ///
    /// The data goes to a sibling temporary file first and is renamed into
    /// place, so readers see either the old or the new document.
    pub async fn save(&self, donors: &[Donor]) -> Result<(), anyhow::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_vec_pretty(donors)?;
        let tmp = self.temp_path();

        let result = async {
            fs::write(&tmp, &data)
                .await
                .with_context(|| format!("Failed to write donor data to {}", tmp.display()))?;
            fs::rename(&tmp, &self.path)
                .await
                .with_context(|| format!("Failed to replace {}", self.path.display()))
        }
        .await;

        // a partial or orphaned temp file must not outlive a failed write
        if result.is_err() {
            let _ = fs::remove_file(&tmp).await;
        }
        result
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "donors.json".to_string());
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        self.path
            .with_file_name(format!(".{}.{}.{}.tmp", file_name, std::process::id(), seq))
    }
}

#[async_trait]
impl DonorRepository for JsonFileDonorRepository {
    async fn list(&self) -> Vec<Donor> {
        self.load().await.unwrap_or_else(|e| {
            tracing::error!("Error reading donor data: {:#}", e);
            Vec::new()
        })
    }

    async fn create(&self, new_donor: NewDonor) -> Result<Donor, anyhow::Error> {
        let mut donors = self.load().await?;

        let id = assign_id(new_donor.id.as_deref(), &donors, now_millis());
        let donor = Donor::from_new(id, new_donor);
        donors.push(donor.clone());

        self.save(&donors).await?;
        Ok(donor)
    }

    async fn update(&self, id: &str, patch: DonorPatch) -> Result<Option<Donor>, anyhow::Error> {
        let mut donors = self.load().await?;

        let Some(donor) = donors.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        donor.apply(patch);
        let updated = donor.clone();

        self.save(&donors).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, anyhow::Error> {
        let mut donors = self.load().await?;

        let initial_len = donors.len();
        donors.retain(|d| d.id != id);
        if donors.len() == initial_len {
            return Ok(false);
        }

        self.save(&donors).await?;
        Ok(true)
    }

    async fn reset(&self) -> Result<(), anyhow::Error> {
        self.save(&[]).await
    }
}
