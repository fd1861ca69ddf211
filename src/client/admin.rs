use crate::client::api::DonorGateway;
use crate::client::dialog::Dialog;
use crate::client::form::DonorForm;
use crate::client::session::{AdminSession, Navigation};
use crate::domain::donors::Donor;

pub const ADD_LABEL: &str = "Add donor";
pub const UPDATE_LABEL: &str = "Update donor";
pub const NO_DONORS: &str = "No donors registered yet.";
pub const SAVE_FAILED: &str = "Failed to save donor data. Please try again.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this donor?";
pub const DELETE_FAILED: &str = "Failed to delete donor.";
pub const CONFIRM_RESET: &str =
    "Are you sure you want to reset the whole donor list? This cannot be undone.";
pub const RESET_DONE: &str = "All donors have been removed.";
pub const RESET_FAILED: &str = "Failed to reset the donor list.";

/// One table row as displayed in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorRow {
    pub id: String,
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
    pub donated_before: String,
    pub verified: &'static str,
}

impl From<&Donor> for DonorRow {
    fn from(donor: &Donor) -> Self {
        Self {
            id: donor.id.clone(),
            name: donor.name.clone(),
            blood_group: donor.blood_group.clone(),
            phone: donor.phone.clone(),
            address: donor.address.clone(),
            donated_before: donor.donated_before.clone(),
            verified: if donor.is_verified { "Yes" } else { "No" },
        }
    }
}

/// Admin panel state: the donor table, the form, and which donor (if any)
/// the form is editing.
#[derive(Debug, Default)]
pub struct AdminPanel {
    pub form: DonorForm,
    editing: Option<String>,
    donors: Vec<Donor>,
}

impl AdminPanel {
    /// Open the panel, or redirect to login when the session has no admin flag.
    pub async fn open(
        session: &AdminSession,
        gateway: &dyn DonorGateway,
    ) -> Result<Self, Navigation> {
        if !session.is_logged_in() {
            tracing::debug!("Admin panel opened without login, redirecting");
            return Err(Navigation::Login);
        }

        let mut panel = Self::default();
        panel.refresh(gateway).await;
        Ok(panel)
    }

    pub async fn refresh(&mut self, gateway: &dyn DonorGateway) {
        self.donors = gateway.list().await;
    }

    pub fn rows(&self) -> Vec<DonorRow> {
        self.donors.iter().map(DonorRow::from).collect()
    }

    /// Message shown instead of the table when there is nothing to list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.donors.is_empty().then_some(NO_DONORS)
    }

    /// Id of the donor being edited; the hidden id field of the form.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            UPDATE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Load a row into the form and switch submit to update.
    /// Returns false if the id is not among the displayed rows.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.donors.iter().find(|d| d.id == id) {
            Some(donor) => {
                self.form = DonorForm::from_donor(donor);
                self.editing = Some(donor.id.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.clear();
        self.editing = None;
    }

    /// Create or update depending on the edit state, then re-render.
    pub async fn submit(&mut self, gateway: &dyn DonorGateway, dialog: &mut dyn Dialog) -> bool {
        let saved = match &self.editing {
            Some(id) => gateway.update(id, &self.form.to_payload(None)).await,
            None => gateway.create(&self.form.to_payload(None)).await,
        };

        if saved.is_none() {
            dialog.alert(SAVE_FAILED);
            return false;
        }

        self.cancel_edit();
        self.refresh(gateway).await;
        true
    }

    /// Delete after confirmation. Declining does nothing.
    pub async fn delete(
        &mut self,
        id: &str,
        gateway: &dyn DonorGateway,
        dialog: &mut dyn Dialog,
    ) -> bool {
        if !dialog.confirm(CONFIRM_DELETE) {
            return false;
        }

        if !gateway.delete(id).await {
            dialog.alert(DELETE_FAILED);
            return false;
        }

        self.refresh(gateway).await;
        true
    }

    /// Clear the whole collection after confirmation.
    pub async fn reset_all(&mut self, gateway: &dyn DonorGateway, dialog: &mut dyn Dialog) -> bool {
        if !dialog.confirm(CONFIRM_RESET) {
            return false;
        }

        if !gateway.reset().await {
            dialog.alert(RESET_FAILED);
            return false;
        }

        self.refresh(gateway).await;
        dialog.alert(RESET_DONE);
        true
    }
}
