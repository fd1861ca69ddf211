use crate::client::api::DonorGateway;
use crate::domain::donors::{Donor, DonorFilter};

pub const NO_RESULTS: &str = "No donors found.";

/// A donor as shown on the public search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorCard {
    pub name: String,
    pub blood_group: String,
    pub verified: bool,
    pub address: String,
    pub donated_before: String,
    pub phone: String,
    pub phone_link: String,
}

impl From<Donor> for DonorCard {
    fn from(donor: Donor) -> Self {
        Self {
            phone_link: format!("tel:{}", donor.phone),
            name: donor.name,
            blood_group: donor.blood_group,
            verified: donor.is_verified,
            address: donor.address,
            donated_before: donor.donated_before,
            phone: donor.phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    Results(Vec<DonorCard>),
    Empty(&'static str),
}

/// Public donor search page. Filtering happens here, on a fresh list each time.
#[derive(Debug)]
pub struct SearchPage {
    criteria: DonorFilter,
    view: SearchView,
}

impl SearchPage {
    /// Initial render shows every donor.
    pub async fn load(gateway: &dyn DonorGateway) -> Self {
        let mut page = Self {
            criteria: DonorFilter::default(),
            view: SearchView::Empty(NO_RESULTS),
        };
        page.refresh(gateway).await;
        page
    }

    pub async fn search(&mut self, gateway: &dyn DonorGateway, criteria: DonorFilter) {
        self.criteria = criteria;
        self.refresh(gateway).await;
    }

    /// Clear the filters and show everyone again.
    pub async fn reset(&mut self, gateway: &dyn DonorGateway) {
        self.search(gateway, DonorFilter::default()).await;
    }

    pub fn criteria(&self) -> &DonorFilter {
        &self.criteria
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    async fn refresh(&mut self, gateway: &dyn DonorGateway) {
        let matches = self.criteria.apply(gateway.list().await);
        tracing::debug!("Search matched {} donors", matches.len());

        self.view = if matches.is_empty() {
            SearchView::Empty(NO_RESULTS)
        } else {
            SearchView::Results(matches.into_iter().map(DonorCard::from).collect())
        };
    }
}
