// src/domain/store.rs
use std::collections::BTreeSet;

use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::Identity;
use crate::db::OfferRepository;
use crate::domain::offer::{Offer, OfferField, OfferForm};

/// Ordered in-memory offers, newest first, mirrored to a repository after
/// every change.
pub struct OfferStore<R> {
    repo: R,
    offers: Vec<Offer>,
}

impl<R: OfferRepository> OfferStore<R> {
    pub fn load(repo: R) -> Self {
        let offers = repo.load();
        Self { repo, offers }
    }

    pub fn add(&mut self, form: &OfferForm, created_by: &Identity) -> Offer {
        let offer = Offer::from_form(form, self.fresh_id(), created_by);
        self.offers.insert(0, offer.clone());
        self.persist();

        info!(id = %offer.id, user = %created_by, "offer added");
        offer
    }

    /// Returns whether an offer was removed. Unknown ids are not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.offers.len();
        self.offers.retain(|o| o.id != id);
        let removed = self.offers.len() != before;

        self.persist();
        if removed {
            info!(id, "offer removed");
        }
        removed
    }

    pub fn list(&self) -> &[Offer] {
        &self.offers
    }

    /// Sorted non-empty values of one field, for the filter dropdowns.
    pub fn distinct_values(&self, field: OfferField) -> Vec<String> {
        self.offers
            .iter()
            .map(|o| o.get(field))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.offers.iter().any(|o| o.id == id) {
                return id;
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.offers) {
            warn!(error = %e, "saving offers failed, changes kept in memory only");
        }
    }
}
