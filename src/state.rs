// src/state.rs
use std::sync::Mutex;

use tracing::info;

use crate::auth::{self, AuthError, Identity};
use crate::db::{keys, LocalStorage};
use crate::domain::{filter_offers, ColumnVisibility, Offer, OfferStore, StructuredFilters};
use crate::errors::ServerError;
use crate::spreadsheets::{offer_export_row, CsvRow};

/// Search box, dropdown filters and column toggles, each persisted on change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub filters: StructuredFilters,
    pub columns: ColumnVisibility,
}

/// Everything the pages render from, hydrated once at startup.
pub struct AppState {
    storage: LocalStorage,
    pub session: Option<Identity>,
    pub offers: OfferStore<LocalStorage>,
    pub view: ViewState,
}

impl AppState {
    pub fn hydrate(storage: LocalStorage) -> Self {
        let session = auth::load_session(&storage);
        let offers = OfferStore::load(storage.clone());
        let view = ViewState {
            search: storage.get(keys::FILTERS_SEARCH, String::new()),
            filters: storage.get(keys::FILTERS, StructuredFilters::default()),
            columns: storage.get(keys::COLUMNS_VISIBLE, ColumnVisibility::default()),
        };

        info!(
            offers = offers.list().len(),
            logged_in = session.is_some(),
            "state loaded"
        );
        Self {
            storage,
            session,
            offers,
            view,
        }
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = auth::login(username, password)?;
        auth::save_session(&self.storage, &identity);
        self.session = Some(identity.clone());
        Ok(identity)
    }

    pub fn logout(&mut self) {
        auth::clear_session(&self.storage);
        self.session = None;
    }

    pub fn set_search(&mut self, search: String, filters: StructuredFilters) {
        self.storage.set(keys::FILTERS_SEARCH, &search);
        self.storage.set(keys::FILTERS, &filters);
        self.view.search = search;
        self.view.filters = filters;
    }

    pub fn set_columns(&mut self, columns: ColumnVisibility) {
        self.storage.set(keys::COLUMNS_VISIBLE, &columns);
        self.view.columns = columns;
    }

    /// Offers currently shown in the table.
    pub fn filtered(&self) -> Vec<&Offer> {
        filter_offers(self.offers.list(), &self.view.search, &self.view.filters)
    }

    pub fn export_rows(&self) -> Vec<CsvRow> {
        self.filtered().into_iter().map(offer_export_row).collect()
    }
}

/// Shared handle given to every request.
pub struct App {
    state: Mutex<AppState>,
}

impl App {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            state: Mutex::new(AppState::hydrate(storage)),
        }
    }

    /// Provides the locked state to the closure.
    pub fn with_state<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut AppState) -> Result<T, ServerError>,
    {
        let mut state = self.state.lock().map_err(|_| ServerError::InternalError)?;
        f(&mut state)
    }
}
