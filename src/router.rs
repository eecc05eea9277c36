use crate::auth::Identity;
use crate::domain::{ColumnVisibility, OfferField, OfferForm, StructuredFilters};
use crate::errors::ServerError;
use crate::forms::{encode_component, FormData};
use crate::responses::{
    csv_response, html_response, no_content_response, redirect_response, ResultResp,
};
use crate::spreadsheets::{
    export_filename, to_csv, to_csv_redacted, BUYER_EXPORT_PREFIX, FULL_EXPORT_PREFIX,
};
use crate::state::{App, AppState};
use crate::templates::pages::{login_page, offers_page, OffersVm};
use astra::Request;
use chrono::Utc;
use tracing::{debug, info};

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => index(&req, app),
        ("POST", "/login") => login(&mut req, app),
        ("POST", "/logout") => logout(app),
        ("POST", "/offers") => add_offer(&mut req, app),
        ("POST", "/offers/delete") => delete_offer(&mut req, app),
        ("POST", "/filters") => set_filters(&mut req, app),
        ("POST", "/filters/reset") => reset_filters(app),
        ("POST", "/columns") => set_columns(&mut req, app),
        ("GET", "/export/csv") => export(app, false),
        ("GET", "/export/buyer-csv") => export(app, true),
        _ => Err(ServerError::NotFound),
    }
}

fn index(req: &Request, app: &App) -> ResultResp {
    let query = FormData::from_query(req);

    app.with_state(|state| {
        let Some(user) = state.session.clone() else {
            return html_response(login_page("", None));
        };
        html_response(offers_page(&offers_vm(state, &user, query.get("location"))))
    })
}

fn offers_vm<'a>(state: &'a AppState, user: &'a Identity, location: &str) -> OffersVm<'a> {
    OffersVm {
        user: user.as_str(),
        today: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
        location: location.to_string(),
        search: &state.view.search,
        filters: &state.view.filters,
        locations: state.offers.distinct_values(OfferField::Location),
        categories: state.offers.distinct_values(OfferField::Category),
        years: state.offers.distinct_values(OfferField::ContractUntil),
        columns: &state.view.columns,
        rows: state.filtered(),
    }
}

fn login(req: &mut Request, app: &App) -> ResultResp {
    let form = FormData::from_body(req)?;
    let username = form.get("username");

    app.with_state(|state| match state.login(username, form.get("password")) {
        Ok(_) => redirect_response("/"),
        Err(e) => {
            info!(username, "login rejected");
            let message = e.to_string();
            html_response(login_page(username, Some(message.as_str())))
        }
    })
}

fn logout(app: &App) -> ResultResp {
    app.with_state(|state| {
        state.logout();
        redirect_response("/")
    })
}

/// Runs `f` for a logged-in user; anyone else is sent to the login page.
fn with_session<F>(app: &App, f: F) -> ResultResp
where
    F: FnOnce(&mut AppState, &Identity) -> ResultResp,
{
    app.with_state(|state| match state.session.clone() {
        Some(user) => f(state, &user),
        None => redirect_response("/"),
    })
}

fn add_offer(req: &mut Request, app: &App) -> ResultResp {
    let form = OfferForm::from_form_data(&FormData::from_body(req)?);

    with_session(app, |state, user| {
        let offer = state.offers.add(&form, user);
        redirect_response(&format!("/?location={}", encode_component(&offer.location)))
    })
}

fn delete_offer(req: &mut Request, app: &App) -> ResultResp {
    let form = FormData::from_body(req)?;

    with_session(app, |state, _| {
        state.offers.remove(form.get("id"));
        redirect_response("/")
    })
}

fn set_filters(req: &mut Request, app: &App) -> ResultResp {
    let form = FormData::from_body(req)?;
    let filters = StructuredFilters {
        location: form.get("location").to_string(),
        category: form.get("category").to_string(),
        contract_until: form.get("contractUntil").to_string(),
    };

    with_session(app, |state, _| {
        state.set_search(form.get("search").to_string(), filters);
        redirect_response("/")
    })
}

fn reset_filters(app: &App) -> ResultResp {
    with_session(app, |state, _| {
        state.set_search(String::new(), StructuredFilters::default());
        redirect_response("/")
    })
}

fn set_columns(req: &mut Request, app: &App) -> ResultResp {
    let form = FormData::from_body(req)?;
    let columns = ColumnVisibility::from_checked(form.all("column"));

    with_session(app, |state, _| {
        state.set_columns(columns);
        redirect_response("/")
    })
}

fn export(app: &App, redacted: bool) -> ResultResp {
    with_session(app, |state, user| {
        let rows = state.export_rows();
        let (csv, prefix) = if redacted {
            (to_csv_redacted(&rows)?, BUYER_EXPORT_PREFIX)
        } else {
            (to_csv(&rows)?, FULL_EXPORT_PREFIX)
        };

        let Some(csv) = csv else {
            return no_content_response();
        };
        let filename = export_filename(prefix, Utc::now().date_naive());
        info!(user = %user, rows = rows.len(), %filename, "export");
        csv_response(csv, &filename)
    })
}
