use crate::db::keys;
use crate::domain::{ColumnVisibility, StructuredFilters};
use crate::state::App;
use crate::tests::utils::{add_offer, body_string, get, logged_in_app, post_form};

fn seed(app: &App) {
    add_offer(app, "location=Pleven&category=III&contractUntil=2030&landId=p-3");
    add_offer(app, "location=Lovech&category=IV&contractUntil=2028&landId=l-4");
    add_offer(app, "location=Pleven&category=IV&contractUntil=2030&landId=p-4&comment=near+river");
}

#[test]
fn structured_filters_narrow_the_table() {
    let (app, storage) = logged_in_app();
    seed(&app);

    let resp = post_form(&app, "/filters", "search=&location=Pleven&category=IV&contractUntil=");
    assert_eq!(resp.status(), 303);

    let body = body_string(get(&app, "/"));
    assert!(body.contains("p-4"));
    assert!(!body.contains("p-3"));
    assert!(!body.contains("l-4"));

    let saved: StructuredFilters = storage.get(keys::FILTERS, StructuredFilters::default());
    assert_eq!(saved.location, "Pleven");
    assert_eq!(saved.category, "IV");
}

#[test]
fn search_text_matches_any_field() {
    let (app, storage) = logged_in_app();
    seed(&app);

    post_form(&app, "/filters", "search=RIVER");

    let body = body_string(get(&app, "/"));
    assert!(body.contains("p-4"));
    assert!(!body.contains("l-4"));
    assert_eq!(storage.get(keys::FILTERS_SEARCH, String::new()), "RIVER");
}

#[test]
fn reset_clears_search_and_filters() {
    let (app, storage) = logged_in_app();
    seed(&app);
    post_form(&app, "/filters", "search=river&location=Pleven");

    let resp = post_form(&app, "/filters/reset", "");
    assert_eq!(resp.status(), 303);

    let body = body_string(get(&app, "/"));
    for id in ["p-3", "l-4", "p-4"] {
        assert!(body.contains(id), "{id}");
    }
    assert_eq!(storage.get(keys::FILTERS_SEARCH, "x".to_string()), "");
}

#[test]
fn filters_survive_a_restart() {
    let (app, storage) = logged_in_app();
    seed(&app);
    post_form(&app, "/filters", "location=Lovech");
    drop(app);

    let restarted = App::new(storage);
    let body = body_string(get(&restarted, "/"));
    assert!(body.contains("l-4"));
    assert!(!body.contains("p-3"));
}

#[test]
fn column_toggles_hide_and_show_cells() {
    let (app, storage) = logged_in_app();
    add_offer(&app, "name=Ivan+Petrov&landId=x-1");

    let body = body_string(get(&app, "/"));
    assert!(!body.contains("<td>Ivan Petrov</td>"));
    assert!(body.contains("<td>x-1</td>"));

    let form = "column=%D0%98%D0%BC%D0%B5";
    let resp = post_form(&app, "/columns", form);
    assert_eq!(resp.status(), 303);

    let body = body_string(get(&app, "/"));
    assert!(body.contains("<td>Ivan Petrov</td>"));
    assert!(!body.contains("<td>x-1</td>"));

    let saved: ColumnVisibility = storage.get(keys::COLUMNS_VISIBLE, ColumnVisibility::default());
    assert!(saved.is_visible("Име"));
    assert!(!saved.is_visible("№ имот"));
}
