use crate::db::OfferRepository;
use crate::errors::ServerError;
use crate::forms::MAX_FORM_BYTES;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{add_offer, body_string, get, location, logged_in_app, post_form};
use astra::Body;
use http::{Method, Request};

#[test]
fn added_offer_is_stored_canonically_and_shown_with_commas() {
    let (app, storage) = logged_in_app();

    let resp = add_offer(
        &app,
        "location=%D0%9F%D0%BB%D0%B5%D0%B2%D0%B5%D0%BD&area=12%2C5&pricePerDecare=300&comment=+%D0%BD%D0%B8%D0%B2%D0%B0+",
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/?location=%D0%9F%D0%BB%D0%B5%D0%B2%D0%B5%D0%BD");

    let stored = storage.load();
    assert_eq!(stored.len(), 1);
    let offer = &stored[0];
    assert_eq!(offer.area, "12.500");
    assert_eq!(offer.price_per_decare, "300.000");
    assert_eq!(offer.location, "Плевен");
    assert_eq!(offer.comment, "нива");
    assert_eq!(offer.created_by, "user1");
    assert!(!offer.id.is_empty());

    let body = body_string(get(&app, location(&resp)));
    assert!(body.contains("12,500"));
    assert!(body.contains("300,000"));
    assert!(body.contains("value=\"Плевен\""));
}

#[test]
fn newest_offer_comes_first() {
    let (app, storage) = logged_in_app();

    add_offer(&app, "landId=first");
    add_offer(&app, "landId=second");

    let ids: Vec<String> = storage.load().into_iter().map(|o| o.land_id).collect();
    assert_eq!(ids, vec!["second", "first"]);

    let body = body_string(get(&app, "/"));
    let second = body.find("second").unwrap();
    let first = body.find("first").unwrap();
    assert!(second < first);
}

#[test]
fn delete_removes_only_the_matching_offer() {
    let (app, storage) = logged_in_app();
    add_offer(&app, "landId=keep");
    add_offer(&app, "landId=drop");

    let drop_id = storage.load()[0].id.clone();
    let resp = post_form(&app, "/offers/delete", &format!("id={drop_id}"));
    assert_eq!(resp.status(), 303);

    let left: Vec<String> = storage.load().into_iter().map(|o| o.land_id).collect();
    assert_eq!(left, vec!["keep"]);
}

#[test]
fn delete_of_unknown_id_changes_nothing() {
    let (app, storage) = logged_in_app();
    add_offer(&app, "landId=keep");

    let resp = post_form(&app, "/offers/delete", "id=does-not-exist");
    assert_eq!(resp.status(), 303);
    assert_eq!(storage.load().len(), 1);
}

#[test]
fn empty_table_shows_placeholder_row() {
    let (app, _) = logged_in_app();

    let body = body_string(get(&app, "/"));
    assert!(body.contains("Няма намерени записи"));
}

#[test]
fn dropdowns_list_observed_values() {
    let (app, _) = logged_in_app();
    add_offer(&app, "location=B&category=III&contractUntil=2030");
    add_offer(&app, "location=A&contractUntil=2028");

    let body = body_string(get(&app, "/"));
    assert!(body.contains("<option value=\"A\">A</option><option value=\"B\">B</option>"));
    assert!(body.contains("<option value=\"III\">III</option>"));
    assert!(body.contains("<option value=\"2028\">2028</option><option value=\"2030\">2030</option>"));
}

#[test]
fn oversized_form_is_rejected_without_storing() {
    let (app, storage) = logged_in_app();
    let comment = "a".repeat(70 * 1024);
    let body = format!("date=2025-04-01&comment={comment}&landId=tail");

    let req = Request::builder()
        .method(Method::POST)
        .uri("/offers")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into_bytes()))
        .unwrap();

    let Err(err) = handle(req, &app) else {
        panic!("oversized form was accepted");
    };
    assert!(matches!(err, ServerError::PayloadTooLarge(_)));
    assert_eq!(html_error_response(err).status(), 413);
    assert!(storage.load().is_empty());
}

#[test]
fn form_at_the_size_limit_is_accepted() {
    let (app, storage) = logged_in_app();
    let prefix = "date=2025-04-01&landId=edge&comment=";
    let comment = "a".repeat(MAX_FORM_BYTES as usize - prefix.len());

    let resp = post_form(&app, "/offers", &format!("{prefix}{comment}"));
    assert_eq!(resp.status(), 303);

    let stored = storage.load();
    assert_eq!(stored[0].land_id, "edge");
    assert_eq!(stored[0].comment.len(), comment.len());
}
