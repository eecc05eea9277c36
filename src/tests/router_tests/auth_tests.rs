use crate::auth::{load_session, Identity};
use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, init_test_app, location, logged_in_app, post_form};
use astra::Body;
use http::Request;

#[test]
fn root_shows_login_when_logged_out() {
    let (app, _) = init_test_app();

    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Вход"));
    assert!(body.contains("name=\"password\""));
    assert!(!body.contains("Добавяне на оферта"));
}

#[test]
fn valid_login_redirects_and_persists_identity() {
    let (app, storage) = init_test_app();

    let resp = post_form(&app, "/login", "username=user2&password=Test%402025b");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
    assert_eq!(load_session(&storage), Some(Identity::new("user2")));

    let body = body_string(get(&app, "/"));
    assert!(body.contains("Добавяне на оферта"));
    assert!(body.contains("Изход (user2)"));
}

#[test]
fn wrong_password_shows_inline_error() {
    let (app, storage) = init_test_app();

    let resp = post_form(&app, "/login", "username=user1&password=wrong");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Невалидни данни за вход"));
    assert!(body.contains("value=\"user1\""));
    assert_eq!(load_session(&storage), None);
}

#[test]
fn unknown_user_gets_the_same_error() {
    let (app, _) = init_test_app();

    let body = body_string(post_form(&app, "/login", "username=nouser&password=anything"));
    assert!(body.contains("Невалидни данни за вход"));
}

#[test]
fn logout_clears_session() {
    let (app, storage) = logged_in_app();

    let resp = post_form(&app, "/logout", "");
    assert_eq!(resp.status(), 303);
    assert_eq!(load_session(&storage), None);

    let body = body_string(get(&app, "/"));
    assert!(body.contains("name=\"password\""));
}

#[test]
fn protected_routes_redirect_when_logged_out() {
    let (app, _) = init_test_app();

    for uri in ["/offers", "/offers/delete", "/filters", "/filters/reset", "/columns"] {
        let resp = post_form(&app, uri, "");
        assert_eq!(resp.status(), 303, "{uri}");
        assert_eq!(location(&resp), "/", "{uri}");
    }
    for uri in ["/export/csv", "/export/buyer-csv"] {
        let resp = get(&app, uri);
        assert_eq!(resp.status(), 303, "{uri}");
    }
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _) = init_test_app();
    let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();

    let Err(err) = handle(req, &app) else {
        panic!("unknown route was handled");
    };
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}
