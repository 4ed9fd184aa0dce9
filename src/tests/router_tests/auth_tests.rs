use http::Method;

use crate::auth::sessions;
use crate::tests::utils::{
    dispatch, form_request, get_request, location, login_as, make_db, now_unix, read_body,
    set_cookie,
};

#[test]
fn login_form_renders() {
    let db = make_db();

    let resp = dispatch(get_request("/login", None), &db);
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Sign in"));
}

#[test]
fn login_opens_session_and_redirects() {
    let db = make_db();

    let resp = dispatch(
        form_request(Method::POST, "/login", None, "email=Guest%40Example.com"),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");

    let cookie = set_cookie(&resp, "session").expect("session cookie");
    let token = cookie
        .strip_prefix("session=")
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let user = db
        .with_conn(|conn| sessions::load_user_from_session(conn, &token, now_unix()))
        .unwrap()
        .expect("session should resolve");
    assert_eq!(user.email, "guest@example.com");
}

#[test]
fn login_rejects_invalid_email() {
    let db = make_db();

    let resp = dispatch(
        form_request(Method::POST, "/login", None, "email=not-an-email"),
        &db,
    );
    assert_eq!(resp.status(), 400);
}

#[test]
fn login_form_redirects_when_already_signed_in() {
    let db = make_db();
    let (_, token) = login_as(&db, "guest@example.com");

    let resp = dispatch(get_request("/login", Some(&token)), &db);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");
}

#[test]
fn logout_revokes_session_and_clears_cookie() {
    let db = make_db();
    let (_, token) = login_as(&db, "guest@example.com");

    let resp = dispatch(form_request(Method::POST, "/logout", Some(&token), ""), &db);

    assert_eq!(resp.status(), 302);
    let clearing = set_cookie(&resp, "session").expect("clearing cookie");
    assert!(clearing.contains("Max-Age=0"));

    let user = db
        .with_conn(|conn| sessions::load_user_from_session(conn, &token, now_unix()))
        .unwrap();
    assert!(user.is_none());
}
