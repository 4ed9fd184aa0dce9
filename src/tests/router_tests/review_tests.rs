use http::Method;

use crate::tests::utils::{
    count, dispatch, form_request, location, login_as, make_db, read_body, VALID_LISTING_FORM,
};

fn seed_listing(db: &crate::db::Database, token: &str) {
    dispatch(
        form_request(Method::POST, "/listings", Some(token), VALID_LISTING_FORM),
        db,
    );
}

#[test]
fn review_create_persists_and_redirects_to_listing() {
    let db = make_db();
    let (_, token) = login_as(&db, "guest@example.com");
    seed_listing(&db, &token);

    let resp = dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews",
            Some(&token),
            "review%5Brating%5D=4&review%5Bcomment%5D=lovely+stay",
        ),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings/1");
    assert_eq!(count(&db, "reviews"), 1);
}

#[test]
fn review_rating_out_of_range_responds_400_and_persists_nothing() {
    let db = make_db();
    let (_, token) = login_as(&db, "guest@example.com");
    seed_listing(&db, &token);

    let resp = dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews",
            Some(&token),
            "review%5Brating%5D=6&review%5Bcomment%5D=x",
        ),
        &db,
    );

    assert_eq!(resp.status(), 400);
    assert!(read_body(resp).contains("rating must be between 1 and 5"));
    assert_eq!(count(&db, "reviews"), 0);
}

#[test]
fn review_missing_comment_responds_400() {
    let db = make_db();
    let (_, token) = login_as(&db, "guest@example.com");
    seed_listing(&db, &token);

    let resp = dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews",
            Some(&token),
            "review%5Brating%5D=3",
        ),
        &db,
    );

    assert_eq!(resp.status(), 400);
    assert!(read_body(resp).contains("comment is required"));
    assert_eq!(count(&db, "reviews"), 0);
}

#[test]
fn review_create_requires_login() {
    let db = make_db();
    let (_, token) = login_as(&db, "host@example.com");
    seed_listing(&db, &token);

    let resp = dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews",
            None,
            "review%5Brating%5D=4&review%5Bcomment%5D=x",
        ),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    assert_eq!(count(&db, "reviews"), 0);
}

#[test]
fn review_on_missing_listing_soft_redirects() {
    let db = make_db();
    let (_, token) = login_as(&db, "guest@example.com");

    let resp = dispatch(
        form_request(
            Method::POST,
            "/listings/999/reviews",
            Some(&token),
            "review%5Brating%5D=4&review%5Bcomment%5D=x",
        ),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");
    assert_eq!(count(&db, "reviews"), 0);
}

#[test]
fn review_delete_removes_row_and_redirects() {
    let db = make_db();
    let (_, token) = login_as(&db, "guest@example.com");
    seed_listing(&db, &token);
    dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews",
            Some(&token),
            "review%5Brating%5D=4&review%5Bcomment%5D=x",
        ),
        &db,
    );

    let resp = dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews/1?_method=DELETE",
            Some(&token),
            "",
        ),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings/1");
    assert_eq!(count(&db, "reviews"), 0);
}
