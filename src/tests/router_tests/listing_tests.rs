use http::Method;

use crate::flash::Flash;
use crate::tests::utils::{
    count, dispatch, form_request, get_request, json_request, location, login_as, make_db,
    read_body, set_cookie, VALID_LISTING_FORM,
};

fn flash_message(resp: &astra::Response) -> Option<Flash> {
    let cookie = set_cookie(resp, "flash")?;
    let value = cookie.strip_prefix("flash=")?.split(';').next()?;
    Flash::from_cookie(value)
}

#[test]
fn create_requires_authentication() {
    let db = make_db();

    let req = form_request(Method::POST, "/listings", None, VALID_LISTING_FORM);
    let resp = dispatch(req, &db);

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    assert_eq!(count(&db, "listings"), 0);
}

#[test]
fn authenticated_create_persists_listing_and_redirects() {
    let db = make_db();
    let (user_id, token) = login_as(&db, "host@example.com");

    let req = form_request(Method::POST, "/listings", Some(&token), VALID_LISTING_FORM);
    let resp = dispatch(req, &db);

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");
    let flash = flash_message(&resp).expect("flash cookie");
    assert_eq!(flash.message, "New Listing Created!");

    let owner: i64 = db
        .with_conn(|conn| {
            conn.query_row("select owner_id from listings", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(owner, user_id);
    assert_eq!(count(&db, "listings"), 1);
}

#[test]
fn json_create_is_equivalent_to_form_create() {
    let db = make_db();
    let (_, token) = login_as(&db, "host@example.com");

    let req = json_request(
        Method::POST,
        "/listings",
        Some(&token),
        r#"{"listing":{"title":"Villa","description":"nice","location":"Goa","country":"India","price":100}}"#,
    );
    let resp = dispatch(req, &db);

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");
    assert_eq!(count(&db, "listings"), 1);
}

#[test]
fn create_missing_fields_responds_400_and_persists_nothing() {
    let db = make_db();
    let (_, token) = login_as(&db, "host@example.com");

    let req = form_request(
        Method::POST,
        "/listings",
        Some(&token),
        "listing%5Btitle%5D=Villa",
    );
    let resp = dispatch(req, &db);

    assert_eq!(resp.status(), 400);
    let body = read_body(resp);
    assert!(body.contains("price is required"));
    assert!(body.contains("description is required"));
    assert_eq!(count(&db, "listings"), 0);
}

#[test]
fn create_rejects_negative_price() {
    let db = make_db();
    let (_, token) = login_as(&db, "host@example.com");

    let body = "listing%5Btitle%5D=Villa&listing%5Bdescription%5D=nice\
         &listing%5Blocation%5D=Goa&listing%5Bcountry%5D=India&listing%5Bprice%5D=-5";
    let req = form_request(Method::POST, "/listings", Some(&token), body);
    let resp = dispatch(req, &db);

    assert_eq!(resp.status(), 400);
    assert!(read_body(resp).contains("price must not be negative"));
    assert_eq!(count(&db, "listings"), 0);
}

#[test]
fn index_lists_created_listings() {
    let db = make_db();
    let (_, token) = login_as(&db, "host@example.com");
    dispatch(
        form_request(Method::POST, "/listings", Some(&token), VALID_LISTING_FORM),
        &db,
    );

    let resp = dispatch(get_request("/listings", None), &db);
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Villa"));
}

#[test]
fn show_resolves_owner_and_reviews() {
    let db = make_db();
    let (_, token) = login_as(&db, "host@example.com");
    dispatch(
        form_request(Method::POST, "/listings", Some(&token), VALID_LISTING_FORM),
        &db,
    );
    dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews",
            Some(&token),
            "review%5Brating%5D=4&review%5Bcomment%5D=lovely+stay",
        ),
        &db,
    );

    let resp = dispatch(get_request("/listings/1", None), &db);
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Villa"));
    assert!(body.contains("host@example.com"));
    assert!(body.contains("lovely stay"));
}

#[test]
fn show_unknown_id_redirects_with_flash() {
    let db = make_db();

    let resp = dispatch(get_request("/listings/999", None), &db);

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");
    let flash = flash_message(&resp).expect("flash cookie");
    assert!(flash.message.contains("does not exist"));
}

#[test]
fn flash_shows_once_then_clears() {
    let db = make_db();

    let redirect = dispatch(get_request("/listings/999", None), &db);
    let cookie = set_cookie(&redirect, "flash").unwrap();
    let cookie_pair = cookie.split(';').next().unwrap().to_string();

    let mut req = get_request("/listings", None);
    req.headers_mut()
        .insert("Cookie", cookie_pair.parse().unwrap());
    let resp = dispatch(req, &db);

    assert_eq!(resp.status(), 200);
    let clearing = set_cookie(&resp, "flash").expect("flash should be cleared");
    assert!(clearing.contains("Max-Age=0"));
    assert!(read_body(resp).contains("does not exist"));
}

#[test]
fn malformed_id_is_a_hard_404() {
    let db = make_db();

    let resp = dispatch(get_request("/listings/not-an-id", None), &db);
    assert_eq!(resp.status(), 404);
}

#[test]
fn unmatched_path_renders_404_page() {
    let db = make_db();

    let resp = dispatch(get_request("/nope", None), &db);
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("Page Not Found"));
}

#[test]
fn unauthenticated_new_form_redirects_to_login() {
    let db = make_db();

    let resp = dispatch(get_request("/listings/new", None), &db);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn non_owner_update_is_rejected_and_listing_unchanged() {
    let db = make_db();
    let (_, owner_token) = login_as(&db, "owner@example.com");
    dispatch(
        form_request(Method::POST, "/listings", Some(&owner_token), VALID_LISTING_FORM),
        &db,
    );

    let (_, other_token) = login_as(&db, "intruder@example.com");
    let body = "listing%5Btitle%5D=Stolen&listing%5Bdescription%5D=hah\
         &listing%5Blocation%5D=X&listing%5Bcountry%5D=Y&listing%5Bprice%5D=1";
    let req = form_request(
        Method::POST,
        "/listings/1?_method=PUT",
        Some(&other_token),
        body,
    );
    let resp = dispatch(req, &db);

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings/1");
    let flash = flash_message(&resp).expect("flash cookie");
    assert!(flash.message.contains("not the owner"));

    let title: String = db
        .with_conn(|conn| {
            conn.query_row("select title from listings where id = 1", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(title, "Villa");
}

#[test]
fn owner_update_overwrites_listing() {
    let db = make_db();
    let (_, token) = login_as(&db, "owner@example.com");
    dispatch(
        form_request(Method::POST, "/listings", Some(&token), VALID_LISTING_FORM),
        &db,
    );

    let body = "listing%5Btitle%5D=Cottage&listing%5Bdescription%5D=cosy\
         &listing%5Blocation%5D=Goa&listing%5Bcountry%5D=India&listing%5Bprice%5D=80";
    let resp = dispatch(
        form_request(Method::POST, "/listings/1?_method=PUT", Some(&token), body),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings/1");

    let title: String = db
        .with_conn(|conn| {
            conn.query_row("select title from listings where id = 1", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(title, "Cottage");
}

#[test]
fn non_owner_delete_is_rejected() {
    let db = make_db();
    let (_, owner_token) = login_as(&db, "owner@example.com");
    dispatch(
        form_request(Method::POST, "/listings", Some(&owner_token), VALID_LISTING_FORM),
        &db,
    );

    let (_, other_token) = login_as(&db, "intruder@example.com");
    let resp = dispatch(
        form_request(
            Method::POST,
            "/listings/1?_method=DELETE",
            Some(&other_token),
            "",
        ),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings/1");
    assert_eq!(count(&db, "listings"), 1);
}

#[test]
fn owner_delete_removes_listing_but_leaves_reviews() {
    let db = make_db();
    let (_, token) = login_as(&db, "owner@example.com");
    dispatch(
        form_request(Method::POST, "/listings", Some(&token), VALID_LISTING_FORM),
        &db,
    );
    dispatch(
        form_request(
            Method::POST,
            "/listings/1/reviews",
            Some(&token),
            "review%5Brating%5D=5&review%5Bcomment%5D=great",
        ),
        &db,
    );

    let resp = dispatch(
        form_request(Method::POST, "/listings/1?_method=DELETE", Some(&token), ""),
        &db,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");
    assert_eq!(count(&db, "listings"), 0);
    // Reviews are orphaned, not cascaded.
    assert_eq!(count(&db, "reviews"), 1);
}
