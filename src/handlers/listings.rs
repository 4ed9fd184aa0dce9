use chrono::Utc;

use crate::db::{self, Database};
use crate::domain::ListingInput;
use crate::errors::{ResultResp, ServerError};
use crate::flash::Flash;
use crate::guards::{self, Gate};
use crate::handlers::render;
use crate::request::RequestCtx;
use crate::responses::redirect_with_flash;
use crate::templates::pages;

fn listing_input(ctx: &RequestCtx) -> Result<ListingInput, ServerError> {
    let raw = ctx.payload("listing")?;
    serde_json::from_value(raw.clone())
        .map_err(|e| ServerError::BadRequest(format!("malformed listing payload: {e}")))
}

pub fn index(ctx: &RequestCtx, db: &Database) -> ResultResp {
    let listings = db.with_conn(|conn| db::listings::all(conn))?;
    render(
        ctx,
        pages::listing_index_page(&listings, ctx.user.as_ref(), ctx.flash.as_ref()),
    )
}

pub fn new_form(ctx: &RequestCtx) -> ResultResp {
    let user = match guards::require_login(ctx)? {
        Gate::Pass(user) => user,
        Gate::Halt(resp) => return Ok(resp),
    };
    render(
        ctx,
        pages::listing_new_page(Some(&user), ctx.flash.as_ref()),
    )
}

pub fn show(ctx: &RequestCtx, db: &Database, id: i64) -> ResultResp {
    let Some(detail) = db.with_conn(|conn| db::listings::find_detail(conn, id))? else {
        return redirect_with_flash(
            "/listings",
            Flash::error("Listing you requested does not exist!"),
        );
    };
    let reviews = db.with_conn(|conn| db::reviews::for_listing(conn, id))?;

    render(
        ctx,
        pages::listing_show_page(&detail, &reviews, ctx.user.as_ref(), ctx.flash.as_ref()),
    )
}

pub fn create(ctx: &RequestCtx, db: &Database) -> ResultResp {
    let user = match guards::require_login(ctx)? {
        Gate::Pass(user) => user,
        Gate::Halt(resp) => return Ok(resp),
    };

    let new = listing_input(ctx)?.into_new_listing()?;
    let now = Utc::now().naive_utc();
    db.with_conn(|conn| db::listings::insert(conn, &new, user.id, now))?;

    redirect_with_flash("/listings", Flash::success("New Listing Created!"))
}

pub fn edit_form(ctx: &RequestCtx, db: &Database, id: i64) -> ResultResp {
    let (user, listing) = match guards::require_owner(ctx, db, id)? {
        Gate::Pass(pass) => pass,
        Gate::Halt(resp) => return Ok(resp),
    };
    render(
        ctx,
        pages::listing_edit_page(&listing, Some(&user), ctx.flash.as_ref()),
    )
}

pub fn update(ctx: &RequestCtx, db: &Database, id: i64) -> ResultResp {
    let (_, listing) = match guards::require_owner(ctx, db, id)? {
        Gate::Pass(pass) => pass,
        Gate::Halt(resp) => return Ok(resp),
    };

    let new = listing_input(ctx)?.into_new_listing()?;
    let now = Utc::now().naive_utc();
    db.with_conn(|conn| db::listings::update(conn, listing.id, &new, now))?;

    redirect_with_flash(
        &format!("/listings/{}", listing.id),
        Flash::success("Listing Updated!"),
    )
}

pub fn destroy(ctx: &RequestCtx, db: &Database, id: i64) -> ResultResp {
    let (_, listing) = match guards::require_owner(ctx, db, id)? {
        Gate::Pass(pass) => pass,
        Gate::Halt(resp) => return Ok(resp),
    };

    db.with_conn(|conn| db::listings::delete(conn, listing.id))?;

    redirect_with_flash("/listings", Flash::success("Listing Deleted!"))
}
