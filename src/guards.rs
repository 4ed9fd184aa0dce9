//! Capability checks executed before mutating handlers. Each gate either
//! passes a value through or halts with a ready-made redirect response, so
//! handlers thread them in fixed order: login -> ownership -> validation.

use astra::Response;

use crate::auth::CurrentUser;
use crate::db::{self, Database};
use crate::domain::Listing;
use crate::errors::ServerError;
use crate::flash::Flash;
use crate::request::RequestCtx;
use crate::responses::redirect_with_flash;

pub enum Gate<T> {
    Pass(T),
    Halt(Response),
}

/// Fails onto the login page when no session subject exists.
pub fn require_login(ctx: &RequestCtx) -> Result<Gate<CurrentUser>, ServerError> {
    match &ctx.user {
        Some(user) => Ok(Gate::Pass(user.clone())),
        None => {
            let resp = redirect_with_flash("/login", Flash::error("You must be logged in"))?;
            Ok(Gate::Halt(resp))
        }
    }
}

/// Loads the target listing and fails unless the session subject owns it.
/// A missing listing halts with the soft not-found redirect.
pub fn require_owner(
    ctx: &RequestCtx,
    db: &Database,
    listing_id: i64,
) -> Result<Gate<(CurrentUser, Listing)>, ServerError> {
    let user = match require_login(ctx)? {
        Gate::Pass(user) => user,
        Gate::Halt(resp) => return Ok(Gate::Halt(resp)),
    };

    let Some(listing) = db.with_conn(|conn| db::listings::find(conn, listing_id))? else {
        let resp = redirect_with_flash(
            "/listings",
            Flash::error("Listing you requested does not exist!"),
        )?;
        return Ok(Gate::Halt(resp));
    };

    if listing.owner_id != user.id {
        let resp = redirect_with_flash(
            &format!("/listings/{listing_id}"),
            Flash::error("You are not the owner of this listing"),
        )?;
        return Ok(Gate::Halt(resp));
    }

    Ok(Gate::Pass((user, listing)))
}
