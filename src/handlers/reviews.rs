use chrono::Utc;

use crate::db::{self, Database};
use crate::domain::ReviewInput;
use crate::errors::{ResultResp, ServerError};
use crate::flash::Flash;
use crate::guards::{self, Gate};
use crate::request::RequestCtx;
use crate::responses::redirect_with_flash;

fn review_input(ctx: &RequestCtx) -> Result<ReviewInput, ServerError> {
    let raw = ctx.payload("review")?;
    serde_json::from_value(raw.clone())
        .map_err(|e| ServerError::BadRequest(format!("malformed review payload: {e}")))
}

pub fn create(ctx: &RequestCtx, db: &Database, listing_id: i64) -> ResultResp {
    let user = match guards::require_login(ctx)? {
        Gate::Pass(user) => user,
        Gate::Halt(resp) => return Ok(resp),
    };

    let new = review_input(ctx)?.into_new_review()?;

    if db.with_conn(|conn| db::listings::find(conn, listing_id))?.is_none() {
        return redirect_with_flash(
            "/listings",
            Flash::error("Listing you requested does not exist!"),
        );
    }

    let now = Utc::now().naive_utc();
    db.with_conn(|conn| db::reviews::insert(conn, listing_id, &new, user.id, now))?;

    redirect_with_flash(
        &format!("/listings/{listing_id}"),
        Flash::success("New Review Created!"),
    )
}

/// Deletes by review id alone; the listing id only shapes the redirect.
pub fn destroy(_ctx: &RequestCtx, db: &Database, listing_id: i64, review_id: i64) -> ResultResp {
    db.with_conn(|conn| db::reviews::delete(conn, review_id))?;

    redirect_with_flash(
        &format!("/listings/{listing_id}"),
        Flash::success("Review Deleted!"),
    )
}
