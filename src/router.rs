use astra::Request;

use crate::db::Database;
use crate::errors::{ResultResp, ServerError};
use crate::handlers;
use crate::request::RequestCtx;

/// Dispatch a request to its handler. Gates (login, ownership) and payload
/// validation run inside the handlers, in that fixed order.
pub fn handle(req: Request, db: &Database) -> ResultResp {
    let ctx = RequestCtx::from_request(req, db)?;
    tracing::debug!(method = %ctx.method, path = %ctx.path, "dispatch");

    let segments = ctx.segments();
    match (ctx.method.as_str(), segments.as_slice()) {
        ("GET", []) => handlers::home(&ctx),

        ("GET", ["login"]) => handlers::auth::login_form(&ctx),
        ("POST", ["login"]) => handlers::auth::login(&ctx, db),
        ("POST", ["logout"]) => handlers::auth::logout(&ctx, db),

        ("GET", ["listings"]) => handlers::listings::index(&ctx, db),
        ("POST", ["listings"]) => handlers::listings::create(&ctx, db),
        ("GET", ["listings", "new"]) => handlers::listings::new_form(&ctx),
        ("GET", ["listings", id]) => handlers::listings::show(&ctx, db, parse_id(id)?),
        ("PUT", ["listings", id]) => handlers::listings::update(&ctx, db, parse_id(id)?),
        ("DELETE", ["listings", id]) => handlers::listings::destroy(&ctx, db, parse_id(id)?),
        ("GET", ["listings", id, "edit"]) => handlers::listings::edit_form(&ctx, db, parse_id(id)?),

        ("POST", ["listings", id, "reviews"]) => {
            handlers::reviews::create(&ctx, db, parse_id(id)?)
        }
        ("DELETE", ["listings", id, "reviews", review_id]) => {
            handlers::reviews::destroy(&ctx, db, parse_id(id)?, parse_id(review_id)?)
        }

        _ => Err(ServerError::NotFound),
    }
}

// Malformed ids fall through to the hard 404.
fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}
