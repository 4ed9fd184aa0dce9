use crate::auth::{self, sessions};
use crate::db::{self, Database};
use crate::errors::{ResultResp, ServerError};
use crate::flash::Flash;
use crate::handlers::render;
use crate::request::{now_unix, RequestCtx};
use crate::responses::{redirect, redirect_with_cookies};
use crate::templates::pages;

pub fn login_form(ctx: &RequestCtx) -> ResultResp {
    if ctx.user.is_some() {
        return redirect("/listings");
    }
    render(ctx, pages::login_page(ctx.flash.as_ref()))
}

pub fn login(ctx: &RequestCtx, db: &Database) -> ResultResp {
    let email = ctx
        .body
        .as_ref()
        .and_then(|body| body.get("email"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| ServerError::BadRequest("email is required".into()))?;
    let email = auth::normalize_email(email)?;

    let now = now_unix();
    let token = db.with_conn(|conn| {
        let user_id = db::users::get_or_create_user(conn, &email, now)?;
        sessions::create_session(conn, user_id, now)
    })?;

    redirect_with_cookies(
        "/listings",
        &[
            sessions::session_cookie(&token),
            Flash::success("Welcome back to roost!").to_cookie(),
        ],
    )
}

pub fn logout(ctx: &RequestCtx, db: &Database) -> ResultResp {
    if let Some(token) = ctx.cookies.get(sessions::SESSION_COOKIE) {
        db.with_conn(|conn| sessions::revoke_session(conn, token, now_unix()))?;
    }

    redirect_with_cookies(
        "/listings",
        &[
            sessions::clear_session_cookie(),
            Flash::success("Logged you out!").to_cookie(),
        ],
    )
}
