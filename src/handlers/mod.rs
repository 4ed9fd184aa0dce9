pub mod auth;
pub mod listings;
pub mod reviews;

use maud::Markup;

use crate::errors::ResultResp;
use crate::flash::Flash;
use crate::request::RequestCtx;
use crate::responses::{html_response, html_with_cookies};
use crate::templates::pages;

pub fn home(ctx: &RequestCtx) -> ResultResp {
    render(ctx, pages::home_page(ctx.user.as_ref(), ctx.flash.as_ref()))
}

/// Render a page; a displayed flash is cleared so it shows only once.
pub(crate) fn render(ctx: &RequestCtx, markup: Markup) -> ResultResp {
    if ctx.flash.is_some() {
        html_with_cookies(markup, &[Flash::clear_cookie()])
    } else {
        html_response(markup)
    }
}
