use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

use crate::errors::ResultResp;
use crate::flash::Flash;

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_cookies(markup, &[])
}

/// 200 HTML response, optionally attaching Set-Cookie headers
/// (flash clearing, session install).
pub fn html_with_cookies(markup: Markup, cookies: &[String]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8");
    for cookie in cookies {
        builder = builder.header("Set-Cookie", cookie.as_str());
    }

    let resp = builder.body(Body::from(markup.into_string())).unwrap();
    Ok(resp)
}

pub fn redirect(location: &str) -> ResultResp {
    redirect_with_cookies(location, &[])
}

pub fn redirect_with_cookies(location: &str, cookies: &[String]) -> ResultResp {
    let mut builder = ResponseBuilder::new().status(302).header("Location", location);
    for cookie in cookies {
        builder = builder.header("Set-Cookie", cookie.as_str());
    }

    let resp = builder.body(Body::empty()).unwrap();
    Ok(resp)
}

/// 302 carrying a one-shot notice for the next render.
pub fn redirect_with_flash(location: &str, flash: Flash) -> ResultResp {
    redirect_with_cookies(location, &[flash.to_cookie()])
}
