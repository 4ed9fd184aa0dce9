use astra::{Body, Response, ResponseBuilder};

use crate::errors::ServerError;
use crate::flash::Flash;
use crate::templates;

/// Terminal conversion of a handler error into an HTTP response.
/// The serve loop in `main` is the only caller.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => error_page_response(404, "Page Not Found"),
        ServerError::BadRequest(msg) => error_page_response(400, &msg),
        ServerError::Unauthorized(msg) => {
            // Auth failures bounce to the login page instead of an error page.
            ResponseBuilder::new()
                .status(302)
                .header("Location", "/login")
                .header("Set-Cookie", Flash::error(msg).to_cookie())
                .body(Body::empty())
                .unwrap()
        }
        ServerError::DbError(msg) => {
            tracing::error!(error = %msg, "request failed");
            error_page_response(500, "Something went wrong")
        }
        ServerError::InternalError => error_page_response(500, "Something went wrong"),
    }
}

/// Build an HTML error page.
pub fn error_page_response(status: u16, message: &str) -> Response {
    let markup = templates::pages::error_page(status, message);

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .unwrap()
}
