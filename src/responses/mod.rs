pub mod errors;
pub mod html;

pub use errors::error_to_response;
pub use html::{html_response, html_with_cookies, redirect, redirect_with_cookies, redirect_with_flash};
