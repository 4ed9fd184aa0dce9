use maud::{html, Markup};

use crate::templates::desktop_layout;

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        None,
        None,
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p { (message) }
                a href="/listings" { "Back to listings" }
            }
        },
    )
}
