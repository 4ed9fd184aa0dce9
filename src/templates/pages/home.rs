use maud::{html, Markup};

use crate::auth::CurrentUser;
use crate::flash::Flash;
use crate::templates::desktop_layout;

pub fn home_page(user: Option<&CurrentUser>, flash: Option<&Flash>) -> Markup {
    desktop_layout(
        "roost",
        user,
        flash,
        html! {
            main class="container narrow" {
                h1 { "Find your next stay" }
                p class="lead" {
                    "Browse places to stay, or list your own."
                }
                a href="/listings" class="button" { "Browse listings" }
            }
        },
    )
}
