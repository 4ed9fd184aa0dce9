use maud::{html, Markup};

use crate::flash::Flash;
use crate::templates::desktop_layout;

pub fn login_page(flash: Option<&Flash>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        flash,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" {
                    "Enter your email to sign in. New emails get an account automatically."
                }
                form method="post" action="/login" class="card" {
                    label for="email" { "Email" }
                    input type="email" name="email" id="email" required;
                    button type="submit" { "Sign in" }
                }
            }
        },
    )
}
