use maud::{html, Markup, DOCTYPE};

use crate::auth::CurrentUser;
use crate::flash::{Flash, FlashKind};

pub fn desktop_layout(
    title: &str,
    user: Option<&CurrentUser>,
    flash: Option<&Flash>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { "roost" }
                    nav {
                        ul {
                            li { a href="/listings" { "All Listings" } }
                            @if user.is_some() {
                                li { a href="/listings/new" { "Add New Listing" } }
                            }
                        }
                    }
                    @if let Some(u) = user {
                        div class="inline" {
                            span class="email" { (u.email) }
                            form method="post" action="/logout" class="inline" {
                                button type="submit" { "Log out" }
                            }
                        }
                    } @else {
                        a href="/login" class="text-base font-medium hover:text-blue-600" { "Login" }
                    }
                }
                @if let Some(flash) = flash {
                    (flash_banner(flash))
                }
                (content)
            }
        }
    }
}

fn flash_banner(flash: &Flash) -> Markup {
    let class = match flash.kind {
        FlashKind::Success => "flash flash-success",
        FlashKind::Error => "flash flash-error",
    };
    html! {
        div class=(class) role="alert" {
            (flash.message)
        }
    }
}
