use maud::{html, Markup};

use crate::auth::CurrentUser;
use crate::domain::Listing;
use crate::flash::Flash;
use crate::templates::components::listing_card;
use crate::templates::desktop_layout;

pub fn listing_index_page(
    listings: &[Listing],
    user: Option<&CurrentUser>,
    flash: Option<&Flash>,
) -> Markup {
    desktop_layout(
        "All Listings",
        user,
        flash,
        html! {
            main class="container" {
                h1 { "All Listings" }
                @if listings.is_empty() {
                    p { "No listings yet." }
                } @else {
                    div class="grid" {
                        @for listing in listings {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}
