use maud::{html, Markup};

use crate::domain::Listing;

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a href=(format!("/listings/{}", listing.id)) class="card" {
            @if let Some(url) = &listing.image_url {
                img src=(url) alt=(listing.title);
            }
            div class="card-body" {
                h2 { (listing.title) }
                p { (listing.location) ", " (listing.country) }
                p class="price" { "₹ " (listing.price) " / night" }
            }
        }
    }
}
