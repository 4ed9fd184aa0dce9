use maud::{html, Markup};

use crate::auth::CurrentUser;
use crate::domain::Listing;
use crate::flash::Flash;
use crate::templates::desktop_layout;
use crate::templates::pages::listing_new::{listing_fields, ListingFormValues};

pub fn listing_edit_page(
    listing: &Listing,
    user: Option<&CurrentUser>,
    flash: Option<&Flash>,
) -> Markup {
    let values = ListingFormValues {
        title: &listing.title,
        description: &listing.description,
        location: &listing.location,
        country: &listing.country,
        price: listing.price,
        image_url: listing.image_url.as_deref(),
        lng: listing.geometry_lng,
        lat: listing.geometry_lat,
    };

    desktop_layout(
        "Edit Listing",
        user,
        flash,
        html! {
            main class="container narrow" {
                h1 { "Edit Listing" }
                form
                    method="post"
                    action=(format!("/listings/{}?_method=PUT", listing.id))
                    class="card"
                {
                    (listing_fields(Some(&values)))
                    button type="submit" { "Save" }
                }
            }
        },
    )
}
