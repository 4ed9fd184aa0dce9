use maud::{html, Markup};

use crate::auth::CurrentUser;
use crate::flash::Flash;
use crate::templates::desktop_layout;

pub fn listing_new_page(user: Option<&CurrentUser>, flash: Option<&Flash>) -> Markup {
    desktop_layout(
        "New Listing",
        user,
        flash,
        html! {
            main class="container narrow" {
                h1 { "Create a New Listing" }
                form method="post" action="/listings" class="card" {
                    (listing_fields(None))
                    button type="submit" { "Create" }
                }
            }
        },
    )
}

/// Shared field set for the new and edit forms. Values prefill on edit.
pub struct ListingFormValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub country: &'a str,
    pub price: f64,
    pub image_url: Option<&'a str>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}

pub fn listing_fields(values: Option<&ListingFormValues>) -> Markup {
    let title = values.map(|v| v.title).unwrap_or("");
    let description = values.map(|v| v.description).unwrap_or("");
    let location = values.map(|v| v.location).unwrap_or("");
    let country = values.map(|v| v.country).unwrap_or("");
    let price = values.map(|v| v.price.to_string()).unwrap_or_default();
    let image_url = values.and_then(|v| v.image_url).unwrap_or("");
    let lng = values
        .and_then(|v| v.lng)
        .map(|n| n.to_string())
        .unwrap_or_default();
    let lat = values
        .and_then(|v| v.lat)
        .map(|n| n.to_string())
        .unwrap_or_default();

    html! {
        label for="title" { "Title" }
        input type="text" name="listing[title]" id="title" value=(title) required;

        label for="description" { "Description" }
        textarea name="listing[description]" id="description" required { (description) }

        label for="location" { "Location" }
        input type="text" name="listing[location]" id="location" value=(location) required;

        label for="country" { "Country" }
        input type="text" name="listing[country]" id="country" value=(country) required;

        label for="price" { "Price per night" }
        input type="number" name="listing[price]" id="price" value=(price) min="0" step="any" required;

        label for="image-url" { "Image URL (optional)" }
        input type="url" name="listing[image][url]" id="image-url" value=(image_url);

        fieldset {
            legend { "Coordinates (optional)" }
            label for="lng" { "Longitude" }
            input type="number" name="listing[geometry][coordinates][0]" id="lng"
                value=(lng) min="-180" max="180" step="any";
            label for="lat" { "Latitude" }
            input type="number" name="listing[geometry][coordinates][1]" id="lat"
                value=(lat) min="-180" max="180" step="any";
        }
    }
}
