use maud::{html, Markup};

use crate::auth::CurrentUser;
use crate::domain::{ListingDetail, ReviewWithAuthor};
use crate::flash::Flash;
use crate::templates::desktop_layout;

pub fn listing_show_page(
    detail: &ListingDetail,
    reviews: &[ReviewWithAuthor],
    user: Option<&CurrentUser>,
    flash: Option<&Flash>,
) -> Markup {
    let listing = &detail.listing;
    let is_owner = user.map(|u| u.id == listing.owner_id).unwrap_or(false);

    desktop_layout(
        &listing.title,
        user,
        flash,
        html! {
            main class="container" {
                h1 { (listing.title) }
                p class="owner" { "Hosted by " (detail.owner_email) }

                @if let Some(url) = &listing.image_url {
                    img src=(url) alt=(listing.title) class="show-image";
                }

                section class="card" {
                    p { (listing.description) }
                    p { strong { "₹ " (listing.price) " / night" } }
                    p { (listing.location) ", " (listing.country) }
                    @if let (Some(lng), Some(lat)) = (listing.geometry_lng, listing.geometry_lat) {
                        p class="coords" { "Located at " (lng) ", " (lat) }
                    }
                }

                @if is_owner {
                    div class="actions" {
                        a href=(format!("/listings/{}/edit", listing.id)) class="button" { "Edit" }
                        form
                            method="post"
                            action=(format!("/listings/{}?_method=DELETE", listing.id))
                            class="inline"
                        {
                            button type="submit" { "Delete" }
                        }
                    }
                }

                section class="reviews" {
                    h2 { "Reviews" }

                    @if user.is_some() {
                        (review_form(listing.id))
                    } @else {
                        p { a href="/login" { "Log in" } " to leave a review." }
                    }

                    @if reviews.is_empty() {
                        p { "No reviews yet." }
                    }
                    @for entry in reviews {
                        (review_card(listing.id, entry))
                    }
                }
            }
        },
    )
}

fn review_form(listing_id: i64) -> Markup {
    html! {
        form method="post" action=(format!("/listings/{listing_id}/reviews")) class="card" {
            label for="rating" { "Rating" }
            select name="review[rating]" id="rating" required {
                @for n in 1..=5 {
                    option value=(n) selected[n == 5] { (n) }
                }
            }
            label for="comment" { "Comment" }
            textarea name="review[comment]" id="comment" required {}
            button type="submit" { "Submit Review" }
        }
    }
}

fn review_card(listing_id: i64, entry: &ReviewWithAuthor) -> Markup {
    let review = &entry.review;
    html! {
        div class="card review" {
            p class="author" { strong { (entry.author_email) } }
            p class="rating" { (review.rating) " / 5" }
            p { (review.comment) }
            form
                method="post"
                action=(format!("/listings/{listing_id}/reviews/{}?_method=DELETE", review.id))
                class="inline"
            {
                button type="submit" { "Delete" }
            }
        }
    }
}
