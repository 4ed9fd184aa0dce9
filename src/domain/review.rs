use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::errors::ServerError;
use crate::forms;
use crate::validation;

/// A rating+comment attached to a listing.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: i64,
    pub listing_id: i64,
    pub rating: i64,
    pub comment: String,
    pub author_id: i64,
    pub created_at: NaiveDateTime,
}

/// Review joined with its author's email, for the detail page.
#[derive(Debug)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author_email: String,
}

/// Incoming review payload, nested under the `review` key.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReviewInput {
    #[serde(default, deserialize_with = "forms::opt_i64")]
    #[validate(
        required(message = "rating is required"),
        range(min = 1, max = 5, message = "rating must be between 1 and 5")
    )]
    pub rating: Option<i64>,
    #[validate(
        required(message = "comment is required"),
        length(min = 1, message = "comment must not be empty")
    )]
    pub comment: Option<String>,
}

/// Validated field set ready for persistence.
#[derive(Debug)]
pub struct NewReview {
    pub rating: i64,
    pub comment: String,
}

impl ReviewInput {
    /// Validate and unwrap into the persisted field set.
    pub fn into_new_review(self) -> Result<NewReview, ServerError> {
        validation::check(&self)?;
        let (Some(rating), Some(comment)) = (self.rating, self.comment) else {
            // required() above guarantees these are present
            return Err(ServerError::InternalError);
        };
        Ok(NewReview { rating, comment })
    }
}
