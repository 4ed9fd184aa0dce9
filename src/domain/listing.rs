use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::errors::ServerError;
use crate::forms;
use crate::validation;

/// A rentable property record as stored in the `listings` table.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub country: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub image_filename: Option<String>,
    pub geometry_lng: Option<f64>,
    pub geometry_lat: Option<f64>,
    pub owner_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Listing joined with its owner's email, for the detail page.
#[derive(Debug)]
pub struct ListingDetail {
    pub listing: Listing,
    pub owner_email: String,
}

/// Incoming listing payload, nested under the `listing` key.
///
/// Every field is optional so that all missing-field and range violations
/// can be collected in one validation pass.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ListingInput {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description must not be empty")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "location is required"),
        length(min = 1, message = "location must not be empty")
    )]
    pub location: Option<String>,
    #[validate(
        required(message = "country is required"),
        length(min = 1, message = "country must not be empty")
    )]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "forms::opt_f64")]
    #[validate(
        required(message = "price is required"),
        range(min = 0.0, message = "price must not be negative")
    )]
    pub price: Option<f64>,
    #[validate(nested)]
    pub image: Option<ImageInput>,
    #[validate(nested)]
    pub geometry: Option<GeometryInput>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ImageInput {
    #[validate(url(message = "image url must be a valid url"))]
    pub url: Option<String>,
    pub filename: Option<String>,
}

/// GeoJSON-style point. Only the "Point" type is accepted.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GeometryInput {
    #[serde(rename = "type")]
    #[validate(custom(function = validate_point_type))]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "forms::opt_f64_vec")]
    #[validate(
        required(message = "geometry coordinates are required"),
        custom(function = validate_coordinates)
    )]
    pub coordinates: Option<Vec<f64>>,
}

fn validate_point_type(kind: &str) -> Result<(), ValidationError> {
    if kind == "Point" {
        Ok(())
    } else {
        Err(ValidationError::new("geometry_type")
            .with_message("geometry type must be \"Point\"".into()))
    }
}

fn validate_coordinates(coords: &Vec<f64>) -> Result<(), ValidationError> {
    if coords.len() != 2 {
        return Err(ValidationError::new("coordinates")
            .with_message("coordinates must be a [lng, lat] pair".into()));
    }
    if coords.iter().any(|c| !(-180.0..=180.0).contains(c)) {
        return Err(ValidationError::new("coordinates")
            .with_message("coordinates must be within [-180, 180]".into()));
    }
    Ok(())
}

/// Validated field set ready for persistence.
#[derive(Debug)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub country: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub image_filename: Option<String>,
    pub geometry: Option<(f64, f64)>,
}

impl ListingInput {
    /// (lng, lat) when a geometry was supplied.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let coords = self.geometry.as_ref().and_then(|g| g.coordinates.as_ref())?;
        match coords.as_slice() {
            [lng, lat] => Some((*lng, *lat)),
            _ => None,
        }
    }

    /// Validate and unwrap into the persisted field set.
    pub fn into_new_listing(self) -> Result<NewListing, ServerError> {
        validation::check(&self)?;
        let geometry = self.coordinates();
        let (image_url, image_filename) = match self.image {
            Some(image) => (image.url, image.filename),
            None => (None, None),
        };
        let (Some(title), Some(description), Some(location), Some(country), Some(price)) = (
            self.title,
            self.description,
            self.location,
            self.country,
            self.price,
        ) else {
            // required() above guarantees these are present
            return Err(ServerError::InternalError);
        };
        Ok(NewListing {
            title,
            description,
            location,
            country,
            price,
            image_url,
            image_filename,
            geometry,
        })
    }
}
