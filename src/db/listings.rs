use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::listing::{Listing, ListingDetail, NewListing};
use crate::errors::ServerError;

const LISTING_COLUMNS: &str = "id, title, description, location, country, price, \
     image_url, image_filename, geometry_lng, geometry_lat, owner_id, created_at, updated_at";

fn listing_from_row(row: &Row) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        country: row.get(4)?,
        price: row.get(5)?,
        image_url: row.get(6)?,
        image_filename: row.get(7)?,
        geometry_lng: row.get(8)?,
        geometry_lat: row.get(9)?,
        owner_id: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

/// All listings, newest first.
pub fn all(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {LISTING_COLUMNS} from listings order by id desc"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare listings failed: {e}")))?;

    let rows = stmt
        .query_map([], listing_from_row)
        .map_err(|e| ServerError::DbError(format!("query listings failed: {e}")))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(format!("read listing failed: {e}")))?);
    }
    Ok(out)
}

pub fn find(conn: &Connection, id: i64) -> Result<Option<Listing>, ServerError> {
    conn.query_row(
        &format!("select {LISTING_COLUMNS} from listings where id = ?"),
        params![id],
        listing_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))
}

/// Listing with its owner's email resolved, for the detail page.
pub fn find_detail(conn: &Connection, id: i64) -> Result<Option<ListingDetail>, ServerError> {
    conn.query_row(
        "select l.id, l.title, l.description, l.location, l.country, l.price, \
                l.image_url, l.image_filename, l.geometry_lng, l.geometry_lat, \
                l.owner_id, l.created_at, l.updated_at, u.email \
         from listings l \
         join users u on u.id = l.owner_id \
         where l.id = ?",
        params![id],
        |row| {
            Ok(ListingDetail {
                listing: listing_from_row(row)?,
                owner_email: row.get(13)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select listing detail failed: {e}")))
}

pub fn insert(
    conn: &Connection,
    new: &NewListing,
    owner_id: i64,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    let (lng, lat) = match new.geometry {
        Some((lng, lat)) => (Some(lng), Some(lat)),
        None => (None, None),
    };

    conn.execute(
        r#"
        insert into listings (
            title, description, location, country, price,
            image_url, image_filename, geometry_lng, geometry_lat,
            owner_id, created_at, updated_at
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
        "#,
        params![
            new.title,
            new.description,
            new.location,
            new.country,
            new.price,
            new.image_url,
            new.image_filename,
            lng,
            lat,
            owner_id,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Full-field overwrite. Absent image/geometry clears those columns.
/// Returns false when no row matched the id.
pub fn update(
    conn: &Connection,
    id: i64,
    new: &NewListing,
    now: NaiveDateTime,
) -> Result<bool, ServerError> {
    let (lng, lat) = match new.geometry {
        Some((lng, lat)) => (Some(lng), Some(lat)),
        None => (None, None),
    };

    let changed = conn
        .execute(
            r#"
            update listings set
                title = ?1, description = ?2, location = ?3, country = ?4, price = ?5,
                image_url = ?6, image_filename = ?7, geometry_lng = ?8, geometry_lat = ?9,
                updated_at = ?10
            where id = ?11
            "#,
            params![
                new.title,
                new.description,
                new.location,
                new.country,
                new.price,
                new.image_url,
                new.image_filename,
                lng,
                lat,
                now,
                id,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update listing failed: {e}")))?;

    Ok(changed > 0)
}

/// Delete by id. Reviews are left untouched (no cascade).
pub fn delete(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let changed = conn
        .execute("delete from listings where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete listing failed: {e}")))?;
    Ok(changed > 0)
}
