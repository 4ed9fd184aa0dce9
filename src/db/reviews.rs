use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::domain::review::{NewReview, Review, ReviewWithAuthor};
use crate::errors::ServerError;

pub fn insert(
    conn: &Connection,
    listing_id: i64,
    new: &NewReview,
    author_id: i64,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into reviews (listing_id, rating, comment, author_id, created_at)
        values (?1, ?2, ?3, ?4, ?5)
        "#,
        params![listing_id, new.rating, new.comment, author_id, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert review failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Reviews of a listing with their authors resolved, oldest first.
pub fn for_listing(
    conn: &Connection,
    listing_id: i64,
) -> Result<Vec<ReviewWithAuthor>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select r.id, r.listing_id, r.rating, r.comment, r.author_id, r.created_at, u.email
            from reviews r
            join users u on u.id = r.author_id
            where r.listing_id = ?
            order by r.id
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("prepare reviews failed: {e}")))?;

    let rows = stmt
        .query_map(params![listing_id], |row| {
            Ok(ReviewWithAuthor {
                review: Review {
                    id: row.get(0)?,
                    listing_id: row.get(1)?,
                    rating: row.get(2)?,
                    comment: row.get(3)?,
                    author_id: row.get(4)?,
                    created_at: row.get(5)?,
                },
                author_email: row.get(6)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("query reviews failed: {e}")))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(format!("read review failed: {e}")))?);
    }
    Ok(out)
}

/// Delete by review id alone; the caller's listing id is not checked.
pub fn delete(conn: &Connection, review_id: i64) -> Result<bool, ServerError> {
    let changed = conn
        .execute("delete from reviews where id = ?", params![review_id])
        .map_err(|e| ServerError::DbError(format!("delete review failed: {e}")))?;
    Ok(changed > 0)
}
