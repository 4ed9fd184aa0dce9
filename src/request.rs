use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Request;
use serde_json::Value;

use crate::auth::sessions::{self, CurrentUser, SESSION_COOKIE};
use crate::db::Database;
use crate::errors::ServerError;
use crate::flash::{Flash, FLASH_COOKIE};
use crate::forms;

/// Everything a handler needs from the raw request: the resolved method
/// (after `_method` override), path segments, query, cookies, the decoded
/// body, the session user and any pending flash.
pub struct RequestCtx {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub cookies: HashMap<String, String>,
    pub body: Option<Value>,
    pub user: Option<CurrentUser>,
    pub flash: Option<Flash>,
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

impl RequestCtx {
    pub fn from_request(req: Request, db: &Database) -> Result<Self, ServerError> {
        let method = req.method().as_str().to_string();
        let path = req.uri().path().to_string();
        let query = parse_query(req.uri().query());
        let cookies = parse_cookies(req.headers().get("Cookie").and_then(|v| v.to_str().ok()));

        let content_type = req
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let (_, body) = req.into_parts();
        let mut body = body;
        let mut raw = String::new();
        body.reader()
            .read_to_string(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

        let body = decode_body(&raw, &content_type)?;

        // HTML forms can only POST; ?_method=PUT|DELETE routes them onward.
        let method = match query.get("_method") {
            Some(m) if method == "POST" => {
                let m = m.to_uppercase();
                if m == "PUT" || m == "DELETE" {
                    m
                } else {
                    method
                }
            }
            _ => method,
        };

        let user = match cookies.get(SESSION_COOKIE) {
            Some(token) => db.with_conn(|conn| {
                sessions::load_user_from_session(conn, token, now_unix())
            })?,
            None => None,
        };

        let flash = cookies.get(FLASH_COOKIE).and_then(|v| Flash::from_cookie(v));

        Ok(Self {
            method,
            path,
            query,
            cookies,
            body,
            user,
            flash,
        })
    }

    /// Path split on '/', empty segments dropped: "/listings/5/edit"
    /// -> ["listings", "5", "edit"].
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// The decoded payload under `key` ("listing" or "review").
    pub fn payload(&self, key: &str) -> Result<&Value, ServerError> {
        self.body
            .as_ref()
            .and_then(|body| body.get(key))
            .ok_or_else(|| ServerError::BadRequest(format!("{key} payload is required")))
    }
}

fn decode_body(raw: &str, content_type: &str) -> Result<Option<Value>, ServerError> {
    if raw.is_empty() {
        return Ok(None);
    }
    if content_type.starts_with("application/json") {
        let value = serde_json::from_str(raw)
            .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))?;
        return Ok(Some(value));
    }
    // Forms and unlabeled bodies decode as urlencoded pairs.
    Ok(Some(forms::parse_form(raw)))
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    match query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_cookies(header: Option<&str>) -> HashMap<String, String> {
    header
        .map(|c| {
            c.split(';')
                .filter_map(|pair| {
                    let mut parts = pair.trim().splitn(2, '=');
                    let name = parts.next()?.trim().to_string();
                    let value = parts.next().unwrap_or("").trim().to_string();
                    Some((name, value))
                })
                .collect()
        })
        .unwrap_or_default()
}
