//! One-shot user notices carried in a cookie: set alongside a redirect,
//! shown and cleared by the next page render. The message is base64-encoded
//! so arbitrary text stays header-safe.

use base64::Engine;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Set-Cookie value carrying this flash to the next request.
    pub fn to_cookie(&self) -> String {
        let encoded =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.message.as_bytes());
        format!(
            "{FLASH_COOKIE}={}.{encoded}; Path=/; HttpOnly",
            self.kind.as_str()
        )
    }

    /// Decode the flash cookie value ("success.<base64>").
    pub fn from_cookie(value: &str) -> Option<Self> {
        let (kind, encoded) = value.split_once('.')?;
        let kind = match kind {
            "success" => FlashKind::Success,
            "error" => FlashKind::Error,
            _ => return None,
        };
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(encoded)
            .ok()?;
        let message = String::from_utf8(bytes).ok()?;
        Some(Self { kind, message })
    }

    /// Set-Cookie value that expires the flash once it has been shown.
    pub fn clear_cookie() -> String {
        format!("{FLASH_COOKIE}=; Path=/; Max-Age=0")
    }
}
