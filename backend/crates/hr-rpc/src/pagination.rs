use crate::{Result as RpcErrorResult, RpcError};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Offset window decoded from a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// `page_size` 0 means the default; larger values are capped. An empty
    /// token is the first page.
    #[track_caller]
    pub fn parse(page_size: u32, page_token: &str) -> RpcErrorResult<Self> {
        let page_size = match page_size {
            0 => DEFAULT_PAGE_SIZE,
            n => n.min(MAX_PAGE_SIZE),
        };

        let offset = if page_token.is_empty() {
            0
        } else {
            decode_token(page_token)
                .ok_or_else(|| RpcError::invalid_argument("page_token is invalid"))?
        };

        Ok(Self {
            offset,
            page_size: i64::from(page_size),
        })
    }

    /// Rows to fetch: one extra to learn whether another page exists
    pub fn fetch_limit(&self) -> i64 {
        self.page_size + 1
    }

    /// Trim the look-ahead row and produce the next token (empty on the last page)
    pub fn finish<T>(&self, mut rows: Vec<T>) -> (Vec<T>, String) {
        let page_size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        if rows.len() > page_size {
            rows.truncate(page_size);
            let next = encode_token(self.offset + self.page_size);
            (rows, next)
        } else {
            (rows, String::new())
        }
    }
}

pub fn encode_token(offset: i64) -> String {
    URL_SAFE_NO_PAD.encode(offset.to_string())
}

fn decode_token(token: &str) -> Option<i64> {
    let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let offset: i64 = text.parse().ok()?;
    (offset >= 0).then_some(offset)
}
