//! 日志脱敏
//!
//! Upstream bodies can carry photo URLs and event details, and tokens must never hit the log
//! file in full.

/// Byte budget for a logged body.
const BODY_LOG_LIMIT: usize = 256;

/// Leading characters of a token left readable by [`mask_token`].
const MASK_VISIBLE: usize = 4;

/// Cut `body` to at most [`BODY_LOG_LIMIT`] bytes on a char boundary and note the full size.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        return body.to_string();
    }
    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= BODY_LOG_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}

/// `ya29...(183 chars)`; short tokens are hidden entirely.
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= MASK_VISIBLE * 2 {
        return format!("***({count} chars)");
    }
    let prefix: String = token.chars().take(MASK_VISIBLE).collect();
    format!("{prefix}...({count} chars)")
}
