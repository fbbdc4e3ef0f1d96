//! 日期时间解析工具
//!
//! Google 的时间字段有两种形式：
//! - 带时间: RFC3339 字符串 (`2024-05-01T09:30:00+02:00`)
//! - 全天: 日期字符串 (`2024-05-01`)，按 UTC 零点处理

use chrono::{DateTime, NaiveDate, Utc};

/// 解析 RFC3339 字符串为 UTC 时间
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// 解析 `YYYY-MM-DD` 为当日 UTC 零点
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// 格式化为 Google API 接受的 RFC3339（秒精度，`Z` 结尾）
pub fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rfc3339_with_offset_normalizes_to_utc() {
        let dt = parse_rfc3339("2024-05-01T09:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap());
    }

    #[test]
    fn date_only_is_midnight_utc() {
        let dt = parse_date("2024-05-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn invalid_inputs_are_none() {
        assert!(parse_rfc3339("yesterday").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }

    #[test]
    fn formats_with_z_suffix() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
        assert_eq!(to_rfc3339(&dt), "2024-05-01T07:30:00Z");
    }
}
