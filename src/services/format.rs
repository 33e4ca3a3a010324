//! 날짜 표시 도우미
//!
//! 서버는 날짜를 ISO 8601 문자열로 내려줍니다 (예: "2024-03-01T00:00:00.000Z").
//! 이 모듈은 그것을 사람이 읽기 좋은 형태로 바꿉니다.
//! 브라우저의 `new Date(...).toLocaleDateString()`에 해당하는 역할입니다.

use chrono::{DateTime, NaiveDate};

/// ISO 8601 날짜 문자열을 "YYYY-MM-DD"로 표시합니다.
///
/// 파싱할 수 없는 값은 그대로 돌려줍니다 — 표시용 변환이 데이터를
/// 숨겨서는 안 되기 때문입니다.
///
/// # 예시
/// ```text
/// fmt_date("2024-03-01T00:00:00.000Z") → "2024-03-01"
/// fmt_date("not a date") → "not a date"
/// ```
pub fn fmt_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%Y-%m-%d").to_string();
    }
    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamps_are_shortened_to_a_date() {
        assert_eq!(fmt_date("2024-03-01T00:00:00.000Z"), "2024-03-01");
        assert_eq!(fmt_date("2025-12-31T23:59:59+02:00"), "2025-12-31");
    }

    #[test]
    fn plain_dates_pass_through() {
        assert_eq!(fmt_date("2024-03-01"), "2024-03-01");
    }

    #[test]
    fn unparseable_values_are_shown_as_is() {
        assert_eq!(fmt_date("soon"), "soon");
    }
}
