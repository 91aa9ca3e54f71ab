//! Archive URL construction
//!
//! Images live under `/archive/natural/YYYY/MM/DD/png/<image>.png`, the
//! date segments coming from the record's capture date.

use crate::state::data::ImageRecord;

/// Day path (`YYYY/MM/DD`) of a record's capture date.
///
/// Uses the parsed timestamp when the date is well formed; otherwise the
/// first space-separated token with `-` swapped for `/`.
pub fn day_path(record: &ImageRecord) -> String {
    match record.captured_at() {
        Some(captured) => captured.format("%Y/%m/%d").to_string(),
        None => {
            let day = record.date.split(' ').next().unwrap_or_default();
            day.replace('-', "/")
        }
    }
}

/// Full URL of the natural-color PNG for `record`
pub fn image_url(archive_base: &str, record: &ImageRecord) -> String {
    format!(
        "{}/archive/natural/{}/png/{}.png",
        archive_base.trim_end_matches('/'),
        day_path(record),
        record.image
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::record_at_miles;

    #[test]
    fn test_image_url() {
        let record = record_at_miles("20151031003633", 100.0);
        assert_eq!(
            image_url("https://epic.gsfc.nasa.gov", &record),
            "https://epic.gsfc.nasa.gov/archive/natural/2015/10/31/png/epic_1b_20151031003633.png"
        );
    }

    #[test]
    fn test_image_url_trailing_slash() {
        let record = record_at_miles("x", 100.0);
        assert!(image_url("http://localhost:9000/", &record)
            .starts_with("http://localhost:9000/archive/natural/"));
    }

    #[test]
    fn test_day_path_unparseable_time() {
        let mut record = record_at_miles("x", 100.0);
        record.date = "2023-07-04 late".to_string();
        assert_eq!(day_path(&record), "2023/07/04");
    }
}
