//! Clock label shown above the time.

/// Builds the clock label for a timezone and the country's common name.
///
/// `Region/City` identifiers become `Region / Country`; anything else (a raw
/// offset, say) is shown verbatim.
#[must_use]
pub fn display_label(timezone: &str, country: &str) -> String {
    match timezone.split_once('/') {
        Some((region, _)) => format!("{region} / {country}"),
        None => timezone.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_city_label_uses_country_name() {
        assert_eq!(display_label("Asia/Manila", "Philippines"), "Asia / Philippines");
    }

    #[test]
    fn test_nested_identifier_keeps_only_region() {
        assert_eq!(
            display_label("America/Argentina/Buenos_Aires", "Argentina"),
            "America / Argentina"
        );
    }

    #[test]
    fn test_offset_label_is_verbatim() {
        assert_eq!(display_label("UTC+08:00", "Philippines"), "UTC+08:00");
    }
}
