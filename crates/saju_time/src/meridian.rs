//! Standard meridians for the civil time zones the engine knows about.
//!
//! A zone's standard meridian is `utc_offset_hours * 15` degrees. Daylight
//! saving is ignored: solar-time correction works from standard time only.

/// Standard meridian of UTC+9 (Korea/Japan standard time), degrees east.
pub const KST_MERIDIAN_DEG: f64 = 135.0;

/// Zone used when a profile carries no time zone.
pub const DEFAULT_TIMEZONE: &str = "Asia/Seoul";

/// Known IANA zone ids with their standard UTC offset in minutes.
pub const ZONE_OFFSETS: &[(&str, i32)] = &[
    ("Asia/Seoul", 540),
    ("Asia/Tokyo", 540),
    ("Asia/Shanghai", 480),
    ("Asia/Hong_Kong", 480),
    ("Asia/Taipei", 480),
    ("Asia/Singapore", 480),
    ("Asia/Bangkok", 420),
    ("Asia/Ho_Chi_Minh", 420),
    ("Asia/Kolkata", 330),
    ("Asia/Dubai", 240),
    ("Europe/London", 0),
    ("Europe/Paris", 60),
    ("Europe/Berlin", 60),
    ("Europe/Rome", 60),
    ("Europe/Madrid", 60),
    ("Europe/Moscow", 180),
    ("America/New_York", -300),
    ("America/Toronto", -300),
    ("America/Chicago", -360),
    ("America/Denver", -420),
    ("America/Edmonton", -420),
    ("America/Los_Angeles", -480),
    ("America/Vancouver", -480),
    ("America/Sao_Paulo", -180),
    ("Australia/Sydney", 600),
    ("Australia/Melbourne", 600),
    ("Australia/Brisbane", 600),
    ("Australia/Perth", 480),
    ("Pacific/Auckland", 720),
    ("UTC", 0),
];

/// Standard UTC offset in minutes for a known zone id.
pub fn utc_offset_minutes(timezone_id: &str) -> Option<i32> {
    ZONE_OFFSETS
        .iter()
        .find(|(id, _)| *id == timezone_id)
        .map(|&(_, offset)| offset)
}

/// Standard meridian (degrees, east positive) for a zone id.
///
/// Resolution order: `timezone_id`, then `fallback_id`, then
/// [`KST_MERIDIAN_DEG`].
pub fn standard_meridian_deg(timezone_id: Option<&str>, fallback_id: &str) -> f64 {
    timezone_id
        .and_then(utc_offset_minutes)
        .or_else(|| utc_offset_minutes(fallback_id))
        .map(|minutes| minutes as f64 / 4.0)
        .unwrap_or(KST_MERIDIAN_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seoul_is_135() {
        assert_eq!(standard_meridian_deg(Some("Asia/Seoul"), DEFAULT_TIMEZONE), 135.0);
    }

    #[test]
    fn new_york_is_minus_75() {
        assert_eq!(
            standard_meridian_deg(Some("America/New_York"), DEFAULT_TIMEZONE),
            -75.0
        );
    }

    #[test]
    fn india_half_hour_zone() {
        assert_eq!(standard_meridian_deg(Some("Asia/Kolkata"), DEFAULT_TIMEZONE), 82.5);
    }

    #[test]
    fn unknown_zone_uses_fallback() {
        assert_eq!(
            standard_meridian_deg(Some("Mars/Olympus"), "Europe/Paris"),
            15.0
        );
        assert_eq!(standard_meridian_deg(None, "Asia/Shanghai"), 120.0);
    }

    #[test]
    fn unknown_fallback_uses_kst() {
        assert_eq!(standard_meridian_deg(None, "Nowhere"), KST_MERIDIAN_DEG);
    }

    #[test]
    fn zone_ids_unique() {
        for (i, (a, _)) in ZONE_OFFSETS.iter().enumerate() {
            for (b, _) in &ZONE_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
