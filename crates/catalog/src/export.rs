//! Formatted text export of a full catalog record.
//!
//! Produces the plain-text block the UI places on the clipboard. Absent
//! optional fields render as "unknown" rather than being skipped or
//! treated as errors.

use crate::entry::CatalogEntry;
use chrono::NaiveDate;

/// Placeholder for absent optional fields.
const UNKNOWN: &str = "unknown";

/// Renders a date as e.g. `Jun 19, 2004`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn format_opt_number(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v}{unit}"),
        None => UNKNOWN.to_string(),
    }
}

/// Renders an entry's full record as formatted text.
pub fn entry_text(entry: &CatalogEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", entry.name, entry.designation));
    out.push_str(&format!("Identifier: {}\n", entry.id));
    out.push_str(&format!(
        "Diameter: {}\n",
        format_opt_number(entry.diameter_km, " km")
    ));
    out.push_str(&format!(
        "Absolute magnitude (H): {}\n",
        format_opt_number(entry.absolute_magnitude_h, "")
    ));
    out.push_str(&format!(
        "Potentially hazardous: {}\n",
        if entry.potentially_hazardous { "yes" } else { "no" }
    ));
    let discovered = match (entry.discovery_date, entry.discoverer.as_deref()) {
        (Some(date), Some(who)) => format!("{} by {who}", format_date(date)),
        (Some(date), None) => format_date(date),
        (None, Some(who)) => format!("{UNKNOWN} date by {who}"),
        (None, None) => UNKNOWN.to_string(),
    };
    out.push_str(&format!("Discovered: {discovered}\n"));
    if !entry.summary.is_empty() {
        out.push_str(&format!("\n{}\n", entry.summary));
    }
    if !entry.notable_events.is_empty() {
        out.push_str("\nNotable events:\n");
        for ev in &entry.notable_events {
            out.push_str(&format!("  {} - {}\n", format_date(ev.date), ev.event));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_catalog;
    use crate::entry::CatalogEntry;

    #[test]
    fn format_date_matches_expected_style() {
        let d = NaiveDate::from_ymd_opt(2004, 6, 19).unwrap();
        assert_eq!(format_date(d), "Jun 19, 2004");
        let single_digit = NaiveDate::from_ymd_opt(2012, 9, 5).unwrap();
        assert_eq!(format_date(single_digit), "Sep 5, 2012");
    }

    #[test]
    fn apophis_record_shows_discovery_date_and_both_events() {
        let catalog = seed_catalog().unwrap();
        let text = entry_text(catalog.get("99942").unwrap());
        assert!(text.contains("Jun 19, 2004"), "missing date in:\n{text}");
        assert!(text.contains("Torino scale"));
        assert!(text.contains("Apr 13, 2029"));
        // Input order preserved: 2004 event listed before 2029.
        let first = text.find("Torino scale").unwrap();
        let second = text.find("close approach").unwrap();
        assert!(first < second, "events reordered in:\n{text}");
    }

    #[test]
    fn absent_fields_render_as_unknown() {
        let e: CatalogEntry = serde_json::from_str(
            r#"{"id": "7", "name": "7 Iris", "designation": "A847 PA"}"#,
        )
        .unwrap();
        let text = entry_text(&e);
        assert!(text.contains("Diameter: unknown"));
        assert!(text.contains("Absolute magnitude (H): unknown"));
        assert!(text.contains("Discovered: unknown"));
        // No empty trailing sections for missing summary and events.
        assert!(!text.contains("Notable events"));
    }

    #[test]
    fn hazardous_flag_renders_yes_and_no() {
        let catalog = seed_catalog().unwrap();
        assert!(entry_text(catalog.get("99942").unwrap()).contains("Potentially hazardous: yes"));
        assert!(entry_text(catalog.get("433").unwrap()).contains("Potentially hazardous: no"));
    }
}
