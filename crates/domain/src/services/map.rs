//! Map projection.
//!
//! Pure transform from a set of reports to the primitives the external map
//! renderer consumes: circle markers (position, color, radius, popup) and a
//! framing request (center, zoom).

use geo::{point, Centroid, MultiPoint};
use serde::{Deserialize, Serialize};

use crate::models::report::WildfireReport;

/// Default map center when there are no reports to frame (California).
pub const DEFAULT_CENTER: (f64, f64) = (36.7783, -119.4179);
/// Wide zoom used with the default center.
pub const DEFAULT_ZOOM: u8 = 6;
/// Closer zoom used when framing actual reports.
pub const FOCUSED_ZOOM: u8 = 7;

/// Marker radius for Critical reports. Critical always renders larger.
const CRITICAL_RADIUS: u32 = 15;
/// Marker radius for every other severity.
const STANDARD_RADIUS: u32 = 10;

/// Popup descriptions are cut to this many characters.
const POPUP_DESCRIPTION_LEN: usize = 100;

/// A renderable circle marker for one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub radius: u32,
    pub popup: String,
}

/// A framing request for the external map renderer: where to center the
/// viewport and how far to zoom. Not state held by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFrame {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
}

/// Maps a stored severity value to its marker color.
///
/// Total over arbitrary text: rows carrying a value outside the known
/// enumeration fall back to a neutral gray rather than failing the render.
pub fn color_for(severity: &str) -> &'static str {
    match severity {
        "Low" => "#fbbf24",      // golden yellow
        "Medium" => "#d97706",   // warm orange
        "High" => "#92400e",     // dark orange
        "Critical" => "#dc2626", // red
        _ => "#78716c",          // neutral gray fallback
    }
}

fn radius_for(severity: &str) -> u32 {
    if severity == "Critical" {
        CRITICAL_RADIUS
    } else {
        STANDARD_RADIUS
    }
}

/// Builds the fixed-format popup summary for one report.
///
/// The description is always cut at 100 characters with a trailing ellipsis,
/// even when it is shorter. That mirrors the behavior the map has always
/// shown; see DESIGN.md before changing it.
fn popup_for(report: &WildfireReport) -> String {
    let truncated: String = report
        .description
        .chars()
        .take(POPUP_DESCRIPTION_LEN)
        .collect();

    format!(
        "<b>Location:</b> {}<br>\
         <b>Reporter:</b> {}<br>\
         <b>Severity:</b> {}<br>\
         <b>Size:</b> {}<br>\
         <b>Status:</b> {}<br>\
         <b>Reported:</b> {}<br>\
         <b>Description:</b> {}...",
        report.location_description,
        report.reporter_name,
        report.severity,
        report.fire_size,
        report.status,
        report.reported_at.format("%Y-%m-%d %H:%M:%S"),
        truncated,
    )
}

/// Projects a set of reports into renderable markers, one per report,
/// preserving input order.
pub fn project(reports: &[WildfireReport]) -> Vec<MapMarker> {
    reports
        .iter()
        .map(|report| MapMarker {
            latitude: report.latitude,
            longitude: report.longitude,
            color: color_for(&report.severity).to_string(),
            radius: radius_for(&report.severity),
            popup: popup_for(report),
        })
        .collect()
}

/// Computes the framing request for a set of reports.
///
/// Empty input centers on the default point at a wide zoom; otherwise the
/// center is the arithmetic mean of all report positions at a closer zoom.
pub fn frame(reports: &[WildfireReport]) -> MapFrame {
    let points: MultiPoint<f64> = reports
        .iter()
        .map(|r| point!(x: r.longitude, y: r.latitude))
        .collect();

    match points.centroid() {
        Some(center) => MapFrame {
            center_latitude: center.y(),
            center_longitude: center.x(),
            zoom: FOCUSED_ZOOM,
        },
        None => MapFrame {
            center_latitude: DEFAULT_CENTER.0,
            center_longitude: DEFAULT_CENTER.1,
            zoom: DEFAULT_ZOOM,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn report(id: i64, latitude: f64, longitude: f64, severity: &str) -> WildfireReport {
        WildfireReport {
            id,
            reporter_name: "A. Smith".to_string(),
            reporter_email: None,
            reporter_phone: None,
            latitude,
            longitude,
            location_description: "Hwy 2".to_string(),
            fire_size: "Large (10-100 acres)".to_string(),
            severity: severity.to_string(),
            description: "Heavy smoke".to_string(),
            reported_at: Utc::now(),
            status: "Active".to_string(),
            verified: false,
        }
    }

    #[test]
    fn test_project_empty() {
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn test_frame_empty_uses_default_center() {
        let frame = frame(&[]);
        assert_eq!(frame.center_latitude, DEFAULT_CENTER.0);
        assert_eq!(frame.center_longitude, DEFAULT_CENTER.1);
        assert_eq!(frame.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn test_frame_centers_on_mean() {
        let reports = vec![
            report(1, 34.0, -118.0, "Low"),
            report(2, 38.0, -122.0, "High"),
        ];
        let frame = frame(&reports);
        assert!((frame.center_latitude - 36.0).abs() < 1e-9);
        assert!((frame.center_longitude - -120.0).abs() < 1e-9);
        assert_eq!(frame.zoom, FOCUSED_ZOOM);
    }

    #[test]
    fn test_critical_marker_is_larger() {
        let markers = project(&[report(1, 34.0, -118.0, "Critical")]);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].radius, 15);

        let markers = project(&[report(1, 34.0, -118.0, "High")]);
        assert_eq!(markers[0].radius, 10);
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(color_for("Low"), "#fbbf24");
        assert_eq!(color_for("Medium"), "#d97706");
        assert_eq!(color_for("High"), "#92400e");
        assert_eq!(color_for("Critical"), "#dc2626");
    }

    #[test]
    fn test_color_unknown_severity_falls_back_to_gray() {
        assert_eq!(color_for("Apocalyptic"), "#78716c");
        assert_eq!(color_for(""), "#78716c");
    }

    #[test]
    fn test_unknown_severity_gets_standard_radius() {
        let markers = project(&[report(1, 34.0, -118.0, "Apocalyptic")]);
        assert_eq!(markers[0].radius, 10);
        assert_eq!(markers[0].color, "#78716c");
    }

    #[test]
    fn test_marker_position_unchanged() {
        let markers = project(&[report(1, 34.05, -118.24, "Low")]);
        assert_eq!(markers[0].latitude, 34.05);
        assert_eq!(markers[0].longitude, -118.24);
    }

    #[test]
    fn test_popup_contains_summary_fields() {
        let markers = project(&[report(1, 34.0, -118.0, "Critical")]);
        let popup = &markers[0].popup;
        assert!(popup.contains("<b>Location:</b> Hwy 2"));
        assert!(popup.contains("<b>Reporter:</b> A. Smith"));
        assert!(popup.contains("<b>Severity:</b> Critical"));
        assert!(popup.contains("<b>Size:</b> Large (10-100 acres)"));
        assert!(popup.contains("<b>Status:</b> Active"));
    }

    #[test]
    fn test_popup_short_description_still_gets_ellipsis() {
        let markers = project(&[report(1, 34.0, -118.0, "Low")]);
        assert!(markers[0].popup.ends_with("Heavy smoke..."));
    }

    #[test]
    fn test_popup_long_description_truncated_to_100_chars() {
        let mut r = report(1, 34.0, -118.0, "Low");
        r.description = "x".repeat(250);
        let markers = project(&[r]);
        let expected = format!("{}...", "x".repeat(100));
        assert!(markers[0].popup.ends_with(&expected));
        assert!(!markers[0].popup.contains(&"x".repeat(101)));
    }

    #[test]
    fn test_project_preserves_input_order() {
        let reports = vec![
            report(1, 34.0, -118.0, "Low"),
            report(2, 35.0, -119.0, "Critical"),
            report(3, 36.0, -120.0, "Medium"),
        ];
        let markers = project(&reports);
        assert_eq!(markers[0].latitude, 34.0);
        assert_eq!(markers[1].latitude, 35.0);
        assert_eq!(markers[2].latitude, 36.0);
    }

    #[test]
    fn test_frame_single_report_centers_on_it() {
        let frame = frame(&[report(1, 34.05, -118.24, "Low")]);
        assert!((frame.center_latitude - 34.05).abs() < 1e-9);
        assert!((frame.center_longitude - -118.24).abs() < 1e-9);
        assert_eq!(frame.zoom, FOCUSED_ZOOM);
    }
}
