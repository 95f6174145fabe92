use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::summary::SummaryReport;

/// Render the plain-text summary: a header, a 40-char `=` divider, then one
/// block per camera separated by 20-char `-` dividers.
pub fn render_summary(report: &SummaryReport, date: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Summary Report for {date}");
    let _ = writeln!(out, "{}", "=".repeat(40));
    for (camera_id, counts) in report.iter() {
        let _ = writeln!(out, "Camera {camera_id}:");
        let _ = writeln!(out, "  Valid Images: {}", counts.valid);
        let _ = writeln!(out, "  Invalid Images: {}", counts.invalid);
        let _ = writeln!(out, "{}", "-".repeat(20));
    }
    out
}

pub fn write_summary(report: &SummaryReport, date: &str, path: &Path) -> std::io::Result<()> {
    fs::write(path, render_summary(report, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Classification;

    #[test]
    fn exact_format_for_one_camera() {
        let mut report = SummaryReport::new();
        report.record(0, Classification::Valid);
        report.record(0, Classification::Invalid);

        let text = render_summary(&report, "2024-11-23");
        let expected = format!(
            "Summary Report for 2024-11-23\n{}\nCamera 0:\n  Valid Images: 1\n  Invalid Images: 1\n{}\n",
            "=".repeat(40),
            "-".repeat(20)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn absent_camera_has_no_section() {
        let mut report = SummaryReport::new();
        report.record(0, Classification::Valid);

        let text = render_summary(&report, "2024-11-23");
        assert!(text.contains("Camera 0:"));
        assert!(!text.contains("Camera 1:"));
    }

    #[test]
    fn cameras_appear_in_id_order() {
        let mut report = SummaryReport::new();
        report.record(4, Classification::Valid);
        report.record(1, Classification::Valid);

        let text = render_summary(&report, "2024-11-23");
        let first = text.find("Camera 1:").unwrap();
        let second = text.find("Camera 4:").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_report_is_header_only() {
        let text = render_summary(&SummaryReport::new(), "2024-11-23");
        let expected = format!("Summary Report for 2024-11-23\n{}\n", "=".repeat(40));
        assert_eq!(text, expected);
    }
}
