use revisor_core::report::ReportFormat;
use revisor_core::scoring::DrawSequence;

/// Parse draw sequence from string
pub fn parse_draw_sequence(s: &str) -> std::result::Result<DrawSequence, String> {
    s.parse::<DrawSequence>().map_err(|e| e.to_string())
}

/// Parse report format from string
pub fn parse_report_format(s: &str) -> std::result::Result<ReportFormat, String> {
    s.parse::<ReportFormat>().map_err(|e| e.to_string())
}

/// Parse a count that must be at least 1
pub fn parse_positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
