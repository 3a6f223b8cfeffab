/// Format a second count as a zero-padded MM:SS clock string.
/// Minutes keep counting past 59 rather than rolling into hours.
pub fn format_clock(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
