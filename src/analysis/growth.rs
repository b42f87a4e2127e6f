/// Compound annual growth rate, in percent, of an annual series ordered newest first.
///
/// A series with fewer than two points has no growth period and yields 0.
/// Sign changes or a zero base year produce non-finite values, which are
/// returned unchanged.
pub fn cagr(series: &[f64]) -> f64 {
    let years = series.len().saturating_sub(1);
    if years == 0 {
        return 0.0;
    }

    let newest = series[0];
    let oldest = series[years];
    ((newest / oldest).powf(1.0 / years as f64) - 1.0) * 100.0
}
