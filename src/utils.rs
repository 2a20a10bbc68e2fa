//! Utility functions and helpers

/// Render a microsecond duration with the largest unit that keeps it readable
pub fn format_duration_us(micros: f64) -> String {
    let abs = micros.abs();
    if abs < 1.0 {
        format!("{:.0}ns", micros * 1_000.0)
    } else if abs < 1_000.0 {
        format!("{:.2}μs", micros)
    } else if abs < 1_000_000.0 {
        format!("{:.2}ms", micros / 1_000.0)
    } else {
        format!("{:.2}s", micros / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_us(0.5), "500ns");
        assert_eq!(format_duration_us(1.5), "1.50μs");
        assert_eq!(format_duration_us(1_500.0), "1.50ms");
        assert_eq!(format_duration_us(1_500_000.0), "1.50s");
    }

    #[test]
    fn test_format_negative_duration() {
        assert_eq!(format_duration_us(-2_500.0), "-2.50ms");
    }
}
