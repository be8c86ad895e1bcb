/// Unit labels, each 1024 times the previous one
pub const UNITS: [&str; 7] = ["Byte", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Scales `bytes` down by 1024 until it is below 1024 or the largest unit
/// is reached. Returns the scaled magnitude and its unit label.
pub fn adjust_unit(bytes: f64) -> (f64, &'static str) {
    let mut value = bytes;
    let mut i = 0;
    while i < UNITS.len() - 1 && value >= 1024.0 {
        value /= 1024.0;
        i += 1;
    }
    (value, UNITS[i])
}

/// A byte count scaled for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledBytes {
    pub value: f64,
    pub unit: &'static str,
}

impl ScaledBytes {
    pub fn new(bytes: u64) -> Self {
        let (value, unit) = adjust_unit(bytes as f64);
        Self { value, unit }
    }
}

impl std::fmt::Display for ScaledBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*} {}", precision, self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_unit() {
        assert_eq!(adjust_unit(0.0), (0.0, "Byte"));
        assert_eq!(adjust_unit(1023.0), (1023.0, "Byte"));
        assert_eq!(adjust_unit(1024.0), (1.0, "KB"));
        assert_eq!(adjust_unit(1536.0), (1.5, "KB"));
        assert_eq!(adjust_unit(1048576.0), (1.0, "MB"));
        assert_eq!(adjust_unit(1024f64.powi(3)), (1.0, "GB"));
    }

    #[test]
    fn test_adjust_unit_stops_at_exabytes() {
        assert_eq!(adjust_unit(1024f64.powi(6)), (1.0, "EB"));
        assert_eq!(adjust_unit(1024f64.powi(7)), (1024.0, "EB"));
    }

    #[test]
    fn test_scaled_bytes_display() {
        assert_eq!(ScaledBytes::new(1536).to_string(), "1.50 KB");
        assert_eq!(format!("{:.0}", ScaledBytes::new(1023)), "1023 Byte");
        assert_eq!(format!("{:.1}", ScaledBytes::new(3 << 30)), "3.0 GB");
    }
}
