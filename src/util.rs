pub struct DurationDisplay(pub std::time::Duration);

impl std::fmt::Display for DurationDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::time::Duration;

        const NANOS_PER_MS: f64 = 1_000_000.0;
        const NANOS_PER_US: f64 = 1_000.0;

        let nanos = self.0.as_nanos() as f64;
        if self.0 >= Duration::from_secs(1) {
            write!(f, "{:.3}s", self.0.as_secs_f64())
        } else if self.0 >= Duration::from_millis(1) {
            write!(f, "{:.3}ms", nanos / NANOS_PER_MS)
        } else if self.0 >= Duration::from_micros(1) {
            write!(f, "{:.3}us", nanos / NANOS_PER_US)
        } else {
            write!(f, "{}ns", self.0.as_nanos())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DurationDisplay;
    use std::time::Duration;

    #[test]
    fn picks_a_unit() {
        assert_eq!(DurationDisplay(Duration::from_millis(1500)).to_string(), "1.500s");
        assert_eq!(DurationDisplay(Duration::from_micros(2500)).to_string(), "2.500ms");
        assert_eq!(DurationDisplay(Duration::from_nanos(1500)).to_string(), "1.500us");
        assert_eq!(DurationDisplay(Duration::from_nanos(42)).to_string(), "42ns");
    }
}
