//! Output Formatting
//!
//! Human-readable table of suite measurements.

use super::execution::Measurement;

/// Format measurements for terminal display, one row per measurement
pub fn format_measurements(measurements: &[Measurement]) -> String {
    let width = measurements
        .iter()
        .map(|m| m.description.len())
        .max()
        .unwrap_or(0)
        .max("benchmark".len());

    let mut output = String::new();
    output.push('\n');
    output.push_str("lapbench Results\n");
    output.push_str(&"=".repeat(width + 30));
    output.push('\n');
    output.push_str(&format!(
        "{:<width$}  {:>10}  {:>14}\n",
        "benchmark", "n", "mean (ms)"
    ));
    output.push_str(&"-".repeat(width + 30));
    output.push('\n');

    for m in measurements {
        output.push_str(&format!(
            "{:<width$}  {:>10}  {:>14.6}\n",
            m.description, m.size, m.mean_ms
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows() {
        let output = format_measurements(&[
            Measurement {
                description: "quick union".to_string(),
                size: 200,
                mean_ms: 0.125,
            },
            Measurement {
                description: "path halving".to_string(),
                size: 400,
                mean_ms: 1.5,
            },
        ]);

        assert!(output.contains("lapbench Results"));
        let rows: Vec<_> = output.lines().filter(|l| l.contains("0.125000")).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("quick union"));
        assert!(rows[0].contains("200"));
        assert!(output.contains("1.500000"));
    }

    #[test]
    fn test_format_empty() {
        let output = format_measurements(&[]);
        assert!(output.contains("benchmark"));
        assert_eq!(output.lines().count(), 5);
    }
}
