//! Formatted terminal output for the demo driver.
//!
//! Formatting lives here so the integrators stay pure and the output format
//! can change without touching the math code.

/// One method's estimate for a reference integral.
#[derive(Debug, Clone)]
pub struct MethodRow {
    pub method: &'static str,
    pub estimate: f64,
}

/// Format one reference-function block: label, expected value, then each
/// method's estimate with its absolute error.
pub fn format_case(label: &str, expected: f64, rows: &[MethodRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {label} ===\n"));
    out.push_str(&format!("{:<14}{expected:.10}\n", "expected"));
    for row in rows {
        let err = (row.estimate - expected).abs();
        out.push_str(&format!(
            "{:<14}{:.10}  (err {:.3e})\n",
            row.method, row.estimate, err
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_block_lists_every_method() {
        let rows = vec![
            MethodRow {
                method: "monte carlo",
                estimate: 0.784,
            },
            MethodRow {
                method: "simpson",
                estimate: 0.7853981634,
            },
        ];
        let text = format_case("quarter circle", std::f64::consts::FRAC_PI_4, &rows);

        assert!(text.contains("=== quarter circle ==="));
        assert!(text.contains("expected"));
        assert!(text.contains("0.7853981634"));
        assert!(text.contains("monte carlo"));
        assert!(text.contains("simpson"));
    }

    #[test]
    fn errors_are_absolute() {
        let rows = vec![MethodRow {
            method: "trapezoid",
            estimate: 0.9,
        }];
        let text = format_case("unit", 1.0, &rows);
        assert!(text.contains("1.000e-1"), "text was:\n{text}");
    }
}
