// tests/y_axis_formatting_test.rs

use cross_correlation_render::plot_framework::format_y_axis_label;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_correlation_y_axis_formatting() {
        // Normalized correlation values are small fractions and need a decimal
        assert_eq!(format_y_axis_label(0.2), "0.2");
        assert_eq!(format_y_axis_label(0.4), "0.4");
        assert_eq!(format_y_axis_label(0.6), "0.6");
        assert_eq!(format_y_axis_label(1.0 / 3.0), "0.3");
        assert_eq!(format_y_axis_label(-0.8), "-0.8");
        assert_eq!(format_y_axis_label(1.2), "1.2");
    }

    #[test]
    fn test_raw_correlation_y_axis_formatting() {
        // Whole numbers print without decimals
        assert_eq!(format_y_axis_label(0.0), "0");
        assert_eq!(format_y_axis_label(6.0), "6");
        assert_eq!(format_y_axis_label(10.0), "10");
        assert_eq!(format_y_axis_label(100.0), "100");
        assert_eq!(format_y_axis_label(-40.0), "-40");

        // Fractions at or above 10 are rounded
        assert_eq!(format_y_axis_label(10.7), "11");
    }

    #[test]
    fn test_large_value_y_axis_formatting() {
        assert_eq!(format_y_axis_label(1000.0), "1k");
        assert_eq!(format_y_axis_label(5000.0), "5k");
        assert_eq!(format_y_axis_label(-2000.0), "-2k");
        assert_eq!(format_y_axis_label(1_000_000.0), "1.0M");
        assert_eq!(format_y_axis_label(2_300_000.0), "2.3M");
    }
}
