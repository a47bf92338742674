//! Terminal styling and number formatting utilities.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for totals.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for units and section rules.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for section headings.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for the per-flight total.
    pub const GREEN: &str = "\x1b[32m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
        }
    }

    /// Pick a palette based on [`supports_color`].
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Check whether ANSI colors should be emitted.
///
/// Honors the `NO_COLOR` and `TERM=dumb` conventions.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a non-negative integer with thousands separators (e.g. `1,234,567`).
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Insert a comma between every group of three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a figure with separators and two decimals, e.g. `-34,151.50`.
///
/// Digits come from the float's own decimal rendering, so magnitudes beyond
/// the integer range are printed in full. Non-finite values are printed as-is.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.2}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_digits(whole))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn separators_group_thousands() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(999), "999");
        assert_eq!(format_with_separators(1000), "1,000");
        assert_eq!(format_with_separators(291_200), "291,200");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn amounts_round_to_cents() {
        assert_eq!(format_amount(34151.495253119996), "34,151.50");
        assert_eq!(format_amount(119.29803130859258), "119.30");
        assert_eq!(format_amount(0.2592592592592593), "0.26");
        assert_eq!(format_amount(-1250.0), "-1,250.00");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(f64::INFINITY), "inf");
    }

    #[test]
    fn amounts_beyond_integer_range_keep_every_digit() {
        assert_eq!(format_amount(1e20), "100,000,000,000,000,000,000.00");
        assert_eq!(format_amount(2.5e19), "25,000,000,000,000,000,000.00");
        assert_eq!(format_amount(-1e20), "-100,000,000,000,000,000,000.00");
        assert_eq!(format_amount(u64::MAX as f64), "18,446,744,073,709,551,616.00");
    }

    #[test]
    fn no_color_disables_palette() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved = std::env::var_os("NO_COLOR");
        std::env::set_var("NO_COLOR", "1");
        assert!(!supports_color());
        assert_eq!(ColorPalette::detect().reset, "");
        match saved {
            Some(v) => std::env::set_var("NO_COLOR", v),
            None => std::env::remove_var("NO_COLOR"),
        }
    }
}
