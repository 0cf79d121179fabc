use serde::Deserialize;

const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NumberLocale {
    // Extended Arabic-Indic digits, ٬ grouping, ٫ decimal separator
    #[serde(rename = "fa-IR")]
    Persian,
    #[serde(rename = "en-US")]
    English,
}

impl NumberLocale {
    fn digit(self, d: u8) -> char {
        match self {
            NumberLocale::Persian => char::from_u32(0x06F0 + d as u32).unwrap_or('?'),
            NumberLocale::English => (b'0' + d) as char,
        }
    }

    fn group_separator(self) -> char {
        match self {
            NumberLocale::Persian => '\u{066C}',
            NumberLocale::English => ',',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            NumberLocale::Persian => '\u{066B}',
            NumberLocale::English => '.',
        }
    }

    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((&rendered, ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(rendered.len() * 2);
        if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
            out.push('-');
        }

        let len = int_part.len();
        for (i, b) in int_part.bytes().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator());
            }
            out.push(self.digit(b - b'0'));
        }

        if !frac_part.is_empty() {
            out.push(self.decimal_separator());
            out.extend(frac_part.bytes().map(|b| self.digit(b - b'0')));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_digits_and_grouping() {
        assert_eq!(NumberLocale::Persian.format(0.0), "۰");
        assert_eq!(NumberLocale::Persian.format(999.0), "۹۹۹");
        assert_eq!(NumberLocale::Persian.format(1000.0), "۱٬۰۰۰");
        assert_eq!(NumberLocale::Persian.format(1234567.0), "۱٬۲۳۴٬۵۶۷");
    }

    #[test]
    fn fraction_is_trimmed_to_three_digits() {
        assert_eq!(NumberLocale::English.format(99.9), "99.9");
        assert_eq!(NumberLocale::English.format(1.23456), "1.235");
        assert_eq!(NumberLocale::English.format(2.5000), "2.5");
        assert_eq!(NumberLocale::Persian.format(99.9), "۹۹٫۹");
    }

    #[test]
    fn english_grouping() {
        assert_eq!(NumberLocale::English.format(50000.0), "50,000");
        assert_eq!(NumberLocale::English.format(100.0), "100");
    }
}
