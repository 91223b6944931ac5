/// Round half toward positive infinity, matching browser `Math.round`
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = (value + 0.5).floor() as i32;
    rounded
}

/// Narrow a pixel sum back to `i32`, saturating at the bounds
#[must_use]
pub fn clamp_px(value: i64) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    clamped
}

/// Parse a resolved CSS length such as `"12px"` into whole pixels.
///
/// Everything but digits, `-` and `.` is discarded first, then the longest
/// leading number is read. Input without any digits yields 0.
#[must_use]
pub fn parse_px(value: &str) -> i32 {
    let stripped: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    leading_number(&stripped).map_or(0, round_half_up)
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let mut digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Resolved style values of the element a tooltip is positioned against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxStyle {
    pub top: String,
    pub left: String,
    pub margin_top: String,
    pub margin_left: String,
    pub padding_top: String,
    pub padding_left: String,
}

impl BoxStyle {
    /// Summed `(top, left)` of position, margin and padding
    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        let sum = |values: [&str; 3]| clamp_px(values.iter().map(|v| i64::from(parse_px(v))).sum());
        let top = sum([self.top.as_str(), self.margin_top.as_str(), self.padding_top.as_str()]);
        let left = sum([self.left.as_str(), self.margin_left.as_str(), self.padding_left.as_str()]);
        (top, left)
    }
}

/// Measurements taken from the tooltip node itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipMetrics {
    /// Rendered width (`offsetWidth`) while temporarily laid out
    pub width: f64,
    pub padding_top: String,
    pub margin_top: String,
}

impl TipMetrics {
    #[must_use]
    pub fn half_width(&self) -> i32 {
        round_half_up(self.width / 2.0)
    }

    #[must_use]
    pub fn top_inset(&self) -> i32 {
        clamp_px(i64::from(parse_px(&self.padding_top)) + i64::from(parse_px(&self.margin_top)))
    }
}
