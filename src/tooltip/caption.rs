use super::target::Target;

/// Caption shown when neither `alt` nor `title` carries any text
pub const NO_CAPTION: &str = "<no caption>";

/// Pick the tooltip caption for `target`.
///
/// An explicit caption wins. Otherwise image maps read the active area and
/// fall back to the map element itself when it has no usable area; plain
/// elements read their own attributes. `alt` is preferred over `title`.
#[must_use]
pub fn caption_for(target: &Target, override_caption: &str, area: usize) -> String {
    if !override_caption.is_empty() {
        return override_caption.to_string();
    }

    let (alt, title) = match target.active_region(area) {
        Some(region) => (region.alt.as_deref(), region.title.as_deref()),
        None => (target.alt.as_deref(), target.title.as_deref()),
    };

    first_non_empty(&[alt, title]).unwrap_or(NO_CAPTION).to_string()
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates.iter().flatten().copied().find(|text| !text.is_empty())
}
