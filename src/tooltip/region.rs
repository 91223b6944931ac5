use crate::error::GeometryError;

use super::position::Position;
use super::style::clamp_px;

/// Read a leading integer the way `parseInt(value, 10)` does
fn parse_coord(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

/// Split an area `coords` list into sorted x and y values.
///
/// Odd 1-based positions are x values, even positions are y values.
///
/// # Errors
///
/// Returns `GeometryError::InvalidCoords` if any entry is not an integer or
/// either axis ends up without values.
pub fn split_coords(map_id: &str, coords: &str) -> Result<(Vec<i32>, Vec<i32>), GeometryError> {
    let invalid = || GeometryError::InvalidCoords {
        map_id: map_id.to_string(),
        coords: coords.to_string(),
    };

    // Browsers accept a single trailing comma
    let list = coords.trim_end();
    let list = list.strip_suffix(',').unwrap_or(list);

    let values = list
        .split(',')
        .map(parse_coord)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    let (mut xs, mut ys): (Vec<i32>, Vec<i32>) = (Vec::new(), Vec::new());
    for (i, value) in values.into_iter().enumerate() {
        if i % 2 == 0 {
            xs.push(value);
        } else {
            ys.push(value);
        }
    }

    if xs.is_empty() || ys.is_empty() {
        return Err(invalid());
    }

    xs.sort_unstable();
    ys.sort_unstable();
    Ok((xs, ys))
}

/// Base point of a map area: horizontally centred, on its bottom edge
///
/// # Errors
///
/// Returns `GeometryError::InvalidCoords` when `coords` cannot be split into points.
pub fn region_anchor(map_id: &str, coords: &str) -> Result<Position, GeometryError> {
    let (xs, ys) = split_coords(map_id, coords)?;

    // Both vectors are sorted and non-empty
    let (min_x, max_x) = (xs[0], xs[xs.len() - 1]);
    let (min_y, max_y) = (ys[0], ys[ys.len() - 1]);

    let height = i64::from(max_y) - i64::from(min_y);
    let width = i64::from(max_x) - i64::from(min_x);

    // width is never negative, so (width + 1) / 2 rounds half up
    Ok(Position {
        top: clamp_px(height + i64::from(min_y)),
        left: clamp_px((width + 1) / 2 + i64::from(min_x)),
    })
}
