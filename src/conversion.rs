use crate::error::{Error, Result};

/// Convert an axis-aligned rectangle into the normalized coordinates of its
/// four corners, clockwise from the top-left: (x0,y0), (x0+w,y0),
/// (x0+w,y0+h), (x0,y0+h). Each x is divided by the image width and each y
/// by the image height. Coordinates are not clamped, so boxes extending
/// past the image bounds produce values outside [0, 1].
pub fn rectangle_to_polygon(
    x0: i64,
    y0: i64,
    width: i64,
    height: i64,
    img_width: u32,
    img_height: u32,
) -> Result<[f64; 8]> {
    if img_width == 0 || img_height == 0 {
        return Err(Error::InvalidDimension {
            width: img_width,
            height: img_height,
        });
    }
    let w = img_width as f64;
    let h = img_height as f64;
    let (x1, y1) = (x0 + width, y0);
    let (x2, y2) = (x1, y1 + height);
    let (x3, y3) = (x0, y0 + height);

    Ok([
        x0 as f64 / w,
        y0 as f64 / h,
        x1 as f64 / w,
        y1 as f64 / h,
        x2 as f64 / w,
        y2 as f64 / h,
        x3 as f64 / w,
        y3 as f64 / h,
    ])
}

/// Format one label line: category code followed by the eight polygon
/// coordinates, space-separated. Coordinates use `{:?}` so whole values
/// print with a trailing `.0` (`0.0`, not `0`), matching the format the
/// original annotation tooling emits.
pub fn format_label_line(category: u32, polygon: &[f64; 8]) -> String {
    let mut line = category.to_string();
    for coord in polygon {
        line.push_str(&format!(" {:?}", coord));
    }
    line
}
