use crate::error::{FormatError, Result};
use crate::math::Point2;

/// Parses the exterior ring of a WKT `POLYGON`.
///
/// Interior rings are ignored and a third (altitude) axis is dropped, so
/// `POLYGON Z` site outlines collapse to their 2D footprint. The tag is
/// matched case-insensitively.
///
/// # Errors
///
/// Returns `FormatError::Wkt` when the text is not a polygon, the ring is
/// not closed, or a coordinate fails to parse.
pub fn parse_polygon(text: &str) -> Result<Vec<Point2>> {
    let trimmed = text.trim();
    let rest = strip_tag(trimmed, "POLYGON").ok_or_else(|| {
        FormatError::Wkt(format!(
            "expected POLYGON, got {:?}",
            trimmed.split_whitespace().next().unwrap_or("")
        ))
    })?;
    let rest = rest.trim_start();
    let rest = ["ZM", "Z", "M"]
        .iter()
        .find_map(|qualifier| strip_tag(rest, qualifier))
        .unwrap_or(rest)
        .trim_start();
    if strip_tag(rest, "EMPTY").is_some() {
        return Err(FormatError::Wkt("POLYGON EMPTY has no outline".to_string()).into());
    }
    let rest = rest
        .strip_prefix('(')
        .ok_or_else(|| FormatError::Wkt("expected ring list after POLYGON".to_string()))?;
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('(')
        .ok_or_else(|| FormatError::Wkt("expected exterior ring".to_string()))?;
    let end = rest
        .find(')')
        .ok_or_else(|| FormatError::Wkt("unterminated exterior ring".to_string()))?;
    let tail = rest[end + 1..].trim_end();
    if !tail.ends_with(')') {
        return Err(FormatError::Wkt("unterminated POLYGON".to_string()).into());
    }

    let ring = parse_ring(&rest[..end])?;
    if ring.len() < 4 {
        return Err(
            FormatError::Wkt(format!("ring needs at least 4 points, got {}", ring.len())).into(),
        );
    }
    if ring.first() != ring.last() {
        return Err(FormatError::Wkt("ring is not closed".to_string()).into());
    }
    Ok(ring)
}

/// Formats a single ring as a WKT `POLYGON`.
#[must_use]
pub fn write_polygon(ring: &[Point2]) -> String {
    if ring.is_empty() {
        return "POLYGON EMPTY".to_string();
    }
    format!("POLYGON ({})", ring_text(ring))
}

/// Formats a set of rings as a WKT `MULTIPOLYGON`, one polygon per ring.
#[must_use]
pub fn write_multipolygon(rings: &[Vec<Point2>]) -> String {
    if rings.is_empty() {
        return "MULTIPOLYGON EMPTY".to_string();
    }
    let polygons = rings
        .iter()
        .map(|ring| format!("({})", ring_text(ring)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("MULTIPOLYGON ({polygons})")
}

/// Strips a case-insensitive word from the front of `text`. The word must
/// not run into a following alphanumeric character.
fn strip_tag<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let head = text.get(..tag.len())?;
    if !head.eq_ignore_ascii_case(tag) {
        return None;
    }
    let rest = &text[tag.len()..];
    match rest.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() => None,
        _ => Some(rest),
    }
}

fn parse_ring(body: &str) -> Result<Vec<Point2>> {
    let mut points = Vec::new();
    for chunk in body.split(',') {
        let mut axes = chunk.split_whitespace();
        let x = axis(&mut axes, chunk)?;
        let y = axis(&mut axes, chunk)?;
        points.push(Point2::new(x, y));
    }
    Ok(points)
}

fn axis(axes: &mut std::str::SplitWhitespace<'_>, chunk: &str) -> Result<f64> {
    let token = axes
        .next()
        .ok_or_else(|| FormatError::Wkt(format!("coordinate needs x and y: {:?}", chunk.trim())))?;
    let value = token
        .parse::<f64>()
        .map_err(|_| FormatError::Wkt(format!("bad coordinate {token:?}")))?;
    Ok(value)
}

fn ring_text(ring: &[Point2]) -> String {
    let coords = ring
        .iter()
        .map(|p| format!("{} {}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({coords})")
}
