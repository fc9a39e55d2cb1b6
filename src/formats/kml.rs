use crate::math::Point2;

// Element reference:
// https://developers.google.com/kml/documentation/kmlreference

/// Renders a site and one sensor's coverage as a KML document.
///
/// The outline becomes an unfilled polygon placemark and the coverage rings
/// a single `MultiGeometry` placemark, each with its own shared style.
/// All coordinates are geographic `(lon, lat)` degrees at altitude zero.
#[must_use]
pub fn write_site_document(
    site: &str,
    sensor: &str,
    outline: &[Point2],
    coverage: &[Vec<Point2>],
) -> String {
    let site = escape_text(site);
    let sensor = escape_text(sensor);
    let outline_polygon = polygon_block(outline, "      ");
    let coverage_polygons = coverage
        .iter()
        .map(|ring| polygon_block(ring, "        "))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>{site}</name>
    <Style id="outline">
      <LineStyle>
        <color>ff0000ff</color>
        <width>2</width>
      </LineStyle>
      <PolyStyle>
        <fill>0</fill>
      </PolyStyle>
    </Style>
    <Style id="coverage">
      <LineStyle>
        <color>ff00aa00</color>
        <width>1</width>
      </LineStyle>
      <PolyStyle>
        <color>7f00aa00</color>
      </PolyStyle>
    </Style>
    <Placemark>
      <name>{site} outline</name>
      <styleUrl>#outline</styleUrl>
{outline_polygon}
    </Placemark>
    <Placemark>
      <name>{sensor} coverage</name>
      <styleUrl>#coverage</styleUrl>
      <MultiGeometry>
{coverage_polygons}
      </MultiGeometry>
    </Placemark>
  </Document>
</kml>
"#
    )
}

fn polygon_block(ring: &[Point2], indent: &str) -> String {
    let coordinates = ring
        .iter()
        .map(|p| format!("{},{},0", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{indent}<Polygon>\n\
         {indent}  <outerBoundaryIs>\n\
         {indent}    <LinearRing>\n\
         {indent}      <coordinates>{coordinates}</coordinates>\n\
         {indent}    </LinearRing>\n\
         {indent}  </outerBoundaryIs>\n\
         {indent}</Polygon>"
    )
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
