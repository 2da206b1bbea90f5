//! Map rendering: turns aggregated rows into a self-contained HTML map.
//!
//! Each row becomes one Leaflet marker: a DivIcon printing the maximum
//! temperature in its category colour, with a popup carrying the city,
//! temperature and conditions. Marker data is embedded in the page as JSON.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::category::classify;
use crate::error::Result;
use crate::models::Row;

/// View settings for the rendered map
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Initial map center as (latitude, longitude)
    pub center: (f64, f64),
    /// Initial zoom level
    pub zoom: u8,
    /// Document title
    pub title: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: (52.3784, 4.9009),
            zoom: 7,
            title: "Netherlands weather map".to_string(),
        }
    }
}

/// Marker payload embedded into the rendered page
#[derive(Serialize)]
struct Marker {
    latitude: f64,
    longitude: f64,
    temperature: i32,
    colour: &'static str,
    popup: String,
}

impl Marker {
    fn from_row(row: &Row) -> Self {
        Self {
            latitude: row.latitude,
            longitude: row.longitude,
            temperature: row.max_temperature,
            colour: classify(row.max_temperature).colour(),
            popup: format!("{} - {} - {}", row.city, row.max_temperature, row.description),
        }
    }
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const map = L.map('map').setView([__CENTER_LAT__, __CENTER_LON__], __ZOOM__);
L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
const markers = __MARKERS__;
for (const m of markers) {
  L.marker([m.latitude, m.longitude], {
    icon: L.divIcon({
      html: '<div style="font-size: 16pt; color: ' + m.colour + ';">' + m.temperature + '</div>'
    })
  }).addTo(map).bindPopup(m.popup);
}
</script>
</body>
</html>
"#;

/// Render rows into a complete HTML document
#[must_use]
pub fn render_map(rows: &[Row], options: &MapOptions) -> String {
    let markers: Vec<Marker> = rows.iter().map(Marker::from_row).collect();
    let data = serde_json::to_string(&markers).expect("marker data serializes");

    PAGE_TEMPLATE
        .replace("__TITLE__", &options.title)
        .replace("__CENTER_LAT__", &options.center.0.to_string())
        .replace("__CENTER_LON__", &options.center.1.to_string())
        .replace("__ZOOM__", &options.zoom.to_string())
        .replace("__MARKERS__", &data)
}

/// Render rows and write the map document to a file
pub fn write_map<P: AsRef<Path>>(rows: &[Row], options: &MapOptions, path: P) -> Result<()> {
    let html = render_map(rows, options);
    fs::write(path.as_ref(), html)?;

    info!("Wrote map with {} markers to {}", rows.len(), path.as_ref().display());
    Ok(())
}
