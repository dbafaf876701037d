use leptos::prelude::*;
use shared_types::LatLong;

/// Viewer settings shared by the registry and the map components.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// `localStorage` key holding the saved place list.
    pub storage_key: String,
    pub initial_center: LatLong,
    pub initial_zoom: f64,
    /// Zoom used when a sidebar card is clicked.
    pub fly_to_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    pub marker_size: (f64, f64),
    pub marker_anchor: (f64, f64),
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            storage_key: "places".to_string(),
            initial_center: LatLong::new(41.8107889, -71.4090636),
            initial_zoom: 13.0,
            fly_to_zoom: 15.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            marker_size: (30.0, 42.0),
            marker_anchor: (15.0, 42.0),
        }
    }
}

pub fn provide_map_config(config: MapConfig) {
    provide_context(config);
}

/// Falls back to the defaults when no config was provided higher up the tree.
pub fn use_map_config() -> MapConfig {
    use_context::<MapConfig>().unwrap_or_default()
}
