use crate::{
    config::use_map_config,
    registry::{Registry, VisibleRow},
    views::map::map_marker::MapMarker,
};
use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};

#[component]
pub fn MapRenderer<F>(
    registry: RwSignal<Registry>,
    visible: Memo<Vec<VisibleRow>>,
    map: JsRwSignal<Option<Map>>,
    on_marker_click: F,
) -> impl IntoView
where
    F: Fn(usize) + Copy + Send + Sync + 'static,
{
    let config = use_map_config();
    let center = Position::new(config.initial_center.lat, config.initial_center.long);

    Effect::new(move |_| {
        leptos::logging::log!("Rendering {} markers", visible.with(Vec::len));
    });

    view! {
        <MapContainer
            class="map-renderer-map-container"
            style="height: 100vh; width: 100%"
            center=center
            zoom=config.initial_zoom
            set_view=true
            map=map.write_only()
        >
            <TileLayer url=config.tile_url.clone() attribution=config.attribution.clone() />
            // Keyed on the row, so a marker is only rebuilt when its place,
            // number or visibility changes.
            <For
                each=move || visible.get()
                key=|row| *row
                children=move |row: VisibleRow| {
                    view! { <MapMarker registry=registry row=row on_click=on_marker_click /> }
                }
            />
        </MapContainer>
    }
}
