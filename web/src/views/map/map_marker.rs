use crate::{
    config::use_map_config,
    registry::{Registry, VisibleRow},
    views::map::{map_marker_popup::MapMarkerPopup, util::numbered_marker_icon},
};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;

/// Numbered pin for one filtered place. `on_click` gets the filtered index.
///
/// The icon follows the selection in place, so the Leaflet marker and its
/// open popup survive selection changes.
#[component]
pub fn MapMarker<F>(registry: RwSignal<Registry>, row: VisibleRow, on_click: F) -> impl IntoView
where
    F: Fn(usize) + Copy + Send + Sync + 'static,
{
    let config = use_map_config();
    let VisibleRow { id, index, .. } = row;
    let number = row.marker_number();
    let selected = Memo::new(move |_| registry.with(|r| r.is_selected(id)));
    let icon_url = Signal::derive(move || Some(numbered_marker_icon(number, selected.get())));

    registry.with_untracked(|r| r.get(id).cloned()).map(|place| {
        view! {
            <Marker
                position=Position::new(place.position.lat, place.position.long)
                draggable=false
                icon_url=icon_url
                icon_size=Some(config.marker_size)
                icon_anchor=Some(config.marker_anchor)
                mouse_events=MouseEvents::new().on_click(move |_| on_click(index))
            >
                <Popup>
                    <MapMarkerPopup place=place />
                </Popup>
            </Marker>
        }
    })
}
