use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};

use crate::{
    config::use_map_config,
    registry::{Registry, RegistryError, ViewCommand, VisibleRow},
    store::page_store,
    views::map::{
        map_renderer::MapRenderer, place_card::PlaceCard, place_form::PlaceForm,
        util::scroll_card_into_view,
    },
};

#[component]
pub fn PlaceMap() -> impl IntoView {
    let config = use_map_config();

    // Server render and hydration both start from the seed list; the saved
    // list replaces it once the page is live.
    let registry = RwSignal::new(Registry::with_seed(&config));
    let form_error = RwSignal::new(None::<RegistryError>);
    let map = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| match page_store() {
        Ok(store) => registry.update(|r| r.reload(&store)),
        Err(err) => leptos::logging::warn!("Place storage unavailable ({err}); changes will not be saved"),
    });

    // Selection is not part of a row, so selecting never rebuilds cards or markers.
    let visible = Memo::new(move |_| registry.with(|r| r.visible_rows()));

    let run_commands = move |commands: Vec<ViewCommand>| {
        for command in commands {
            match command {
                ViewCommand::ScrollIntoView(id) => scroll_card_into_view(id),
                ViewCommand::FlyTo { position, zoom } => {
                    // Leaflet animates flyTo by default.
                    if let Some(map) = map.get_untracked() {
                        map.fly_to(&Position::new(position.lat, position.long).as_lat_lng(), zoom);
                    }
                }
            }
        }
    };

    let select_from_sidebar = move |index: usize| {
        if let Some(commands) = registry.try_update(|r| r.select_from_sidebar(index)) {
            run_commands(commands);
        }
    };

    let select_from_marker = move |index: usize| {
        if let Some(commands) = registry.try_update(|r| r.select_from_marker(index)) {
            run_commands(commands);
        }
    };

    let begin_edit = move |index: usize| {
        form_error.set(None);
        registry.update(|r| {
            r.begin_edit(index);
        });
    };

    let submit = move || {
        match registry.try_update(|r| r.submit_to(page_store())) {
            Some(Ok(_)) => form_error.set(None),
            Some(Err(err)) => {
                leptos::logging::warn!("Place form rejected: {err}");
                form_error.set(Some(err));
            }
            None => {}
        }
    };

    let cancel = move || {
        form_error.set(None);
        registry.update(|r| r.cancel_edit());
    };

    view! {
        <div class="place-map">
            <div class="place-map-sidebar">
                <div class="place-map-search">
                    <input
                        type="text"
                        class="place-map-search-input"
                        placeholder="Search..."
                        prop:value=move || registry.with(|r| r.search_query().to_string())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            registry.update(|r| r.set_search_query(query));
                        }
                    />
                </div>
                <For
                    each=move || visible.get()
                    key=|row| *row
                    children=move |row: VisibleRow| {
                        view! {
                            <PlaceCard
                                registry=registry
                                row=row
                                on_select=select_from_sidebar
                                on_edit=begin_edit
                            />
                        }
                    }
                />
                <PlaceForm registry=registry error=form_error on_submit=submit on_cancel=cancel />
            </div>
            <div class="place-map-pane">
                <MapRenderer registry=registry visible=visible map=map on_marker_click=select_from_marker />
            </div>
        </div>
    }
}
