use leptos::prelude::*;
use shared_types::Place;

#[component]
pub fn MapMarkerPopup(place: Place) -> impl IntoView {
    view! {
        <div class="marker-popup">
            <img
                src=place.image_url.clone()
                alt=place.name.clone()
                class="marker-popup-image"
            />
            <b>{place.name.clone()}</b>
            <br/>
            {place.address.clone()}
        </div>
    }
}
