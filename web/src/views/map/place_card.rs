use leptos::prelude::*;

use crate::registry::{Registry, VisibleRow};

/// Sidebar card: details pane and reviews pane side by side, scrolled
/// horizontally. Clicking the card selects it; "Edit" only opens the form.
#[component]
pub fn PlaceCard<S, E>(
    registry: RwSignal<Registry>,
    row: VisibleRow,
    on_select: S,
    on_edit: E,
) -> impl IntoView
where
    S: Fn(usize) + Copy + Send + Sync + 'static,
    E: Fn(usize) + Copy + Send + Sync + 'static,
{
    let VisibleRow { id, index, .. } = row;
    let selected = Memo::new(move |_| registry.with(|r| r.is_selected(id)));
    registry.with_untracked(|r| r.get(id).cloned()).map(|place| {
        let reviews = place.reviews().to_vec();

        view! {
            <div
                id=id.card_dom_id()
                class=move || {
                    if selected.get() { "place-card place-card-selected" } else { "place-card" }
                }
                on:click=move |_| on_select(index)
            >
                <div class="place-card-panes">
                    <div class="place-card-pane">
                        <h2 class="place-card-title">{place.name.clone()}</h2>
                        <img src=place.image_url.clone() alt=place.name.clone() class="place-card-image" />
                        <p>{place.address.clone()}</p>
                        <p>{place.phone.clone()}</p>
                        <a
                            href=place.website.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="place-card-link"
                        >
                            {place.website.clone()}
                        </a>
                        <button
                            class="place-card-edit"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_edit(index);
                            }
                        >
                            "Edit"
                        </button>
                    </div>
                    <div class="place-card-pane">
                        <h2 class="place-card-title">"Reviews"</h2>
                        {if reviews.is_empty() {
                            view! { <p>"No reviews now."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="place-card-reviews">
                                    {reviews.into_iter().map(|review| view! { <li>{review}</li> }).collect_view()}
                                </ul>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>
        }
    })
}
