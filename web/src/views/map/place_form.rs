use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    components::error::ErrorView,
    registry::{FormField, Registry, RegistryError},
};

#[component]
pub fn PlaceForm<S, C>(
    registry: RwSignal<Registry>,
    error: RwSignal<Option<RegistryError>>,
    on_submit: S,
    on_cancel: C,
) -> impl IntoView
where
    S: Fn() + Copy + Send + Sync + 'static,
    C: Fn() + Copy + Send + Sync + 'static,
{
    let mode = Memo::new(move |_| registry.with(|r| r.mode()));
    let invalid_field = Memo::new(move |_| {
        error.with(|err| match err {
            Some(RegistryError::Form(form_err)) => form_err.field(),
            _ => None,
        })
    });
    let message = Signal::derive(move || error.with(|err| err.as_ref().map(|e| e.to_string())));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit();
    };

    view! {
        <form class="place-form" on:submit=handle_submit>
            <h2 class="place-form-title">{move || mode.get().title()}</h2>
            <ErrorView message=message />
            {FormField::ALL
                .into_iter()
                .map(|field| {
                    let (min, max) = field
                        .bounds()
                        .map(|(min, max)| (Some(min.to_string()), Some(max.to_string())))
                        .unwrap_or((None, None));
                    view! {
                        <input
                            type=field.input_type()
                            name=field.input_name()
                            placeholder=field.label()
                            min=min
                            max=max
                            step=field.bounds().map(|_| "any")
                            class=move || {
                                if invalid_field.get() == Some(field) {
                                    "place-form-input place-form-input-invalid"
                                } else {
                                    "place-form-input"
                                }
                            }
                            prop:value=move || registry.with(|r| r.draft().get(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                registry.update(|r| r.update_draft(field, value));
                            }
                        />
                    }
                })
                .collect_view()}
            <button type="submit" class="place-form-submit">
                {move || mode.get().submit_label()}
            </button>
            <Show when=move || mode.get().is_editing()>
                <button
                    type="button"
                    class="place-form-cancel"
                    on:click=move |_| on_cancel()
                >
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
