use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Error bar that is only shown while `message` holds something.
#[component]
pub fn ErrorView(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {message}
                </MessageBar>
            }
        })
    }
}
