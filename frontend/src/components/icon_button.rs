use leptos::*;

/// Image-only button, used for the hamburger and close icons.
#[component]
pub fn IconButton(
    #[prop(into)] icon: String,
    alt: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] expanded: Option<MaybeSignal<bool>>,
    on_click: Callback<ev::MouseEvent>,
) -> impl IntoView {
    let full_class = icon_button_class(class.as_deref());
    let aria_expanded = move || expanded.as_ref().map(|open| open.get().to_string());

    view! {
        <button
            type="button"
            class=full_class
            aria-label=alt
            aria-expanded=aria_expanded
            on:click=move |ev| on_click.call(ev)
        >
            <img src=icon alt=alt class="btn-icon-image" />
        </button>
    }
}

fn icon_button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("btn btn-icon {}", extra),
        None => "btn btn-icon".to_string(),
    }
}
