use leptos::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `on_close`.
#[component]
pub fn Modal(
    title: &'static str,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let close = move |_| on_close.call(());
    let modal_class = match class {
        Some(extra) => format!("modal {}", extra),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-backdrop" on:click=close>
            <div
                class=modal_class
                role="dialog"
                aria-modal="true"
                on:click=|e| e.stop_propagation()
            >
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" aria-label="Close" on:click=close>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
