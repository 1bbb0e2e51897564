use leptos::*;

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub enum ButtonSize {
    #[default]
    Medium,
    /// Fixed-width buttons stacked in the slide-out panel.
    Panel,
    /// Account button in the top bar.
    Wide,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Outline => "btn btn-outline",
    };
    let size_class = match size {
        ButtonSize::Medium => "",
        ButtonSize::Panel => "btn-panel",
        ButtonSize::Wide => "btn-wide",
    };

    let mut classes = vec![variant_class];
    if !size_class.is_empty() {
        classes.push(size_class);
    }
    if let Some(extra) = extra {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Reusable button component with variants and sizes.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let full_class = button_class(variant, size, class.as_deref());
    let button_type = button_type.unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=button_type
            class=full_class
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
