use leptos::*;

use crate::components::markdown::MarkdownView;
use crate::components::modal::Modal;

pub const RULES_MARKDOWN: &str = include_str!("../../content/rules.md");

/// Informational dialog listing the site rules.
#[component]
pub fn RulesModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Rules" on_close=on_close class="rules-modal">
            <MarkdownView content=RULES_MARKDOWN />
        </Modal>
    }
}
