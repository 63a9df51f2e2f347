//! The editable catalog: full list, per-entry delete, add form.

use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Vec<String>,
    /// Emits the trimmed, non-empty text of a new mission.
    pub on_add: Callback<String>,
    /// Emits the index of the entry whose delete button was pressed.
    pub on_delete: Callback<usize>,
}

#[function_component(CatalogEditor)]
pub fn catalog_editor(p: &Props) -> Html {
    let input_ref = use_node_ref();

    let submit = {
        let cb = p.on_add.clone();
        let input_ref = input_ref.clone();
        move || {
            let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() else {
                return;
            };
            let text = input.value().trim().to_string();
            if text.is_empty() {
                dom::alert("Enter a mission first.");
                return;
            }
            cb.emit(text);
            input.set_value("");
        }
    };

    let on_add_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };
    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    });

    let rows = p.entries.iter().enumerate().map(|(index, text)| {
        let on_delete = {
            let cb = p.on_delete.clone();
            Callback::from(move |_: MouseEvent| cb.emit(index))
        };
        html! {
            <li class="all-missions-item">
                <span class="mission-text">{ text.clone() }</span>
                <button class="delete-btn" onclick={on_delete}>{ "Delete" }</button>
            </li>
        }
    });

    html! {
        <section class="catalog" data-testid="catalog">
            <h2>{ "Mission list" }</h2>
            <ul class="all-missions">{ for rows }</ul>
            <div class="add-mission">
                <input
                    ref={input_ref}
                    id="new-mission-input"
                    type="text"
                    placeholder="Add a new mission"
                    onkeydown={on_keydown}
                />
                <button id="add-mission-btn" onclick={on_add_click}>{ "Add" }</button>
            </div>
        </section>
    }
}
