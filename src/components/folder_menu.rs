use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FolderMenuProps {
    pub on_create: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(FolderMenu)]
pub fn folder_menu(props: &FolderMenuProps) -> Html {
    let name = use_state(String::new);

    let on_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_click = {
        let name = name.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |_| {
            let pending = name.trim().to_string();
            if !pending.is_empty() {
                on_create.emit(pending);
                name.set(String::new());
            }
        })
    };

    html! {
        <div class="folder-menu">
            <input
                type="text"
                placeholder="New folder name"
                value={(*name).clone()}
                onchange={on_change}
                disabled={props.disabled}
            />
            <button onclick={on_click} disabled={props.disabled}>
                { "Create Folder" }
            </button>
        </div>
    }
}
