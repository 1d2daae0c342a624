use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use crate::store::FolderSummary;

#[derive(Properties, PartialEq)]
pub struct MoveMenuProps {
    pub folders: Vec<FolderSummary>,
    pub on_move: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(MoveMenu)]
pub fn move_menu(props: &MoveMenuProps) -> Html {
    let target = use_state(String::new);

    let on_change = {
        let target = target.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            target.set(select.value());
        })
    };

    let on_click = {
        let target = target.clone();
        let on_move = props.on_move.clone();
        Callback::from(move |_| on_move.emit((*target).clone()))
    };

    html! {
        <div class="move-menu">
            <label for="move-target">{ "Move selected to:" }</label>
            <select
                id="move-target"
                value={(*target).clone()}
                onchange={on_change}
                disabled={props.disabled}
            >
                <option value="">{ "/ (root)" }</option>
                {
                    for props.folders.iter().map(|folder| {
                        html! {
                            <option value={folder.path.clone()}>
                                { format!("/{}", folder.path) }
                            </option>
                        }
                    })
                }
            </select>
            <button onclick={on_click} disabled={props.disabled}>
                { "Move" }
            </button>
        </div>
    }
}
