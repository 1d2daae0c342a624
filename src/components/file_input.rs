use web_sys::{Event, FileList, HtmlInputElement};
use yew::prelude::*;

use crate::intake::{FileRef, SelectionEvent};

/// Builds the typed selection event from the picker's file list, keeping
/// selection order.
pub fn selection_event(files: &FileList) -> SelectionEvent {
    let mut refs = Vec::with_capacity(files.length() as usize);
    for index in 0..files.length() {
        if let Some(file) = files.get(index) {
            refs.push(FileRef::new(file.name(), file.size() as u64));
        }
    }
    SelectionEvent::new(refs)
}

#[derive(Properties, PartialEq)]
pub struct FileInputProps {
    pub on_selection: Callback<FileList>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> Html {
    let on_change = {
        let on_selection = props.on_selection.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(files) = input.files() {
                on_selection.emit(files);
            }
        })
    };

    html! {
        <div class="file-input">
            <label for="file-upload" class="file-label">
                { "Select File" }
            </label>
            <input
                id="file-upload"
                type="file"
                onchange={on_change}
                disabled={props.disabled}
            />
        </div>
    }
}
