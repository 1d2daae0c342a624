use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::prelude::*;

use crate::store::{size_display, FileSummary, FolderSummary};

#[derive(Properties, PartialEq)]
pub struct FileListProps {
    pub files: Vec<FileSummary>,
    pub folders: Vec<FolderSummary>,
    pub selected: Vec<String>,
    pub on_open: Callback<String>,
    pub on_toggle: Callback<String>,
    pub on_download: Callback<String>,
    pub on_delete_file: Callback<String>,
    pub on_rename_folder: Callback<String>,
    pub on_delete_folder: Callback<String>,
}

// Day-first with minutes, like the listing always showed it.
fn format_modified(modified_ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(modified_ms));
    format!(
        "{:02}/{:02}/{} {:02}:{:02}",
        date.get_date(),
        date.get_month() + 1,
        date.get_full_year(),
        date.get_hours(),
        date.get_minutes(),
    )
}

#[function_component(FileList)]
pub fn file_list(props: &FileListProps) -> Html {
    if props.files.is_empty() && props.folders.is_empty() {
        return html! { <p class="empty-folder">{ "This folder is empty." }</p> };
    }

    html! {
        <table class="file-list">
            <thead>
                <tr>
                    <th></th>
                    <th>{ "Name" }</th>
                    <th>{ "Size" }</th>
                    <th>{ "Modified" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {
                    for props.folders.iter().map(|folder| {
                        let open = {
                            let on_open = props.on_open.clone();
                            let path = folder.path.clone();
                            Callback::from(move |_| on_open.emit(path.clone()))
                        };
                        let rename = {
                            let on_rename = props.on_rename_folder.clone();
                            let name = folder.name.clone();
                            Callback::from(move |_| on_rename.emit(name.clone()))
                        };
                        let delete = {
                            let on_delete = props.on_delete_folder.clone();
                            let name = folder.name.clone();
                            Callback::from(move |_| on_delete.emit(name.clone()))
                        };
                        html! {
                            <tr class="folder-row">
                                <td></td>
                                <td>
                                    <a class="folder-name" onclick={open}>{ folder.name.clone() }</a>
                                </td>
                                <td>{ format!("{} file(s)", folder.file_count) }</td>
                                <td></td>
                                <td>
                                    <button onclick={rename}>{ "Rename" }</button>
                                    <button onclick={delete}>{ "Delete" }</button>
                                </td>
                            </tr>
                        }
                    })
                }
                {
                    for props.files.iter().map(|file| {
                        let checked = props.selected.contains(&file.name);
                        let toggle = {
                            let on_toggle = props.on_toggle.clone();
                            let name = file.name.clone();
                            Callback::from(move |_: Event| on_toggle.emit(name.clone()))
                        };
                        let download = {
                            let on_download = props.on_download.clone();
                            let name = file.name.clone();
                            Callback::from(move |_| on_download.emit(name.clone()))
                        };
                        let delete = {
                            let on_delete = props.on_delete_file.clone();
                            let name = file.name.clone();
                            Callback::from(move |_| on_delete.emit(name.clone()))
                        };
                        html! {
                            <tr class="file-row">
                                <td>
                                    <input type="checkbox" checked={checked} onchange={toggle} />
                                </td>
                                <td>{ file.name.clone() }</td>
                                <td>{ size_display(file.size) }</td>
                                <td>{ format_modified(file.modified_ms) }</td>
                                <td>
                                    <button onclick={download}>{ "Download" }</button>
                                    <button onclick={delete}>{ "Delete" }</button>
                                </td>
                            </tr>
                        }
                    })
                }
            </tbody>
        </table>
    }
}
