use std::collections::HashSet;

use crate::components::{
    breadcrumbs::Breadcrumbs,
    file_input::{self, FileInput},
    file_list::FileList,
    folder_menu::FolderMenu,
    move_menu::MoveMenu,
};
use crate::download;
use crate::intake::{ConsoleSink, FileIntake};
use crate::store::{self, FileStore};
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::FileReader;
use yew::prelude::*;

pub struct App {
    store: FileStore,
    current_path: String,
    selected: HashSet<String>,
    reading: bool,
    logs: Vec<String>,
    intake: FileIntake<ConsoleSink>,
}

pub enum Msg {
    SelectionMade(web_sys::FileList),
    FileLoaded { name: String, data: Vec<u8> },
    OpenFolder(String),
    ToggleSelect(String),
    MoveSelected(String),
    CreateFolder(String),
    RenameFolder(String),
    DeleteFolder(String),
    DeleteFile(String),
    DownloadFile(String),
    AddLog(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            store: FileStore::new(),
            current_path: String::new(),
            selected: HashSet::new(),
            reading: false,
            logs: vec!["Welcome to the file manager".to_string()],
            intake: FileIntake::new(ConsoleSink),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectionMade(files) => {
                let event = file_input::selection_event(&files);
                self.intake.handle(&event);

                // An empty picker interaction is a no-op, not an error.
                let file = match (event.first(), files.get(0)) {
                    (Some(_), Some(file)) => file,
                    _ => return false,
                };
                self.add_log(ctx, format!("File selected: {}", file.name()));
                self.read_file(ctx, file);
                true
            }
            Msg::FileLoaded { name, data } => {
                self.reading = false;
                let size = data.len();
                let destination = display_path(&self.current_path);
                match self
                    .store
                    .save(&self.current_path, &name, data, js_sys::Date::now())
                {
                    Ok(stored) => {
                        self.add_log(ctx, format!("File loaded: {} bytes", size));
                        self.add_log(ctx, format!("Saved '{}' to {}", stored, destination));
                    }
                    Err(err) => self.add_log(ctx, format!("Upload failed: {}", err)),
                }
                true
            }
            Msg::OpenFolder(path) => {
                if self.store.folder_exists(&path) {
                    self.current_path = path;
                } else {
                    // The folder vanished underneath us, go back to the root.
                    self.add_log(
                        ctx,
                        format!("Folder {} no longer exists", display_path(&path)),
                    );
                    self.current_path.clear();
                }
                self.selected.clear();
                true
            }
            Msg::ToggleSelect(name) => {
                if !self.selected.remove(&name) {
                    self.selected.insert(name);
                }
                true
            }
            Msg::MoveSelected(target) => {
                let mut names: Vec<String> = self.selected.drain().collect();
                names.sort();
                let mut moved = 0;
                for name in names {
                    match self.store.move_file(&self.current_path, &target, &name) {
                        Ok(()) => moved += 1,
                        Err(err) => {
                            self.add_log(ctx, format!("Failed to move {}: {}", name, err));
                        }
                    }
                }
                if moved > 0 {
                    self.add_log(
                        ctx,
                        format!("Moved {} file(s) to {}", moved, display_path(&target)),
                    );
                }
                true
            }
            Msg::CreateFolder(name) => {
                match self.store.create_folder(&self.current_path, &name) {
                    Ok(created) => self.add_log(ctx, format!("Folder '{}' created", created)),
                    Err(err) => self.add_log(ctx, format!("Could not create folder: {}", err)),
                }
                true
            }
            Msg::RenameFolder(old) => {
                let new_name = web_sys::window()
                    .and_then(|w| {
                        w.prompt_with_message(&format!("Rename folder '{}' to:", old))
                            .ok()
                            .flatten()
                    })
                    .filter(|name| !name.trim().is_empty());
                let Some(new_name) = new_name else { return false };
                match self
                    .store
                    .rename_folder(&self.current_path, &old, &new_name)
                {
                    Ok(renamed) => self.add_log(ctx, format!("Folder renamed to '{}'", renamed)),
                    Err(err) => self.add_log(ctx, format!("Could not rename folder: {}", err)),
                }
                true
            }
            Msg::DeleteFolder(name) => {
                match self.store.delete_folder(&self.current_path, &name) {
                    Ok(()) => self.add_log(ctx, format!("Folder '{}' deleted", name)),
                    Err(err) => self.add_log(ctx, format!("Could not delete folder: {}", err)),
                }
                true
            }
            Msg::DeleteFile(name) => {
                match self.store.delete_file(&self.current_path, &name) {
                    Ok(()) => {
                        self.selected.remove(&name);
                        self.add_log(ctx, format!("File '{}' deleted", name));
                    }
                    Err(err) => self.add_log(ctx, format!("Could not delete file: {}", err)),
                }
                true
            }
            Msg::DownloadFile(name) => {
                match self.store.file(&self.current_path, &name) {
                    Ok(file) => match download::save_bytes(&name, &file.data) {
                        Ok(()) => self.add_log(ctx, format!("File '{}' downloaded", name)),
                        Err(err) => self.add_log(ctx, format!("Download failed: {:?}", err)),
                    },
                    Err(err) => self.add_log(ctx, format!("Download failed: {}", err)),
                }
                true
            }
            Msg::AddLog(line) => {
                self.logs.push(line);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let listing = self.store.listing(&self.current_path).unwrap_or_default();
        let crumbs = store::breadcrumbs(&self.current_path);
        let mut selected: Vec<String> = self.selected.iter().cloned().collect();
        selected.sort();

        html! {
            <div class="app-container">
                <header>
                    <h1>{ "File Manager" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Files" }</h2>
                        <Breadcrumbs
                            crumbs={crumbs}
                            on_navigate={ctx.link().callback(Msg::OpenFolder)}
                        />
                        <FileList
                            files={listing.files}
                            folders={listing.folders}
                            selected={selected}
                            on_open={ctx.link().callback(Msg::OpenFolder)}
                            on_toggle={ctx.link().callback(Msg::ToggleSelect)}
                            on_download={ctx.link().callback(Msg::DownloadFile)}
                            on_delete_file={ctx.link().callback(Msg::DeleteFile)}
                            on_rename_folder={ctx.link().callback(Msg::RenameFolder)}
                            on_delete_folder={ctx.link().callback(Msg::DeleteFolder)}
                        />

                        <h2>{ "Upload" }</h2>
                        <FileInput
                            on_selection={ctx.link().callback(Msg::SelectionMade)}
                            disabled={self.reading}
                        />

                        <h2>{ "Folders" }</h2>
                        <FolderMenu on_create={ctx.link().callback(Msg::CreateFolder)} />
                        <MoveMenu
                            folders={self.store.all_folders()}
                            disabled={self.selected.is_empty()}
                            on_move={ctx.link().callback(Msg::MoveSelected)}
                        />
                    </div>

                    <div class="panel">
                        <h2>{ "Logs" }</h2>
                        <div class="logs-container">
                            {
                                for self.logs.iter().map(|line| {
                                    html! { <div class="log-entry">{ line.clone() }</div> }
                                })
                            }
                        </div>
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn add_log(&mut self, ctx: &Context<Self>, message: String) {
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        let log_entry = format!("[{}] {}", timestamp, message);
        ctx.link().send_message(Msg::AddLog(log_entry));
    }

    fn read_file(&mut self, ctx: &Context<Self>, file: web_sys::File) {
        self.reading = true;

        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(err) => {
                self.reading = false;
                self.add_log(ctx, format!("Could not read file: {:?}", err));
                return;
            }
        };
        let reader_clone = reader.clone();
        let link = ctx.link().clone();
        let name = file.name();

        let onload = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Ok(buffer) = reader_clone.result() {
                let bytes = Uint8Array::new(&buffer);
                let mut data = vec![0; bytes.length() as usize];
                bytes.copy_to(&mut data[..]);
                link.send_message(Msg::FileLoaded {
                    name: name.clone(),
                    data,
                });
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if let Err(err) = reader.read_as_array_buffer(&file) {
            self.reading = false;
            self.add_log(ctx, format!("Could not read file: {:?}", err));
        }
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", path)
    }
}
