//! Browsing session state kept on the client side.

use tracing::{debug, error};
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_entity::folder::{ROOT_PATH, toggle_folder};
use explorer_entity::{File, Folder, FolderNode, FolderWithStats};

use crate::api::ExplorerApi;

/// Folders and files of the folder being viewed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentContents {
    pub folders: Vec<FolderWithStats>,
    pub files: Vec<File>,
}

/// The last search and what it matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub folders: Vec<Folder>,
    pub files: Vec<File>,
    pub query: String,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Everything a browsing session displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplorerState {
    pub folder_tree: Vec<FolderNode>,
    pub current_folder: Option<Folder>,
    pub current_contents: CurrentContents,
    pub selected_folder: Option<Folder>,
    pub search_results: SearchState,
    pub loading: bool,
    pub error: Option<String>,
}

/// Drives an [`ExplorerState`] through an [`ExplorerApi`].
///
/// Failed calls never propagate: the message lands in `state.error` and
/// the previous data is left in place.
pub struct ExplorerStore<A> {
    api: A,
    state: ExplorerState,
}

impl<A: ExplorerApi> ExplorerStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ExplorerState::default(),
        }
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Path of the folder being viewed, `/` at the root level.
    pub fn current_path(&self) -> &str {
        self.state
            .current_folder
            .as_ref()
            .map_or(ROOT_PATH, |folder| folder.path.as_str())
    }

    fn begin(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    fn fail(&mut self, action: &str, err: &AppError) {
        error!(error = %err, "Failed to {action}");
        self.state.error = Some(err.message.clone());
    }

    /// Reloads the whole folder tree.
    pub async fn load_folder_tree(&mut self) {
        self.begin();
        match self.api.get_folder_tree().await {
            Ok(tree) => {
                debug!(roots = tree.len(), "Loaded folder tree");
                self.state.folder_tree = tree;
            }
            Err(err) => self.fail("load folder tree", &err),
        }
        self.state.loading = false;
    }

    /// Loads the contents of a folder, or of the root level for `None`.
    pub async fn load_folder_contents(&mut self, folder_id: Option<Uuid>) {
        self.begin();
        match self.api.get_folder_contents(folder_id).await {
            Ok(contents) => {
                self.state.current_contents = CurrentContents {
                    folders: contents.folders,
                    files: contents.files,
                };
                self.state.current_folder = contents.current_folder;
            }
            Err(err) => self.fail("load folder contents", &err),
        }
        self.state.loading = false;
    }

    /// Marks a folder as selected and opens it.
    pub async fn select_folder(&mut self, folder: &Folder) {
        self.state.selected_folder = Some(folder.clone());
        self.load_folder_contents(Some(folder.id)).await;
    }

    /// Flips the expanded flag of a tree node. Returns `false` when no
    /// node has that id.
    pub fn toggle_folder(&mut self, folder_id: Uuid) -> bool {
        toggle_folder(&mut self.state.folder_tree, folder_id)
    }

    /// Runs a search. A blank query clears the current results instead.
    pub async fn search(&mut self, query: &str) {
        if query.trim().is_empty() {
            self.clear_search();
            return;
        }

        self.begin();
        match self.api.search(query, None, None).await {
            Ok(results) => {
                self.state.search_results = SearchState {
                    folders: results.folders,
                    files: results.files,
                    query: query.to_string(),
                };
            }
            Err(err) => self.fail("search", &err),
        }
        self.state.loading = false;
    }

    pub fn clear_search(&mut self) {
        self.state.search_results = SearchState::default();
    }
}
