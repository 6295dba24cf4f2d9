//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Panel hosting the project tree
//! - [`FolderState`] - Open/closed flags, keyed by node id

mod tree;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::PROJECT_TREE;
use crate::core::{RenderedTree, parse_forest, render_tree};

use tree::tree_unit;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Open/closed flag per folder, keyed by [`RenderedNode::id`]. All folders
/// start closed.
///
/// Toggling only flips a flag; the rendered tree is never rebuilt.
///
/// [`RenderedNode::id`]: crate::core::RenderedNode::id
#[derive(Clone, Copy)]
pub struct FolderState {
    open: RwSignal<HashSet<usize>>,
}

impl FolderState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(HashSet::new()),
        }
    }

    pub fn is_open(&self, id: usize) -> bool {
        self.open.with(|open| open.contains(&id))
    }

    pub fn toggle(&self, id: usize) {
        self.open.update(|open| {
            if !open.remove(&id) {
                open.insert(id);
            }
        });
    }
}

impl Default for FolderState {
    fn default() -> Self {
        Self::new()
    }
}

fn load_project_tree() -> RenderedTree {
    match parse_forest(PROJECT_TREE) {
        Ok(forest) => render_tree(&forest),
        Err(e) => {
            web_sys::console::warn_1(&e.to_string().into());
            RenderedTree::default()
        }
    }
}

#[component]
pub fn Explorer() -> impl IntoView {
    let tree = load_project_tree();
    let folders = FolderState::new();

    view! {
        <div class=css::panel>
            <div class=css::title>
                <span class=css::titleIcon><Icon icon=ic::EXPLORER /></span>
                "Explorateur"
            </div>
            <div id="file-explorer" class=css::tree role="tree">
                {tree
                    .roots
                    .into_iter()
                    .map(|node| tree_unit(node, folders))
                    .collect_view()}
            </div>
        </div>
    }
}
