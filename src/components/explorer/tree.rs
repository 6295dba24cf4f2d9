//! Recursive rendering of [`RenderedNode`]s.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{FolderState, css};
use crate::components::icons as ic;
use crate::core::RenderedNode;

/// Left padding per nesting level, in rem.
const INDENT_REM: f32 = 1.0;

/// One label row, plus its nested block when the node is a folder.
///
/// Plain function rather than a component so the recursion has a concrete
/// return type.
pub fn tree_unit(node: RenderedNode, folders: FolderState) -> AnyView {
    let indent = format!("padding-left: {}rem", node.depth as f32 * INDENT_REM);

    let Some(children) = node.contents else {
        let icon = ic::file_icon(&node.label.icon);
        return view! {
            <div class=css::file style=indent role="treeitem" title=node.path>
                <span class=css::icon><Icon icon=icon /></span>
                <span class=css::fileName>{node.label.name}</span>
            </div>
        }
        .into_any();
    };

    let id = node.id;
    let is_open = Signal::derive(move || folders.is_open(id));
    let folder_class = move || {
        if is_open.get() {
            format!("{} {}", css::folder, css::open)
        } else {
            css::folder.to_string()
        }
    };

    view! {
        <div class=folder_class role="treeitem" aria-expanded=move || is_open.get().to_string()>
            <div
                class=css::folderName
                style=indent
                title=node.path
                on:click=move |_| folders.toggle(id)
            >
                <span class=css::chevron><Icon icon=ic::CHEVRON_RIGHT /></span>
                <span class=css::icon><Icon icon=ic::FOLDER /></span>
                {node.label.name}
            </div>
            <div class=css::folderContents role="group">
                {children
                    .into_iter()
                    .map(|child| tree_unit(child, folders))
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
