//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronRight as ChevronRight, LuCode as Code, LuFile as File,
        LuFileCode as FileCode, LuFileImage as FileImage, LuFileText as FileText,
        LuFolder as Folder, LuFolderTree as Explorer, LuMessageSquare as Chat, LuMoon as Moon,
        LuSend as Send, LuSun as Sun,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChatDots as Chat, BsChevronRight as ChevronRight, BsCodeSlash as Code,
        BsFileEarmark as File, BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage,
        BsFileEarmarkText as FileText, BsFolder as Folder, BsFolder2 as Explorer,
        BsMoon as Moon, BsSend as Send, BsSun as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(EXPLORER, Explorer);
themed_icon!(CHAT, Chat);
themed_icon!(CODE, Code);
themed_icon!(SEND, Send);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);

/// Resolve a file's icon hint (e.g. `bi-file-earmark-code`) to an icon.
///
/// Unrecognized hints get the plain file icon.
pub fn file_icon(hint: &str) -> Icon {
    match hint {
        "bi-file-earmark-code" => FILE_CODE,
        "bi-file-earmark-image" => FILE_IMAGE,
        "bi-file-earmark-text" => FILE_TEXT,
        _ => FILE,
    }
}
