//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Sample files and the explorer tree are loaded at compile time using
//! `include_str!`.

use crate::core::chat::Sender;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header and terminal banner.
pub const APP_NAME: &str = "CodeLab";

/// Application version.
pub const APP_VERSION: &str = "1.0.0";

// =============================================================================
// Preferences
// =============================================================================

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Explorer
// =============================================================================

/// Project tree shown in the file explorer.
pub const PROJECT_TREE: &str = include_str!("../assets/tree/project.json");

// =============================================================================
// Editor
// =============================================================================

/// Sample file contents for the editor tabs.
pub mod samples {
    pub const MAIN_JS: &str = include_str!("../assets/samples/main.js");
    pub const INDEX_HTML: &str = include_str!("../assets/samples/index.html");
    pub const STYLES_CSS: &str = include_str!("../assets/samples/styles.css");
}

// =============================================================================
// Chat
// =============================================================================

pub mod chat {
    use super::Sender;

    /// Delay before the canned reply appears, in milliseconds.
    pub const REPLY_DELAY_MS: u32 = 1000;

    pub const INITIAL_MESSAGES: &[(Sender, &str)] = &[
        (
            Sender::System,
            "Bonjour ! Comment puis-je vous aider aujourd'hui ?",
        ),
        (Sender::User, "J'ai besoin d'aide avec mon projet React."),
        (
            Sender::System,
            "Bien sûr, je peux vous aider avec React. Quelle est votre question spécifique ?",
        ),
    ];

    pub const CANNED_REPLIES: &[&str] = &[
        "Je comprends votre question. Laissez-moi vous aider avec ça.",
        "Intéressant ! Voici comment vous pourriez résoudre ce problème...",
        "Bonne question ! Dans ce cas, je vous recommande de...",
        "D'après mon expérience, la meilleure approche serait...",
    ];
}

// =============================================================================
// Terminal Configuration
// =============================================================================

pub mod terminal {
    /// Maximum number of terminal output lines to keep on screen.
    pub const MAX_HISTORY: usize = 500;

    pub const HELP_HEADER: &str = "Commandes disponibles :";

    pub const HELP_HINT: &str = "Tapez \"help\" pour afficher les commandes disponibles.";

    pub const UNKNOWN_COMMAND_PREFIX: &str = "Commande non reconnue :";

    /// Static listing printed by `ls`.
    pub const LS_LISTING: &str = "README.md  package.json  src/  public/";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
