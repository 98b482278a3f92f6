//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons,
//! including the selected/unselected pairs the bottom navigation uses.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Page;

// =============================================================================
// Theme Imports
// =============================================================================

// Lucide ships no filled variants, so its pairs reuse the outline glyph.
mod lucide {
    pub use icondata::{
        LuCheck as CheckCircle, LuClipboard as ClipboardCopy, LuDownload as RepoSelected,
        LuDownload as RepoUnselected, LuExternalLink as Github, LuExternalLink as Telegram,
        LuFileText as LogsSelected, LuFileText as LogsUnselected, LuHouse as HomeSelected,
        LuHouse as HomeUnselected, LuLayoutGrid as ManageSelected, LuLayoutGrid as ManageUnselected,
        LuList as AppList, LuPlus as Add, LuSettings as SettingsSelected,
        LuSettings as SettingsUnselected, LuTriangleAlert as Warning,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircle as CheckCircle, BsClipboard as ClipboardCopy,
        BsCloudDownload as RepoUnselected, BsCloudDownloadFill as RepoSelected,
        BsExclamationTriangle as Warning, BsFileEarmarkText as LogsUnselected,
        BsFileEarmarkTextFill as LogsSelected, BsGear as SettingsUnselected,
        BsGearFill as SettingsSelected, BsGithub as Github, BsGrid as ManageUnselected,
        BsGridFill as ManageSelected, BsHouse as HomeUnselected, BsHouseFill as HomeSelected,
        BsListUl as AppList, BsPlusLg as Add, BsTelegram as Telegram,
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

themed_icon!(REPO_SELECTED, RepoSelected);
themed_icon!(REPO_UNSELECTED, RepoUnselected);
themed_icon!(MANAGE_SELECTED, ManageSelected);
themed_icon!(MANAGE_UNSELECTED, ManageUnselected);
themed_icon!(HOME_SELECTED, HomeSelected);
themed_icon!(HOME_UNSELECTED, HomeUnselected);
themed_icon!(LOGS_SELECTED, LogsSelected);
themed_icon!(LOGS_UNSELECTED, LogsUnselected);
themed_icon!(SETTINGS_SELECTED, SettingsSelected);
themed_icon!(SETTINGS_UNSELECTED, SettingsUnselected);
themed_icon!(CHECK_CIRCLE, CheckCircle);
themed_icon!(WARNING, Warning);
themed_icon!(COPY, ClipboardCopy);
themed_icon!(GITHUB, Github);
themed_icon!(TELEGRAM, Telegram);
themed_icon!(ADD, Add);
themed_icon!(APP_LIST, AppList);

// =============================================================================
// Page Icon Pairs
// =============================================================================

/// Selected/unselected icon pair for a bottom-navigation tab.
#[derive(Clone, Copy)]
pub struct IconPair {
    pub selected: Icon,
    pub unselected: Icon,
}

/// Icon pair for a page's bottom-navigation entry.
///
/// Returns `None` for the action-only destinations, which have no
/// bottom-navigation presence.
pub fn for_page(page: Page) -> Option<IconPair> {
    let pair = match page {
        Page::Repo => IconPair {
            selected: REPO_SELECTED,
            unselected: REPO_UNSELECTED,
        },
        Page::Manage => IconPair {
            selected: MANAGE_SELECTED,
            unselected: MANAGE_UNSELECTED,
        },
        Page::Home => IconPair {
            selected: HOME_SELECTED,
            unselected: HOME_UNSELECTED,
        },
        Page::Logs => IconPair {
            selected: LOGS_SELECTED,
            unselected: LOGS_UNSELECTED,
        },
        Page::Settings => IconPair {
            selected: SETTINGS_SELECTED,
            unselected: SETTINGS_UNSELECTED,
        },
        Page::NewPatch | Page::SelectApps => return None,
    };
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_pairs_exist_for_exactly_the_tab_pages() {
        for page in Page::ALL {
            assert_eq!(
                for_page(page).is_some(),
                page.is_tab(),
                "icon pair presence disagrees with tab membership for {:?}",
                page
            );
        }
        assert!(for_page(Page::NewPatch).is_none());
        assert!(for_page(Page::SelectApps).is_none());
    }
}
