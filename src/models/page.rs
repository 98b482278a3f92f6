//! The page registry: the closed set of navigable destinations.
//!
//! Every destination the navigation host can reach is a [`Page`] variant,
//! together with its typed argument contract. The set is fixed at compile
//! time; there is no dynamic page registration. Rendering is dispatched
//! centrally in the router, keeping the registry data-only.

use crate::utils::strings::{self, StringId};

/// Declared type of a navigation argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    Bool,
    String,
    Int,
}

/// A typed argument declaration attached to a page.
///
/// Names are unique within a page and are used to validate and decode
/// values passed into the page's route at navigation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavArgument {
    pub name: &'static str,
    pub ty: ArgType,
    pub required: bool,
}

const SELECT_APPS_ARGS: &[NavArgument] = &[NavArgument {
    name: "multiSelect",
    ty: ArgType::Bool,
    required: true,
}];

/// Application destinations.
///
/// The first five variants are tab destinations with a bottom-navigation
/// presence; [`Page::NewPatch`] and [`Page::SelectApps`] are reached by
/// action only and carry no icon pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Repo,
    Manage,
    Home,
    Logs,
    Settings,
    NewPatch,
    SelectApps,
}

impl Page {
    /// All pages, in registry order.
    pub const ALL: [Page; 7] = [
        Page::Repo,
        Page::Manage,
        Page::Home,
        Page::Logs,
        Page::Settings,
        Page::NewPatch,
        Page::SelectApps,
    ];

    /// Tab destinations, in bottom-navigation order.
    pub fn tabs() -> impl Iterator<Item = Page> {
        Self::ALL.into_iter().filter(Page::is_tab)
    }

    /// Whether this page has a bottom-navigation presence.
    pub fn is_tab(&self) -> bool {
        !matches!(self, Page::NewPatch | Page::SelectApps)
    }

    /// URL hash segment for this page.
    pub fn segment(&self) -> &'static str {
        match self {
            Page::Repo => "repo",
            Page::Manage => "manage",
            Page::Home => "home",
            Page::Logs => "logs",
            Page::Settings => "settings",
            Page::NewPatch => "new-patch",
            Page::SelectApps => "select-apps",
        }
    }

    /// Look up a page by its URL hash segment.
    pub fn from_segment(segment: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|p| p.segment() == segment)
    }

    /// Typed argument declarations for this page's route.
    pub fn arguments(&self) -> &'static [NavArgument] {
        match self {
            Page::SelectApps => SELECT_APPS_ARGS,
            _ => &[],
        }
    }

    /// String resource for this page's display title.
    ///
    /// Home titles itself with the application name.
    pub fn title_id(&self) -> StringId {
        match self {
            Page::Repo => StringId::PageRepo,
            Page::Manage => StringId::PageManage,
            Page::Home => StringId::AppName,
            Page::Logs => StringId::PageLogs,
            Page::Settings => StringId::PageSettings,
            Page::NewPatch => StringId::PageNewPatch,
            Page::SelectApps => StringId::PageSelectApps,
        }
    }

    /// Display title resolved in the active locale.
    pub fn title(&self) -> &'static str {
        strings::resolve(self.title_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_closed_and_ordered() {
        assert_eq!(Page::ALL.len(), 7);
        assert_eq!(Page::ALL[0], Page::Repo);
        assert_eq!(Page::ALL[2], Page::Home);
        assert_eq!(Page::ALL[6], Page::SelectApps);
    }

    #[test]
    fn test_only_select_apps_declares_arguments() {
        for page in Page::ALL {
            match page {
                Page::SelectApps => {
                    let args = page.arguments();
                    assert_eq!(args.len(), 1);
                    assert_eq!(args[0].name, "multiSelect");
                    assert_eq!(args[0].ty, ArgType::Bool);
                    assert!(args[0].required);
                }
                _ => assert!(page.arguments().is_empty(), "{:?} declares arguments", page),
            }
        }
    }

    #[test]
    fn test_argument_names_unique_within_page() {
        for page in Page::ALL {
            let args = page.arguments();
            for (i, a) in args.iter().enumerate() {
                for b in &args[i + 1..] {
                    assert_ne!(a.name, b.name, "{:?} repeats argument {}", page, a.name);
                }
            }
        }
    }

    #[test]
    fn test_tab_membership() {
        let tabs: Vec<Page> = Page::tabs().collect();
        assert_eq!(
            tabs,
            vec![Page::Repo, Page::Manage, Page::Home, Page::Logs, Page::Settings]
        );
        assert!(!Page::NewPatch.is_tab());
        assert!(!Page::SelectApps.is_tab());
    }

    #[test]
    fn test_segment_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_segment(page.segment()), Some(page));
        }
        assert_eq!(Page::from_segment("nonsense"), None);
    }

    #[test]
    fn test_titles_resolve() {
        for page in Page::ALL {
            assert!(!page.title().is_empty());
        }
        assert_eq!(Page::Home.title(), "Patchman");
    }
}
