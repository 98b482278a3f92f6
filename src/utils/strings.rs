//! Localized string resources.
//!
//! A small compile-time string table standing in for a full localization
//! pipeline. Components resolve display text through [`resolve`] so that
//! adding a locale later only means adding another table.

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
}

/// Active locale for the whole application.
pub const LOCALE: Locale = Locale::En;

/// Identifiers for every user-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringId {
    AppName,
    PageRepo,
    PageManage,
    PageLogs,
    PageSettings,
    PageNewPatch,
    PageSelectApps,
    ShizukuAvailable,
    ShizukuUnavailable,
    ShizukuNotGranted,
    ShizukuWarning,
    ApiVersion,
    ManagerVersion,
    CoreVersion,
    SystemVersion,
    Device,
    SystemAbi,
    Copy,
    InfoCopied,
    Support,
    SupportDescription,
}

/// Resolve a string identifier in the active locale.
pub fn resolve(id: StringId) -> &'static str {
    match LOCALE {
        Locale::En => en(id),
    }
}

fn en(id: StringId) -> &'static str {
    match id {
        StringId::AppName => "Patchman",
        StringId::PageRepo => "Repository",
        StringId::PageManage => "Manage",
        StringId::PageLogs => "Logs",
        StringId::PageSettings => "Settings",
        StringId::PageNewPatch => "New patch",
        StringId::PageSelectApps => "Select apps",
        StringId::ShizukuAvailable => "Shizuku is available",
        StringId::ShizukuUnavailable => "Shizuku is unavailable",
        StringId::ShizukuNotGranted => {
            "Permission has not been granted yet. Tap the card to request it."
        }
        StringId::ShizukuWarning => {
            "Patching installed apps requires Shizuku. \
             Start the Shizuku service, then tap to grant the permission."
        }
        StringId::ApiVersion => "API version",
        StringId::ManagerVersion => "Patchman version",
        StringId::CoreVersion => "Framework version",
        StringId::SystemVersion => "System version",
        StringId::Device => "Device",
        StringId::SystemAbi => "System ABI",
        StringId::Copy => "Copy",
        StringId::InfoCopied => "Copied to clipboard",
        StringId::Support => "Support",
        StringId::SupportDescription => {
            "Patchman rebuilds apps with the patching framework embedded, \
             no root required. Bug reports and contributions are welcome."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_resolves_non_empty() {
        let ids = [
            StringId::AppName,
            StringId::PageRepo,
            StringId::PageManage,
            StringId::PageLogs,
            StringId::PageSettings,
            StringId::PageNewPatch,
            StringId::PageSelectApps,
            StringId::ShizukuAvailable,
            StringId::ShizukuUnavailable,
            StringId::ShizukuNotGranted,
            StringId::ShizukuWarning,
            StringId::ApiVersion,
            StringId::ManagerVersion,
            StringId::CoreVersion,
            StringId::SystemVersion,
            StringId::Device,
            StringId::SystemAbi,
            StringId::Copy,
            StringId::InfoCopied,
            StringId::Support,
            StringId::SupportDescription,
        ];
        for id in ids {
            assert!(!resolve(id).is_empty(), "{:?} resolved to empty text", id);
        }
    }
}
