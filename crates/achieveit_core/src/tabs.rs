//! Static registry of the three application tabs.
//!
//! The UI shell resolves icons from a static asset bundle keyed by screen
//! name; this module is the single source of truth for those keys and the
//! tab display order.

/// One bottom-bar tab as rendered by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Route/screen name, also the asset-lookup key.
    pub name: &'static str,
    /// Display title shown under the icon.
    pub title: &'static str,
    /// Icon key resolved by the shell's asset bundle.
    pub icon: &'static str,
}

/// Tabs in display order: task, calendar, note.
pub const TABS: [TabDescriptor; 3] = [
    TabDescriptor {
        name: "task",
        title: "Task",
        icon: "task",
    },
    TabDescriptor {
        name: "calendar",
        title: "Calendar",
        icon: "calendar",
    },
    TabDescriptor {
        name: "note",
        title: "Note",
        icon: "note",
    },
];

/// Looks up a tab by its route name.
pub fn tab_by_name(name: &str) -> Option<&'static TabDescriptor> {
    TABS.iter().find(|tab| tab.name == name)
}
