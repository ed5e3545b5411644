//! Inline SVG glyphs (lucide outlines) for the shell.

use hrshell_core::NavIcon;

/// Glyphs used by the shell outside the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellIcon {
    Nav(NavIcon),
    User,
    LogOut,
}

/// Shared `<svg>` attributes; the inner markup comes from [`svg_body`].
pub const SVG_ATTRS: [(&str, &str); 7] = [
    ("xmlns", "http://www.w3.org/2000/svg"),
    ("viewBox", "0 0 24 24"),
    ("fill", "none"),
    ("stroke", "currentColor"),
    ("stroke-width", "2"),
    ("stroke-linecap", "round"),
    ("stroke-linejoin", "round"),
];

pub fn svg_body(icon: ShellIcon) -> &'static str {
    match icon {
        ShellIcon::Nav(NavIcon::LayoutDashboard) => concat!(
            r#"<rect width="7" height="9" x="3" y="3" rx="1"/>"#,
            r#"<rect width="7" height="5" x="14" y="3" rx="1"/>"#,
            r#"<rect width="7" height="9" x="14" y="12" rx="1"/>"#,
            r#"<rect width="7" height="5" x="3" y="16" rx="1"/>"#,
        ),
        ShellIcon::Nav(NavIcon::Briefcase) => concat!(
            r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
            r#"<rect width="20" height="14" x="2" y="6" rx="2"/>"#,
        ),
        ShellIcon::Nav(NavIcon::Users) => concat!(
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="9" cy="7" r="4"/>"#,
            r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
            r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        ),
        ShellIcon::Nav(NavIcon::GitBranch) => concat!(
            r#"<line x1="6" x2="6" y1="3" y2="15"/>"#,
            r#"<circle cx="18" cy="6" r="3"/>"#,
            r#"<circle cx="6" cy="18" r="3"/>"#,
            r#"<path d="M18 9a9 9 0 0 1-9 9"/>"#,
        ),
        ShellIcon::Nav(NavIcon::Settings) => concat!(
            r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/>"#,
            r#"<circle cx="12" cy="12" r="3"/>"#,
        ),
        ShellIcon::User => concat!(
            r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="12" cy="7" r="4"/>"#,
        ),
        ShellIcon::LogOut => concat!(
            r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>"#,
            r#"<polyline points="16 17 21 12 16 7"/>"#,
            r#"<line x1="21" x2="9" y1="12" y2="12"/>"#,
        ),
    }
}
