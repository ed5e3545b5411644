//! Sidebar navigation: the fixed section list and active-route matching.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::format::class_names;
use crate::route::RoutePath;

/// Opaque icon reference; the frontend maps it to an actual glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    LayoutDashboard,
    Briefcase,
    Users,
    GitBranch,
    Settings,
}

impl NavIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::LayoutDashboard => "layout-dashboard",
            NavIcon::Briefcase => "briefcase",
            NavIcon::Users => "users",
            NavIcon::GitBranch => "git-branch",
            NavIcon::Settings => "settings",
        }
    }
}

/// One section in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: Cow<'static, str>,
    pub path: RoutePath,
    pub icon: NavIcon,
}

impl NavigationEntry {
    pub fn new(label: impl Into<Cow<'static, str>>, path: RoutePath, icon: NavIcon) -> Self {
        Self {
            label: label.into(),
            path,
            icon,
        }
    }

    /// See [`is_active`].
    pub fn is_active(&self, current_path: Option<&str>) -> bool {
        is_active(&self.path, current_path)
    }
}

/// Entry `path` is active iff the current path equals it or lies below it
/// (`path + "/"` is a prefix). An unresolved current path matches nothing.
pub fn is_active(path: &RoutePath, current_path: Option<&str>) -> bool {
    current_path.is_some_and(|current| path.covers(current))
}

/// Visual variant of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLinkStyle {
    Active,
    Inactive,
}

const NAV_LINK_BASE: &str =
    "flex items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium transition-colors";

impl NavLinkStyle {
    pub fn for_state(active: bool) -> Self {
        if active {
            NavLinkStyle::Active
        } else {
            NavLinkStyle::Inactive
        }
    }

    /// Variant-specific classes only.
    pub fn variant_class(&self) -> &'static str {
        match self {
            NavLinkStyle::Active => "bg-primary text-primary-foreground",
            NavLinkStyle::Inactive => {
                "text-muted-foreground hover:bg-accent hover:text-accent-foreground"
            }
        }
    }

    /// Full class list for the link element.
    pub fn class(&self) -> String {
        class_names([NAV_LINK_BASE, self.variant_class()])
    }
}

/// View-model for one rendered sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: Cow<'static, str>,
    pub href: String,
    pub icon: NavIcon,
    pub active: bool,
    pub style: NavLinkStyle,
}

impl NavItem {
    pub fn class(&self) -> String {
        self.style.class()
    }
}

/// Ordered, immutable list of navigation entries.
///
/// # Invariants
/// - Paths are unique.
/// - Order is the rendered order and never changes after construction.
///
/// Entries are matched independently: if the list ever holds nested prefixes
/// (`/candidates` and `/candidates/archive`) both can be active at once. The
/// standard list has no such overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPanel {
    entries: Vec<NavigationEntry>,
}

impl NavigationPanel {
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self, ShellError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(ShellError::DuplicateRoute(entry.path.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// The application's five sections, in sidebar order.
    pub fn standard() -> Self {
        let entry = |label: &'static str, path: &'static str, icon| NavigationEntry {
            label: Cow::Borrowed(label),
            path: RoutePath::from_static(path),
            icon,
        };

        Self {
            entries: vec![
                entry("Панель", "/dashboard", NavIcon::LayoutDashboard),
                entry("Вакансии", "/vacancies", NavIcon::Briefcase),
                entry("Кандидаты", "/candidates", NavIcon::Users),
                entry("Воронка", "/pipeline", NavIcon::GitBranch),
                entry("Настройки", "/settings", NavIcon::Settings),
            ],
        }
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching `current_path`, in list order.
    pub fn active_entries<'a>(
        &'a self,
        current_path: Option<&'a str>,
    ) -> impl Iterator<Item = &'a NavigationEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.is_active(current_path))
    }

    /// Build the link view-models for the current location.
    pub fn render(&self, current_path: Option<&str>) -> Vec<NavItem> {
        self.entries
            .iter()
            .map(|entry| {
                let active = entry.is_active(current_path);
                NavItem {
                    label: entry.label.clone(),
                    href: entry.path.to_string(),
                    icon: entry.icon,
                    active,
                    style: NavLinkStyle::for_state(active),
                }
            })
            .collect()
    }
}

impl Default for NavigationPanel {
    fn default() -> Self {
        Self::standard()
    }
}
