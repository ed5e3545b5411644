//! `hrshell-core` — navigation/session shell logic for the HR frontend.
//!
//! This crate is **framework-free**: no DOM, no router engine, no storage
//! backend. Those are injected through [`SessionStore`] and [`Router`].

pub mod config;
pub mod error;
pub mod format;
pub mod navigation;
pub mod route;
pub mod session;

pub use config::{DateLocale, ShellConfig};
pub use error::{ShellError, ShellResult};
pub use format::{class_names, format_date, score_bucket, score_color_class, truncate, DateLike, ScoreBucket};
pub use navigation::{is_active, NavIcon, NavItem, NavLinkStyle, NavigationEntry, NavigationPanel};
pub use route::RoutePath;
pub use session::{
    MemorySessionStore, Router, SessionBar, SessionKey, SessionPhase, SessionProfile, SessionStore,
};
