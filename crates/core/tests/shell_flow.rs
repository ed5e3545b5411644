use std::cell::RefCell;

use hrshell_core::{
    format_date, score_color_class, truncate, DateLocale, MemorySessionStore, NavigationPanel,
    Router, SessionBar, SessionStore, ShellConfig,
};

/// Stands in for the browser router: a single mutable location.
struct FakeRouter {
    location: RefCell<Option<String>>,
}

impl FakeRouter {
    fn at(path: Option<&str>) -> Self {
        Self {
            location: RefCell::new(path.map(str::to_string)),
        }
    }
}

impl Router for FakeRouter {
    fn current_path(&self) -> Option<String> {
        self.location.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        *self.location.borrow_mut() = Some(path.to_string());
    }
}

fn active_labels(panel: &NavigationPanel, router: &FakeRouter) -> Vec<String> {
    let current = router.current_path();
    panel
        .render(current.as_deref())
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.label.into_owned())
        .collect()
}

#[test]
fn mount_browse_and_sign_out() {
    let config = ShellConfig::default();
    let panel = NavigationPanel::standard();
    let store = MemorySessionStore::with_entries([
        ("access_token", "header.payload.sig"),
        ("refresh_token", "refresh"),
        ("user", r#"{"full_name":"Иван Иванов","role":"HR","email":"ivan@example.com"}"#),
    ]);
    let router = FakeRouter::at(None);

    // Before the router resolves, nothing is highlighted.
    assert!(active_labels(&panel, &router).is_empty());

    // First render: placeholder; then the mount effect hydrates.
    let mut topbar = SessionBar::new(&config);
    assert_eq!(topbar.display_name(), "Пользователь");
    topbar.hydrate(&store);
    assert_eq!(topbar.display_name(), "Иван Иванов");
    assert_eq!(topbar.role(), Some("HR"));

    router.navigate("/candidates/42");
    assert_eq!(active_labels(&panel, &router), vec!["Кандидаты"]);

    router.navigate("/pipeline");
    assert_eq!(active_labels(&panel, &router), vec!["Воронка"]);

    topbar.sign_out(&store, &router);
    assert!(store.is_empty());
    assert_eq!(router.current_path().as_deref(), Some("/login"));
    assert!(active_labels(&panel, &router).is_empty());

    // A fresh mount after sign-out has nothing to hydrate.
    let mut remount = SessionBar::new(&config);
    assert!(remount.hydrate(&store).is_none());
    assert_eq!(remount.greeting(), "Добро пожаловать, Пользователь");
}

#[test]
fn remount_picks_up_replaced_profile() {
    let config = ShellConfig::default();
    let store = MemorySessionStore::with_entries([("user", r#"{"full_name":"Анна","role":"Admin"}"#)]);

    let mut first = SessionBar::new(&config);
    first.hydrate(&store);
    assert_eq!(first.display_name(), "Анна");

    store
        .set("user", r#"{"full_name":"Пётр","role":"Recruiter"}"#)
        .unwrap();
    first.hydrate(&store);
    assert_eq!(first.display_name(), "Анна");

    let mut second = SessionBar::new(&config);
    second.hydrate(&store);
    assert_eq!(second.display_name(), "Пётр");
    assert_eq!(second.role(), Some("Recruiter"));
}

#[test]
fn helpers_behave_as_screens_expect() {
    assert_eq!(score_color_class(100.0), score_color_class(80.0));
    assert_ne!(score_color_class(79.0), score_color_class(80.0));
    assert_eq!(truncate("hello world", 5), "hello...");
    assert_eq!(
        format_date("2024-09-01", DateLocale::Ru).unwrap(),
        "1 сентября 2024 г."
    );
    assert!(format_date("not a date", DateLocale::Ru).is_err());
}
