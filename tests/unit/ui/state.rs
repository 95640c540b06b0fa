use super::*;

#[test]
fn toggle_flips_menu() {
    let mut store = UiStateStore::new();
    assert!(store.toggle_menu());
    assert!(store.state().menu_open);
    assert!(!store.toggle_menu());
    assert!(!store.state().menu_open);
}

#[test]
fn nav_link_closes_menu_and_yields_anchor() {
    let mut store = UiStateStore::new();
    store.toggle_menu();
    assert_eq!(store.nav_link("Live Map"), "live-map");
    assert!(!store.state().menu_open);
    assert!(!store.close_menu());

    let anchors: Vec<String> = NAV_LINKS.iter().map(|l| nav_anchor(l)).collect();
    assert_eq!(anchors, ["predictions", "live-map", "analytics", "about"]);
    assert_eq!(nav_anchor("API Access Docs"), "api-access docs");
}

#[test]
fn search_is_echoed_and_stubs_change_nothing() {
    let mut store = UiStateStore::new();
    store.set_search_text("Paradise, CA");
    let before = store.state().clone();
    store.submit_search();
    store.request_location();
    assert_eq!(store.state(), &before);
    assert_eq!(before.search_text, "Paradise, CA");
}

#[test]
fn scrolled_reports_changes_only() {
    let mut store = UiStateStore::new();
    assert_eq!(store.state(), &UiState::default());
    assert!(store.set_scrolled(true));
    assert!(!store.set_scrolled(true));
    assert!(store.state().scrolled);
    assert!(store.set_scrolled(false));
    assert!(!store.state().scrolled);
}
