use super::*;

#[test]
fn overlay_and_panel_classes_follow_open_flag() {
    assert_eq!(overlay_class(true), "sidebar-overlay visible");
    assert_eq!(overlay_class(false), "sidebar-overlay");
    assert_eq!(panel_class(true), "sidebar open");
    assert_eq!(panel_class(false), "sidebar");
}

#[test]
fn only_current_view_is_marked_active() {
    for current in View::ALL {
        let active: Vec<View> = View::ALL
            .into_iter()
            .filter(|v| nav_item_class(*v, current) == "nav-item active")
            .collect();
        assert_eq!(active, vec![current]);
    }
}
