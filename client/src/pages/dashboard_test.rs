use super::*;

#[test]
fn tabs_keep_display_order() {
    let names: Vec<_> = DASHBOARD_TABS.iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Orderan Saya", "Alamat", "Detail Akun"]);
}

#[test]
fn tab_href_is_nested_under_dashboard() {
    let hrefs: Vec<_> = DASHBOARD_TABS.iter().map(|t| t.href()).collect();
    assert_eq!(hrefs, vec!["/dashboard/pesanan", "/dashboard/alamat", "/dashboard/akun"]);
}

#[test]
fn default_tab_is_orders() {
    assert_eq!(DEFAULT_TAB.path, "pesanan");
}

#[test]
fn tab_paths_are_distinct_segments() {
    for (i, a) in DASHBOARD_TABS.iter().enumerate() {
        assert!(!a.path.contains('/'));
        for b in &DASHBOARD_TABS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}
