use vcb_domain::constants::{
    CALLS_LABEL, CALLS_PATH, CUSTOMERS_LABEL, CUSTOMERS_PATH, DASHBOARD_LABEL, DASHBOARD_PATH,
    SCHEDULES_LABEL, SCHEDULES_PATH,
};

#[test]
fn paths_match_dashboard_routes() {
    assert_eq!(DASHBOARD_PATH, "/");
    assert_eq!(CUSTOMERS_PATH, "/customers");
    assert_eq!(CALLS_PATH, "/calls");
    assert_eq!(SCHEDULES_PATH, "/schedules");
}

#[test]
fn labels_match_header_text() {
    assert_eq!(DASHBOARD_LABEL, "Dashboard");
    assert_eq!(CUSTOMERS_LABEL, "Customers");
    assert_eq!(CALLS_LABEL, "Call History");
    assert_eq!(SCHEDULES_LABEL, "Schedules");
}
