//! Paths and labels of the navigation shell.

pub const DASHBOARD_PATH: &str = "/";
pub const CUSTOMERS_PATH: &str = "/customers";
pub const CALLS_PATH: &str = "/calls";
pub const SCHEDULES_PATH: &str = "/schedules";

pub const DASHBOARD_LABEL: &str = "Dashboard";
pub const CUSTOMERS_LABEL: &str = "Customers";
pub const CALLS_LABEL: &str = "Call History";
pub const SCHEDULES_LABEL: &str = "Schedules";

pub const DEFAULT_BRAND: &str = "🚗 Voice Call Bot";
pub const DEFAULT_TITLE: &str = "Voice Call Bot";
