pub mod clear_scan_history;
pub mod delete_scan;
pub mod get_scan_history;
