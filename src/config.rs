use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "clinicadent";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the persisted appointment list.
pub const APPOINTMENTS_FILE: &str = "appointments.json";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "clinicadent=info"
}

/// Get the application data directory
/// (platform data dir + "clinicadent"; current dir as last resort)
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Path of the JSON file holding the appointment list.
pub fn appointments_file() -> PathBuf {
    app_data_dir().join(APPOINTMENTS_FILE)
}
