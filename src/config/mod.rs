use std::env;

use derive_new::new;

/// Environment variable holding the URL of the TNG admin page, the same
/// value the TNG WordPress integration stores as `mbtng_url_to_admin`.
pub const ADMIN_URL_VAR: &str = "MBTNG_URL_TO_ADMIN";

const ADMIN_SUFFIX_LEN: usize = "admin.php".len();

/// Read side of the host's settings storage. The client asks for the
/// admin URL on every request so a changed setting takes effect without
/// restarting the host.
pub trait SettingsStore {
    /// Current value of the admin URL setting, empty when unset.
    fn admin_url(&self) -> String;
}

/// Settings read from the process environment (with `.env` support via
/// [`crate::TngClient::from_env`]).
#[derive(Clone, Debug, Default, new)]
pub struct EnvSettings;

impl SettingsStore for EnvSettings {
    fn admin_url(&self) -> String {
        env::var(ADMIN_URL_VAR).unwrap_or_default()
    }
}

/// A fixed admin URL, for hosts that configure the client once at startup.
#[derive(Clone, Debug, new)]
pub struct StaticSettings {
    admin_url: String,
}

impl SettingsStore for StaticSettings {
    fn admin_url(&self) -> String {
        self.admin_url.clone()
    }
}

/// The stored setting points at TNG's `admin.php`; the API scripts live in
/// the same directory, so the base URL is the setting minus that file name.
pub fn base_url(admin_url: &str) -> String {
    let end = admin_url.len().saturating_sub(ADMIN_SUFFIX_LEN);
    admin_url.get(..end).unwrap_or_default().to_string()
}
