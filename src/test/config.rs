#[cfg(test)]
mod tests {
    use crate::config::{SettingsStore, StaticSettings, base_url};

    #[test]
    fn base_url_strips_the_admin_script() {
        assert_eq!(
            base_url("https://example.org/tng/admin.php"),
            "https://example.org/tng/"
        );
    }

    #[test]
    fn short_values_collapse_to_empty() {
        assert_eq!(base_url("tiny"), "");
        assert_eq!(base_url(""), "");
    }

    #[test]
    fn static_settings_return_their_value() {
        let settings = StaticSettings::new("https://example.org/tng/admin.php".to_string());

        assert_eq!(settings.admin_url(), "https://example.org/tng/admin.php");
    }
}
