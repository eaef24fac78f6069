//! Localization resolver abstract Trait

/// Resolves a localization key into user-facing text.
///
/// Used for labels, placeholders and error messages only, never for control
/// flow. Implementations fall back to the key itself when it is unknown.
pub trait Localizer: Send + Sync {
    /// Resolve `key`, interpolating `{{name}}` placeholders from `params`.
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Resolve `key` without parameters.
    fn text(&self, key: &str) -> String {
        self.resolve(key, &[])
    }
}
