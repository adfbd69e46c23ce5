/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; env var names map to fields
/// lowercased (`FUNCTIONS_CUSTOMHANDLER_PORT` -> `functions_customhandler_port`).
/// Loading never panics: a missing required var or an unparseable value is
/// returned as an error for the caller to report.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Load from an explicit set of `(NAME, value)` pairs instead of the
    /// process environment.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
