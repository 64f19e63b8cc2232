use std::collections::HashMap;

/// The environment variables passed through to the tests.
///
/// Values are opaque to the harness. They are mostly credentials that the
/// tests exchange for auth tokens, so they must never be logged.
pub const PASS_THROUGH_ENV: [&str; 8] = [
    "APP_URL",
    "AUTH0_TOKEN_API",
    "AUTH0_USER_NAME",
    "AUTH0_PASSWORD",
    "LFX_API_TOKEN",
    "AUTH0_CLIENT_SECRET",
    "AUTH0_CLIENT_ID",
    "CYPRESS_ENV",
];

/// Capture the pass-through variables from the process environment.
///
/// Set variables are copied verbatim. Unset variables are skipped rather
/// than defaulted, so the external framework sees them as undefined. This
/// never fails, a missing variable is not an error at this layer.
pub fn capture() -> HashMap<String, String> {
    PASS_THROUGH_ENV
        .iter()
        .filter_map(|name| std::env::var(name).ok().map(|value| (name.to_string(), value)))
        .collect()
}
