use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, filtered by `RUST_LOG` plus `default_directive`.
///
/// Returns false when a global subscriber was already installed or the
/// directive does not parse.
pub fn init_tracing(default_directive: &str) -> bool {
    let directive = match default_directive.parse() {
        Ok(directive) => directive,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .try_init()
        .is_ok()
}
