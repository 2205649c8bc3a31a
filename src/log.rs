use log::LevelFilter;

/// Environment variable that switches the default level to `Debug`.
pub const DEBUG_ENV_VAR: &str = "WORDSEARCH_DEBUG";

/// Initialize logging for the binaries.
///
/// # Behavior
/// - Level is `Debug` if `debug_enabled`, otherwise `Info`.
/// - `RUST_LOG`, when set, overrides that default.
/// - Output goes to stderr without timestamps or module paths, so stdout
///   stays clean for the printed puzzle.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second init (e.g. from another binary in the same process) is harmless
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
