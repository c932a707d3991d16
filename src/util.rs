use log::LevelFilter;

/// Installs the process-wide logger.
///
/// Level defaults to `Info`; `RUST_LOG` overrides it (e.g. `RUST_LOG=arcatnoid=debug`).
pub fn init_logging() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init()
}

#[cfg(test)]
#[ctor::ctor]
fn init() {
    let _ = env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init();
}
