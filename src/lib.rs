mod logging;
pub mod math;
pub mod sim;

/// Install the crate's default logger.
///
/// Honors `RUST_LOG` overrides. Later calls are ignored, so both a library
/// consumer and an embedded demo may call this.
pub fn init_logging() {
    let _ = logging::try_init();
}
