use tracing::{error, info, warn};

use crate::errors::KickoffError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an application error at a level matching its kind.
///
/// User errors (bad input, missing player) are warnings; everything else is
/// an error.
pub fn log_app_error(error: &dyn KickoffError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}
