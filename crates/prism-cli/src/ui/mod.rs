//! Terminal output helpers.
//!
//! Status lines go to stderr so stdout stays clean for JSON.
//!
//! ```no_run
//! use prism_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Configuration is valid");
//! ui::warning("Ignoring overrides for unknown variant 'iife'");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{yes_no, Table};
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status lines are colored. `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_should_use_color_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!should_use_color());
        unsafe { std::env::remove_var("NO_COLOR") };
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn test_no_color_flag_overrides_environment() {
        unsafe { std::env::set_var("FORCE_COLOR", "1") };
        init_colors(true);
        assert!(!colors_enabled());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }
}
