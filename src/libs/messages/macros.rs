//! Message macros that route user-facing text either to the console or to
//! `tracing`.
//!
//! In debug mode (`TICKLIST_DEBUG` or `RUST_LOG` set) every macro emits a
//! `tracing` event, which `main` sends to the log file. Otherwise text goes
//! to stdout/stderr and `msg_debug!` is silent.
//!
//! ```rust
//! use ticklist::{msg_error, msg_success};
//! use ticklist::libs::messages::Message;
//!
//! msg_success!(Message::CheckListCreated("Home".to_string()));
//! msg_error!(Message::CheckListNotFound("Work".to_string()));
//! ```

use std::sync::OnceLock;

#[doc(hidden)]
pub use anyhow as __anyhow;
#[doc(hidden)]
pub use tracing as __tracing;

static DEBUG_ROUTING: OnceLock<bool> = OnceLock::new();

/// Whether debug routing is on. Read once from the environment and cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_ROUTING.get_or_init(|| ["TICKLIST_DEBUG", "RUST_LOG"].iter().any(|key| std::env::var_os(key).is_some()))
}

/// Sends one message either to a `tracing` event of `$level` or to `$print`.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $fmt:literal, $msg:expr) => {{
        let text = $msg;
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::libs::messages::macros::__tracing::$level!($fmt, text);
        } else {
            $print!($fmt, text);
        }
    }};
}

/// Plain text; `msg_print!(msg, true)` pads it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ {}", $msg)
    };
}

/// Goes to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ {}", $msg)
    };
}

/// Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::libs::messages::macros::__tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        $crate::libs::messages::macros::__anyhow::anyhow!("❌ {}", $msg)
    };
}
