//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro that only prints when `--verbose` is set
//!
//! Output goes to stdout unless [`set_stderr`] redirects it, which `query`
//! does while stdout carries JSON.
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "wrote {}", path.display());
//! debug!("serve"; "rendered in {:?}", elapsed);
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Send log output to stderr instead of stdout
static STDERR: AtomicBool = AtomicBool::new(false);

pub fn set_stderr(v: bool) {
    STDERR.store(v, Ordering::SeqCst);
}

fn log_stream() -> Stream {
    if STDERR.load(Ordering::SeqCst) {
        Stream::Stderr
    } else {
        Stream::Stdout
    }
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(log_stream(), module, &module_lower);

    if STDERR.load(Ordering::SeqCst) {
        writeln!(stderr().lock(), "{prefix} {message}").ok();
        return;
    }

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(stream: Stream, module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let styled = prefix.if_supports_color(stream, |p| match module_lower {
        "serve" => p.bright_blue().bold().to_string(),
        "build" | "sitemap" => p.bright_green().bold().to_string(),
        "error" => p.bright_red().bold().to_string(),
        _ => p.bright_yellow().bold().to_string(),
    });
    styled.to_string()
}

// ============================================================================
// Tests
// ============================================================================
