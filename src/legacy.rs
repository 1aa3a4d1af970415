//! Deprecated aliases kept for older call sites.
//!
//! [`success`] and [`failure`] behave exactly like [`ok`] and [`err`]. The
//! first call of each alias emits a deprecation notice: through
//! `tracing::warn!` with the `tracing` feature, on stderr otherwise, and not
//! at all without `std`.

use core::error::Error;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::types::alloc_type::String;
use crate::types::outcome::{err, ok, Outcome};

static SUCCESS_NOTICED: AtomicBool = AtomicBool::new(false);
static FAILURE_NOTICED: AtomicBool = AtomicBool::new(false);

/// Deprecated alias of [`ok`].
#[deprecated(since = "0.1.0", note = "Use `ok` instead")]
#[inline]
pub fn success<T>(data: T) -> Outcome<T> {
    notify_once(&SUCCESS_NOTICED, "success", "ok");
    ok(data)
}

/// Deprecated alias of [`err`].
#[deprecated(since = "0.1.0", note = "Use `err` instead")]
#[track_caller]
pub fn failure<T>(error: impl Error + Send + Sync + 'static) -> Outcome<T> {
    notify_once(&FAILURE_NOTICED, "failure", "err");
    err(error)
}

fn notify_once(flag: &AtomicBool, alias: &str, replacement: &str) {
    if let Some(notice) = take_notice(flag, alias, replacement) {
        emit(&notice);
    }
}

/// Returns the notice for `alias` the first time `flag` is taken.
fn take_notice(flag: &AtomicBool, alias: &str, replacement: &str) -> Option<String> {
    if flag.swap(true, Ordering::Relaxed) {
        return None;
    }
    Some(alloc::format!("`{}` is deprecated; use `{}` instead", alias, replacement))
}

#[cfg(feature = "tracing")]
fn emit(notice: &str) {
    tracing::warn!(target: "error_trail::legacy", "{}", notice);
}

#[cfg(all(feature = "std", not(feature = "tracing")))]
fn emit(notice: &str) {
    std::eprintln!("warning: {}", notice);
}

#[cfg(not(feature = "std"))]
fn emit(_notice: &str) {}
