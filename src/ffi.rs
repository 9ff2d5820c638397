//! C Foreign Function Interface (FFI) for the typewriter engine.
//!
//! This module provides a C-compatible API for driving a [`Typewriter`]
//! from other languages. The host owns the clock: it advances the handle
//! by elapsed milliseconds and reads back text, caret and done state.
//!
//! # Safety
//!
//! All functions that accept pointers require valid pointers (NULL is
//! tolerated and treated as a no-op). The caller is responsible for
//! freeing handles with `typewriter_free`.
//!
//! # Example (C)
//!
//! ```c
//! #include "typewriter.h"
//!
//! int main() {
//!     const char* words[] = { "Hobbyist", "Software Developer" };
//!     TypewriterOptions options = typewriter_default_options();
//!     options.looping = false;
//!
//!     TypewriterHandle* tw = typewriter_new(words, 2, &options);
//!     if (!tw) return 1;
//!
//!     while (!typewriter_is_done(tw)) {
//!         int64_t wait = typewriter_next_deadline_ms(tw);
//!         typewriter_advance(tw, wait < 0 ? 16 : (uint64_t)wait);
//!         printf("%s\n", typewriter_text(tw));
//!     }
//!
//!     typewriter_free(tw);
//!     return 0;
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::engine::{
    clamp_millis, Typewriter, TypewriterConfig, DEFAULT_BETWEEN_WORDS_DELAY,
    DEFAULT_DELETING_SPEED, DEFAULT_START_DELAY, DEFAULT_TYPING_SPEED,
};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::time::Duration;

// =============================================================================
// Handle and Options
// =============================================================================

/// Opaque handle to a typewriter.
pub struct TypewriterHandle {
    typewriter: Typewriter,
    /// NUL-terminated copy of the current text, refreshed on read.
    text_cache: CString,
}

/// Construction options. Delays are milliseconds; negative values clamp to 0.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TypewriterOptions {
    /// Delay between typed characters.
    pub typing_speed_ms: f64,
    /// Delay between deleted characters.
    pub deleting_speed_ms: f64,
    /// Delay before the first character.
    pub start_delay_ms: f64,
    /// Pause on a finished phrase.
    pub between_words_delay_ms: f64,
    /// Cycle through the phrases forever.
    pub looping: bool,
}

impl TypewriterOptions {
    fn to_config(self, words: Vec<String>) -> TypewriterConfig {
        TypewriterConfig::new(words)
            .with_timing(
                clamp_millis(self.typing_speed_ms),
                clamp_millis(self.deleting_speed_ms),
                clamp_millis(self.start_delay_ms),
                clamp_millis(self.between_words_delay_ms),
            )
            .with_loop(self.looping)
    }
}

#[allow(clippy::cast_precision_loss)]
fn duration_ms(delay: Duration) -> f64 {
    delay.as_millis() as f64
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Default options: 70 ms typing, 40 ms deleting, 400 ms start, 1000 ms pause, looping.
#[unsafe(no_mangle)]
pub extern "C" fn typewriter_default_options() -> TypewriterOptions {
    TypewriterOptions {
        typing_speed_ms: duration_ms(DEFAULT_TYPING_SPEED),
        deleting_speed_ms: duration_ms(DEFAULT_DELETING_SPEED),
        start_delay_ms: duration_ms(DEFAULT_START_DELAY),
        between_words_delay_ms: duration_ms(DEFAULT_BETWEEN_WORDS_DELAY),
        looping: true,
    }
}

/// Create a typewriter from `count` UTF-8 strings.
///
/// `options` may be NULL for the defaults. NULL entries and empty strings
/// are skipped. Returns NULL if `words` is NULL while `count` is non-zero,
/// or if any entry is not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_new(
    words: *const *const c_char,
    count: usize,
    options: *const TypewriterOptions,
) -> *mut TypewriterHandle {
    if words.is_null() && count > 0 {
        return ptr::null_mut();
    }

    let mut phrases = Vec::with_capacity(count);
    for i in 0..count {
        let word = *words.add(i);
        if word.is_null() {
            continue;
        }
        match CStr::from_ptr(word).to_str() {
            Ok(s) => phrases.push(s.to_owned()),
            Err(_) => return ptr::null_mut(),
        }
    }

    let options = if options.is_null() {
        typewriter_default_options()
    } else {
        *options
    };

    let handle = TypewriterHandle {
        typewriter: Typewriter::new(options.to_config(phrases)),
        text_cache: CString::default(),
    };
    Box::into_raw(Box::new(handle))
}

/// Free a typewriter. Strings returned by `typewriter_text` become invalid.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_free(handle: *mut TypewriterHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Stop the typewriter. Idempotent; the text freezes where it is.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_stop(handle: *mut TypewriterHandle) {
    if !handle.is_null() {
        (*handle).typewriter.destroy();
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Move the clock forward by `elapsed_ms`.
///
/// Returns true if the text, caret or done flag changed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_advance(handle: *mut TypewriterHandle, elapsed_ms: u64) -> bool {
    if handle.is_null() {
        return false;
    }
    (*handle)
        .typewriter
        .advance(Duration::from_millis(elapsed_ms))
}

/// Milliseconds until the next scheduled change, rounded up, or -1 if none.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_next_deadline_ms(handle: *const TypewriterHandle) -> i64 {
    if handle.is_null() {
        return -1;
    }
    match (*handle).typewriter.time_until_next() {
        Some(wait) => {
            let whole = wait.as_millis() + u128::from(wait.subsec_nanos() % 1_000_000 != 0);
            i64::try_from(whole).unwrap_or(i64::MAX)
        }
        None => -1,
    }
}

// =============================================================================
// State
// =============================================================================

/// The text currently shown, as a NUL-terminated UTF-8 string.
///
/// The pointer stays valid until the next call on this handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_text(handle: *mut TypewriterHandle) -> *const c_char {
    if handle.is_null() {
        return ptr::null();
    }
    let handle = &mut *handle;
    // Phrases come from C strings, so they hold no interior NUL.
    handle.text_cache = CString::new(handle.typewriter.text()).unwrap_or_default();
    handle.text_cache.as_ptr()
}

/// Whether the caret is in its visible blink phase.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_caret_visible(handle: *const TypewriterHandle) -> bool {
    !handle.is_null() && (*handle).typewriter.caret_visible()
}

/// Whether the animation has finished (non-looping only).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn typewriter_is_done(handle: *const TypewriterHandle) -> bool {
    !handle.is_null() && (*handle).typewriter.is_done()
}

// =============================================================================
// Version Information
// =============================================================================

/// Get the library version string.
#[unsafe(no_mangle)]
pub extern "C" fn typewriter_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr().cast::<c_char>()
}
