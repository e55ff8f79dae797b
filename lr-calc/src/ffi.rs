use libc::{c_char, c_int, c_longlong, size_t};
use std::ffi::CStr;

use crate::calculator::Calculator;
use crate::config::{Config, Notation};

pub const LR_CALC_OK: c_int = 0;
pub const LR_CALC_ERROR: c_int = -1;

pub const LR_CALC_INFIX: c_int = 0;
pub const LR_CALC_POSTFIX: c_int = 1;

/// Copies as much of `error` as fits and NUL-terminates it.
unsafe fn fill_error_buffer(output_error: *mut c_char, output_error_len: size_t, error: &str) {
    if output_error.is_null() || output_error_len == 0 {
        return;
    }

    let output_error = std::slice::from_raw_parts_mut(output_error as *mut u8, output_error_len);
    let len = error.len().min(output_error_len - 1);
    output_error[..len].copy_from_slice(&error.as_bytes()[..len]);
    output_error[len] = 0;
}

/// Evaluate a whitespace separated expression.
///
/// # Arguments
///
/// * `input` - NUL-terminated expression.
/// * `notation` - `LR_CALC_INFIX` (`2 + 3`) or `LR_CALC_POSTFIX` (`2 3 +`).
/// * `output_result` - Where the result is written on success.
/// * `output_error` - The buffer to write the error message to.
/// * `output_error_len` - The length of the error buffer.
///
/// # Returns
///
/// `LR_CALC_OK` on success, `LR_CALC_ERROR` otherwise. Invalid tokens are skipped
/// and are not reported through this interface.
///
/// # Safety
///
/// `input` must be null or a valid NUL-terminated string. `output_result` must be null
/// or valid for writes. The `output_error` buffer must be null or valid for
/// `output_error_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn lr_calc_evaluate(
    input: *const c_char,
    notation: c_int,
    output_result: *mut c_longlong,
    output_error: *mut c_char,
    output_error_len: size_t,
) -> c_int {
    if input.is_null() {
        unsafe {
            fill_error_buffer(
                output_error,
                output_error_len,
                "Invalid input string pointer!",
            );
        }
        return LR_CALC_ERROR;
    }

    if output_result.is_null() {
        unsafe {
            fill_error_buffer(output_error, output_error_len, "Invalid result pointer!");
        }
        return LR_CALC_ERROR;
    }

    let input = match unsafe { CStr::from_ptr(input).to_str() } {
        Ok(input) => input,
        Err(_) => {
            unsafe {
                fill_error_buffer(
                    output_error,
                    output_error_len,
                    "Failed to convert the input string to a Rust string!",
                )
            }
            return LR_CALC_ERROR;
        }
    };

    let notation = match notation {
        LR_CALC_INFIX => Notation::Infix,
        LR_CALC_POSTFIX => Notation::Postfix,
        other => {
            unsafe {
                fill_error_buffer(
                    output_error,
                    output_error_len,
                    &format!("Unknown notation: {}", other),
                );
            }
            return LR_CALC_ERROR;
        }
    };
    let calculator = Calculator::new(Config {
        notation,
        ..Config::default()
    });

    match calculator.evaluate(input) {
        Ok(result) => {
            unsafe { *output_result = result };
            LR_CALC_OK
        }
        Err(e) => {
            unsafe {
                fill_error_buffer(
                    output_error,
                    output_error_len,
                    &format!("Failed to evaluate the expression: {}", e),
                );
            }
            LR_CALC_ERROR
        }
    }
}
