//! C ABI for host environments.
//!
//! A host creates a record with [`wkhtmltox_web_new`] or
//! [`wkhtmltox_web_new_from_json`], reads and writes fields by keyword, and
//! releases it with [`wkhtmltox_web_free`]. Calls return [`WK_OK`] or a
//! negative status; failures are logged.

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::errors::ArgumentError;
use crate::settings::{FieldKind, WebField, WebSettings};
use crate::value::SettingValue;

pub const WK_OK: i32 = 0;
pub const WK_ERR_NULL: i32 = -1;
pub const WK_ERR_UTF8: i32 = -2;
pub const WK_ERR_ARGUMENT: i32 = -3;
pub const WK_ERR_BUFFER: i32 = -4;

#[repr(C)]
pub struct WkWebHandle(*mut WebSettings);

impl WkWebHandle {
    fn null() -> Self {
        WkWebHandle(ptr::null_mut())
    }

    fn from_settings(settings: WebSettings) -> Self {
        WkWebHandle(Box::into_raw(Box::new(settings)))
    }
}

fn status(err: &ArgumentError) -> i32 {
    match err {
        ArgumentError::NullPointer => WK_ERR_NULL,
        ArgumentError::InvalidUtf8 => WK_ERR_UTF8,
        _ => WK_ERR_ARGUMENT,
    }
}

unsafe fn str_arg<'a>(s: *const c_char) -> Result<&'a str, ArgumentError> {
    if s.is_null() {
        return Err(ArgumentError::NullPointer);
    }
    CStr::from_ptr(s).to_str().map_err(|_| ArgumentError::InvalidUtf8)
}

unsafe fn settings_mut<'a>(handle: &WkWebHandle) -> Result<&'a mut WebSettings, ArgumentError> {
    handle.0.as_mut().ok_or(ArgumentError::NullPointer)
}

unsafe fn settings_ref<'a>(handle: &WkWebHandle) -> Result<&'a WebSettings, ArgumentError> {
    handle.0.as_ref().ok_or(ArgumentError::NullPointer)
}

unsafe fn set_value(handle: &WkWebHandle, name: *const c_char, value: SettingValue) -> i32 {
    let res = settings_mut(handle).and_then(|settings| {
        let name = str_arg(name)?;
        settings.set(name, value)
    });

    match res {
        Ok(()) => WK_OK,
        Err(e) => {
            log::error!("wkhtmltox_web: cannot set field: {e}");
            status(&e)
        }
    }
}

unsafe fn lookup(handle: &WkWebHandle, name: *const c_char, expected: FieldKind) -> Result<SettingValue, ArgumentError> {
    let settings = settings_ref(handle)?;
    let field: WebField = str_arg(name)?.parse()?;
    let value = settings.get(field);
    if field.kind() != expected {
        return Err(ArgumentError::WrongType {
            field,
            expected,
            found: value.type_name(),
        });
    }
    Ok(value)
}

unsafe fn get_value(handle: &WkWebHandle, name: *const c_char, expected: FieldKind) -> Result<SettingValue, i32> {
    lookup(handle, name, expected).map_err(|e| {
        log::error!("wkhtmltox_web: cannot get field: {e}");
        status(&e)
    })
}

/// Creates a record holding the default settings.
#[no_mangle]
pub extern "C" fn wkhtmltox_web_new() -> WkWebHandle {
    WkWebHandle::from_settings(WebSettings::default())
}

/// Creates a record from a JSON object of keyword overrides. Returns a null
/// handle when the keywords are rejected.
///
/// # Safety
/// `json` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_new_from_json(json: *const c_char) -> WkWebHandle {
    match str_arg(json).and_then(WebSettings::from_json) {
        Ok(settings) => WkWebHandle::from_settings(settings),
        Err(e) => {
            log::error!("wkhtmltox_web: cannot create settings: {e}");
            WkWebHandle::null()
        }
    }
}

/// # Safety
/// `handle` must come from this module and not be freed; `name` must be a
/// valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_set_bool(handle: WkWebHandle, name: *const c_char, value: bool) -> i32 {
    set_value(&handle, name, SettingValue::Bool(value))
}

/// # Safety
/// See [`wkhtmltox_web_set_bool`].
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_set_int(handle: WkWebHandle, name: *const c_char, value: i64) -> i32 {
    set_value(&handle, name, SettingValue::Int(value))
}

/// # Safety
/// See [`wkhtmltox_web_set_bool`]; `value` must also be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_set_string(
    handle: WkWebHandle,
    name: *const c_char,
    value: *const c_char,
) -> i32 {
    match str_arg(value) {
        Ok(v) => set_value(&handle, name, SettingValue::Str(v.to_string())),
        Err(e) => {
            log::error!("wkhtmltox_web: cannot set field: {e}");
            status(&e)
        }
    }
}

/// # Safety
/// See [`wkhtmltox_web_set_bool`]; `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_get_bool(handle: WkWebHandle, name: *const c_char, out: *mut bool) -> i32 {
    if out.is_null() {
        log::error!("wkhtmltox_web: cannot get field: {}", ArgumentError::NullPointer);
        return WK_ERR_NULL;
    }
    match get_value(&handle, name, FieldKind::Bool) {
        Ok(SettingValue::Bool(b)) => {
            *out = b;
            WK_OK
        }
        Ok(_) => WK_ERR_ARGUMENT,
        Err(code) => code,
    }
}

/// # Safety
/// See [`wkhtmltox_web_get_bool`].
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_get_int(handle: WkWebHandle, name: *const c_char, out: *mut i64) -> i32 {
    if out.is_null() {
        log::error!("wkhtmltox_web: cannot get field: {}", ArgumentError::NullPointer);
        return WK_ERR_NULL;
    }
    match get_value(&handle, name, FieldKind::Int) {
        Ok(SettingValue::Int(i)) => {
            *out = i;
            WK_OK
        }
        Ok(_) => WK_ERR_ARGUMENT,
        Err(code) => code,
    }
}

/// Copies a string field into `output`. Returns the number of bytes written
/// (no NUL terminator) or a negative status, [`WK_ERR_BUFFER`] when
/// `output_size` is too small.
///
/// # Safety
/// See [`wkhtmltox_web_set_bool`]; `output` must be valid for `output_size` bytes.
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_get_string(
    handle: WkWebHandle,
    name: *const c_char,
    output: *mut u8,
    output_size: usize,
) -> isize {
    let value = match get_value(&handle, name, FieldKind::Str) {
        Ok(value) => value.to_string(),
        Err(code) => return code as isize,
    };

    if output_size < value.len() {
        log::error!(
            "wkhtmltox_web: output buffer of {output_size} bytes too small for {} bytes",
            value.len()
        );
        return WK_ERR_BUFFER as isize;
    }
    if value.is_empty() {
        return 0;
    }
    if output.is_null() {
        log::error!("wkhtmltox_web: cannot get field: {}", ArgumentError::NullPointer);
        return WK_ERR_NULL as isize;
    }

    ptr::copy_nonoverlapping(value.as_ptr(), output, value.len());
    value.len() as isize
}

/// Releases a record. Freeing a null handle does nothing.
///
/// # Safety
/// `handle` must come from this module and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn wkhtmltox_web_free(handle: WkWebHandle) {
    if !handle.0.is_null() {
        let _ = Box::from_raw(handle.0);
    }
}
