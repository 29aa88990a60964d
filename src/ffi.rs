//! C ABI over [`HttpBridge`].
//!
//! Strings that may carry NUL bytes (post data, header keys and values) are
//! passed as pointer + length. Buffers returned by the getters are owned by the
//! handle and stay valid until the next call that mutates it
//! (`request`, `reset`, `free`).
use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::{ptr, slice};

use crate::bridge::HttpBridge;

/// Bridge plus the interleaved headers handed out to C.
pub struct FfiBridge {
    bridge: HttpBridge,
    interleaved: Vec<String>,
}

impl FfiBridge {
    fn refresh_headers(&mut self) {
        self.interleaved = self.bridge.interleaved_headers();
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct HttpBridgeHandle(*mut FfiBridge);

impl HttpBridgeHandle {
    fn get(&self) -> Option<&FfiBridge> {
        unsafe { self.0.as_ref() }
    }

    fn get_mut(&mut self) -> Option<&mut FfiBridge> {
        unsafe { self.0.as_mut() }
    }
}

unsafe fn c_str<'a>(s: *const c_char) -> Option<&'a CStr> {
    if s.is_null() {
        None
    } else {
        Some(CStr::from_ptr(s))
    }
}

unsafe fn bytes<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if data.is_null() {
        if len == 0 {
            Some(&[])
        } else {
            None
        }
    } else {
        Some(slice::from_raw_parts(data, len))
    }
}

unsafe fn write_len(out_len: *mut usize, len: usize) {
    if !out_len.is_null() {
        *out_len = len;
    }
}

#[no_mangle]
pub extern "C" fn http_bridge_new() -> HttpBridgeHandle {
    let bridge = Box::new(FfiBridge {
        bridge: HttpBridge::new(None),
        interleaved: Vec::new(),
    });
    HttpBridgeHandle(Box::into_raw(bridge))
}

#[no_mangle]
pub extern "C" fn http_bridge_free(handle: HttpBridgeHandle) {
    if !handle.0.is_null() {
        unsafe {
            let _ = Box::from_raw(handle.0);
        }
    }
}

#[no_mangle]
pub extern "C" fn http_bridge_reset(mut handle: HttpBridgeHandle) {
    if let Some(b) = handle.get_mut() {
        b.bridge.reset();
        b.interleaved.clear();
    }
}

#[no_mangle]
pub extern "C" fn http_bridge_set_url(mut handle: HttpBridgeHandle, url: *const c_char) {
    let Some(url) = (unsafe { c_str(url) }) else {
        return;
    };
    if let Some(b) = handle.get_mut() {
        b.bridge.set_url(url.to_string_lossy());
    }
}

#[no_mangle]
pub extern "C" fn http_bridge_set_method(mut handle: HttpBridgeHandle, method: *const c_char) {
    let Some(method) = (unsafe { c_str(method) }) else {
        return;
    };
    if let Some(b) = handle.get_mut() {
        b.bridge.set_method(&method.to_string_lossy());
    }
}

#[no_mangle]
pub extern "C" fn http_bridge_set_post_data(mut handle: HttpBridgeHandle, data: *const u8, len: usize) {
    let Some(data) = (unsafe { bytes(data, len) }) else {
        return;
    };
    if let Some(b) = handle.get_mut() {
        b.bridge.set_post_data(data);
    }
}

#[no_mangle]
pub extern "C" fn http_bridge_add_header(
    mut handle: HttpBridgeHandle,
    key: *const u8,
    key_len: usize,
    value: *const u8,
    value_len: usize,
) {
    let (Some(key), Some(value)) = (unsafe { bytes(key, key_len) }, unsafe { bytes(value, value_len) }) else {
        return;
    };
    if let Some(b) = handle.get_mut() {
        b.bridge.add_header(String::from_utf8_lossy(key), String::from_utf8_lossy(value));
    }
}

/// Runs the request. Returns false on failure, including a panic inside the bridge.
#[no_mangle]
pub extern "C" fn http_bridge_request(mut handle: HttpBridgeHandle) -> bool {
    let Some(b) = handle.get_mut() else {
        return false;
    };

    let ok = catch_unwind(AssertUnwindSafe(|| b.bridge.request())).unwrap_or_else(|_| {
        log::error!("HttpBridge: request panicked");
        false
    });

    b.refresh_headers();
    ok
}

#[no_mangle]
pub extern "C" fn http_bridge_get_response_code(handle: HttpBridgeHandle) -> i32 {
    handle.get().map_or(0, |b| b.bridge.response_code())
}

/// Returns the response body and stores its length in `out_len`. Null when no
/// request has completed.
#[no_mangle]
pub extern "C" fn http_bridge_get_response(handle: HttpBridgeHandle, out_len: *mut usize) -> *const u8 {
    let body = handle.get().and_then(|b| b.bridge.response());

    match body {
        Some(body) => {
            unsafe { write_len(out_len, body.len()) };
            body.as_ptr()
        }
        None => {
            unsafe { write_len(out_len, 0) };
            ptr::null()
        }
    }
}

/// Number of entries in the interleaved header sequence (twice the header count).
#[no_mangle]
pub extern "C" fn http_bridge_interleaved_headers_len(handle: HttpBridgeHandle) -> usize {
    handle.get().map_or(0, |b| b.interleaved.len())
}

/// Returns entry `index` of the interleaved header sequence, or null when out of range.
#[no_mangle]
pub extern "C" fn http_bridge_interleaved_header(
    handle: HttpBridgeHandle,
    index: usize,
    out_len: *mut usize,
) -> *const u8 {
    match handle.get().and_then(|b| b.interleaved.get(index)) {
        Some(entry) => {
            unsafe { write_len(out_len, entry.len()) };
            entry.as_ptr()
        }
        None => {
            unsafe { write_len(out_len, 0) };
            ptr::null()
        }
    }
}
