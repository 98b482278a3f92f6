//! Shizuku helper bridge using web-sys.
//!
//! The privileged helper injects a bridge object into the page as
//! `window.shizuku`; all access goes through direct JavaScript interop
//! via the Reflect API. The bridge is treated as an opaque external
//! service: callers see capability state, never interop errors.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

use crate::core::error::BridgeError;
use crate::models::SystemInfo;
use crate::utils::dom;

/// Get the window.shizuku object injected by the helper.
fn get_bridge() -> Result<Object, BridgeError> {
    let window = dom::window().ok_or(BridgeError::NoWindow)?;
    Reflect::get(&window, &"shizuku".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(BridgeError::NotInstalled)
}

/// Look up a named function on the bridge object.
fn bridge_fn(bridge: &Object, name: &str) -> Result<Function, BridgeError> {
    Reflect::get(bridge, &name.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| BridgeError::CallFailed(name.to_string()))
}

/// Check if the helper bridge is injected into this page.
pub fn is_available() -> bool {
    get_bridge().is_ok()
}

/// Ask the bridge whether the helper's binder is currently reachable.
pub fn ping_binder() -> bool {
    let Ok(bridge) = get_bridge() else {
        return false;
    };
    bridge_fn(&bridge, "pingBinder")
        .ok()
        .and_then(|f| f.call0(&bridge).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Get the helper service version, if the binder is reachable.
pub fn get_version() -> Option<i32> {
    let bridge = get_bridge().ok()?;
    let f = bridge_fn(&bridge, "getVersion").ok()?;
    f.call0(&bridge).ok()?.as_f64().map(|v| v as i32)
}

/// Issue an asynchronous permission request to the helper.
///
/// The result arrives later through the permission-result listener; this
/// call only hands the request off.
pub fn request_permission(code: u32) -> Result<(), BridgeError> {
    let bridge = get_bridge()?;
    let f = bridge_fn(&bridge, "requestPermission")?;
    f.call1(&bridge, &JsValue::from(code))
        .map_err(|_| BridgeError::CallFailed("requestPermission".to_string()))?;
    Ok(())
}

/// Fetch the system properties the helper exposes for diagnostics.
pub fn system_info() -> Option<SystemInfo> {
    let bridge = get_bridge().ok()?;
    let f = bridge_fn(&bridge, "getSystemInfo").ok()?;
    let value = f.call0(&bridge).ok()?;
    serde_wasm_bindgen::from_value(value).ok()
}

// ============================================================================
// Event Listeners
// ============================================================================

/// A registered permission-result listener.
///
/// Dropping the guard removes the listener from the bridge, so a
/// component can scope the registration to its own lifetime and never
/// leak a callback against a torn-down UI context.
pub struct PermissionListener {
    bridge: Object,
    closure: Closure<dyn Fn(JsValue, JsValue)>,
}

impl Drop for PermissionListener {
    fn drop(&mut self) {
        if let Ok(remove) = bridge_fn(&self.bridge, "removePermissionResultListener") {
            let _ = remove.call1(&self.bridge, self.closure.as_ref());
        }
    }
}

/// Register a callback for asynchronous permission results.
///
/// The callback receives the request code and whether the permission was
/// granted. Keep the returned guard alive for as long as results should
/// be delivered; drop it to unregister.
pub fn add_permission_result_listener(
    callback: impl Fn(u32, bool) + 'static,
) -> Result<PermissionListener, BridgeError> {
    let bridge = get_bridge()?;

    let closure = Closure::wrap(Box::new(move |code: JsValue, granted: JsValue| {
        if let (Some(code), Some(granted)) = (code.as_f64(), granted.as_bool()) {
            callback(code as u32, granted);
        }
    }) as Box<dyn Fn(JsValue, JsValue)>);

    let add = bridge_fn(&bridge, "addPermissionResultListener")?;
    add.call1(&bridge, closure.as_ref())
        .map_err(|_| BridgeError::CallFailed("addPermissionResultListener".to_string()))?;

    Ok(PermissionListener { bridge, closure })
}

/// Register a callback for when the helper's binder becomes reachable.
///
/// # Note
/// The closure is intentionally leaked using `forget()` since this is a
/// single-page application where the observer should persist for the
/// entire lifetime of the page.
pub fn on_binder_received(callback: impl Fn() + 'static) -> Result<(), BridgeError> {
    add_binder_listener("addBinderReceivedListener", callback)
}

/// Register a callback for when the helper's binder is lost.
///
/// # Note
/// The closure is intentionally leaked using `forget()` since this is a
/// single-page application where the observer should persist for the
/// entire lifetime of the page.
pub fn on_binder_dead(callback: impl Fn() + 'static) -> Result<(), BridgeError> {
    add_binder_listener("addBinderDeadListener", callback)
}

fn add_binder_listener(name: &str, callback: impl Fn() + 'static) -> Result<(), BridgeError> {
    let bridge = get_bridge()?;

    let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn Fn()>);

    let add = bridge_fn(&bridge, name)?;
    add.call1(&bridge, closure.as_ref())
        .map_err(|_| BridgeError::CallFailed(name.to_string()))?;

    closure.forget();
    Ok(())
}
