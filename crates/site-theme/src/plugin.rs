//! Hook into the documentation framework's plugin protocol.
//!
//! The framework hands each plugin two loosely-typed objects. Only two
//! members are ever consumed, and only those are declared here: the hook's
//! `doneEach` render-completion subscription and the view model's
//! `route.path` accessor.

use crate::cover::apply_cover;
use crate::pair::ColorPair;
use log::debug;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Lifecycle registrar the framework passes to each plugin.
    pub type PluginHook;

    /// Subscribes `callback` to run after every completed render.
    #[wasm_bindgen(method, js_name = doneEach)]
    pub fn done_each(this: &PluginHook, callback: &JsValue);

    /// View model the framework passes to each plugin.
    #[derive(Clone)]
    pub type PluginVm;

    #[wasm_bindgen(method, getter)]
    pub fn route(this: &PluginVm) -> PluginRoute;

    /// The currently resolved route.
    pub type PluginRoute;

    /// Path of the route; may be absent while the route resolves.
    #[wasm_bindgen(method, getter)]
    pub fn path(this: &PluginRoute) -> Option<String>;
}

/// True for the landing page: an absent, empty, or `/` route path.
#[must_use]
pub fn is_root_route(path: Option<&str>) -> bool {
    matches!(path, None | Some("") | Some("/"))
}

/// Registers a post-render callback that repaints the cover whenever the
/// root route finishes rendering. Other routes are left untouched; the
/// background is never cleared.
pub fn register_cover_plugin(pair: &ColorPair, hook: &PluginHook, vm: &PluginVm) {
    let pair = pair.clone();
    let vm = vm.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        let path = vm.route().path();
        if is_root_route(path.as_deref()) {
            apply_cover(&pair);
        } else {
            debug!("route {path:?} is not the landing page, skipping cover");
        }
    });
    hook.done_each(callback.as_ref());
    // The framework holds on to the callback for the page lifetime.
    callback.forget();
}
