//! The surface exposed to the hosting page.

use crate::cover::apply_cover;
use crate::pair::ColorPair;
use crate::plugin::{PluginHook, PluginVm, register_cover_plugin};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::wasm_bindgen;

/// Per-page-load theme state: one color pair sampled at construction and
/// reused until the page unloads.
///
/// The hosting page constructs a single value, pushes [`SiteTheme::register`]
/// into the framework's plugin list and may call [`SiteTheme::apply`]
/// directly or read the hex getters for its own styling.
#[wasm_bindgen]
pub struct SiteTheme {
    pair: ColorPair,
}

#[wasm_bindgen]
impl SiteTheme {
    /// Samples the color pair once from entropy.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> SiteTheme {
        let mut rng = SmallRng::from_entropy();
        SiteTheme {
            pair: ColorPair::sample(&mut rng),
        }
    }

    /// Darker left gradient stop.
    #[wasm_bindgen(getter, js_name = leftHex)]
    #[must_use]
    pub fn left_hex(&self) -> String {
        self.pair.left_hex.clone()
    }

    /// Lighter right gradient stop.
    #[wasm_bindgen(getter, js_name = rightHex)]
    #[must_use]
    pub fn right_hex(&self) -> String {
        self.pair.right_hex.clone()
    }

    /// Midpoint of the two stops, for accent styling.
    #[wasm_bindgen(getter, js_name = themeHex)]
    #[must_use]
    pub fn theme_hex(&self) -> String {
        self.pair.theme_hex.clone()
    }

    /// Paints the cover element with the cached pair, see
    /// [`apply_cover`](crate::cover::apply_cover).
    pub fn apply(&self) {
        apply_cover(&self.pair);
    }

    /// Plugin entry point for the framework: call with the hook and view
    /// model objects the framework provides.
    pub fn register(&self, hook: &PluginHook, vm: &PluginVm) {
        register_cover_plugin(&self.pair, hook, vm);
    }
}

impl SiteTheme {
    /// The cached pair, for Rust-side callers.
    #[must_use]
    pub fn pair(&self) -> &ColorPair {
        &self.pair
    }

    /// Builds a theme from an already sampled pair.
    #[must_use]
    pub fn from_pair(pair: ColorPair) -> SiteTheme {
        SiteTheme { pair }
    }
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self::new()
    }
}
