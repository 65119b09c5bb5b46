//! Browser event source for deep links.
//!
//! Web builds cannot receive OS-level `podnet://` launches directly; the
//! host page forwards them through the URL hash instead
//! (`https://app.example/#podnet%3A%2F%2Fdocuments%2Fdrafts`). This source
//! watches `hashchange` and hands any hash carrying a deep link to the
//! manager.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::Window;

use crate::config::{HASH_PREFIX, SCHEME_PREFIX};
use crate::core::dispatch::{UrlCallback, UrlEventSource};
use crate::core::error::DispatchError;
use crate::utils::url::decode_component;

/// [`UrlEventSource`] backed by `window.location.hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHashSource;

/// Keeps the `hashchange` listener registered until dropped.
pub struct HashSubscription {
    window: Window,
    closure: Closure<dyn Fn()>,
}

impl Drop for HashSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("hashchange", self.closure.as_ref().unchecked_ref());
    }
}

/// Deep link currently carried in the hash, raw or percent-encoded.
fn hash_deep_link(window: &Window) -> Option<String> {
    let hash = window.location().hash().ok()?;
    let raw = hash.strip_prefix(HASH_PREFIX).unwrap_or(&hash);
    let url = decode_component(raw);
    url.starts_with(SCHEME_PREFIX).then_some(url)
}

impl UrlEventSource for BrowserHashSource {
    type Subscription = HashSubscription;

    async fn subscribe(&self, on_urls: UrlCallback) -> Result<HashSubscription, DispatchError> {
        let window = web_sys::window()
            .ok_or_else(|| DispatchError::Subscribe("Browser window not available".to_string()))?;

        // the page may have been opened with a deep link already in the hash
        if let Some(url) = hash_deep_link(&window) {
            on_urls(vec![url]);
        }

        let listener_window = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(url) = hash_deep_link(&listener_window) {
                on_urls(vec![url]);
            }
        }) as Box<dyn Fn()>);

        window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
            .map_err(|e| DispatchError::Subscribe(format!("{:?}", e)))?;

        Ok(HashSubscription { window, closure })
    }
}
