//! Analytics adapter backed by a Segment-style `window.analytics` collector.

use footer_host::{AnalyticsFuture, AnalyticsService, TrackEvent};

#[derive(Debug, Clone, Copy, Default)]
/// Browser analytics adapter calling `window.analytics.track(name, properties)`.
///
/// Pages without a loaded collector are treated as opted out and succeed silently.
pub struct WebAnalyticsService;

impl AnalyticsService for WebAnalyticsService {
    fn send_track_event<'a>(
        &'a self,
        event: &'a TrackEvent,
    ) -> AnalyticsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return track_with_window_collector(event);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = event;
                Ok(())
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn track_with_window_collector(event: &TrackEvent) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    use crate::js_error_to_string;

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let collector = js_sys::Reflect::get(&window, &JsValue::from_str("analytics"))
        .map_err(js_error_to_string)?;
    if collector.is_undefined() || collector.is_null() {
        return Ok(());
    }
    let track = js_sys::Reflect::get(&collector, &JsValue::from_str("track"))
        .map_err(js_error_to_string)?;
    let track = track
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| "window.analytics.track is not a function".to_string())?;
    let properties =
        serde_wasm_bindgen::to_value(&event.properties).map_err(|err| err.to_string())?;
    track
        .call2(&collector, &JsValue::from_str(&event.name), &properties)
        .map(|_| ())
        .map_err(js_error_to_string)
}

#[cfg(test)]
mod tests {
    use footer_host::outbound_link_event;
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_build_accepts_events_without_a_collector() {
        let service = WebAnalyticsService;
        let service_obj: &dyn AnalyticsService = &service;
        block_on(service_obj.send_track_event(&outbound_link_event("https://lms.example.com")))
            .expect("send");
    }
}
