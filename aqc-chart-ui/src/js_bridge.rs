//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The cal-heatmap widget is a third-party JS library loaded by the host
//! page; our glue functions live in `assets/js/heat-calendar.js` and are
//! evaluated as globals (no ES modules), exposed via `window.*`. This
//! module provides safe Rust wrappers that serialize data and call them.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the cal-heatmap glue JS at compile time
static HEAT_CALENDAR_JS: &str = include_str!("../assets/js/heat-calendar.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AQC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the calendar glue with a wait-for-CalHeatmap polling loop.
///
/// The glue defines functions like `renderHeatCalendar(...)` via `function`
/// declarations. To ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope via indirect eval once CalHeatmap is ready and then
/// explicitly promoted to `window.*`.
pub fn init_calendar_scripts() {
    let store_js = format!(
        "window.__aqcCalendarScripts = {};",
        serde_json::to_string(HEAT_CALENDAR_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForCal = setInterval(function() {
                if (typeof CalHeatmap !== 'undefined') {
                    clearInterval(waitForCal);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__aqcCalendarScripts);
                    delete window.__aqcCalendarScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderHeatCalendar !== 'undefined') window.renderHeatCalendar = renderHeatCalendar;
                    if (typeof destroyHeatCalendar !== 'undefined') window.destroyHeatCalendar = destroyHeatCalendar;
                    if (typeof calendarPrevious !== 'undefined') window.calendarPrevious = calendarPrevious;
                    if (typeof calendarNext !== 'undefined') window.calendarNext = calendarNext;
                    window.__aqcCalendarReady = true;
                    console.log('AQC calendar initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the calendar heatmap.
///
/// Uses a polling loop to wait for CalHeatmap to load, the glue scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_heat_calendar(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__aqcCalendarReady &&
                    typeof window.renderHeatCalendar !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderHeatCalendar('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[AQC] renderHeatCalendar error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Shift the calendar one domain back.
pub fn calendar_previous() {
    call_js("if (window.calendarPrevious) window.calendarPrevious();");
}

/// Shift the calendar one domain forward.
pub fn calendar_next() {
    call_js("if (window.calendarNext) window.calendarNext();");
}

/// Destroy the calendar and clear its container.
pub fn destroy_calendar(container_id: &str) {
    call_js("if (window.destroyHeatCalendar) window.destroyHeatCalendar();");
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Register the day-click callback invoked by the calendar glue.
///
/// The glue calls `window.__aqcOnDayClick(isoDate)` when a day cell is
/// clicked. The closure is leaked intentionally; it lives for the whole
/// app session.
pub fn set_day_click_handler(mut handler: impl FnMut(String) + 'static) {
    let closure = Closure::wrap(Box::new(move |date: JsValue| {
        if let Some(iso) = date.as_string() {
            handler(iso);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let global = js_sys::global();
    if js_sys::Reflect::set(
        &global,
        &JsValue::from_str("__aqcOnDayClick"),
        closure.as_ref(),
    )
    .is_err()
    {
        log::warn!("Failed to install the day-click handler");
    }
    closure.forget();
}
