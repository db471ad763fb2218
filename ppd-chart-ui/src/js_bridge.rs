//! Typed wrappers around Plotly.js interop via `js_sys::eval()`.
//!
//! Plotly is loaded as a global (`window.Plotly`) from a script tag, either
//! one the host page already has or one injected by [`init_plotly`].
//! Figures arrive as JSON text, which is a valid JS expression, so they are
//! spliced into the evaluated code as object literals.

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PPD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Poll period while waiting for Plotly and the mount element.
const PLOT_POLL_INTERVAL_MS: u32 = 100;
/// Polls before a pending draw gives up (5 s).
const PLOT_POLL_ATTEMPTS: u32 = 50;
/// Text left in a mount point whose chart could not be drawn.
const CHART_UNAVAILABLE_TEXT: &str = "Chart unavailable: Plotly could not be loaded.";

/// Make sure Plotly is available, injecting its script tag if needed.
///
/// Safe to call more than once: the tag is only added when neither
/// `window.Plotly` nor a previous injection exists. A failed load sets
/// `window.__ppdPlotlyFailed` so pending draws stop polling.
pub fn init_plotly(plotly_src: &str) {
    let src = js_string(plotly_src);
    call_js(&format!(
        r#"
        (function() {{
            if (typeof window.Plotly !== 'undefined' || document.getElementById('ppd-plotly')) {{
                return;
            }}
            window.__ppdPlotlyFailed = false;
            var script = document.createElement('script');
            script.id = 'ppd-plotly';
            script.src = {src};
            script.onload = function() {{ console.log('PPD Plotly loaded'); }};
            script.onerror = function() {{
                window.__ppdPlotlyFailed = true;
                console.error('[PPD] failed to load Plotly from', {src});
            }};
            document.head.appendChild(script);
        }})();
        "#,
    ));
}

/// Draw a figure with `Plotly.newPlot`, replacing the container's content.
///
/// Waits for Plotly and the container element with a bounded poll. When
/// Plotly failed to load or the wait runs out, the draw is dropped, an error
/// is logged and the container shows a short notice. Errors thrown by Plotly
/// are caught and logged so the remaining charts of the same render still
/// draw.
pub fn new_plot(container_id: &str, traces_json: &str, layout_json: &str) {
    call_js(&new_plot_script(container_id, traces_json, layout_json));
}

fn new_plot_script(container_id: &str, traces_json: &str, layout_json: &str) -> String {
    let id = js_string(container_id);
    let unavailable = js_string(CHART_UNAVAILABLE_TEXT);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                var el = document.getElementById({id});
                if (typeof window.Plotly !== 'undefined' && el) {{
                    clearInterval(poll);
                    try {{
                        window.Plotly.newPlot({id}, {traces_json}, {layout_json});
                    }} catch(e) {{ console.error('[PPD] Plotly.newPlot error:', {id}, e); }}
                    return;
                }}
                attempts += 1;
                if (window.__ppdPlotlyFailed === true || attempts >= {PLOT_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    console.error('[PPD] gave up drawing', {id}, 'after', attempts, 'attempts');
                    if (el) {{ el.textContent = {unavailable}; }}
                }}
            }}, {PLOT_POLL_INTERVAL_MS});
        }})();
        "#,
    )
}
