//! Document-created script generation for injected CSS.

/// Wrap a stylesheet in a script that appends it as a `<style>` element.
///
/// The CSS is embedded as a JSON string literal, which is also a valid
/// JavaScript string literal, so quotes and newlines survive intact.
pub fn css_injection_script(css: &str) -> String {
    let literal = serde_json::to_string(css).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "(function(){{const style=document.createElement('style');\
         style.innerHTML={literal};document.head.appendChild(style);}})();"
    )
}
