use web_sys as web;

/// Drive the fade overlay's opacity; the CSS transition on the element
/// supplies the visual ramp.
#[inline]
pub fn set_opacity(document: &web::Document, opacity: f32) {
    if let Ok(Some(el)) = document.query_selector(".fade-out-screen") {
        let _ = el.set_attribute("style", &format!("opacity:{opacity}"));
    }
}
