use web_sys as web;

pub const START_SCREEN_ID: &str = "startScreen";

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_SCREEN_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}
