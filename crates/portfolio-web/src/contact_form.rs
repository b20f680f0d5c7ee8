//! Contact page wiring: the form posts its fields to the relay as JSON
//! and the raw response text is shown in a dismissible panel.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub const CONTACT_ENDPOINT: &str = "http://localhost:3000/contact";

/// Shown when the request itself fails before the relay can answer.
const NETWORK_FAILURE_TEXT: &str = "Error sending message.";

pub fn wire_contact_form(document: &web::Document) {
    let Some(form_el) = document.get_element_by_id("contact-form") else {
        return;
    };

    {
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let Some(payload) = read_payload(&document) else {
                log::error!("[contact] form fields missing");
                return;
            };
            let document = document.clone();
            spawn_local(async move {
                match post_submission(&payload).await {
                    Ok(text) => show_response(&document, &text),
                    Err(err) => {
                        log::error!("[contact] submit failed: {:?}", err);
                        show_response(&document, NETWORK_FAILURE_TEXT);
                    }
                }
            });
        }) as Box<dyn FnMut(_)>);
        let _ = form_el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let document_in_handler = document.clone();
        dom::add_click_listener(document, "close-button", move || {
            let document = &document_in_handler;
            if let Some(container) = document.get_element_by_id("response-message-container") {
                if let Some(el) = container.dyn_ref::<web::HtmlElement>() {
                    el.set_hidden(true);
                }
            }
            if let Some(form) = document.get_element_by_id("contact-form") {
                if let Some(form) = form.dyn_ref::<web::HtmlFormElement>() {
                    form.reset();
                }
            }
        });
    }
}

fn field_value(document: &web::Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

fn read_payload(document: &web::Document) -> Option<String> {
    let payload = serde_json::json!({
        "firstName": field_value(document, "first-name")?,
        "lastName": field_value(document, "last-name")?,
        "email": field_value(document, "email")?,
        "message": field_value(document, "message")?,
    });
    Some(payload.to_string())
}

async fn post_submission(payload: &str) -> Result<String, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let headers = web::Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(payload));

    let resp_value = JsFuture::from(window.fetch_with_str_and_init(CONTACT_ENDPOINT, &init)).await?;
    let resp: web::Response = resp_value.dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

fn show_response(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id("response-message") {
        el.set_text_content(Some(text));
    }
    if let Some(container) = document.get_element_by_id("response-message-container") {
        if let Some(el) = container.dyn_ref::<web::HtmlElement>() {
            el.set_hidden(false);
        }
    }
}
