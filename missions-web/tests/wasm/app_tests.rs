use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use yew::Renderer;

use missions_game::Slot;
use missions_web::app::App;
use missions_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset_storage() {
    let storage = dom::local_storage().expect("localStorage");
    storage
        .remove_item(Slot::Catalog.key())
        .expect("clear catalog slot");
    storage
        .remove_item(Slot::Selection.key())
        .expect("clear selection slot");
}

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    reset_storage();
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn fresh_profile_draws_five_from_the_default_catalog() {
    render_app();
    let doc = dom::document();
    let checkboxes = doc
        .query_selector_all(".mission-checkbox")
        .expect("query checkboxes");
    assert_eq!(checkboxes.length(), 5, "a full catalog yields a five-mission day");
    let rows = doc
        .query_selector_all(".all-missions-item")
        .expect("query catalog rows");
    assert_eq!(rows.length(), 11, "built-in catalog lists every default mission");
    assert!(doc.get_element_by_id("generate-btn").is_some());
    assert!(doc.get_element_by_id("new-mission-input").is_some());
}

#[wasm_bindgen_test]
fn todays_draw_is_persisted_for_reload() {
    render_app();
    let storage = dom::local_storage().expect("localStorage");
    let payload = storage
        .get_item(Slot::Selection.key())
        .expect("read selection slot")
        .expect("mounting the app persists today's draw");
    assert!(payload.contains("\"missions\""));
    assert!(payload.contains("\"date\""));
    // The catalog slot only fills on an explicit edit.
    assert_eq!(
        storage.get_item(Slot::Catalog.key()).expect("read catalog slot"),
        None
    );
}

#[wasm_bindgen_test]
fn js_error_message_prefers_the_readable_forms() {
    assert_eq!(dom::js_error_message(&JsValue::from_str("boom")), "boom");
    let err = js_sys::Error::new("storage unavailable");
    assert_eq!(
        dom::js_error_message(&JsValue::from(err)),
        "storage unavailable"
    );
}
