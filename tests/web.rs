// Tests en navegador: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen_test::*;

use resenas_map::models::Review;
use resenas_map::utils::{format_timestamp, NO_IMAGES_PLACEHOLDER};
use resenas_map::viewmodels::{ReviewDetail, ReviewListItem};
use resenas_map::views::{DomReviewsView, ReviewsView};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<span id="userInfo"></span>
<ul id="reviewsList"></ul>
<div id="detailsPanel" style="display: none">
  <h3 id="detName"></h3><p id="detAddress"></p><p id="detRating"></p>
  <div id="detImagesContainer"></div>
  <p id="detAuthor"></p><p id="detIat"></p><p id="detExp"></p><pre id="detToken"></pre>
</div>
"#;

fn mount_page() -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(PAGE);
    document
}

fn review(images: &[&str]) -> Review {
    Review {
        establishment: "Cafe X".to_string(),
        address: "Calle Mayor 1".to_string(),
        rating: 4,
        latitude: Some(40.4),
        longitude: Some(-3.7),
        image_urls: images.iter().map(|s| s.to_string()).collect(),
        author_name: "Ana".to_string(),
        author_email: "a@x.com".to_string(),
        token_issued_at: 1_700_000_000,
        token_expires_at: 1_700_003_600,
        raw_token: "tok123".to_string(),
    }
}

#[wasm_bindgen_test]
fn timestamps_use_browser_locale() {
    let expected = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(1_700_000_000_000.0))
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED);
    assert_eq!(format_timestamp(1_700_000_000), String::from(expected));
}

#[wasm_bindgen_test]
fn detail_panel_never_shows_previous_images() {
    let document = mount_page();
    let view = DomReviewsView::new();

    view.show_detail(&ReviewDetail::from_review(&review(&["a.jpg", "b.jpg"]))).unwrap();
    let images = document.get_element_by_id("detImagesContainer").unwrap();
    assert_eq!(images.child_element_count(), 2);

    view.hide_detail().unwrap();
    view.show_detail(&ReviewDetail::from_review(&review(&[]))).unwrap();

    assert_eq!(images.child_element_count(), 1);
    assert_eq!(images.text_content().unwrap(), NO_IMAGES_PLACEHOLDER);
    assert_eq!(
        document.get_element_by_id("detRating").unwrap().text_content().unwrap(),
        "★★★★☆"
    );
    assert_eq!(
        document.get_element_by_id("detToken").unwrap().text_content().unwrap(),
        "tok123"
    );
}

#[wasm_bindgen_test]
fn list_items_render_as_text_and_select_on_click() {
    let document = mount_page();
    let view = DomReviewsView::new();
    let clicks = Rc::new(std::cell::Cell::new(0));

    let item = ReviewListItem {
        title: "<b>Bar</b>".to_string(),
        badge: "★ 3".to_string(),
        address: "Plaza 2".to_string(),
    };
    let counter = clicks.clone();
    view.append_review_item(&item, Rc::new(move || counter.set(counter.get() + 1)))
        .unwrap();

    let list = document.get_element_by_id("reviewsList").unwrap();
    assert_eq!(list.child_element_count(), 1);
    let li = list.first_element_child().unwrap();
    assert!(li.text_content().unwrap().contains("<b>Bar</b>"));

    wasm_bindgen::JsCast::unchecked_ref::<web_sys::HtmlElement>(&li).click();
    assert_eq!(clicks.get(), 1);

    view.clear_review_list().unwrap();
    assert_eq!(list.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn clearing_the_list_releases_item_listeners() {
    let _document = mount_page();
    let view = DomReviewsView::new();
    let clicks = Rc::new(std::cell::Cell::new(0));

    for title in ["A", "B", "C"] {
        let item = ReviewListItem {
            title: title.to_string(),
            badge: "★ 1".to_string(),
            address: String::new(),
        };
        let counter = clicks.clone();
        view.append_review_item(&item, Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();
    }
    assert_eq!(view.list_listener_count(), 3);
    assert_eq!(Rc::strong_count(&clicks), 4);

    view.clear_review_list().unwrap();

    assert_eq!(view.list_listener_count(), 0);
    assert_eq!(Rc::strong_count(&clicks), 1);
}
