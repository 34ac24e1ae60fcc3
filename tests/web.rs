//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use hero_network::animation::AnimationLoop;
use hero_network::config::NetworkConfig;
use hero_network::dom_helpers;
use hero_network::hero::{self, Hero};
use hero_network::ui::{kinetic_text, mobile_menu, theme};
use hero_network::{start_site, HeroNetwork};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom_helpers::document(&dom_helpers::window().unwrap()).unwrap()
}

fn mount(document: &Document, tag: &str, id: &str) -> HtmlElement {
    let element = document
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

// 400x300 container holding a canvas
fn mount_hero(document: &Document, container_id: &str, canvas_id: &str) -> HtmlElement {
    let container = mount(document, "div", container_id);
    container
        .style()
        .set_property("width", "400px")
        .unwrap();
    container
        .style()
        .set_property("height", "300px")
        .unwrap();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(canvas_id);
    container.append_child(&canvas).unwrap();
    container
}

async fn next_frame() {
    let window = dom_helpers::window().unwrap();
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window.request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn hero_sizes_canvas_from_container_and_renders() {
    let document = document();
    let container = mount_hero(&document, "test-hero", "test-hero-canvas");

    let mut hero = Hero::new(
        &document,
        "test-hero-canvas",
        "test-hero",
        NetworkConfig::default(),
    )
    .unwrap();

    assert_eq!(hero.network().dimensions(), (400.0, 300.0));
    assert_eq!(hero.network().particles().len(), 90);
    assert!(hero.frame().unwrap());

    hero.network_mut().set_visible(false);
    assert!(!hero.frame().unwrap());

    container.remove();
}

#[wasm_bindgen_test]
fn hero_requires_a_canvas() {
    let document = document();
    let container = mount(&document, "div", "test-hero-missing");
    assert!(Hero::new(
        &document,
        "no-such-canvas",
        "test-hero-missing",
        NetworkConfig::default()
    )
    .is_err());
    container.remove();
}

#[wasm_bindgen_test]
fn kinetic_text_builds_staggered_spans() {
    let document = document();
    let first = mount(&document, "h1", kinetic_text::FIRST_NAME_ID);
    let last = mount(&document, "h1", kinetic_text::LAST_NAME_ID);

    kinetic_text::install(&document, "Ada", "Lo").unwrap();

    assert_eq!(first.child_element_count(), 3);
    assert_eq!(last.child_element_count(), 2);
    let first_char = last
        .first_element_child()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(first_char.class_name(), "char");
    assert_eq!(
        first_char
            .style()
            .get_property_value("animation-delay")
            .unwrap(),
        "0.55s"
    );

    first.remove();
    last.remove();
}

#[wasm_bindgen_test]
fn mobile_menu_toggles_and_locks_scroll() {
    let document = document();
    let hamburger = mount(&document, "button", mobile_menu::HAMBURGER_ID);
    let menu = mount(&document, "nav", mobile_menu::MENU_ID);

    let mobile = mobile_menu::MobileMenu::new(&document).unwrap();
    assert!(mobile.toggle().unwrap().open);
    assert!(menu.class_list().contains("open"));
    assert_eq!(
        hamburger.get_attribute("aria-expanded").as_deref(),
        Some("true")
    );
    let body = document.body().unwrap();
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    mobile.close().unwrap();
    assert!(!menu.class_list().contains("open"));
    assert!(!hamburger.class_list().contains("open"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");

    hamburger.remove();
    menu.remove();
}

#[wasm_bindgen_test]
fn theme_attribute_tracks_preference() {
    let root = document().document_element().unwrap();

    theme::apply(&root, theme::Theme::Light).unwrap();
    assert_eq!(theme::current_theme(&root), theme::Theme::Light);

    theme::apply(&root, theme::Theme::Dark).unwrap();
    assert!(root.get_attribute(theme::ATTRIBUTE).is_none());
    assert_eq!(theme::current_theme(&root), theme::Theme::Dark);
}

#[wasm_bindgen_test]
fn exported_handle_ticks_mounted_canvas() {
    let document = document();
    let container = mount_hero(&document, "test-handle", "test-handle-canvas");

    let mut network = HeroNetwork::new("test-handle-canvas", "test-handle").unwrap();
    assert_eq!(network.particle_count(), 90);
    assert!(network.tick().unwrap());

    network.set_timing(true);
    network.set_pointer(200.0, 150.0);
    assert!(network.tick().unwrap());
    network.set_timing(false);

    network.set_visible(false);
    assert!(!network.tick().unwrap());
    network.set_visible(true);

    network.set_particle_count(10);
    assert_eq!(network.particle_count(), 10);
    network.clear_pointer();
    assert!(network.tick().unwrap());

    container.remove();
}

#[wasm_bindgen_test]
async fn stopped_loop_runs_no_more_frames() {
    let window = dom_helpers::window().unwrap();
    let frames = Rc::new(Cell::new(0));
    let counter = frames.clone();
    let animation = AnimationLoop::start(&window, move || counter.set(counter.get() + 1)).unwrap();
    assert!(animation.is_running());

    for _ in 0..3 {
        next_frame().await;
    }
    assert!(frames.get() >= 1);

    animation.stop();
    assert!(!animation.is_running());
    let stopped_at = frames.get();
    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(frames.get(), stopped_at);
}

#[wasm_bindgen_test]
async fn site_starts_without_optional_markup_and_stops() {
    let document = document();
    let container = mount_hero(&document, hero::CONTAINER_ID, hero::CANVAS_ID);

    // no cursor, nav, menu or theme markup on the page
    let site = start_site("Ada", "Lo").unwrap();
    assert!(site.is_running());
    next_frame().await;

    site.stop();
    assert!(!site.is_running());

    container.remove();
}
