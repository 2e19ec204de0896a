use wasm_bindgen_test::*;

use placenames_wasm::{build_named_after_label, format_biography_preview};

#[wasm_bindgen_test]
fn builds_named_after_label() {
    #[cfg(target_arch = "wasm32")]
    placenames_wasm::start();

    let label = build_named_after_label("Cook", "James", "Captain", "Cook Street");
    assert_eq!(label, "Captain James Cook");

    let label = build_named_after_label("", "", "", "Cook Street");
    assert_eq!(label, "Cook Street");
}

#[wasm_bindgen_test]
fn previews_default_and_custom_length() {
    assert_eq!(format_biography_preview("  Short   bio ", None), "Short bio");

    let long = "word ".repeat(100);
    let preview = format_biography_preview(&long, Some(20));
    assert!(preview.ends_with("..."));
    assert!(preview.chars().count() <= 23);
}
