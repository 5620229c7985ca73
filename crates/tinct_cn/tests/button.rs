use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tinct_cn::{cn, ButtonVariant};

#[test]
fn every_variant_appends_its_class() {
    for variant in ButtonVariant::all() {
        let el = cn::button("Button").variant(*variant).build();
        assert_eq!(
            el.class_attr(),
            format!("btn {}", variant.class_name()),
            "variant {variant} should compose base + variant class"
        );
    }
}

#[test]
fn unrecognized_variant_id_renders_base_class_only() {
    let el = cn::button("Button").variant_id("link").build();
    assert_eq!(el.class_attr(), "btn");
    assert!(!el.to_html().contains("btn-"));
}

#[test]
fn caller_classes_come_after_the_variant_class() {
    let el = cn::button("Button")
        .variant(ButtonVariant::Ghost)
        .class("w-full mt-2")
        .build();
    assert_eq!(el.class_attr(), "btn btn-ghost w-full mt-2");
}

#[test]
fn passthrough_attributes_are_forwarded_unchanged() {
    let el = cn::button("Delete")
        .variant(ButtonVariant::Error)
        .attr("id", "delete-row")
        .attr("disabled", "disabled")
        .build();
    assert_eq!(el.attr("id"), Some("delete-row"));
    assert_eq!(el.attr("disabled"), Some("disabled"));
    assert_eq!(
        el.to_html(),
        "<button class=\"btn btn-error\" id=\"delete-row\" disabled=\"disabled\">Delete</button>"
    );
}

#[test]
fn click_handler_is_forwarded() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    let el = cn::button("Button")
        .on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    el.click();
    el.click();
    assert_eq!(clicks.load(Ordering::SeqCst), 2);
}

#[test]
fn label_is_rendered_as_text() {
    let el = cn::button("Button Secondary")
        .variant(ButtonVariant::Secondary)
        .build();
    assert_eq!(el.text(), Some("Button Secondary"));
    assert_eq!(
        el.to_html(),
        "<button class=\"btn btn-secondary\">Button Secondary</button>"
    );
}
