//! Buttons, bars and form fields shared by the page and the dialogs.

use crate::render::tag::{self, Attrs};

fn with_classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

/// Standard raised button; the caller binds `id` to its action.
pub fn make_button(text: &str, id: &str) -> String {
    tag::button(
        &Attrs::new()
            .with("raised", "raised")
            .with("id", id)
            .with("class", "standardButton"),
        text,
    )
}

pub fn centered_button_bar(buttons: &str, classes: &str) -> String {
    tag::div(
        &Attrs::new().with(
            "class",
            with_classes("horizontal center-justified layout vertical-layout-row", classes),
        ),
        buttons,
    )
}

pub fn button_bar(buttons: &str, classes: &str) -> String {
    tag::div(
        &Attrs::new().with(
            "class",
            with_classes("horizontal left-justified layout vertical-layout-row", classes),
        ),
        buttons,
    )
}

/// Center `content` in a block `width` pixels wide.
pub fn center_content(content: &str, width: u32) -> String {
    let inner = tag::div(
        &Attrs::new().with("style", format!("width:{}px;", width)),
        content,
    );
    tag::div(
        &Attrs::new().with("class", "horizontal center-justified layout vertical-layout-row"),
        &inner,
    )
}

pub fn make_horizontal_field_set(content: &str, extra_classes: Option<&str>) -> String {
    tag::div(
        &Attrs::new().with(
            "class",
            with_classes("horizontal layout", extra_classes.unwrap_or_default()),
        ),
        content,
    )
}

pub fn make_horz_control_group(content: &str) -> String {
    tag::div(&Attrs::new().with("class", "horizontal layout"), content)
}

pub fn make_radio_button(label: &str, id: &str) -> String {
    tag::tag(
        "paper-radio-button",
        &Attrs::new().with("id", id).with("name", id),
        Some(label),
        true,
    )
}

pub fn make_text_area(field_name: &str, field_id: &str) -> String {
    tag::textarea(
        &Attrs::new()
            .with("name", field_id)
            .with("label", field_name)
            .with("id", field_id),
    )
}

pub fn make_edit_field(field_name: &str, field_id: &str) -> String {
    tag::input(
        &Attrs::new()
            .with("name", field_id)
            .with("label", field_name)
            .with("id", field_id),
    )
}

pub fn make_password_field(field_name: &str, field_id: &str) -> String {
    tag::input(
        &Attrs::new()
            .with("type", "password")
            .with("name", field_id)
            .with("label", field_name)
            .with("id", field_id)
            .with("class", "meta64-input"),
    )
}
