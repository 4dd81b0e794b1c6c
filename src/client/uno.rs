use dioxus_core::*;
use std::fmt::Arguments;

/// Attributify-mode UnoCSS utilities, usable as `u_p: "4"` inside `rsx!`.
macro_rules! uno_attribute {
    (
        $(
            $(#[$attr:meta])*
            $name:ident: $lit:literal;
        )*
    ) => {
        $(
            $(#[$attr])*
            fn $name<'a>(&self, cx: NodeFactory<'a>, val: Arguments) -> Attribute<'a> {
                cx.attr($lit, val, None, false)
            }
        )*
    };
}

pub trait UnoAttributes {
    uno_attribute! {
        u_font: "u-font";
        u_text: "u-text";
        u_bg: "u-bg";
        u_border: "u-border";
        u_shadow: "u-shadow";
        u_p: "u-p";
        u_m: "u-m";
        u_w: "u-w";
        u_grid: "u-grid";
        u_gap: "u-gap";
        u_cursor: "u-cursor";
        u_opacity: "u-opacity";
        u_transition: "u-transition";
    }
}

impl<T: DioxusElement> UnoAttributes for T {}
