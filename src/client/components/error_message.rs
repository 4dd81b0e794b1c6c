use dioxus::prelude::*;

#[inline_props]
pub fn ErrorMessage<'a>(cx: Scope<'a>, message: &'a str) -> Element {
    cx.render(rsx!(
        p {
            style: "color:red;",
            "{message}"
        }
    ))
}
