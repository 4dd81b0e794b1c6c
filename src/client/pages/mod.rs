#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::client::uno::UnoAttributes;

mod users;

pub fn app(cx: Scope) -> Element {
    cx.render(rsx! {
        main {
            u_w: "full",
            u_p: "8",
            h1 {
                u_text: "3xl",
                u_font: "bold",
                u_m: "b-6",
                "Users"
            }
            users::UsersPage {}
        }
    })
}
