use dioxus::prelude::*;

use crate::{client::components::UserCard, data::User};

/// Cards only, no wrapper: the caller's container holds them directly.
#[inline_props]
pub fn UserList<'a>(cx: Scope<'a>, users: &'a [User]) -> Element {
    cx.render(rsx!(users.iter().map(|user| rsx!(
        UserCard {
            key: "{user.id}",
            user: user,
        }
    ))))
}
