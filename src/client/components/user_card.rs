use dioxus::prelude::*;

use crate::{client::uno::UnoAttributes, data::User};

#[inline_props]
pub fn UserCard<'a>(cx: Scope<'a>, user: &'a User) -> Element {
    cx.render(rsx!(
        div {
            class: "user-card",
            u_p: "4",
            u_bg: "white",
            u_border: "~ rounded gray-200",
            u_shadow: "sm hover:md",
            u_transition: "~ all duration-300",
            h3 {
                u_text: "lg",
                u_font: "bold",
                "{user.name}"
            }
            p {
                strong { "Email:" }
                " {user.email}"
            }
            p {
                strong { "City:" }
                " {user.address.city}"
            }
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Address;

    fn Root(cx: Scope<User>) -> Element {
        cx.render(rsx!(UserCard { user: cx.props }))
    }

    #[test]
    fn card_shows_name_email_and_city() {
        let user = User {
            id: 1,
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: Address {
                city: "Gwenborough".to_string(),
                ..Address::default()
            },
            ..User::default()
        };
        let mut dom = VirtualDom::new_with_props(Root, user);
        let _ = dom.rebuild();
        let html = dioxus::ssr::render_vdom(&dom);

        assert!(html.starts_with(r#"<div class="user-card""#), "{html}");
        assert!(html.contains(r#"">Leanne Graham</h3>"#), "{html}");
        assert!(html.contains("<p><strong>Email:</strong> Sincere@april.biz</p>"), "{html}");
        assert!(html.contains("<p><strong>City:</strong> Gwenborough</p>"), "{html}");
        assert!(html.ends_with("</p></div>"), "{html}");
    }
}
