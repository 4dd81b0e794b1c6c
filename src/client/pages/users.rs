use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::{
    client::{
        api::{self, FetchError},
        components::{ErrorMessage, Time, UserList},
        uno::UnoAttributes,
    },
    data::User,
};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded {
        users: Vec<User>,
        loaded_at: DateTime<Utc>,
    },
    Failed(String),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<User>, FetchError>, loaded_at: DateTime<Utc>) -> Self {
        match result {
            Ok(users) => {
                log::info!("loaded {} users", users.len());
                Self::Loaded { users, loaded_at }
            }
            Err(err) => {
                log::warn!("failed to load users: {err}");
                Self::Failed(err.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

fn users_label(count: usize) -> String {
    if count == 1 {
        "1 user".to_string()
    } else {
        format!("{count} users")
    }
}

/// How often the "loaded ... ago" line is re-rendered.
const AGE_REFRESH_MS: u32 = 10_000;

pub fn UsersPage(cx: Scope) -> Element {
    let load_state = use_state(&cx, || LoadState::Idle);
    let now = use_state(&cx, Utc::now);
    let loading = load_state.get().is_loading();
    let loaded = matches!(load_state.get(), LoadState::Loaded { .. });
    use_future(&cx, (&loaded,), |(loaded,)| {
        let now = now.clone();
        async move {
            if !loaded {
                return;
            }
            loop {
                TimeoutFuture::new(AGE_REFRESH_MS).await;
                now.set(Utc::now());
            }
        }
    });
    cx.render(rsx!(
        button {
            id: "loadUsersBtn",
            disabled: "{loading}",
            u_p: "x-4 y-2",
            u_m: "b-6",
            u_bg: "sky-600 hover:sky-700",
            u_text: "white",
            u_border: "rounded",
            u_cursor: "pointer disabled:wait",
            u_opacity: "disabled:50",
            onclick: move |_| {
                load_state.set(LoadState::Loading);
                let load_state = load_state.clone();
                let now = now.clone();
                cx.spawn(async move {
                    let result = api::fetch_users().await;
                    let loaded_at = Utc::now();
                    now.set(loaded_at);
                    load_state.set(LoadState::from_result(result, loaded_at));
                });
            },
            "Load users"
        }
        UsersView {
            state: load_state.get(),
            now: *now.get(),
        }
    ))
}

/// Status line, then the container. The container's children are exactly the
/// cards, the loading line or the error; an idle or empty state leaves it empty.
#[inline_props]
fn UsersView<'a>(cx: Scope<'a>, state: &'a LoadState, now: DateTime<Utc>) -> Element {
    let status = match state {
        LoadState::Loaded { users, loaded_at } => {
            let label = users_label(users.len());
            Some(rsx!(
                p {
                    id: "usersStatus",
                    u_text: "sm gray-500",
                    u_m: "b-4",
                    "{label}, loaded "
                    Time {
                        time: loaded_at,
                        now: *now,
                    }
                }
            ))
        }
        _ => None,
    };
    let content = match state {
        LoadState::Idle => None,
        LoadState::Loading => Some(rsx!(
            p {
                u_text: "gray-500",
                "Loading..."
            }
        )),
        LoadState::Loaded { users, .. } => Some(rsx!(
            UserList {
                users: users.as_slice(),
            }
        )),
        LoadState::Failed(message) => Some(rsx!(
            ErrorMessage {
                message: message.as_str(),
            }
        )),
    };
    cx.render(rsx!(
        status
        div {
            id: "usersContainer",
            u_grid: "~ cols-1 md:cols-2 lg:cols-3",
            u_gap: "4",
            content
        }
    ))
}
