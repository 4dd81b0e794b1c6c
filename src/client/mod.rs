use crate::client::pages::app;

mod api;
mod components;
mod pages;
mod uno;

pub const API_URL: &str = env!("USERS_API_URL");

pub fn launch() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    log::debug!("users endpoint: {API_URL}");
    dioxus::web::launch(app);
}
