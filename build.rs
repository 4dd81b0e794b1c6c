use std::env;

const DEFAULT_USERS_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

fn main() {
  println!("cargo:rerun-if-env-changed=USERS_API_URL");
  let users_api_url =
    env::var("USERS_API_URL").unwrap_or_else(|_| DEFAULT_USERS_API_URL.to_string());
  println!("cargo:rustc-env=USERS_API_URL={users_api_url}");
}
