use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{bail, Context, Result};

pub const ADDR_VAR: &str = "USER_CARDS_ADDR";
pub const PKG_DIR_VAR: &str = "USER_CARDS_PKG_DIR";
pub const LOG_FORMAT_VAR: &str = "USER_CARDS_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub addr: SocketAddr,
  /// wasm-pack output, served under `/pkg`.
  pub pkg_dir: PathBuf,
  pub log_format: LogFormat,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let addr = match lookup(ADDR_VAR) {
      Some(addr) => addr
        .parse()
        .with_context(|| format!("{ADDR_VAR} is not a socket address: {addr:?}"))?,
      None => SocketAddr::from(([127, 0, 0, 1], 8080)),
    };
    let pkg_dir = lookup(PKG_DIR_VAR).map_or_else(|| PathBuf::from("pkg"), PathBuf::from);
    let log_format = match lookup(LOG_FORMAT_VAR).as_deref() {
      None | Some("text") => LogFormat::Text,
      Some("json") => LogFormat::Json,
      Some(other) => bail!("{LOG_FORMAT_VAR} must be \"text\" or \"json\", got {other:?}"),
    };
    Ok(Config {
      addr,
      pkg_dir,
      log_format,
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn config(vars: &[(&str, &str)]) -> Result<Config> {
    let vars: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults() {
    let config = config(&[]).unwrap();
    assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
    assert_eq!(config.pkg_dir, PathBuf::from("pkg"));
    assert_eq!(config.log_format, LogFormat::Text);
  }

  #[test]
  fn overrides() {
    let config = config(&[
      (ADDR_VAR, "0.0.0.0:3000"),
      (PKG_DIR_VAR, "/srv/user-cards/pkg"),
      (LOG_FORMAT_VAR, "json"),
    ])
    .unwrap();
    assert_eq!(config.addr, "0.0.0.0:3000".parse().unwrap());
    assert_eq!(config.pkg_dir, PathBuf::from("/srv/user-cards/pkg"));
    assert_eq!(config.log_format, LogFormat::Json);
  }

  #[test]
  fn bad_addr_is_rejected() {
    let err = config(&[(ADDR_VAR, "localhost")]).unwrap_err();
    assert!(err.to_string().contains(ADDR_VAR));
  }

  #[test]
  fn bad_log_format_is_rejected() {
    let err = config(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
    assert!(err.to_string().contains("xml"));
  }
}
