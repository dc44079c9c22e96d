use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::{fs, path::Path};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config/application.yml";

const TEMPLATE_YAML: &str = r#"
warden:
  masterkeys: "masterkeys"
  console:
    enabled: true
    friendNumber: 0
    publicKey: ""
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppProperties {
    #[serde(default = "default_masterkeys")]
    pub masterkeys: String,
    #[serde(default)]
    pub console: Console,
}

fn default_masterkeys() -> String {
    "masterkeys".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Console {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(rename = "friendNumber", default)]
    pub friend_number: i64,
    #[serde(rename = "publicKey", default)]
    pub public_key: String,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            enabled: true,
            friend_number: 0,
            public_key: String::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Creates `config/application.yml` from the template when missing, merges
/// user values over the defaults (user keys win, template order preserved),
/// rewrites the file in canonical form when it drifted, and decodes the
/// `warden.*` section.
pub fn load_or_init() -> Result<AppProperties> {
    if !Path::new(CONFIG_FILE).exists() {
        fs::create_dir_all(CONFIG_DIR).context("create config dir")?;
        fs::write(CONFIG_FILE, TEMPLATE_YAML).context("write default application.yml")?;
    }

    let defaults_v: Value = serde_yaml::from_str(TEMPLATE_YAML).context("parse template yaml")?;
    let user_txt = fs::read_to_string(CONFIG_FILE).context("read application.yml")?;
    let user_v: Value = serde_yaml::from_str(&user_txt).unwrap_or(Value::Mapping(Mapping::new()));

    let merged = deep_merge_ordered(&defaults_v, &user_v);

    let canonical = serde_yaml::to_string(&merged).context("dump canonical yaml")?;
    if normalize_lf(&user_txt) != normalize_lf(&canonical) {
        fs::write(CONFIG_FILE, canonical).context("rewrite application.yml")?;
    }

    let warden = merged
        .get("warden")
        .cloned()
        .unwrap_or(Value::Mapping(Mapping::new()));
    let props: AppProperties = serde_yaml::from_value(warden).context("decode warden.*")?;
    Ok(props)
}

fn normalize_lf(s: &str) -> String {
    s.replace("\r\n", "\n").trim().to_string()
}

fn deep_merge_ordered(defaults: &Value, user: &Value) -> Value {
    match (defaults, user) {
        (Value::Mapping(dm), Value::Mapping(um)) => {
            let mut out = Mapping::new();

            for (k, dv) in dm.iter() {
                if let Some(uv) = um.get(k) {
                    let merged = deep_merge_ordered(dv, uv);
                    out.insert(k.clone(), merged);
                } else {
                    out.insert(k.clone(), dv.clone());
                }
            }

            for (k, uv) in um.iter() {
                if !out.contains_key(k) {
                    out.insert(k.clone(), uv.clone());
                }
            }

            Value::Mapping(out)
        }
        (_, uv) => uv.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_values_override_defaults() {
        let defaults: Value = serde_yaml::from_str(TEMPLATE_YAML).unwrap();
        let user: Value =
            serde_yaml::from_str("warden:\n  masterkeys: \"/etc/warden/masterkeys\"\n").unwrap();

        let merged = deep_merge_ordered(&defaults, &user);
        let props: AppProperties =
            serde_yaml::from_value(merged.get("warden").cloned().unwrap()).unwrap();

        assert_eq!(props.masterkeys, "/etc/warden/masterkeys");
        assert!(props.console.enabled);
    }
}
