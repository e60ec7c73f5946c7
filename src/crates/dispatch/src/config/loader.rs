//! YAML loading with environment variable expansion
//!
//! String scalars may reference the environment as `${ENV_VAR}` or
//! `${ENV_VAR:default}`. Expansion runs on the parsed document, so values
//! never leak into keys or break YAML quoting.

use crate::error::{DispatchError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn env_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::([^}]*))?\}").expect("valid env pattern")
    })
}

/// Read a YAML file and expand `${ENV:default}` references
pub fn load_yaml_file<P: AsRef<Path>>(path: P) -> Result<YamlValue> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DispatchError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| DispatchError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;

    parse_yaml_str(&content, &path.display().to_string())
}

/// Parse YAML text and expand environment references
///
/// `origin` names the document in error messages.
pub fn parse_yaml_str(content: &str, origin: &str) -> Result<YamlValue> {
    let mut value: YamlValue =
        serde_yaml::from_str(content).map_err(|source| DispatchError::ConfigParse {
            path: origin.to_string(),
            source,
        })?;

    expand_variables(&mut value);
    Ok(value)
}

/// Deserialize a top-level `name: {...}` mapping
///
/// An empty document yields an empty map. Entries whose body is empty
/// (`task_name:` with nothing under it) take the type's defaults.
pub fn named_entries<T: DeserializeOwned>(
    value: YamlValue,
    origin: &str,
) -> Result<BTreeMap<String, T>> {
    let mapping = match value {
        YamlValue::Null => return Ok(BTreeMap::new()),
        YamlValue::Mapping(mapping) => mapping,
        other => {
            return Err(DispatchError::InvalidConfig(format!(
                "{} must be a mapping of names to definitions, found {}",
                origin,
                kind_of(&other)
            )))
        }
    };

    let mut entries = BTreeMap::new();
    for (key, body) in mapping {
        let name = match key {
            YamlValue::String(s) => s,
            YamlValue::Number(n) => n.to_string(),
            other => {
                return Err(DispatchError::InvalidConfig(format!(
                    "{}: entry names must be strings, found {}",
                    origin,
                    kind_of(&other)
                )))
            }
        };

        let body = match body {
            YamlValue::Null => YamlValue::Mapping(Default::default()),
            body => body,
        };

        let entry = serde_yaml::from_value(body).map_err(|source| DispatchError::ConfigParse {
            path: format!("{} ({})", origin, name),
            source,
        })?;
        entries.insert(name, entry);
    }

    Ok(entries)
}

fn kind_of(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}

fn expand_variables(value: &mut YamlValue) {
    match value {
        YamlValue::String(s) => {
            if let Some(expanded) = expand_env_in_string(s) {
                *value = if is_whole_reference(s) {
                    typed_scalar(expanded)
                } else {
                    YamlValue::String(expanded)
                };
            }
        }
        YamlValue::Mapping(map) => {
            for (_, v) in map.iter_mut() {
                expand_variables(v);
            }
        }
        YamlValue::Sequence(seq) => {
            for item in seq.iter_mut() {
                expand_variables(item);
            }
        }
        YamlValue::Tagged(tagged) => expand_variables(&mut tagged.value),
        _ => {}
    }
}

fn is_whole_reference(s: &str) -> bool {
    env_pattern()
        .find(s)
        .map_or(false, |m| m.start() == 0 && m.end() == s.len())
}

/// A lone `${VAR}` may stand for a number or boolean
fn typed_scalar(expanded: String) -> YamlValue {
    match serde_yaml::from_str::<YamlValue>(&expanded) {
        Ok(scalar @ (YamlValue::Number(_) | YamlValue::Bool(_))) => scalar,
        _ => YamlValue::String(expanded),
    }
}

/// Expand `${VAR}` / `${VAR:default}`; `None` when nothing to expand
fn expand_env_in_string(s: &str) -> Option<String> {
    if !s.contains("${") {
        return None;
    }

    let expanded = env_pattern().replace_all(s, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        env::var(&caps[1]).unwrap_or_else(|_| default_value.to_string())
    });

    Some(expanded.into_owned())
}
