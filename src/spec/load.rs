use super::types::{Method, SecurityScheme};

/// Load a method-level description from a YAML or JSON file.
///
/// File format is sniffed from the extension the same way API description
/// documents usually ship: `.yaml`/`.yml` parse as YAML, anything else as
/// JSON.
pub fn load_method(file_path: &str) -> anyhow::Result<Method> {
    let content = std::fs::read_to_string(file_path)?;
    let method: Method = if file_path.ends_with(".yaml") || file_path.ends_with(".yml") {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(method)
}

/// Build a [`Method`] from an already parsed JSON value.
pub fn method_from_value(value: serde_json::Value) -> anyhow::Result<Method> {
    Ok(serde_json::from_value(value)?)
}

/// Build a single [`SecurityScheme`] from an already parsed JSON value.
pub fn scheme_from_value(value: serde_json::Value) -> anyhow::Result<SecurityScheme> {
    Ok(serde_json::from_value(value)?)
}
