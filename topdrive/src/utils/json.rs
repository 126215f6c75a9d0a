use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use std::collections::HashMap;
use tinyjson::InnerAsRef;
use tinyjson::JsonValue;

pub fn parse_object(content: &str) -> Result<HashMap<String, JsonValue>> {
    let json = content.parse::<JsonValue>().map_err(|err| anyhow!("Failed to parse JSON ({})", err))?;

    match json {
        JsonValue::Object(object) => Ok(object),
        _ => bail!("Failed to parse JSON, root is not an object"),
    }
}

pub fn read_object_nullable<'a>(data: &'a HashMap<String, JsonValue>, name: &str) -> Result<Option<&'a HashMap<String, JsonValue>>> {
    match data.get(name) {
        Some(JsonValue::Object(object)) => Ok(Some(object)),
        Some(JsonValue::Null) | None => Ok(None),
        _ => bail!("Failed to read object {}", name),
    }
}

pub fn read_array<'a>(data: &'a HashMap<String, JsonValue>, name: &str) -> Result<Vec<&'a HashMap<String, JsonValue>>> {
    match data.get(name) {
        Some(JsonValue::Array(array)) => array
            .iter()
            .map(|p| p.get::<HashMap<String, JsonValue>>().ok_or_else(|| anyhow!("Failed to read array {}, item is not an object", name)))
            .collect(),
        _ => bail!("Failed to read array {}", name),
    }
}

pub fn read_value<T>(data: &HashMap<String, JsonValue>, name: &str) -> Result<T>
where
    T: Clone + InnerAsRef,
{
    let value = data.get(name).ok_or_else(|| anyhow!("Failed to read {}", name))?;
    Ok(value.get::<T>().ok_or_else(|| anyhow!("Failed to parse {}", name))?.clone())
}

pub fn read_value_nullable<T>(data: &HashMap<String, JsonValue>, name: &str) -> Result<Option<T>>
where
    T: Clone + InnerAsRef,
{
    let value = match data.get(name) {
        Some(value) => value,
        None => return Ok(None),
    };

    if value.is_null() {
        return Ok(None);
    }

    Ok(Some(value.get::<T>().ok_or_else(|| anyhow!("Failed to parse {}", name))?.clone()))
}
