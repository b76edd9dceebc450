use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Paging, sorting and relationship inclusion shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

impl ListParams {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

/// `{ "url": ... }` attributes of a signed download/upload link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedUrl {
    pub url: String,
}

pub(crate) fn u32_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_u64()
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| D::Error::custom(format!("{number} is not a valid u32"))),
        Value::String(text) => text.trim().parse().map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("expected number or string, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Bits {
        #[serde(deserialize_with = "u32_from_number_or_string")]
        bits: u32,
    }

    #[test]
    fn mode_bits_accept_string_or_number() {
        let from_string: Bits = serde_json::from_value(json!({"bits": "644"})).unwrap();
        let from_number: Bits = serde_json::from_value(json!({"bits": 755})).unwrap();
        assert_eq!(from_string.bits, 644);
        assert_eq!(from_number.bits, 755);
        assert!(serde_json::from_value::<Bits>(json!({"bits": true})).is_err());
    }

    #[test]
    fn list_params_page_sets_only_page() {
        let params = ListParams::page(3);
        assert_eq!(params.page, Some(3));
        assert_eq!(params.per_page, None);
    }
}
