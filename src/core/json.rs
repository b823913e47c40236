use crate::core::errors::Result;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonServiceTags> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON Service Tags Document
--------------------------------------------------------------------------------------*/

/// Top-level shape of the Azure `ServiceTags_Public_*.json` document. The weekly download file
/// uses `values`; some API surfaces use `value` - accept both. `values` stays optional here so
/// its absence surfaces as a schema error rather than a JSON parse error.
#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonServiceTags {
    #[serde(rename = "changeNumber", default)]
    pub change_number: Option<u64>,

    #[serde(default)]
    pub cloud: Option<String>,

    #[serde(alias = "value", default)]
    pub values: Option<Vec<JsonServiceTag>>,
}

/*--------------------------------------------------------------------------------------
  JSON Service Tag
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonServiceTag {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub properties: JsonServiceTagProperties,
}

/*--------------------------------------------------------------------------------------
  JSON Service Tag Properties
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonServiceTagProperties {
    #[serde(rename = "changeNumber", default)]
    pub change_number: Option<u64>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub platform: Option<String>,

    #[serde(rename = "systemService", default)]
    pub system_service: Option<String>,

    #[serde(rename = "addressPrefixes", default)]
    pub address_prefixes: Vec<String>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
