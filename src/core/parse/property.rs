//! Splitter for documented property arguments.
//!
//! Accepted forms:
//!
//! ```text
//! <type> <name>
//! <type> <component>::<name>
//! <type> <module>::<component>::<name>
//! ```

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyArg {
    #[serde(rename = "type")]
    pub ty: String,
    pub module: Option<String>,
    pub component: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyArgError {
    #[error("missing property type for `{0}`")]
    MissingType(String),
    #[error("unrecognizable module/component qualifier for `{0}`")]
    Qualifier(String),
}

pub fn split_property_arg(arg: &str) -> Result<PropertyArg, PropertyArgError> {
    let mut words = arg.split_whitespace();
    let (Some(ty), Some(qualified)) = (words.next(), words.next()) else {
        return Err(PropertyArgError::MissingType(arg.to_string()));
    };

    let parts: Vec<&str> = qualified.split("::").collect();
    let (module, component, name) = match parts.as_slice() {
        [name] => (None, None, *name),
        [component, name] => (None, Some(*component), *name),
        [module, component, name] => (Some(*module), Some(*component), *name),
        _ => return Err(PropertyArgError::Qualifier(arg.to_string())),
    };

    Ok(PropertyArg {
        ty: ty.to_string(),
        module: module.map(str::to_string),
        component: component.map(str::to_string),
        name: name.to_string(),
    })
}
