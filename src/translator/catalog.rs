use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::{Error, Result};

use super::message::Message;

/// All messages of one locale, keyed by their dotted path.
pub(crate) type Catalog = IndexMap<String, Message>;

/// Parse a YAML catalog. Nested mappings flatten into dotted keys, so
///
/// ```yaml
/// device_name:
///   unknown_device: Unknown device
/// ```
///
/// yields `device_name.unknown_device`.
pub(crate) fn parse_catalog(locale: &str, source: &str) -> Result<Catalog> {
    let root: Value = serde_yaml::from_str(source)?;
    let mut catalog = Catalog::new();
    match root {
        Value::Null => {}
        Value::Mapping(_) => flatten(locale, "", &root, &mut catalog)?,
        _ => {
            return Err(Error::InvalidCatalog {
                locale: locale.to_owned(),
                reason: "top level must be a mapping".to_owned(),
            })
        }
    }
    Ok(catalog)
}

fn flatten(locale: &str, prefix: &str, value: &Value, out: &mut Catalog) -> Result<()> {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let Some(k) = k.as_str() else {
                    return Err(Error::InvalidCatalog {
                        locale: locale.to_owned(),
                        reason: format!("non-string key under {prefix:?}"),
                    });
                };
                let path = if prefix.is_empty() {
                    k.to_owned()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(locale, &path, v, out)?;
            }
            Ok(())
        }
        Value::String(template) => {
            out.insert(prefix.to_owned(), Message::parse(prefix, template)?);
            Ok(())
        }
        _ => Err(Error::InvalidCatalog {
            locale: locale.to_owned(),
            reason: format!("{prefix:?} is neither a message nor a mapping"),
        }),
    }
}
