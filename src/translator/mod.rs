mod catalog;
mod message;

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::types::Locale;

use catalog::{parse_catalog, Catalog};
pub use message::Message;

/// Named message arguments, in insertion order.
pub type Params = IndexMap<String, String>;

/// Message keys used when composing device display names.
pub mod keys {
    pub const CLIENT_ON_DEVICE: &str = "device_name.client_on_device";
    pub const NAME_FOR_PLATFORM: &str = "device_name.name_for_platform";
    pub const UNKNOWN_DEVICE: &str = "device_name.unknown_device";
}

/// Renders a message key with named arguments in a given locale.
///
/// Implementations must always produce a string; falling back to another
/// locale (or to the key) on a miss is their own business.
pub trait Translate {
    fn translate(&self, key: &str, params: &Params, locale: &Locale) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &Params, &Locale) -> String,
{
    fn translate(&self, key: &str, params: &Params, locale: &Locale) -> String {
        self(key, params, locale)
    }
}

const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.yml")),
    ("fr", include_str!("../../locales/fr.yml")),
    ("de", include_str!("../../locales/de.yml")),
];

/// Catalog-backed translator with locale fallback.
///
/// A lookup for `fr-CA` tries `fr-CA`, then `fr`, then the default locale
/// and its own prefixes.
#[derive(Debug, Clone)]
pub struct Translator {
    catalogs: HashMap<Locale, Catalog>,
    default_locale: Locale,
}

impl Translator {
    /// Build from `(locale, yaml_source)` pairs.
    pub fn from_sources<'s>(sources: impl IntoIterator<Item = (&'s str, &'s str)>) -> Result<Self> {
        let sources: Vec<(&str, &str)> = sources.into_iter().collect();
        let catalogs = sources
            .into_par_iter()
            .map(|(locale, source)| -> Result<(Locale, Catalog)> {
                Ok((Locale::new(locale), parse_catalog(locale, source)?))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        tracing::debug!(locales = catalogs.len(), "loaded translation catalogs");

        Ok(Self {
            catalogs,
            default_locale: Locale::default(),
        })
    }

    /// The catalogs shipped with the crate (`en`, `fr`, `de`).
    pub fn bundled() -> Result<Self> {
        Self::from_sources(BUNDLED.iter().copied())
    }

    /// Load every `<locale>.yml` file in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let mut sources = Vec::new();
        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yml") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            sources.push((locale.to_owned(), std::fs::read_to_string(&path)?));
        }

        Self::from_sources(sources.iter().map(|(l, s)| (l.as_str(), s.as_str())))
    }

    pub fn with_default_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Locales that have a catalog, sorted.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.catalogs.keys().collect();
        locales.sort();
        locales
    }

    /// Look `key` up along the fallback chain of `locale`, then of the
    /// default locale. Returns the message and the locale that had it.
    pub fn message_with_fallback(&self, locale: &Locale, key: &str) -> Option<(&Message, &Locale)> {
        locale
            .fallback_chain()
            .chain(self.default_locale.fallback_chain())
            .find_map(|tag| {
                let (found, catalog) = self.catalogs.get_key_value(&Locale::new(tag))?;
                catalog.get(key).map(|message| (message, found))
            })
    }

    /// Translate, reporting a missing message or argument as an error.
    pub fn translate_checked(&self, key: &str, params: &Params, locale: &Locale) -> Result<String> {
        let (message, _found) =
            self.message_with_fallback(locale, key)
                .ok_or_else(|| Error::MissingMessage {
                    key: key.to_owned(),
                    locale: locale.to_string(),
                })?;
        message.format(key, params)
    }
}

impl Translate for Translator {
    fn translate(&self, key: &str, params: &Params, locale: &Locale) -> String {
        let Some((message, found)) = self.message_with_fallback(locale, key) else {
            tracing::warn!(key, locale = %locale, "missing translation, rendering key");
            return key.to_owned();
        };

        match message.format(key, params) {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::warn!(key, locale = %found, error = %err, "could not format message");
                message.format_lossy(params)
            }
        }
    }
}
