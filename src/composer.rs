use crate::resolver::resolve;
use crate::translator::{keys, Params, Translate};
use crate::types::{ClientInfo, DeviceNameVariant, Locale, UserAgentInfo};

/// Name shown for the client: its registered name, or its ID.
pub fn client_display_name(client: &ClientInfo) -> &str {
    client.display_name()
}

/// Localized text for a resolved device.
///
/// Models and bare names are shown as-is; only the platform pairing and the
/// unknown case go through the translator.
pub fn device_display_name<T>(variant: DeviceNameVariant<'_>, translator: &T, locale: &Locale) -> String
where
    T: Translate + ?Sized,
{
    match variant {
        DeviceNameVariant::ModelKnown(model) => model.to_owned(),
        DeviceNameVariant::NameAndPlatform { name, platform } => {
            let params = Params::from([
                ("name".to_owned(), name.to_owned()),
                ("platform".to_owned(), platform.to_owned()),
            ]);
            translator.translate(keys::NAME_FOR_PLATFORM, &params, locale)
        }
        DeviceNameVariant::NameOnly(name) => name.to_owned(),
        DeviceNameVariant::Unknown => translator.translate(keys::UNKNOWN_DEVICE, &Params::new(), locale),
    }
}

/// Compose the "`<client>` on `<device>`" sentence for a session.
pub fn compose<T>(client: &ClientInfo, ua: &UserAgentInfo<'_>, translator: &T, locale: &Locale) -> String
where
    T: Translate + ?Sized,
{
    let device_name = device_display_name(resolve(ua), translator, locale);
    let params = Params::from([
        ("client_name".to_owned(), client_display_name(client).to_owned()),
        ("device_name".to_owned(), device_name),
    ]);
    translator.translate(keys::CLIENT_ON_DEVICE, &params, locale)
}
