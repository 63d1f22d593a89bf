use device_display_name::{
    compose, resolve, ClientInfo, DeviceNameVariant, DisplayNameRenderer, Locale, Params,
    Translator, UserAgentInfo, UserAgentParser,
};
use proptest::prelude::*;
use std::sync::OnceLock;

fn renderer() -> &'static DisplayNameRenderer<UserAgentParser, Translator> {
    static RENDERER: OnceLock<DisplayNameRenderer<UserAgentParser, Translator>> = OnceLock::new();
    RENDERER.get_or_init(|| DisplayNameRenderer::bundled().expect("failed to build renderer"))
}

fn field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 ,._-]{1,16}")
}

fn echo(key: &str, params: &Params, _: &Locale) -> String {
    let args: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{key}[{}]", args.join(";"))
}

proptest! {
    #[test]
    fn resolution_follows_precedence(model in field(), name in field(), os in field()) {
        let ua = UserAgentInfo {
            model: model.clone().map(Into::into),
            name: name.clone().map(Into::into),
            os: os.clone().map(Into::into),
            ..Default::default()
        };

        let expected = match (model.as_deref(), name.as_deref(), os.as_deref()) {
            (Some(m), _, _) => DeviceNameVariant::ModelKnown(m),
            (None, Some(n), Some(o)) => DeviceNameVariant::NameAndPlatform { name: n, platform: o },
            (None, Some(n), None) => DeviceNameVariant::NameOnly(n),
            (None, None, _) => DeviceNameVariant::Unknown,
        };
        prop_assert_eq!(resolve(&ua), expected);
    }

    #[test]
    fn client_name_falls_back_to_id(
        client_id in "[a-z0-9-]{1,12}",
        client_name in field(),
        name in field(),
    ) {
        let client = ClientInfo { client_name: client_name.clone(), client_id: client_id.clone() };
        let ua = UserAgentInfo { name: name.map(Into::into), ..Default::default() };

        let out = compose(&client, &ua, &echo, &Locale::default());
        let shown = client_name.unwrap_or(client_id);
        let expected_prefix = format!("device_name.client_on_device[client_name={shown};device_name=");
        prop_assert!(out.starts_with(&expected_prefix), "{}", out);
    }

    #[test]
    fn rendering_never_fails_or_comes_back_empty(raw in "\\PC{0,200}") {
        let out = renderer().render(&raw, &ClientInfo::new("c"), &Locale::new("fr"));
        prop_assert!(out.starts_with("c sur "));
        prop_assert!(out.len() > "c sur ".len());
    }
}
