use crate::composer::compose;
use crate::error::Result;
use crate::translator::{Translate, Translator};
use crate::types::{ClientInfo, Locale};
use crate::user_agent_parser::{ParseUserAgent, UserAgentParser};

/// Parser and translator wired together: raw header in, display name out.
#[derive(Debug, Clone)]
pub struct DisplayNameRenderer<P, T> {
    parser: P,
    translator: T,
}

impl DisplayNameRenderer<UserAgentParser, Translator> {
    /// The bundled rule set and catalogs.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(UserAgentParser::bundled()?, Translator::bundled()?))
    }
}

impl<P, T> DisplayNameRenderer<P, T>
where
    P: ParseUserAgent,
    T: Translate,
{
    pub fn new(parser: P, translator: T) -> Self {
        Self { parser, translator }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Render "`<client>` on `<device>`" for a raw `User-Agent` header.
    #[tracing::instrument(skip_all, fields(client.id = %client.client_id, locale = %locale))]
    pub fn render(&self, raw_user_agent: &str, client: &ClientInfo, locale: &Locale) -> String {
        let ua = self.parser.parse(raw_user_agent);
        compose(client, &ua, &self.translator, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::Params;
    use crate::types::UserAgentInfo;

    struct FixedParser;

    impl ParseUserAgent for FixedParser {
        fn parse<'a>(&'a self, _raw: &'a str) -> UserAgentInfo<'a> {
            UserAgentInfo {
                name: Some("Firefox".into()),
                os: Some("Windows".into()),
                ..Default::default()
            }
        }
    }

    #[test]
    fn custom_collaborators() {
        let echo = |key: &str, params: &Params, _: &Locale| {
            let values: Vec<&str> = params.values().map(String::as_str).collect();
            format!("{key}({})", values.join("|"))
        };
        let renderer = DisplayNameRenderer::new(FixedParser, echo);
        let out = renderer.render("ignored", &ClientInfo::new("web"), &Locale::default());
        assert_eq!(
            out,
            "device_name.client_on_device(web|device_name.name_for_platform(Firefox|Windows))"
        );
    }

    #[test]
    fn bundled_renders_english() {
        let renderer = DisplayNameRenderer::bundled().unwrap();
        let client = ClientInfo::new("element-web");
        let out = renderer.render(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) Gecko/20100101 Firefox/120.0",
            &client,
            &Locale::new("en-GB"),
        );
        assert_eq!(out, "element-web on Firefox for Windows");
    }
}
