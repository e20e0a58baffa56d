use super::web::WebSettings;
use crate::errors::ArgumentError;
use crate::value::SettingValue;

/// Builder for [`WebSettings`], in the same shape as the other config builders.
///
/// Typed setters always succeed. Keyword setters are staged and only parsed in
/// [`build`](Self::build), so a bad keyword fails the whole build.
#[derive(Debug, Clone, Default)]
pub struct WebSettingsBuilder {
    inner: WebSettings,
    keywords: Vec<(String, SettingValue)>,
}

impl WebSettingsBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut WebSettings)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn background(self, on: bool) -> Self { self.map(|c| c.background = on) }
    pub fn load_images(self, on: bool) -> Self { self.map(|c| c.load_images = on) }
    pub fn enable_javascript(self, on: bool) -> Self { self.map(|c| c.enable_javascript = on) }
    pub fn enable_intelligent_shrinking(self, on: bool) -> Self { self.map(|c| c.enable_intelligent_shrinking = on) }
    pub fn minimum_font_size(self, size: i32) -> Self { self.map(|c| c.minimum_font_size = size) }
    pub fn print_media_type(self, on: bool) -> Self { self.map(|c| c.print_media_type = on) }
    pub fn default_encoding<S: Into<String>>(self, enc: S) -> Self { self.map(|c| c.default_encoding = enc.into()) }
    pub fn user_style_sheet<S: Into<String>>(self, location: S) -> Self { self.map(|c| c.user_style_sheet = location.into()) }
    pub fn enable_plugins(self, on: bool) -> Self { self.map(|c| c.enable_plugins = on) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut WebSettings)) -> Self { self.map(f) }

    /// Stage a dynamically typed keyword override.
    pub fn keyword<S: Into<String>, V: Into<SettingValue>>(mut self, name: S, value: V) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    /// Apply the staged keywords on top of the typed settings and build the record.
    pub fn build(self) -> Result<WebSettings, ArgumentError> {
        let mut settings = self.inner;
        settings.update(self.keywords).inspect_err(|e| {
            log::error!("cannot build web settings: {e}");
        })?;
        Ok(settings)
    }
}
