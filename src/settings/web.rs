use super::builder::WebSettingsBuilder;
use super::field::WebField;
use crate::errors::ArgumentError;
use crate::value::{KeywordPairs, SettingValue};
use serde::Serialize;
use std::collections::BTreeSet;

/// Web page specific settings handed to the rendering engine.
///
/// Every field always holds a value of its declared type. Fields can be
/// assigned directly; the keyword based entry points ([`set`](Self::set),
/// [`update`](Self::update), [`from_keywords`](Self::from_keywords)) either
/// apply every keyword or leave the record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSettings {
    /// Print the page background.
    pub background: bool,
    /// Load images.
    pub load_images: bool,
    /// Execute JavaScript.
    #[serde(rename = "enableJavaScript")]
    pub enable_javascript: bool,
    /// Shrink content to fit more on one page. Has no effect for image output.
    pub enable_intelligent_shrinking: bool,
    /// Minimum font size allowed. Not range checked.
    pub minimum_font_size: i32,
    /// Print using the print media type instead of the screen media type.
    pub print_media_type: bool,
    /// Encoding assumed for content that does not declare one.
    pub default_encoding: String,
    /// URL or path of a user style sheet, empty for none.
    pub user_style_sheet: String,
    /// Enable NS plugins. Enabling this has limited success.
    pub enable_plugins: bool,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            background: false,
            load_images: false,
            enable_javascript: false,
            enable_intelligent_shrinking: false,
            minimum_font_size: 9,
            print_media_type: false,
            default_encoding: "utf-8".to_string(),
            user_style_sheet: String::new(),
            enable_plugins: false,
        }
    }
}

impl WebSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> WebSettingsBuilder {
        WebSettingsBuilder::default()
    }

    /// Creates a record from keyword overrides. Keywords not given keep their defaults.
    pub fn from_keywords<I, K>(keywords: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = (K, SettingValue)>,
        K: AsRef<str>,
    {
        let mut settings = Self::default();
        settings.update(keywords)?;
        Ok(settings)
    }

    /// Creates a record from a JSON object of keyword overrides, e.g.
    /// `{"loadImages": true, "minimumFontSize": 12}`.
    pub fn from_json(json: &str) -> Result<Self, ArgumentError> {
        let KeywordPairs(pairs) =
            serde_json::from_str(json).map_err(|e| ArgumentError::InvalidJson(e.to_string()))?;

        let keywords = pairs
            .into_iter()
            .map(|(k, v)| {
                let field: WebField = k.parse()?;
                Ok((k, SettingValue::from_json(field, v)?))
            })
            .collect::<Result<Vec<_>, ArgumentError>>()?;

        Self::from_keywords(keywords)
    }

    /// Serializes the record as a JSON object keyed by host keyword.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Applies several keyword overrides at once.
    ///
    /// All keywords are parsed into a staging copy first; the record only
    /// changes when every keyword was accepted. Naming the same field twice is
    /// an error.
    pub fn update<I, K>(&mut self, keywords: I) -> Result<(), ArgumentError>
    where
        I: IntoIterator<Item = (K, SettingValue)>,
        K: AsRef<str>,
    {
        let mut staged = self.clone();
        let mut seen = BTreeSet::new();

        for (name, value) in keywords {
            let field: WebField = name.as_ref().parse()?;
            if !seen.insert(field) {
                return Err(ArgumentError::Duplicate(field));
            }
            staged.apply(field, value)?;
        }

        log::debug!("web settings updated: {:?}", seen);
        *self = staged;
        Ok(())
    }

    /// Sets a single field by keyword.
    pub fn set(&mut self, name: &str, value: impl Into<SettingValue>) -> Result<(), ArgumentError> {
        let field: WebField = name.parse()?;
        self.set_field(field, value)
    }

    /// Sets a single field. On error the field keeps its previous value.
    pub fn set_field(&mut self, field: WebField, value: impl Into<SettingValue>) -> Result<(), ArgumentError> {
        self.apply(field, value.into())
    }

    /// Reads a single field as a dynamic value.
    pub fn get(&self, field: WebField) -> SettingValue {
        match field {
            WebField::Background => self.background.into(),
            WebField::LoadImages => self.load_images.into(),
            WebField::EnableJavaScript => self.enable_javascript.into(),
            WebField::EnableIntelligentShrinking => self.enable_intelligent_shrinking.into(),
            WebField::MinimumFontSize => self.minimum_font_size.into(),
            WebField::PrintMediaType => self.print_media_type.into(),
            WebField::DefaultEncoding => self.default_encoding.clone().into(),
            WebField::UserStyleSheet => self.user_style_sheet.clone().into(),
            WebField::EnablePlugins => self.enable_plugins.into(),
        }
    }

    /// Named options in the encoding the engine's settings API ingests:
    /// `"true"`/`"false"` for booleans, decimal for the font size and strings verbatim.
    pub fn engine_options(&self) -> Vec<(&'static str, String)> {
        WebField::ALL
            .into_iter()
            .map(|field| (field.engine_key(), self.get(field).to_string()))
            .collect()
    }

    // Coerces first, assigns second, so a rejected value never touches the field.
    fn apply(&mut self, field: WebField, value: SettingValue) -> Result<(), ArgumentError> {
        match field {
            WebField::Background => self.background = value.into_bool(field)?,
            WebField::LoadImages => self.load_images = value.into_bool(field)?,
            WebField::EnableJavaScript => self.enable_javascript = value.into_bool(field)?,
            WebField::EnableIntelligentShrinking => self.enable_intelligent_shrinking = value.into_bool(field)?,
            WebField::MinimumFontSize => self.minimum_font_size = value.into_int(field)?,
            WebField::PrintMediaType => self.print_media_type = value.into_bool(field)?,
            WebField::DefaultEncoding => self.default_encoding = value.into_string(field)?,
            WebField::UserStyleSheet => self.user_style_sheet = value.into_string(field)?,
            WebField::EnablePlugins => self.enable_plugins = value.into_bool(field)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(name: &str, value: impl Into<SettingValue>) -> (String, SettingValue) {
        (name.to_string(), value.into())
    }

    #[test]
    fn defaults() {
        let s = WebSettings::new();
        assert!(!s.background);
        assert!(!s.load_images);
        assert!(!s.enable_javascript);
        assert!(!s.enable_intelligent_shrinking);
        assert_eq!(s.minimum_font_size, 9);
        assert!(!s.print_media_type);
        assert_eq!(s.default_encoding, "utf-8");
        assert_eq!(s.user_style_sheet, "");
        assert!(!s.enable_plugins);
    }

    #[test]
    fn catalogue_defaults_match_record_defaults() {
        let s = WebSettings::default();
        for field in WebField::ALL {
            assert_eq!(s.get(field), field.default_value(), "{field}");
        }
    }

    #[test]
    fn keywords_read_back() {
        let s = WebSettings::from_keywords([
            kw("background", true),
            kw("loadImages", true),
            kw("enableJavaScript", true),
            kw("enableIntelligentShrinking", true),
            kw("minimumFontSize", 14),
            kw("printMediaType", true),
            kw("defaultEncoding", "iso-8859-1"),
            kw("userStyleSheet", "/tmp/print.css"),
            kw("enablePlugins", true),
        ])
        .unwrap();

        assert!(s.background && s.load_images && s.enable_javascript);
        assert!(s.enable_intelligent_shrinking && s.print_media_type && s.enable_plugins);
        assert_eq!(s.minimum_font_size, 14);
        assert_eq!(s.default_encoding, "iso-8859-1");
        assert_eq!(s.user_style_sheet, "/tmp/print.css");
    }

    #[test]
    fn omitted_keywords_keep_defaults() {
        let s = WebSettings::from_keywords([kw("loadImages", true)]).unwrap();
        assert_eq!(s, WebSettings { load_images: true, ..WebSettings::default() });
    }

    #[test]
    fn explicit_defaults_equal_no_arguments() {
        let explicit = WebSettings::from_keywords(
            WebField::ALL.into_iter().map(|f| (f.name(), f.default_value())),
        )
        .unwrap();
        assert_eq!(explicit, WebSettings::new());

        let none: [(&str, SettingValue); 0] = [];
        assert_eq!(WebSettings::from_keywords(none).unwrap(), WebSettings::new());
    }

    #[test]
    fn non_integer_font_size_is_rejected() {
        let res = WebSettings::from_keywords([kw("background", true), kw("minimumFontSize", "large")]);
        assert!(matches!(
            res,
            Err(ArgumentError::WrongType { field: WebField::MinimumFontSize, .. })
        ));
    }

    #[test]
    fn failed_update_leaves_record_unchanged() {
        let mut s = WebSettings::new();
        let before = s.clone();

        let res = s.update([kw("loadImages", true), kw("defaultEncoding", 8)]);
        assert!(res.is_err());
        assert_eq!(s, before);

        let res = s.update([kw("loadImages", true), kw("zoom", 2)]);
        assert_eq!(res, Err(ArgumentError::UnknownField("zoom".into())));
        assert_eq!(s, before);
    }

    #[test]
    fn javascript_given_twice_is_a_duplicate() {
        let res = WebSettings::from_keywords([kw("enableJavaScript", true), kw("enableJavascript", false)]);
        assert_eq!(res, Err(ArgumentError::Duplicate(WebField::EnableJavaScript)));
    }

    #[test]
    fn setting_one_field_leaves_others_alone() {
        for field in WebField::ALL {
            let mut s = WebSettings::new();
            let value = match field.default_value() {
                SettingValue::Bool(b) => SettingValue::Bool(!b),
                SettingValue::Int(i) => SettingValue::Int(i + 3),
                SettingValue::Str(s) => SettingValue::Str(format!("{s}-changed")),
            };
            s.set_field(field, value.clone()).unwrap();

            for other in WebField::ALL {
                if other == field {
                    assert_eq!(s.get(other), value);
                } else {
                    assert_eq!(s.get(other), other.default_value(), "{field} changed {other}");
                }
            }
        }
    }

    #[test]
    fn set_by_keyword() {
        let mut s = WebSettings::new();
        s.set("minimumFontSize", -2).unwrap();
        assert_eq!(s.minimum_font_size, -2);

        s.set("enableJavascript", 1).unwrap();
        assert!(s.enable_javascript);

        assert!(s.set("userStyleSheet", false).is_err());
        assert_eq!(s.user_style_sheet, "");
    }

    #[test]
    fn shrinking_is_accepted_without_cross_checks() {
        let mut s = WebSettings::new();
        s.enable_intelligent_shrinking = true;
        s.print_media_type = false;
        assert!(s.enable_intelligent_shrinking);
    }

    #[test]
    fn engine_options_encoding() {
        let s = WebSettings::builder()
            .load_images(true)
            .minimum_font_size(12)
            .user_style_sheet("https://example.com/user.css")
            .build()
            .unwrap();
        let opts = s.engine_options();

        assert_eq!(opts.len(), 9);
        assert_eq!(opts[0], ("web.background", "false".to_string()));
        assert_eq!(opts[1], ("web.loadImages", "true".to_string()));
        assert_eq!(opts[2], ("web.enableJavascript", "false".to_string()));
        assert_eq!(opts[4], ("web.minimumFontSize", "12".to_string()));
        assert_eq!(opts[6], ("web.defaultEncoding", "utf-8".to_string()));
        assert_eq!(opts[7], ("web.userStyleSheet", "https://example.com/user.css".to_string()));
    }

    #[test]
    fn json_round_trip() {
        let s = WebSettings::from_json(r#"{"background": true, "minimumFontSize": 0, "defaultEncoding": "koi8-r"}"#)
            .unwrap();
        assert!(s.background);
        assert_eq!(s.minimum_font_size, 0);
        assert_eq!(s.default_encoding, "koi8-r");

        let json = s.to_json();
        assert!(json.contains("\"enableJavaScript\":false"));
        assert!(json.contains("\"minimumFontSize\":0"));
        assert_eq!(WebSettings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn json_repeated_keyword_is_a_duplicate() {
        assert_eq!(
            WebSettings::from_json(r#"{"background": true, "background": false}"#),
            Err(ArgumentError::Duplicate(WebField::Background))
        );
        assert_eq!(
            WebSettings::from_json(r#"{"minimumFontSize": 3, "minimumFontSize": 3}"#),
            Err(ArgumentError::Duplicate(WebField::MinimumFontSize))
        );
        assert_eq!(
            WebSettings::from_json(r#"{"enableJavaScript": true, "enableJavascript": true}"#),
            Err(ArgumentError::Duplicate(WebField::EnableJavaScript))
        );
    }

    #[test]
    fn json_bad_value_is_not_hidden_by_a_later_one() {
        let res = WebSettings::from_json(r#"{"minimumFontSize": "x", "minimumFontSize": 3}"#);
        assert!(matches!(
            res,
            Err(ArgumentError::WrongType { field: WebField::MinimumFontSize, .. })
        ));
    }

    #[test]
    fn json_font_size_beyond_i64_is_out_of_range() {
        assert_eq!(
            WebSettings::from_json(r#"{"minimumFontSize": 18446744073709551615}"#),
            Err(ArgumentError::OutOfRange {
                field: WebField::MinimumFontSize,
                value: 18_446_744_073_709_551_615,
            })
        );
    }

    #[test]
    fn json_errors() {
        assert!(matches!(WebSettings::from_json("[1, 2]"), Err(ArgumentError::InvalidJson(_))));
        assert!(matches!(WebSettings::from_json("{"), Err(ArgumentError::InvalidJson(_))));
        assert_eq!(
            WebSettings::from_json(r#"{"zoom": 2}"#),
            Err(ArgumentError::UnknownField("zoom".into()))
        );
        assert!(matches!(
            WebSettings::from_json(r#"{"minimumFontSize": 10.5}"#),
            Err(ArgumentError::InvalidJson(_))
        ));
    }
}
