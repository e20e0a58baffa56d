use crate::errors::ArgumentError;
use crate::value::SettingValue;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Declared type of a web settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Str,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Bool => write!(f, "a boolean"),
            FieldKind::Int => write!(f, "an integer"),
            FieldKind::Str => write!(f, "a string"),
        }
    }
}

/// The fields of a [`WebSettings`](super::WebSettings) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WebField {
    Background,
    LoadImages,
    EnableJavaScript,
    EnableIntelligentShrinking,
    MinimumFontSize,
    PrintMediaType,
    DefaultEncoding,
    UserStyleSheet,
    EnablePlugins,
}

impl WebField {
    /// All fields in declaration order.
    pub const ALL: [WebField; 9] = [
        WebField::Background,
        WebField::LoadImages,
        WebField::EnableJavaScript,
        WebField::EnableIntelligentShrinking,
        WebField::MinimumFontSize,
        WebField::PrintMediaType,
        WebField::DefaultEncoding,
        WebField::UserStyleSheet,
        WebField::EnablePlugins,
    ];

    /// Keyword the host uses for this field.
    pub fn name(&self) -> &'static str {
        match self {
            WebField::Background => "background",
            WebField::LoadImages => "loadImages",
            WebField::EnableJavaScript => "enableJavaScript",
            WebField::EnableIntelligentShrinking => "enableIntelligentShrinking",
            WebField::MinimumFontSize => "minimumFontSize",
            WebField::PrintMediaType => "printMediaType",
            WebField::DefaultEncoding => "defaultEncoding",
            WebField::UserStyleSheet => "userStyleSheet",
            WebField::EnablePlugins => "enablePlugins",
        }
    }

    /// Option name understood by the rendering engine's settings API.
    pub fn engine_key(&self) -> &'static str {
        match self {
            WebField::Background => "web.background",
            WebField::LoadImages => "web.loadImages",
            WebField::EnableJavaScript => "web.enableJavascript",
            WebField::EnableIntelligentShrinking => "web.enableIntelligentShrinking",
            WebField::MinimumFontSize => "web.minimumFontSize",
            WebField::PrintMediaType => "web.printMediaType",
            WebField::DefaultEncoding => "web.defaultEncoding",
            WebField::UserStyleSheet => "web.userStyleSheet",
            WebField::EnablePlugins => "web.enablePlugins",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            WebField::MinimumFontSize => FieldKind::Int,
            WebField::DefaultEncoding | WebField::UserStyleSheet => FieldKind::Str,
            _ => FieldKind::Bool,
        }
    }

    pub fn default_value(&self) -> SettingValue {
        match self {
            WebField::MinimumFontSize => SettingValue::Int(9),
            WebField::DefaultEncoding => SettingValue::Str("utf-8".into()),
            WebField::UserStyleSheet => SettingValue::Str(String::new()),
            _ => SettingValue::Bool(false),
        }
    }

    /// Attribute documentation as shown to host users.
    pub fn help(&self) -> &'static str {
        match self {
            WebField::Background => "Boolean to indicate if the background should be printed. Default False",
            WebField::LoadImages => "Boolean to indicate if images should be loaded. Default False",
            WebField::EnableJavaScript => "Boolean to indicate if javascript should be enabled. Default False",
            WebField::EnableIntelligentShrinking => {
                "Boolean to indicate if intelligent shrinking should be enabled in order to fit more \
                 content in one page. Default False. It has no effect for wkhtmltoimage"
            }
            WebField::MinimumFontSize => "The minimum font size allowed. Default 9",
            WebField::PrintMediaType => {
                "Boolean to indicate if the content should be printed using the print media type \
                 instead of the screen media type. Default False"
            }
            WebField::DefaultEncoding => {
                "Encoding used to guess what encoding the content is using in case it is not \
                 specified properly. Default utf-8"
            }
            WebField::UserStyleSheet => "URL or path to a user specified style sheet",
            WebField::EnablePlugins => {
                "Boolean to indicate if NS plugins should be enabled. Default False. Enabling this \
                 will have limited success"
            }
        }
    }
}

impl Display for WebField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WebField {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The host keyword list historically spells this one with a lowercase 's'.
        if s == "enableJavascript" {
            return Ok(WebField::EnableJavaScript);
        }

        WebField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ArgumentError::UnknownField(s.to_string()))
    }
}
