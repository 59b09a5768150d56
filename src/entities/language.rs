use serde::{Deserialize, Serialize};

/// Display language requested by the client. Unknown codes fall back to
/// English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    En,
    Ta,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ta" => Self::Ta,
            _ => Self::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ta => "ta",
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

#[test]
fn unknown_codes_fall_back_to_english() {
    assert_eq!(Language::from_code("ta"), Language::Ta);
    assert_eq!(Language::from_code(" TA "), Language::Ta);
    assert_eq!(Language::from_code("fr"), Language::En);
    assert_eq!(Language::from_code(""), Language::En);

    let lang: Language = serde_json::from_str(r#""hi""#).unwrap();
    assert_eq!(lang, Language::En);
    assert_eq!(serde_json::to_string(&Language::Ta).unwrap(), r#""ta""#);
}
