use std::fmt;
use std::str::FromStr;

/// Which canned analysis to request from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Summary,
    Sentiment,
    Characters,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Summary => "summary",
            AnalysisKind::Sentiment => "sentiment",
            AnalysisKind::Characters => "characters",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(AnalysisKind::Summary),
            "sentiment" => Ok(AnalysisKind::Sentiment),
            "characters" => Ok(AnalysisKind::Characters),
            unknown => Err(format!(
                "unknown analysis kind `{}` (expected summary, sentiment or characters)",
                unknown
            )),
        }
    }
}

/// Supported model identifiers at the completion endpoint.
/// `llama3-70b-8192` is the recommended default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelName {
    Llama3_70b,
    Mixtral8x7b,
    Gemma2_9b,
}

impl ModelName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Llama3_70b => "llama3-70b-8192",
            ModelName::Mixtral8x7b => "mixtral-8x7b-32768",
            ModelName::Gemma2_9b => "gemma2-9b-it",
        }
    }
}

impl Default for ModelName {
    fn default() -> Self {
        ModelName::Llama3_70b
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "llama3-70b-8192" => Ok(ModelName::Llama3_70b),
            "mixtral-8x7b-32768" => Ok(ModelName::Mixtral8x7b),
            "gemma2-9b-it" => Ok(ModelName::Gemma2_9b),
            unknown => Err(format!("unsupported model `{}`", unknown)),
        }
    }
}

/// Free-form completion text, displayed as-is. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub kind: AnalysisKind,
    pub model: ModelName,
    pub text: String,
}
