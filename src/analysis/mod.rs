use log::trace;

use crate::error::AnalysisError;
use crate::models::{AnalysisKind, AnalysisResult, ModelName};

mod condense;
mod groq;
mod prompt;

pub use groq::GroqCompletion;

/// Hard ceiling on raw input size; anything larger is refused outright
/// instead of being condensed.
pub const MAX_INPUT_CHARS: usize = 5_000_000;

/// Budget for the condensed excerpt embedded in the prompt, roughly 2,500
/// tokens.
pub const MAX_CONDENSED_CHARS: usize = 10_000;

/// Transport seam for the hosted completion endpoint. Tests plug in a fake
/// so the three analysis behaviors are checkable without a live model call.
pub trait CompletionProvider {
    fn complete(&self, model: ModelName, prompt: &str) -> Result<String, AnalysisError>;
}

/// Builds kind-specific prompts over condensed book text and hands them to
/// the completion provider. Stateless: no retries, no result caching.
pub struct AnalysisClient<P> {
    provider: P,
}

impl<P> AnalysisClient<P>
where
    P: CompletionProvider,
{
    pub fn new(provider: P) -> AnalysisClient<P> {
        AnalysisClient { provider }
    }

    pub fn analyze(
        &self,
        text: &str,
        kind: AnalysisKind,
        model: ModelName,
    ) -> Result<AnalysisResult, AnalysisError> {
        trace!("AnalysisClient::analyze({})", kind);

        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        let chars = text.chars().count();
        if chars > MAX_INPUT_CHARS {
            return Err(AnalysisError::InputTooLarge(chars));
        }

        let condensed = condense::condense(text, MAX_CONDENSED_CHARS);
        let prompt = prompt::render(kind, &condensed);

        let completion = self.provider.complete(model, &prompt)?;

        if completion.trim().is_empty() {
            return Err(AnalysisError::EmptyResult);
        }

        Ok(AnalysisResult {
            kind,
            model,
            text: completion,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::error::AnalysisError;
    use crate::models::{AnalysisKind, ModelName};

    use super::{AnalysisClient, CompletionProvider, MAX_INPUT_CHARS};

    struct FakeCompletion {
        reply: &'static str,
        prompts: RefCell<Vec<String>>,
    }

    impl FakeCompletion {
        fn new(reply: &'static str) -> FakeCompletion {
            FakeCompletion {
                reply,
                prompts: RefCell::new(vec![]),
            }
        }
    }

    impl CompletionProvider for &FakeCompletion {
        fn complete(&self, _model: ModelName, prompt: &str) -> Result<String, AnalysisError> {
            self.prompts.borrow_mut().push(String::from(prompt));
            Ok(String::from(self.reply))
        }
    }

    #[test]
    fn empty_text_never_reaches_the_provider() {
        let provider = FakeCompletion::new("unused");
        let client = AnalysisClient::new(&provider);

        match client.analyze("", AnalysisKind::Summary, ModelName::Llama3_70b) {
            Err(AnalysisError::EmptyText) => {}
            other => panic!("expected EmptyText, got {:?}", other),
        }

        assert!(provider.prompts.borrow().is_empty());
    }

    #[test]
    fn whitespace_text_is_empty_too() {
        let provider = FakeCompletion::new("unused");
        let client = AnalysisClient::new(&provider);

        assert!(client
            .analyze("  \n\t ", AnalysisKind::Summary, ModelName::Llama3_70b)
            .is_err());
        assert!(provider.prompts.borrow().is_empty());
    }

    #[test]
    fn oversized_text_is_refused_before_the_provider() {
        let provider = FakeCompletion::new("unused");
        let client = AnalysisClient::new(&provider);

        let text = "a".repeat(MAX_INPUT_CHARS + 1);

        match client.analyze(&text, AnalysisKind::Summary, ModelName::Llama3_70b) {
            Err(AnalysisError::InputTooLarge(chars)) => assert_eq!(MAX_INPUT_CHARS + 1, chars),
            other => panic!("expected InputTooLarge, got {:?}", other),
        }

        assert!(provider.prompts.borrow().is_empty());
    }

    #[test]
    fn prompt_embeds_the_condensed_text() -> anyhow::Result<()> {
        let provider = FakeCompletion::new("A fine summary.");
        let client = AnalysisClient::new(&provider);

        let result = client.analyze(
            "Elizabeth Bennet met Mr Darcy at the ball.",
            AnalysisKind::Summary,
            ModelName::Llama3_70b,
        )?;

        assert_eq!("A fine summary.", result.text);

        let prompts = provider.prompts.borrow();
        assert_eq!(1, prompts.len());
        assert!(prompts[0].contains("plot summary"));
        assert!(prompts[0].contains("Elizabeth Bennet met Mr Darcy at the ball."));

        Ok(())
    }

    #[test]
    fn sentiment_reply_carries_a_label() -> anyhow::Result<()> {
        let provider =
            FakeCompletion::new("negative - the prince dies in the final act, poisoned.");
        let client = AnalysisClient::new(&provider);

        let result = client.analyze(
            "Hamlet avenged his father. Hamlet dies.",
            AnalysisKind::Sentiment,
            ModelName::Llama3_70b,
        )?;

        let label = ["positive", "negative", "neutral"]
            .iter()
            .find(|label| result.text.contains(*label));

        assert!(label.is_some());
        assert!(result.text.len() > "negative".len());

        Ok(())
    }

    #[test]
    fn empty_completion_is_an_empty_result() {
        let provider = FakeCompletion::new("   ");
        let client = AnalysisClient::new(&provider);

        match client.analyze(
            "Hamlet avenged his father.",
            AnalysisKind::Characters,
            ModelName::Gemma2_9b,
        ) {
            Err(AnalysisError::EmptyResult) => {}
            other => panic!("expected EmptyResult, got {:?}", other),
        }
    }
}
