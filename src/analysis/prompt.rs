use crate::models::AnalysisKind;

const SUMMARY_INSTRUCTION: &str = "Provide a comprehensive plot summary of this text, detailing all main events in strict chronological order from start to finish. Ensure the summary flows smoothly, weaving key moments into a cohesive narrative with clear cause-and-effect connections. Begin with the story's initial setup, progress through critical developments (including character actions, major deaths, conflicts, and pivotal incidents), and conclude with the final resolution, keeping it concise yet complete. Do not omit significant plot points, such as murders, betrayals, or shifts in power. Limit the entire response to 500 words.";

const SENTIMENT_INSTRUCTION: &str = "Analyze the sentiment of this text based on its ending for the main character, not metadata or introductory notes. Focus on the emotional tone of the main character's ending (positive, negative, or neutral). If the main character's ending is sad or tragic (e.g., contains 'death,' 'dies,' 'killed'), classify the sentiment as negative; if the main character's ending is happy life, love, romantic, marriage then classify the sentiment as positive; otherwise, use neutral if the tone is balanced or unclear.";

const CHARACTERS_INSTRUCTION: &str = "Identify all key characters in this text, excluding minor figures unless they significantly impact the plot. For each character, provide a concise one-liner description of their role or significance in the story, based on the narrative content, not metadata. Ensure the list is comprehensive and reflects the entire text.";

/// Renders the kind-specific instruction with the condensed text attached.
pub fn render(kind: AnalysisKind, condensed_text: &str) -> String {
    let instruction = match kind {
        AnalysisKind::Summary => SUMMARY_INSTRUCTION,
        AnalysisKind::Sentiment => SENTIMENT_INSTRUCTION,
        AnalysisKind::Characters => CHARACTERS_INSTRUCTION,
    };

    format!("{}\n\nText: {}", instruction, condensed_text)
}
