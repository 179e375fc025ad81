//! Prompt construction for the single-shot AI tools

use tracing::{debug, warn};

use super::ChatCompletion;
use crate::error::{Result, ToolError};

const TRUNCATION_MARKER: &str = "... [Truncated]";

/// Cut `text` to `limit` characters, marking the cut
pub fn truncate_for_summary(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

fn summary_prompt(text: &str) -> String {
    format!(
        "You are an expert at summarizing text. Your goal is to provide a concise summary of the given content in a few key sentences.\n\n\
         Analyze the following text and provide a summary:\n\n\
         ---\n{}\n---\n\n\
         Summary:",
        text
    )
}

fn rewrite_prompt(text: &str) -> String {
    format!(
        "Rewrite the following text to make it clearer, more concise, and engaging. \
         Maintain the original meaning but change the structure and vocabulary. \
         Return ONLY the rewritten text.\n\nText: \"{}\"",
        text
    )
}

fn synonym_prompt(text: &str) -> String {
    format!(
        "Enhance the following text by replacing simple words with more descriptive, professional, or eloquent synonyms. \
         Maintain the original meaning but improve the vocabulary. \
         Return ONLY the enhanced text, nothing else.\n\nText: \"{}\"",
        text
    )
}

fn foreign_word_prompt(text: &str) -> String {
    format!(
        "Analyze the following text and identify any words that are NOT in English (foreign words). \
         List them out with their likely language and meaning. \
         If none found, say \"No foreign words detected.\"\n\nText: \"{}\"",
        text
    )
}

async fn ask(service: &dyn ChatCompletion, tool: &str, text: &str, prompt: String) -> Result<String> {
    if text.trim().is_empty() {
        return Err(ToolError::EmptyInput);
    }
    debug!("{}: sending {} chars", tool, prompt.len());
    match service.complete(&prompt).await {
        Ok(reply) => Ok(reply.trim().to_string()),
        Err(e) => {
            warn!("{} failed: {}", tool, e);
            Err(e.into())
        }
    }
}

/// Summarize `text`, sending at most `char_limit` characters of it
pub async fn summarize(service: &dyn ChatCompletion, text: &str, char_limit: usize) -> Result<String> {
    let body = truncate_for_summary(text, char_limit);
    ask(service, "summarize", text, summary_prompt(&body)).await
}

pub async fn rewrite(service: &dyn ChatCompletion, text: &str) -> Result<String> {
    ask(service, "rewrite", text, rewrite_prompt(text)).await
}

pub async fn enhance_synonyms(service: &dyn ChatCompletion, text: &str) -> Result<String> {
    ask(service, "synonyms", text, synonym_prompt(text)).await
}

pub async fn detect_foreign_words(service: &dyn ChatCompletion, text: &str) -> Result<String> {
    ask(service, "foreign-words", text, foreign_word_prompt(text)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::MockCompletion;
    use crate::ai::ServiceError;

    #[test]
    fn test_truncate_for_summary() {
        assert_eq!(truncate_for_summary("short", 10), "short");
        assert_eq!(truncate_for_summary("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_for_summary("ééééé", 3), "ééé... [Truncated]");
    }

    #[tokio::test]
    async fn test_summarize_truncates_input() {
        let service = MockCompletion::replying("  A short summary.\n");
        let text = "word ".repeat(10);
        let summary = summarize(&service, &text, 12).await.unwrap();
        assert_eq!(summary, "A short summary.");

        let prompt = service.last_prompt();
        assert!(prompt.starts_with("You are an expert at summarizing text."));
        assert!(prompt.contains("---\nword word wo... [Truncated]\n---"));
        assert!(prompt.ends_with("Summary:"));
    }

    #[tokio::test]
    async fn test_rewrite_does_not_truncate() {
        let service = MockCompletion::replying("rewritten");
        let text = "long ".repeat(5_000);
        rewrite(&service, &text).await.unwrap();
        let prompt = service.last_prompt();
        assert!(prompt.contains(&text));
        assert!(!prompt.contains("[Truncated]"));
        assert!(prompt.starts_with("Rewrite the following text"));
    }

    #[tokio::test]
    async fn test_prompts_quote_the_text() {
        let service = MockCompletion::new(vec![Ok("a".into()), Ok("b".into())]);
        enhance_synonyms(&service, "big dog").await.unwrap();
        assert!(service.last_prompt().ends_with("Text: \"big dog\""));
        detect_foreign_words(&service, "déjà vu").await.unwrap();
        assert!(service.last_prompt().contains("No foreign words detected."));
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_service() {
        let service = MockCompletion::replying("unused");
        assert!(matches!(rewrite(&service, "  ").await, Err(ToolError::EmptyInput)));
        assert!(service.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_errors_propagate() {
        let service = MockCompletion::new(vec![Err(ServiceError::EmptyResponse)]);
        let err = summarize(&service, "text", 100).await.unwrap_err();
        assert!(matches!(err, ToolError::Service(ServiceError::EmptyResponse)));
    }
}
