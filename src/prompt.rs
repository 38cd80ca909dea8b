/// Maximum number of tokens the model may generate for one summary.
pub const MAX_OUTPUT_TOKENS: usize = 1000;

/// Build the instructional prompt that embeds the extracted article text.
///
/// The template is fixed; the article text is inserted verbatim between the
/// instruction block and the trailing "Summary:" cue.
#[must_use]
pub fn build_summary_prompt(article_text: &str) -> String {
    format!(
        "Please provide a concise summary of the following article. \
         Focus on the main points, key arguments, and important conclusions.\n\n\
         Article text:\n{article_text}\n\nSummary:"
    )
}
