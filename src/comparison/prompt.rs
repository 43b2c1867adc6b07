//! Prompt template for the comparison analysis

/// Prompt builder for document comparison
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the fixed comparison prompt with both texts embedded verbatim.
    ///
    /// Asks for a detailed difference analysis plus a separate section
    /// assessing the risks the second document adds for the recipient, the
    /// whole response formatted in markdown.
    pub fn build_comparison_prompt(doc1_text: &str, doc2_text: &str) -> String {
        format!(
            r#"Compare the following two documents and provide a detailed analysis of their differences:

Document 1:
{doc1_text}

Document 2:
{doc2_text}

Please format your response in markdown. After the comparison, provide a separate section assessing the risks added in the second document for the recipient compared to the original document. Use appropriate markdown headers and formatting."#,
        )
    }
}
