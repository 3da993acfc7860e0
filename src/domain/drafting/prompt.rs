//! Prompt template for draft generation.

use super::GenerationRequest;

/// Builds the prompt sent to the text service.
///
/// The response format requested here is what the labeled-line strategy of
/// the extractor expects.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let categories = if request.category_hints().is_empty() {
        String::new()
    } else {
        format!(
            " The blog focuses on categories like: {}.",
            request.category_hints().join(", ")
        )
    };

    format!(
        "Write a professional blog article about \"{keyword}\".{categories}\n\
         \n\
         Requirements:\n\
         1. Create an engaging title\n\
         2. Write 3-5 well-structured sentences that provide valuable, informative content about the topic\n\
         3. Make the content professional, engaging, and suitable for a blog audience\n\
         \n\
         Please format your response exactly like this:\n\
         Title: Your engaging title here\n\
         Content: Your informative content here (3-5 sentences)\n\
         \n\
         Do not include any additional text, explanations, or formatting.",
        keyword = request.keyword(),
        categories = categories,
    )
}
