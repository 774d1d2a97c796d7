use serde::{Deserialize, Serialize};

use crate::models::news::NewsCategory;

/// Writing tone for generated blog drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Enthusiastic,
    Educational,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Educational => "educational",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

/// Target article length. The word count is only a prompt instruction, the
/// model is not held to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    pub fn word_range(&self) -> &'static str {
        match self {
            Length::Short => "300-500 words",
            Length::Medium => "600-800 words",
            Length::Long => "1000-1200 words",
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Medium
    }
}

/// Truncate on a char boundary so prompt context stays bounded.
fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn blog_content(topic: &str, tone: Tone, length: Length) -> String {
    format!(
        "Write a comprehensive blog post about \"{topic}\" in the context of sustainable technology and green innovations.\n\n\
         Requirements:\n\
         - Tone: {tone}\n\
         - Length: {length}\n\
         - Focus on environmental solutions, sustainable technology, and green innovations\n\
         - Include practical insights and actionable information\n\
         - Structure with an engaging introduction, main content sections, and a strong conclusion\n\
         - Use markdown formatting for better readability\n\n\
         The blog post should be informative, engaging, and provide value to readers interested in sustainable technology and environmental solutions.",
        topic = topic,
        tone = tone.as_str(),
        length = length.word_range(),
    )
}

pub fn title_suggestions(topic: &str) -> String {
    format!(
        "Generate 5 compelling and SEO-friendly title suggestions for a blog post about \"{topic}\" in the context of sustainable technology and green innovations.\n\n\
         Requirements:\n\
         - Each title should be engaging and click-worthy\n\
         - Include relevant keywords for SEO\n\
         - Keep titles under 60 characters when possible\n\
         - Focus on environmental solutions and sustainable tech\n\n\
         Return only the 5 title suggestions, one per line, without numbering or additional text."
    )
}

pub fn excerpt(content: &str) -> String {
    format!(
        "Create a compelling 2-3 sentence excerpt/summary for the following blog post content. The excerpt should be engaging and encourage readers to read more.\n\n\
         Content:\n{content}...\n\n\
         Requirements:\n\
         - Keep it under 150 words\n\
         - Highlight the main value proposition\n\
         - End with a hook that makes readers want to continue reading\n\
         - Focus on sustainable technology and green innovations theme",
        content = clip(content, 1000),
    )
}

pub fn news_headlines(category: NewsCategory) -> String {
    format!(
        "Generate 8 recent news headlines about {name}. Each headline should be:\n\n\
         Requirements:\n\
         - Realistic and current (as if from today's news)\n\
         - Focus on sustainable technology, green innovations, and environmental solutions\n\
         - Include specific companies, technologies, or initiatives when possible\n\
         - Make them sound like real news headlines\n\
         - Include publication dates within the last 2 weeks\n\n\
         Format: Return exactly 8 headlines, one per line, with a brief 1-2 sentence summary for each.\n\
         Use this format:\n\
         Headline: [Headline text]\n\
         Summary: [Brief summary]\n\n\
         Separate each news item with ---",
        name = category.display_name(),
    )
}

pub fn news_detail(headline: &str, summary: &str, category: NewsCategory) -> String {
    format!(
        "Write a detailed news article based on this headline and summary. Make it comprehensive and journalistic.\n\n\
         Headline: {headline}\n\
         Summary: {summary}\n\
         Category: {name}\n\n\
         Requirements:\n\
         - Write as a professional news article (800-1200 words)\n\
         - Include quotes from experts, companies, or officials\n\
         - Add specific details, statistics, and context\n\
         - Structure with introduction, body, and conclusion\n\
         - Focus on sustainable technology and environmental impact\n\
         - Include potential implications and future outlook\n\
         - Use markdown formatting for readability\n\n\
         Make this sound like a real, current news article with proper journalistic style.",
        name = category.display_name(),
    )
}

pub fn news_answer(question: &str, article_content: &str, headline: &str) -> String {
    format!(
        "You are an AI assistant answering questions about this news article. Be helpful, accurate, and provide context from the article.\n\n\
         Article Headline: {headline}\n\n\
         Article Content:\n{content}...\n\n\
         User Question: {question}\n\n\
         Instructions:\n\
         - Answer based on the article content\n\
         - If the question cannot be answered from the article, say so politely\n\
         - Provide additional context or explanations when relevant\n\
         - Keep answers concise but informative\n\
         - Be objective and journalistic in tone\n\
         - If appropriate, suggest related topics or implications\n\n\
         Answer the user's question:",
        content = clip(article_content, 2000),
    )
}
