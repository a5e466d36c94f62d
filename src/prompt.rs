use serde::Deserialize;

/// One titled block of reference text supplied by the caller to ground the
/// generated answer, e.g. a chart placement or a dasha period summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Resolves a caller-supplied language code to the label embedded in the
/// instruction template. Only Hindi is recognized; everything else, including
/// an absent code, answers in English.
pub fn language_label(language: Option<&str>) -> &'static str {
    match language {
        Some("hi") => "Hindi",
        _ => "English",
    }
}

fn render_sections(sections: &[ContextSection]) -> String {
    if sections.is_empty() {
        return "(No context provided)".to_string();
    }

    sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let number = index + 1;
            let title = section
                .title
                .as_deref()
                .filter(|title| !title.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Section {}", number));
            let content = section.content.as_deref().unwrap_or("");
            format!("#{} {}\n{}", number, title, content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the single instruction string sent to the completion service.
///
/// Caller-supplied text is embedded verbatim; no escaping is attempted.
pub fn build_prompt(question: &str, language: Option<&str>, sections: &[ContextSection]) -> String {
    let label = language_label(language);
    let context = render_sections(sections);

    format!(
        "You are an experienced Vedic astrologer. Answer the user's question using ONLY the \
         astrological context provided below. If the context does not contain enough \
         information to answer, say so honestly. Answer in {}.\n\n\
         Astrological context:\n{}\n\n\
         Question: {}",
        label, context, question
    )
}
