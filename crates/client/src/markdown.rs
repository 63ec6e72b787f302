//! Best-effort Confluence storage-format to markdown normalization.
//!
//! A fixed pipeline of regex substitutions, not a general markup
//! converter: enough to make page bodies readable and diffable as plain
//! text. Unknown tags are stripped, entities unescaped, and runs of blank
//! lines collapsed.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<ac:structured-macro[^>]*ac:name="code"[^>]*>.*?<ac:plain-text-body>\s*<!\[CDATA\[(.*?)\]\]>\s*</ac:plain-text-body>.*?</ac:structured-macro>"#,
    )
    .unwrap()
});
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h([1-6])[^>]*>(.*?)</h[1-6]>").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<(?:strong|b)>(.*?)</(?:strong|b)>").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<(?:em|i)>(.*?)</(?:em|i)>").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<code[^>]*>(.*?)</code>").unwrap());
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#).unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap());
static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Converts a storage-format (XHTML) page body to markdown.
pub fn storage_to_markdown(storage: &str) -> String {
    let text = CODE_MACRO.replace_all(storage, "\n```\n${1}\n```\n");
    let text = HEADING.replace_all(&text, |captures: &regex::Captures<'_>| {
        let level: usize = captures[1].parse().unwrap_or(1);
        format!("\n{} {}\n\n", "#".repeat(level), captures[2].trim())
    });
    let text = BOLD.replace_all(&text, "**${1}**");
    let text = ITALIC.replace_all(&text, "*${1}*");
    let text = CODE_SPAN.replace_all(&text, "`${1}`");
    let text = LINK.replace_all(&text, "[${2}](${1})");
    let text = LIST_ITEM.replace_all(&text, "- ${1}\n");
    let text = PARAGRAPH.replace_all(&text, "${1}\n\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = unescape_entities(&text);
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn unescape_entities(text: &str) -> String {
    // `&amp;` last, so double-escaped entities stay escaped once.
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
