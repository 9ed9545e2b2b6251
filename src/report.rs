//! Maps extraction results to messages shown to the user.
use crate::entities::extraction::{ErrorKind, ExtractedText, ExtractionFailure, SkipReason};

pub fn failure_message(failure: &ExtractionFailure) -> String {
    match failure.kind {
        ErrorKind::UnsupportedFormat => {
            "Unsupported file type. Please upload a .txt, .pdf or .docx file.".into()
        }
        ErrorKind::CorruptInput => {
            format!("Invalid file. Please upload a readable document ({}).", failure.message)
        }
        ErrorKind::DecodeError => {
            format!("The document could not be read: {}.", failure.message)
        }
    }
}

pub fn loaded_message(extracted: &ExtractedText) -> String {
    format!(
        "Text loaded. Original content length: {} words.",
        extracted.word_count()
    )
}

/// Describes pages left out of the text. `None` when nothing was skipped.
pub fn skipped_message(extracted: &ExtractedText) -> Option<String> {
    if extracted.skipped.is_empty() {
        return None;
    }
    let (without_text, failed): (Vec<_>, Vec<_>) = extracted
        .skipped
        .iter()
        .partition(|page| page.reason == SkipReason::NoTextLayer);
    let mut parts = Vec::new();
    if !without_text.is_empty() {
        parts.push(format!(
            "{} without a text layer ({})",
            pages(without_text.len()),
            page_list(without_text.iter().map(|p| p.page))
        ));
    }
    if !failed.is_empty() {
        parts.push(format!(
            "{} failed to decode ({})",
            pages(failed.len()),
            page_list(failed.iter().map(|p| p.page))
        ));
    }
    Some(format!("Skipped {}.", parts.join(", ")))
}

fn pages(count: usize) -> String {
    if count == 1 {
        "1 page".into()
    } else {
        format!("{count} pages")
    }
}

fn page_list<I: Iterator<Item = u32>>(numbers: I) -> String {
    numbers.map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
}
