//! Resume text extraction from uploaded PDF bytes.
//!
//! Wraps `pdf-extract` with guard clauses so obviously-bad uploads never
//! reach the parser. All failures collapse into `AppError::Extraction`;
//! callers only ever see the generic invalid-PDF message.

use crate::errors::AppError;

/// Every PDF starts with this magic.
const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracts the text of every page of the PDF, concatenated in page order.
///
/// Whitespace-only output counts as a failure: a scanned or image-only
/// resume has nothing for the model to analyze.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::Extraction("missing %PDF header".to_string()));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("pdf-extract: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction("no extractable text".to_string()));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_upload_is_rejected() {
        let result = extract_resume_text(b"");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_non_pdf_bytes_are_rejected_before_parsing() {
        let result = extract_resume_text(b"just a plain text resume");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_magic_check_requires_full_prefix() {
        // A truncated header must not slip through to the parser
        let result = extract_resume_text(b"%PD");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
