//! PDF text extraction

use tracing::debug;

use crate::domain::document::DocumentTextExtractor;
use crate::domain::DomainError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts text from in-memory PDF bytes with `pdf-extract`
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentTextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::extraction("Uploaded document is empty"));
        }

        if !bytes.starts_with(PDF_MAGIC) {
            return Err(DomainError::extraction("Uploaded document is not a PDF"));
        }

        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DomainError::extraction(format!("Failed to read PDF: {}", e)))?;

        if text.trim().is_empty() {
            return Err(DomainError::extraction("No text could be extracted from the PDF"));
        }

        debug!(bytes = bytes.len(), chars = text.chars().count(), "Extracted PDF text");

        Ok(text)
    }

    fn extractor_name(&self) -> &'static str {
        "pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a one-page PDF whose content stream draws `text` in Helvetica
    fn single_page_pdf(text: &str) -> Vec<u8> {
        let content = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 24 Tf 72 720 Td ({}) Tj ET", text)
        };

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
             /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());

        for (index, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
        }

        let xref_offset = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );

        pdf
    }

    #[test]
    fn test_extracts_page_text() {
        let pdf = single_page_pdf("Central bank raises interest rates");

        let text = PdfTextExtractor::new().extract(&pdf).unwrap();

        assert_eq!(text.trim(), "Central bank raises interest rates");
    }

    #[test]
    fn test_pdf_without_text_is_extraction_error() {
        let pdf = single_page_pdf("");

        let err = PdfTextExtractor::new().extract(&pdf).unwrap_err();

        assert!(matches!(err, DomainError::Extraction { .. }));
    }

    #[test]
    fn test_corrupt_pdf_is_extraction_error() {
        let err = PdfTextExtractor::new()
            .extract(b"%PDF-1.4 garbage")
            .unwrap_err();

        assert!(err.to_string().starts_with("Text extraction failed: Failed to read PDF"));
    }

    #[test]
    fn test_empty_input_is_extraction_error() {
        let err = PdfTextExtractor::new().extract(&[]).unwrap_err();
        assert!(matches!(err, DomainError::Extraction { .. }));
    }

    #[test]
    fn test_non_pdf_input_is_extraction_error() {
        let err = PdfTextExtractor::new().extract(b"hello world").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Text extraction failed: Uploaded document is not a PDF"
        );
    }
}
