//! Blackstone PDF Extraction
//!
//! Turns a PDF document into a cleaned [`Transcript`]: per-page text in
//! document order, each page preceded by a `--- PAGE {n} ---` marker, with
//! whitespace-only lines removed.
//!
//! # Example
//!
//! ```no_run
//! use blackstone_pdf::extract_transcript;
//!
//! # fn example() -> Result<(), blackstone_pdf::PdfError> {
//! let transcript = extract_transcript("Universal_Credit_Act_2025.pdf")?;
//! println!("{} pages extracted", transcript.page_count());
//! transcript.save("extracted_act_text.txt")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;

pub use blackstone_domain::Transcript;
pub use error::PdfError;
pub use extractor::extract_transcript;
