//! Recognition pipeline
//!
//! [`Ocr`] wires the stages together: the page is segmented, each glyph
//! is classified, glyph labels are collected into words, and every
//! finished word is corrected against a [`Dictionary`] before being
//! appended to the text together with the marker that ended it.

use std::path::Path;

use inkscribe_core::{FunctionalChar, GlyphMatrix, UNKNOWN_CHAR};
use inkscribe_dict::Dictionary;
use inkscribe_io::BinarizeOptions;
use inkscribe_recog::{Classifier, FeatureOptions, extract};
use inkscribe_segment::{SegmentOptions, segment};
use log::{debug, info};

use crate::ocr_error::{OcrError, OcrResult};

/// Pipeline options
#[derive(Debug, Clone, Default)]
pub struct OcrOptions {
    pub segment: SegmentOptions,
    pub features: FeatureOptions,
    pub binarize: BinarizeOptions,
}

impl OcrOptions {
    pub fn with_segment(mut self, segment: SegmentOptions) -> Self {
        self.segment = segment;
        self
    }

    pub fn with_features(mut self, features: FeatureOptions) -> Self {
        self.features = features;
        self
    }

    pub fn with_binarize(mut self, binarize: BinarizeOptions) -> Self {
        self.binarize = binarize;
        self
    }
}

/// Page recognizer over any [`Classifier`]
///
/// The classifier must accept feature vectors of length
/// `options.features.feature_len()`.
#[derive(Debug, Clone)]
pub struct Ocr<C> {
    classifier: C,
    options: OcrOptions,
}

impl<C: Classifier> Ocr<C> {
    pub fn new(classifier: C) -> Self {
        Self::with_options(classifier, OcrOptions::default())
    }

    pub fn with_options(classifier: C, options: OcrOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    pub fn options(&self) -> &OcrOptions {
        &self.options
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut C {
        &mut self.classifier
    }

    pub fn into_classifier(self) -> C {
        self.classifier
    }

    /// Recognize a page and correct every word against `dictionary`
    ///
    /// Exact dictionary matches count as new occurrences, so recognizing
    /// a page updates the dictionary's frequencies.
    pub fn recognize(&self, page: &GlyphMatrix, dictionary: &mut Dictionary) -> String {
        self.assemble(page, |word| dictionary.correct_word(word))
    }

    /// Recognize a page without dictionary correction
    pub fn transcribe(&self, page: &GlyphMatrix) -> String {
        self.assemble(page, str::to_string)
    }

    /// Read, binarize and recognize an image file
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Io`] if the image can't be read or decoded.
    pub fn recognize_file(
        &self,
        path: impl AsRef<Path>,
        dictionary: &mut Dictionary,
    ) -> OcrResult<String> {
        let path = path.as_ref();
        let page = inkscribe_io::read_image_with(path, &self.options.binarize)?;
        info!(
            "ocr: read {} ({}x{})",
            path.display(),
            page.width(),
            page.height()
        );
        Ok(self.recognize(&page, dictionary))
    }

    /// Label of one glyph, the sentinel if the classifier has none
    pub fn label_glyph(&self, glyph: &GlyphMatrix) -> String {
        let features = extract(glyph, &self.options.features);
        self.classifier
            .classify(&features)
            .unwrap_or_else(|| UNKNOWN_CHAR.to_string())
    }

    /// Train the classifier on a page with known content
    ///
    /// `expected` lists the page's characters in reading order;
    /// whitespace is ignored. Punctuation recognized during segmentation
    /// takes up its position in `expected` but isn't trained on. Returns
    /// the number of glyphs passed to the classifier.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::LengthMismatch`] if the page doesn't segment
    /// into as many glyphs as `expected` has characters, and
    /// [`OcrError::Recog`] if training fails.
    pub fn learn_page(
        &mut self,
        page: &GlyphMatrix,
        expected: &str,
        weight: f64,
    ) -> OcrResult<usize> {
        let items: Vec<GlyphMatrix> = segment(page, &self.options.segment)
            .into_iter()
            .filter(|g| {
                !matches!(
                    g.functional_char(),
                    Some(FunctionalChar::LineBreak | FunctionalChar::WordBreak)
                )
            })
            .collect();
        let labels: Vec<char> = expected.chars().filter(|c| !c.is_whitespace()).collect();
        if items.len() != labels.len() {
            return Err(OcrError::LengthMismatch {
                glyphs: items.len(),
                labels: labels.len(),
            });
        }

        let (samples, names): (Vec<Vec<f64>>, Vec<String>) = items
            .iter()
            .zip(&labels)
            .filter(|(g, _)| !g.is_marker())
            .map(|(g, c)| (extract(g, &self.options.features), c.to_string()))
            .unzip();
        self.classifier.train(&samples, &names, weight)?;
        info!("ocr: learned {} glyphs from page", samples.len());
        Ok(samples.len())
    }

    fn assemble(&self, page: &GlyphMatrix, mut finish_word: impl FnMut(&str) -> String) -> String {
        let seq = segment(page, &self.options.segment);
        debug!("ocr: {} items after segmentation", seq.len());

        let mut text = String::new();
        let mut word = String::new();
        for item in &seq {
            match item.functional_char() {
                Some(fc) if fc.ends_word() => {
                    if !word.is_empty() {
                        text.push_str(&finish_word(&word));
                        word.clear();
                    }
                    text.push(fc.to_char());
                }
                Some(fc) => word.push(fc.to_char()),
                None => word.push_str(&self.label_glyph(item)),
            }
        }
        if !word.is_empty() {
            text.push_str(&finish_word(&word));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkscribe_recog::ExemplarClassifier;
    use inkscribe_test::{glyph_from_rows, stamp};

    fn letter_o() -> GlyphMatrix {
        glyph_from_rows(&["###", "#.#", "#.#", "###"]).unwrap()
    }

    fn letter_n() -> GlyphMatrix {
        glyph_from_rows(&["##.", "#.#", "#.#", "#.#"]).unwrap()
    }

    /// "on no" on one line
    fn page() -> GlyphMatrix {
        let mut page = GlyphMatrix::new(24, 6);
        stamp(&mut page, &letter_o(), 1, 1);
        stamp(&mut page, &letter_n(), 5, 1);
        stamp(&mut page, &letter_n(), 14, 1);
        stamp(&mut page, &letter_o(), 18, 1);
        page
    }

    fn trained() -> Ocr<ExemplarClassifier> {
        let mut ocr = Ocr::new(ExemplarClassifier::new());
        ocr.learn_page(&page(), "on no", 1.0).unwrap();
        ocr
    }

    #[test]
    fn test_transcribe() {
        assert_eq!(trained().transcribe(&page()), "on no");
    }

    #[test]
    fn test_unknown_glyph_is_sentinel() {
        let ocr = Ocr::new(ExemplarClassifier::new());
        assert_eq!(ocr.transcribe(&page()), "?? ??");
    }

    #[test]
    fn test_recognize_corrects_once_per_word() {
        let mut dict = Dictionary::new();
        dict.insert("on", 1);
        dict.insert("no", 1);
        let text = trained().recognize(&page(), &mut dict);
        assert_eq!(text, "on no");
        assert_eq!(dict.frequency("on"), Some(2));
        assert_eq!(dict.frequency("no"), Some(2));
    }

    #[test]
    fn test_learn_page_length_mismatch() {
        let mut ocr = Ocr::new(ExemplarClassifier::new());
        let err = ocr.learn_page(&page(), "onn", 1.0).unwrap_err();
        assert!(matches!(
            err,
            OcrError::LengthMismatch {
                glyphs: 4,
                labels: 3
            }
        ));
        assert!(ocr.classifier().is_empty());
    }

    #[test]
    fn test_blank_page() {
        let mut dict = Dictionary::new();
        assert_eq!(trained().recognize(&GlyphMatrix::new(10, 10), &mut dict), "");
    }
}
