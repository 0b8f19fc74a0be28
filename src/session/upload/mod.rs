use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::sync::Arc;


pub const PDF_MEDIA_TYPE: &'static str = "application/pdf";
pub const QUESTION_COUNT_MIN: u32 = 1;
pub const QUESTION_COUNT_MAX: u32 = 20;

const OCTET_STREAM_MEDIA_TYPE: &'static str = "application/octet-stream";

fn media_type_for(name: &str) -> &'static str {
    let is_pdf = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        PDF_MEDIA_TYPE
    } else {
        OCTET_STREAM_MEDIA_TYPE
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileSource {
    Picker,
    Drop,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectedFile {
    name: String,
    media_type: &'static str,
    bytes: Arc<Vec<u8>>,
}

impl SelectedFile {
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Self {
        SelectedFile {
            name: name.to_owned(),
            media_type: media_type_for(name),
            bytes: Arc::new(bytes),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .context("File name cannot be blank")?;
        let bytes = fs::read(path).with_context(|| format!("Could not read {:?}", path))?;
        Ok(SelectedFile::from_bytes(name, bytes))
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_media_type(&self) -> &str {
        self.media_type
    }

    pub fn get_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

#[derive(Clone, Debug)]
pub struct UploadForm {
    file: Option<SelectedFile>,
    question_count: String,
}

impl UploadForm {
    pub fn new(question_count: u32) -> Self {
        UploadForm {
            file: None,
            question_count: question_count.to_string(),
        }
    }

    /// Replaces the current file when `file` is a PDF. Returns whether it was kept.
    pub fn offer_file(&mut self, file: SelectedFile, source: FileSource) -> bool {
        if !file.is_pdf() {
            debug!(
                "Ignoring {:?} from {:?}: media type is {}",
                file.get_name(),
                source,
                file.get_media_type()
            );
            return false;
        }
        self.file = Some(file);
        true
    }

    pub fn set_question_count(&mut self, raw_count: &str) {
        let raw_count = raw_count.trim();
        match raw_count.parse::<u32>() {
            Ok(count) if count >= QUESTION_COUNT_MIN && count <= QUESTION_COUNT_MAX => (),
            _ => warn!(
                "Question count {:?} is outside the suggested range {}-{}",
                raw_count, QUESTION_COUNT_MIN, QUESTION_COUNT_MAX
            ),
        }
        self.question_count = raw_count.to_owned();
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn get_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn get_question_count(&self) -> &str {
        &self.question_count
    }
}
