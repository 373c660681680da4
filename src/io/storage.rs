//! Submission identifiers and the file layout of persisted artifacts
//!
//! Every submission stores three files side by side in the upload directory,
//! all prefixed with the submission identifier:
//! - `<id>_<name>` the uploaded bytes as received
//! - `<id>_<stem>_hist.png` the histogram chart of the original
//! - `<id>_<stem>_result.jpg` the transformed image

use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::io::configuration::{
    FALLBACK_FILE_NAME, HISTOGRAM_EXTENSION, HISTOGRAM_SUFFIX, RESULT_EXTENSION, RESULT_SUFFIX,
};
use crate::io::error::{Result, WithPath};

/// Unique random identifier of one submission
///
/// Displayed in the canonical version 4 UUID layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(u128);

impl SubmissionId {
    /// Draw a fresh identifier from `rng`
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let bits: u128 = rng.random();
        // Version 4, RFC 4122 variant
        let bits = (bits & !(0xF_u128 << 76)) | (0x4_u128 << 76);
        let bits = (bits & !(0x3_u128 << 62)) | (0x2_u128 << 62);
        Self(bits)
    }

    /// Wrap raw identifier bits without modification
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = format!("{:032x}", self.0);
        let (a, rest) = hex.split_at(8);
        let (b, rest) = rest.split_at(4);
        let (c, rest) = rest.split_at(4);
        let (d, e) = rest.split_at(4);
        write!(f, "{a}-{b}-{c}-{d}-{e}")
    }
}

/// Reduce an uploaded file name to a safe single path component
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`; whitespace becomes `_`,
/// accented Latin letters are folded to their ASCII base (`café` becomes
/// `cafe`) and everything else is dropped. Directory parts are discarded and
/// leading dots or underscores trimmed so the result can never escape the
/// upload directory or become hidden.
pub fn sanitize_file_name(file_name: &str) -> String {
    let last_component = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let mut cleaned = String::with_capacity(last_component.len());
    for c in last_component.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            cleaned.push(c);
        } else if c.is_whitespace() {
            cleaned.push('_');
        } else if let Some(folded) = fold_latin(c) {
            cleaned.push_str(folded);
        }
    }

    let trimmed = cleaned.trim_start_matches(['.', '_']);
    if trimmed.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// ASCII spelling of a Latin-1 or Latin Extended-A letter
const fn fold_latin(c: char) -> Option<&'static str> {
    Some(match c {
        'À'..='Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'à'..='å' | 'ā' | 'ă' | 'ą' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' | 'Ć' | 'Č' => "C",
        'ç' | 'ć' | 'č' => "c",
        'Ď' | 'Đ' => "D",
        'ď' | 'đ' => "d",
        'È'..='Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => "E",
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'Ğ' => "G",
        'ğ' => "g",
        'Ì'..='Ï' | 'Ī' | 'Į' | 'İ' => "I",
        'ì'..='ï' | 'ī' | 'į' | 'ı' => "i",
        'Ł' | 'Ľ' => "L",
        'ł' | 'ľ' => "l",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ñ' | 'ń' | 'ň' => "n",
        'Ò'..='Ö' | 'Ø' | 'Ō' | 'Ő' => "O",
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => "o",
        'Œ' => "OE",
        'œ' => "oe",
        'Ř' => "R",
        'ř' => "r",
        'Ś' | 'Ş' | 'Š' => "S",
        'ś' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'Ť' | 'Ţ' => "T",
        'ť' | 'ţ' => "t",
        'Ù'..='Ü' | 'Ū' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ù'..='ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'Ý' | 'Ÿ' => "Y",
        'ý' | 'ÿ' => "y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    })
}

/// Locations of the three artifacts produced for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPaths {
    /// Uploaded bytes as received
    pub original: PathBuf,
    /// Rendered histogram chart of the original image
    pub histogram: PathBuf,
    /// Transformed image
    pub result: PathBuf,
}

impl SubmissionPaths {
    /// Derive the artifact paths for a submission
    ///
    /// The same inputs always give the same paths.
    pub fn derive(upload_dir: &Path, id: &SubmissionId, file_name: &str) -> Self {
        let safe_name = sanitize_file_name(file_name);
        let stem = Path::new(&safe_name)
            .file_stem()
            .map_or_else(|| safe_name.clone(), |s| s.to_string_lossy().to_string());

        Self {
            original: upload_dir.join(format!("{id}_{safe_name}")),
            histogram: upload_dir
                .join(format!("{id}_{stem}{HISTOGRAM_SUFFIX}.{HISTOGRAM_EXTENSION}")),
            result: upload_dir.join(format!("{id}_{stem}{RESULT_SUFFIX}.{RESULT_EXTENSION}")),
        }
    }

    /// Store the uploaded bytes, creating the upload directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file written
    pub fn write_original(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.original.parent() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        std::fs::write(&self.original, bytes).with_path(&self.original, "write original")
    }
}
