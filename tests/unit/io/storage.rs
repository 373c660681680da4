//! Tests for submission identifiers, filename sanitizing and artifact paths

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::{Path, PathBuf};
    use stripeswap::io::storage::{SubmissionId, SubmissionPaths, sanitize_file_name};
    use tempfile::TempDir;

    // Tests identifiers use the version 4 UUID layout
    // Verified by skipping the version bits
    #[test]
    fn test_submission_id_format() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = SubmissionId::generate(&mut rng).to_string();

        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(groups[2].starts_with('4'));
        assert!(matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b')));
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }

    // Tests identifiers differ between draws
    // Verified by returning a constant identifier
    #[test]
    fn test_submission_id_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = SubmissionId::generate(&mut rng);
        let second = SubmissionId::generate(&mut rng);

        assert_ne!(first, second);
    }

    // Tests raw bits are displayed without modification
    // Verified by reordering the groups
    #[test]
    fn test_submission_id_from_bits() {
        let id = SubmissionId::from_bits(0x0123_4567_89ab_cdef_0011_2233_4455_6677);
        assert_eq!(id.to_string(), "01234567-89ab-cdef-0011-223344556677");
    }

    // Tests unsafe characters and directory parts are removed
    // Verified by keeping path separators
    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("photo.png"), "photo.png");
        assert_eq!(sanitize_file_name("my holiday pic.jpg"), "my_holiday_pic.jpg");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\cat.png"), "cat.png");
        assert_eq!(sanitize_file_name(".hidden.png"), "hidden.png");
        assert_eq!(sanitize_file_name("ça*va?.png"), "cava.png");
    }

    // Tests accented Latin letters keep their ASCII base letter
    // Verified by dropping every non-ASCII character
    #[test]
    fn test_sanitize_file_name_folds_accents() {
        assert_eq!(sanitize_file_name("café.png"), "cafe.png");
        assert_eq!(sanitize_file_name("Ærø Straße.jpg"), "AEro_Strasse.jpg");
        assert_eq!(sanitize_file_name("Łódź.jpeg"), "Lodz.jpeg");
        assert_eq!(sanitize_file_name("日本.png"), "png");
    }

    // Tests names that sanitize to nothing fall back to a placeholder
    // Verified by returning the empty string
    #[test]
    fn test_sanitize_file_name_fallback() {
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name("///"), "upload");
        assert_eq!(sanitize_file_name("***"), "upload");
    }

    // Tests the three artifact paths are derived from id and name
    // Verified by omitting the id prefix
    #[test]
    fn test_paths_derive() {
        let id = SubmissionId::from_bits(1);
        let paths = SubmissionPaths::derive(Path::new("static/uploads"), &id, "cat photo.png");
        let prefix = "00000000-0000-0000-0000-000000000001";

        assert_eq!(
            paths.original,
            PathBuf::from(format!("static/uploads/{prefix}_cat_photo.png"))
        );
        assert_eq!(
            paths.histogram,
            PathBuf::from(format!("static/uploads/{prefix}_cat_photo_hist.png"))
        );
        assert_eq!(
            paths.result,
            PathBuf::from(format!("static/uploads/{prefix}_cat_photo_result.jpg"))
        );
    }

    // Tests derivation is deterministic and distinct per submission
    // Verified by mixing randomness into derivation
    #[test]
    fn test_paths_deterministic() {
        let dir = Path::new("out");
        let id = SubmissionId::from_bits(42);
        let other = SubmissionId::from_bits(43);

        assert_eq!(
            SubmissionPaths::derive(dir, &id, "a.png"),
            SubmissionPaths::derive(dir, &id, "a.png")
        );
        assert_ne!(
            SubmissionPaths::derive(dir, &id, "a.png"),
            SubmissionPaths::derive(dir, &other, "a.png")
        );
    }

    // Tests extensionless uploads still get distinct artifacts
    // Verified by deriving the stem from the empty extension
    #[test]
    fn test_paths_without_extension() {
        let id = SubmissionId::from_bits(5);
        let paths = SubmissionPaths::derive(Path::new("u"), &id, "scan");

        assert!(paths.original.to_string_lossy().ends_with("_scan"));
        assert!(paths.histogram.to_string_lossy().ends_with("_scan_hist.png"));
        assert!(paths.result.to_string_lossy().ends_with("_scan_result.jpg"));
    }

    // Tests original bytes are written and the directory created
    // Verified by skipping directory creation
    #[test]
    fn test_write_original() {
        let dir = TempDir::new().unwrap();
        let upload_dir = dir.path().join("uploads");
        let paths = SubmissionPaths::derive(&upload_dir, &SubmissionId::from_bits(9), "x.png");

        paths.write_original(b"raw bytes").unwrap();

        assert_eq!(std::fs::read(&paths.original).unwrap(), b"raw bytes");
    }
}
