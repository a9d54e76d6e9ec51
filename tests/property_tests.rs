use img_minify::error::Result;
use img_minify::optimize::optimize_bytes;
use img_minify::plugins::CompressorPlugin;
use img_minify::record::FileRecord;
use img_minify::utils::{format_file_size, format_percent, plural, saved_message};
use proptest::prelude::*;

struct TruncatePlugin {
    keep: usize,
}

impl CompressorPlugin for TruncatePlugin {
    fn name(&self) -> &'static str {
        "truncate"
    }

    fn accepts(&self, _data: &[u8]) -> bool {
        true
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data[..data.len().min(self.keep)].to_vec())
    }
}

proptest! {
    #[test]
    fn format_percent_never_keeps_trailing_zero(p in -1000.0f64..1000.0f64) {
        let s = format_percent(p);
        prop_assert!(!s.ends_with(".0"));
        prop_assert!(!s.is_empty());
    }

    #[test]
    fn format_percent_has_at_most_one_decimal(p in -1000.0f64..1000.0f64) {
        let s = format_percent(p);
        if let Some((_, frac)) = s.split_once('.') {
            prop_assert_eq!(frac.len(), 1);
        }
    }

    #[test]
    fn format_file_size_sign_follows_input(bytes in -10_000_000i64..10_000_000i64) {
        let s = format_file_size(bytes);
        prop_assert_eq!(bytes < 0, s.starts_with('-'));
    }

    #[test]
    fn format_file_size_small_values_stay_in_bytes(bytes in 0i64..1024i64) {
        prop_assert_eq!(format_file_size(bytes), format!("{} B", bytes));
    }

    #[test]
    fn plural_only_singular_at_one(n in 0u64..1000u64) {
        let word = plural("image", n);
        if n == 1 {
            prop_assert_eq!(word, "image");
        } else {
            prop_assert_eq!(word, "images");
        }
    }

    #[test]
    fn saved_message_kind_matches_sizes(original in 0u64..1_000_000, optimized in 0u64..1_000_000) {
        let msg = saved_message(original, optimized);
        if optimized < original {
            prop_assert!(msg.starts_with("saved "));
            prop_assert!(msg.ends_with('%'));
        } else {
            prop_assert_eq!(msg, "already optimized");
        }
    }

    #[test]
    fn optimize_bytes_without_plugins_is_identity(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let out = optimize_bytes(&data, &[]).unwrap();
        prop_assert_eq!(out, data);
    }

    #[test]
    fn optimize_bytes_applies_plugin(data in proptest::collection::vec(any::<u8>(), 0..512), keep in 0usize..512) {
        let plugins: Vec<Box<dyn CompressorPlugin>> = vec![Box::new(TruncatePlugin { keep })];
        let out = optimize_bytes(&data, &plugins).unwrap();
        prop_assert_eq!(out.len(), data.len().min(keep));
    }

    #[test]
    fn extension_check_accepts_any_case(ext in "(jpg|jpeg|png|gif|svg)", upper in any::<bool>()) {
        let ext = if upper { ext.to_uppercase() } else { ext };
        let record = FileRecord::empty(format!("file.{ext}"));
        prop_assert!(record.is_supported_image());
    }
}
