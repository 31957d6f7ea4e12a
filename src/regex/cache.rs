/// Compile a regular expression once and hand back the cached `&'static
/// Regex` on every subsequent call. The patterns are literals in this crate
/// so a failure to compile is a programming error.
#[macro_export]
macro_rules! pattern {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
