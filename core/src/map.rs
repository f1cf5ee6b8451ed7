//! Flag-to-value mapping built from raw arguments.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, trace};

use crate::classify::{is_flag, is_value};

/// Mapping from flag to the value that immediately followed it, if any.
///
/// Each [`parse`](ArgumentMap::parse) pass merges into the existing map:
/// flags seen again are overwritten, flags not seen again are left alone.
/// Keys and values are stored exactly as given.
///
/// # Examples
///
/// ```
/// use argmap_core::ArgumentMap;
///
/// let mut map = ArgumentMap::new();
/// map.parse(["-a", "42", "-b", "bat", "cat", "-d"]);
///
/// assert_eq!(map.num_flags(), 3);
/// assert_eq!(map.get_string("-a"), Some("42"));
/// assert_eq!(map.get_string("-b"), Some("bat"));
/// assert_eq!(map.get_string("-d"), None);
/// assert_eq!(map.get_string_or("-d", "dog"), "dog");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentMap {
    map: BTreeMap<String, Option<String>>,
}

impl ArgumentMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map and parses `args` into it.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        map.parse(args);
        map
    }

    /// Creates a map from the current process arguments, skipping the
    /// program name. Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::from_os_args(std::env::args_os().skip(1))
    }

    /// Creates a map from OS strings, converting non-UTF-8 arguments lossily.
    pub fn from_os_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::from_args(
            args.into_iter()
                .map(|arg| arg.as_ref().to_string_lossy().into_owned()),
        )
    }

    /// Parses `args` into the map in a single left-to-right pass.
    ///
    /// - A flag is (re)inserted with no value and becomes the current flag.
    /// - The first value after the current flag is attached to it; later
    ///   values are dropped until the next flag.
    /// - Values before the first flag and blank tokens are ignored.
    ///
    /// A repeated flag keeps only what followed its last occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::ArgumentMap;
    ///
    /// let map = ArgumentMap::from_args(["-e", "elk", "-e"]);
    /// assert!(map.has_flag("-e"));
    /// assert!(!map.has_value("-e"));
    /// ```
    pub fn parse<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current: Option<String> = None;

        for arg in args {
            let arg = arg.as_ref();
            if is_flag(arg) {
                self.map.insert(arg.to_string(), None);
                current = Some(arg.to_string());
            } else if is_value(arg) {
                match current.take() {
                    Some(flag) => {
                        self.map.insert(flag, Some(arg.to_string()));
                    }
                    None => trace!(token = arg, "ignoring value without a flag"),
                }
            } else {
                trace!(token = arg, "ignoring blank token");
            }
        }

        debug!(flags = self.map.len(), "parsed arguments");
    }

    /// Returns the number of distinct flags.
    pub fn num_flags(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no flags have been parsed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the exact flag was parsed.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.map.contains_key(flag)
    }

    /// Returns `true` if the flag was parsed and has a value.
    pub fn has_value(&self, flag: &str) -> bool {
        self.get_string(flag).is_some()
    }

    /// Returns the value for the flag, or `None` if the flag is missing or
    /// has no value.
    pub fn get_string(&self, flag: &str) -> Option<&str> {
        self.map.get(flag).and_then(|value| value.as_deref())
    }

    /// Returns the value for the flag, falling back to `default` when the
    /// flag is missing or has no value.
    pub fn get_string_or<'a>(&'a self, flag: &str, default: &'a str) -> &'a str {
        self.get_string(flag).unwrap_or(default)
    }

    /// Returns the value for the flag as a path, or `None` if there is no
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use argmap_core::ArgumentMap;
    ///
    /// let map = ArgumentMap::from_args(["-p", ".", "-q"]);
    /// assert_eq!(map.get_path("-p"), Some(PathBuf::from(".")));
    /// assert_eq!(map.get_path("-q"), None);
    /// ```
    pub fn get_path(&self, flag: &str) -> Option<PathBuf> {
        self.get_string(flag).map(PathBuf::from)
    }

    /// Returns the value for the flag as a path, falling back to `default`
    /// when the flag is missing or has no value.
    pub fn get_path_or(&self, flag: &str, default: impl Into<PathBuf>) -> PathBuf {
        self.get_path(flag).unwrap_or_else(|| default.into())
    }

    /// Iterates over the flags in sorted order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Iterates over `(flag, value)` pairs in flag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.map
            .iter()
            .map(|(flag, value)| (flag.as_str(), value.as_deref()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ArgumentMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_args(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for ArgumentMap {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.parse(iter);
    }
}

impl fmt::Display for ArgumentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, value) in self.iter() {
            writeln!(f, "{flag} = {}", value.unwrap_or("(none)"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::Path;

    use super::*;

    const SCENARIO: &[&str] = &[
        "-a", "42", "-b", "bat", "cat", "-d", "-e", "elk", "-e", "-f",
    ];

    fn scenario() -> ArgumentMap {
        let mut map = ArgumentMap::new();
        map.parse(SCENARIO);
        map
    }

    fn count(args: &[&str]) -> usize {
        ArgumentMap::from_args(args).num_flags()
    }

    #[test]
    fn test_count_one_flag() {
        assert_eq!(count(&["-loquat"]), 1);
    }

    #[test]
    fn test_count_one_pair() {
        assert_eq!(count(&["-grape", "raisin"]), 1);
    }

    #[test]
    fn test_count_two_flags() {
        assert_eq!(count(&["-tomato", "-potato"]), 2);
    }

    #[test]
    fn test_count_only_values() {
        assert_eq!(count(&["rhubarb"]), 0);
        assert_eq!(count(&["constant", "change"]), 0);
    }

    #[test]
    fn test_count_leading_value_discarded() {
        let map = ArgumentMap::from_args(["pine", "-apple"]);
        assert_eq!(map.num_flags(), 1);
        assert!(!map.has_flag("pine"));
        assert!(!map.has_value("-apple"));
    }

    #[test]
    fn test_count_two_pairs() {
        assert_eq!(
            count(&["-aubergine", "eggplant", "-courgette", "zucchini"]),
            2
        );
    }

    #[test]
    fn test_count_repeated_flag() {
        let map = ArgumentMap::from_args([
            "-tangerine",
            "satsuma",
            "-tangerine",
            "clementine",
            "-tangerine",
            "mandarin",
        ]);
        assert_eq!(map.num_flags(), 1);
        assert_eq!(map.get_string("-tangerine"), Some("mandarin"));
    }

    #[test]
    fn test_count_empty() {
        let map = ArgumentMap::from_args(Vec::<String>::new());
        assert_eq!(map.num_flags(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_num_flags() {
        let map = scenario();
        assert_eq!(map.num_flags(), 5, "{map}");
    }

    #[test]
    fn test_parse_has_flag() {
        let map = scenario();
        assert!(map.has_flag("-d"), "{map}");
        assert!(map.has_flag("-f"), "{map}");
        assert!(!map.has_flag("-g"), "{map}");
    }

    #[test]
    fn test_parse_has_value() {
        let map = scenario();
        assert!(map.has_value("-a"), "{map}");
        assert!(!map.has_value("-d"), "{map}");
        assert!(!map.has_value("-g"), "{map}");
    }

    #[test]
    fn test_parse_get_string() {
        let map = scenario();
        assert_eq!(map.get_string("-b"), Some("bat"), "{map}");
        assert_eq!(map.get_string("-d"), None, "{map}");
        assert_eq!(map.get_string("-g"), None, "{map}");
    }

    #[test]
    fn test_parse_repeated_flag_without_value_clears() {
        let map = scenario();
        assert!(map.has_flag("-e"), "{map}");
        assert_eq!(map.get_string("-e"), None, "{map}");
    }

    #[test]
    fn test_parse_get_string_or() {
        let map = scenario();
        assert_eq!(map.get_string_or("-b", "bee"), "bat");
        assert_eq!(map.get_string_or("-d", "dog"), "dog");
        assert_eq!(map.get_string_or("-g", "goat"), "goat");
    }

    #[test]
    fn test_parse_second_value_dropped() {
        let map = scenario();
        assert!(!map.has_flag("cat"));
        assert!(!map.iter().any(|(_, value)| value == Some("cat")));
    }

    #[test]
    fn test_double_parse() {
        let mut map = scenario();
        let once = map.clone();
        map.parse(SCENARIO);

        assert_eq!(map.num_flags(), 5, "{map}");
        assert_eq!(map, once);
    }

    #[test]
    fn test_parse_merges_into_existing() {
        let mut map = ArgumentMap::from_args(["-a", "1", "-b", "2"]);
        map.parse(["-b", "3", "-c"]);

        assert_eq!(map.num_flags(), 3);
        assert_eq!(map.get_string("-a"), Some("1"));
        assert_eq!(map.get_string("-b"), Some("3"));
        assert!(map.has_flag("-c"));
    }

    #[test]
    fn test_parse_reparse_clears_value() {
        let mut map = ArgumentMap::from_args(["-a", "1"]);
        map.parse(["-a"]);
        assert!(map.has_flag("-a"));
        assert!(!map.has_value("-a"));
    }

    #[test]
    fn test_parse_cursor_does_not_span_calls() {
        let mut map = ArgumentMap::from_args(["-a"]);
        map.parse(["orphan"]);
        assert!(!map.has_value("-a"));
    }

    #[test]
    fn test_interior_whitespace_flag_is_kept() {
        let map = ArgumentMap::from_args(["- a", "x"]);
        assert_eq!(map.num_flags(), 1);
        assert_eq!(map.get_string("- a"), Some("x"));
    }

    #[test]
    fn test_from_os_args() {
        let map = ArgumentMap::from_os_args([OsString::from("-in"), OsString::from("notes.txt")]);
        assert_eq!(map.get_string("-in"), Some("notes.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_os_args_lossy() {
        use std::os::unix::ffi::OsStringExt;

        let value = OsString::from_vec(vec![b'a', 0xff]);
        let map = ArgumentMap::from_os_args([OsString::from("-v"), value]);
        assert_eq!(map.get_string("-v"), Some("a\u{FFFD}"));
    }

    #[test]
    fn test_from_env_skips_program_name() {
        let expected = ArgumentMap::from_os_args(std::env::args_os().skip(1));
        assert_eq!(ArgumentMap::from_env(), expected);
    }

    #[test]
    fn test_blank_token_keeps_cursor() {
        let map = ArgumentMap::from_args(["-a", " ", "-", "value"]);
        assert_eq!(map.num_flags(), 1);
        assert_eq!(map.get_string("-a"), Some("value"));
    }

    #[test]
    fn test_tokens_stored_exactly() {
        let map = ArgumentMap::from_args(["\t-tab\t", " a"]);
        assert!(map.has_flag("\t-tab\t"));
        assert!(!map.has_flag("-tab"));
        assert_eq!(map.get_string("\t-tab\t"), Some(" a"));
    }

    #[test]
    fn test_get_valid_path() {
        let map = ArgumentMap::from_args(["-p", "."]);
        assert_eq!(map.get_path("-p"), Some(PathBuf::from(".")));
    }

    #[test]
    fn test_get_invalid_path() {
        let map = ArgumentMap::from_args(["-p"]);
        assert_eq!(map.get_path("-p"), None);
        assert_eq!(map.get_path("-q"), None);
    }

    #[test]
    fn test_get_path_or() {
        let map = ArgumentMap::from_args(["-p", "out", "-q"]);
        assert_eq!(map.get_path_or("-p", "fallback"), Path::new("out"));
        assert_eq!(map.get_path_or("-q", "fallback"), Path::new("fallback"));
        assert_eq!(map.get_path_or("-r", "fallback"), Path::new("fallback"));
    }

    #[test]
    fn test_collect_and_extend() {
        let mut map: ArgumentMap = ["-a", "1"].into_iter().collect();
        map.extend(["-b"]);

        let flags: Vec<&str> = map.flags().collect();
        assert_eq!(flags, vec!["-a", "-b"]);
    }

    #[test]
    fn test_display() {
        let map = ArgumentMap::from_args(["-b", "bat", "-a"]);
        assert_eq!(map.to_string(), "-a = (none)\n-b = bat\n");
    }

    #[test]
    fn test_serialize_json() {
        let map = ArgumentMap::from_args(["-a", "42", "-d"]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "-a": "42", "-d": null }));
    }
}
