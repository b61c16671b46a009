use indexmap::{IndexMap, IndexSet};
use log;
use once_cell::sync::Lazy;

/// Wildcard language id selecting every registered extension.
pub const ALL_LANGUAGES: &str = "all";

// Keys are lowercase; lookups lowercase the requested id first.
static LANGUAGE_EXTENSIONS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([("c#", ".cs"), ("javascript", ".js"), ("python", ".py")])
});

/// Names of every supported language, in registry order.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGE_EXTENSIONS.keys().copied()
}

/// Every registered extension, in registry order.
pub fn all_extensions() -> impl Iterator<Item = &'static str> {
    LANGUAGE_EXTENSIONS.values().copied()
}

pub fn is_wildcard(language: &str) -> bool {
    language.trim().eq_ignore_ascii_case(ALL_LANGUAGES)
}

/// True for the wildcard and for every registered language (case-insensitive).
pub fn is_known(language: &str) -> bool {
    is_wildcard(language) || extension_for(language).is_some()
}

pub fn extension_for(language: &str) -> Option<&'static str> {
    LANGUAGE_EXTENSIONS
        .get(language.trim().to_lowercase().as_str())
        .copied()
}

/// Resolves language ids to the set of extensions they select.
///
/// Unknown ids are dropped without error. An empty result is valid and means
/// no file will be selected by extension.
pub fn resolve<S: AsRef<str>>(languages: &[S]) -> IndexSet<&'static str> {
    if languages.iter().any(|l| is_wildcard(l.as_ref())) {
        log::debug!("Language wildcard '{}' requested", ALL_LANGUAGES);
        return all_extensions().collect();
    }

    let mut resolved = IndexSet::new();
    for language in languages {
        let language = language.as_ref();
        match extension_for(language) {
            Some(ext) => {
                if resolved.insert(ext) {
                    log::trace!("Language '{}' resolved to '{}'", language, ext);
                }
            }
            None => log::debug!("Dropping unrecognized language '{}'", language),
        }
    }
    log::debug!("Resolved extensions: {:?}", resolved);
    resolved
}
