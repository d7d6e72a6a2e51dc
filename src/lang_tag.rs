//! Language tag well-formedness (RFC 5646 / BCP 47).
//!
//! Checks tag *syntax* only: language, extlang, script, region, variant,
//! extension and private-use subtags, plus the grandfathered tags. It does not
//! consult the IANA subtag registry, so `"qq-ZZ"` is accepted.

use regex::Regex;
use std::sync::OnceLock;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

const GRANDFATHERED: &str = "en-gb-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux|\
i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-be-fr|sgn-be-nl|sgn-ch-de|art-lojban|cel-gaulish|\
no-bok|no-nyn|zh-guoyu|zh-hakka|zh-min|zh-min-nan|zh-xiang";

const LANGTAG: &str = concat!(
    r"(?:[a-z]{2,3}(?:-[a-z]{3}(?:-[a-z]{3}){0,2})?|[a-z]{4}|[a-z]{5,8})", // language
    r"(?:-[a-z]{4})?",                                                      // script
    r"(?:-(?:[a-z]{2}|[0-9]{3}))?",                                         // region
    r"(?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*",                            // variants
    r"(?:-[0-9a-wyz](?:-[a-z0-9]{2,8})+)*",                                 // extensions
    r"(?:-x(?:-[a-z0-9]{1,8})+)?",                                          // private use
);

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| {
        let pattern = format!(
            r"^(?i:{}|{}|x(?:-[a-z0-9]{{1,8}})+)$",
            GRANDFATHERED, LANGTAG
        );
        Regex::new(&pattern).expect("language tag pattern is a valid regex")
    })
}

/// Whether `tag` is a well-formed BCP 47 language tag (case-insensitive).
pub fn is_valid(tag: &str) -> bool {
    tag_regex().is_match(tag)
}
