//! Language codes processed per release and the artifact each one is written to

/// CLDR language code to output artifact name, in processing order
pub const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("am", "am.json"),
    ("uk", "uk.json"),
    ("lv", "lv.json"),
    ("sr_Cyrl", "sr@Cyrl.json"),
    ("sr_Latn", "sr@latin.json"),
    ("gu", "gu.json"),
    ("cs", "cs.json"),
    ("mk", "mk.json"),
    ("fa", "fa.json"),
    ("fi", "fi.json"),
    ("bs", "bs.json"),
    ("ru", "ru.json"),
    ("bn", "bn.json"),
    ("da", "da.json"),
    ("sv", "sv.json"),
    ("pt_PT", "pt_PT.json"),
    ("zh_Hant", "zh_TW.json"),
    ("nl", "nl.json"),
    ("et", "et.json"),
    ("tr", "tr.json"),
    ("ar", "ar.json"),
    ("ml", "ml.json"),
    ("en_AU", "en_AU.json"),
    ("ms", "ms.json"),
    ("it", "it.json"),
    ("el", "el.json"),
    ("sw", "sw.json"),
    ("kab", "kab.json"),
    ("hu", "hu.json"),
    ("gl", "gl.json"),
    ("km", "km.json"),
    ("en_IN", "en_IN.json"),
    ("hr", "hr.json"),
    ("vi", "vi.json"),
    ("my", "my.json"),
    ("pt", "pt.json"),
    ("fr", "fr.json"),
    ("pl", "pl.json"),
    ("ko", "ko.json"),
    ("he", "he.json"),
    ("th", "th.json"),
    ("te", "te.json"),
    ("de_CH", "de_CH.json"),
    ("ca_ES", "ca_ES.json"),
    ("es", "es.json"),
    ("eu", "eu.json"),
    ("hi", "hi.json"),
    ("lb", "lb.json"),
    ("lt", "lt.json"),
    ("az", "az.json"),
    ("lo", "lo.json"),
    ("id", "id.json"),
    ("en_GB", "en_GB.json"),
    ("en_CA", "en_CA.json"),
    ("ka", "ka.json"),
    ("zh_Hant_HK", "zh_HK.json"),
    ("sl", "sl.json"),
    ("ja", "ja.json"),
    ("ro", "ro.json"),
    ("bg", "bg.json"),
    ("mn", "mn.json"),
    ("de", "de.json"),
    ("ca", "ca.json"),
    ("be", "be.json"),
    ("fr_CA", "fr_CA.json"),
    ("sk", "sk.json"),
    ("es_419", "es_419.json"),
    ("en", "en.json"),
    ("es_MX", "es_MX.json"),
    ("zh", "zh.json"),
    ("sq", "sq.json"),
];

/// Artifact file name for a language code.
///
/// Codes outside [`LANGUAGE_TABLE`] are written to `<code>.json`.
pub fn artifact_name(language: &str) -> String {
    LANGUAGE_TABLE
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, artifact)| artifact.to_string())
        .unwrap_or_else(|| format!("{language}.json"))
}

/// All configured language codes in processing order
pub fn default_languages() -> Vec<String> {
    LANGUAGE_TABLE
        .iter()
        .map(|(code, _)| code.to_string())
        .collect()
}
