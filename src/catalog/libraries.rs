/// Libraries looked for in overviews, in display order.
pub const KNOWN_LIBRARIES: [&str; 8] = [
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "sklearn",
    "tensorflow",
    "keras",
    "plotly",
];

/// Known libraries mentioned anywhere in `text`, case-insensitively.
///
/// Plain substring matching: a name inside an unrelated word also counts.
pub fn detect(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();
    KNOWN_LIBRARIES
        .into_iter()
        .filter(|name| text.contains(*name))
        .collect()
}
