use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Link and image schemes that survive rendering. Scheme-less destinations are always kept.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render stored overview Markdown to HTML that is safe to embed unescaped.
///
/// Raw HTML from the source is emitted as escaped text and link or image
/// destinations outside [`ALLOWED_SCHEMES`] are blanked.
pub fn render_html(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(text, options).map(sanitize);

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_destination(&dest) {
        dest
    } else {
        tracing::debug!("Dropping link destination {:?}", &*dest);
        CowStr::Borrowed("")
    }
}

/// `url` as an `href` value when it is an absolute http(s) URL, else `None`.
///
/// Used for stored repository links, which are rendered outside the Markdown pipeline.
pub fn web_link(url: &str) -> Option<String> {
    let url = url.trim();
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }

    let (scheme, rest) = url.split_once("://")?;
    let web_scheme = scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https");
    (web_scheme && !rest.is_empty()).then(|| url.to_string())
}

fn is_allowed_destination(dest: &str) -> bool {
    // Browsers ignore embedded whitespace and control characters in schemes.
    let compact: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    let Some(colon) = compact.find(':') else {
        return true;
    };

    let scheme = &compact[..colon];
    if scheme.contains(['/', '?', '#']) {
        // The colon belongs to a path, query or fragment.
        return true;
    }

    ALLOWED_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}
