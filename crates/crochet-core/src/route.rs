//! Page Routes
//!
//! Each page of the site is one typed route. The site is a single
//! document, `index.html`; the view is picked by its `page` query parameter
//! and the frontend parses the current query once on load.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The only document the build produces
pub const SITE_DOCUMENT: &str = "index.html";

/// Characters left unescaped in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Category sections, or search results when `search` is set
    Index { search: Option<String> },
    PatternOverview { pattern: Option<String> },
    CrochetMode { pattern: Option<String>, step: usize },
    YarnCatalogue { form_success: bool },
    Contact,
    AddYarn,
    AddPattern,
}

impl Route {
    /// Route for a query string (with or without `?`); an unknown or
    /// missing `page` is the index
    pub fn parse(query: &str) -> Self {
        let params = QueryParams::parse(query);

        match params.get("page").unwrap_or_default() {
            "overview" => Route::PatternOverview { pattern: params.non_blank("pattern") },
            "crochet" => Route::CrochetMode {
                pattern: params.non_blank("pattern"),
                step: params.get("step").and_then(|s| s.trim().parse().ok()).unwrap_or(0),
            },
            "yarn" => Route::YarnCatalogue {
                form_success: params.get("form") == Some("success"),
            },
            "contact" => Route::Contact,
            "add_yarn" => Route::AddYarn,
            "add_pattern" => Route::AddPattern,
            _ => Route::Index { search: params.non_blank("search") },
        }
    }

    pub fn home() -> Self {
        Route::Index { search: None }
    }

    pub fn pattern(key: &str) -> Self {
        Route::PatternOverview { pattern: Some(key.to_string()) }
    }

    pub fn crochet(key: &str, step: usize) -> Self {
        Route::CrochetMode { pattern: Some(key.to_string()), step }
    }

    pub fn search(query: &str) -> Self {
        let query = query.trim();
        Route::Index { search: (!query.is_empty()).then(|| query.to_string()) }
    }

    /// Relative href for this route, always into [`SITE_DOCUMENT`]
    pub fn href(&self) -> String {
        let params = match self {
            Route::Index { search: None } => Vec::new(),
            Route::Index { search: Some(q) } => vec![format!("search={}", encode(q))],
            Route::PatternOverview { pattern } => with_pattern("overview", pattern.as_deref(), None),
            Route::CrochetMode { pattern, step } => {
                with_pattern("crochet", pattern.as_deref(), Some(*step))
            }
            Route::YarnCatalogue { form_success: false } => vec!["page=yarn".to_string()],
            Route::YarnCatalogue { form_success: true } => {
                vec!["page=yarn".to_string(), "form=success".to_string()]
            }
            Route::Contact => vec!["page=contact".to_string()],
            Route::AddYarn => vec!["page=add_yarn".to_string()],
            Route::AddPattern => vec!["page=add_pattern".to_string()],
        };

        if params.is_empty() {
            SITE_DOCUMENT.to_string()
        } else {
            format!("{}?{}", SITE_DOCUMENT, params.join("&"))
        }
    }
}

fn with_pattern(page: &str, pattern: Option<&str>, step: Option<usize>) -> Vec<String> {
    let mut params = vec![format!("page={}", page)];
    if let Some(key) = pattern {
        params.push(format!("pattern={}", encode(key)));
    }
    if let Some(step) = step {
        params.push(format!("step={}", step));
    }
    params
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Decoded `name=value` pairs; first occurrence wins
struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn parse(query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(name), decode(value))
            })
            .collect();
        Self(pairs)
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn non_blank(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

fn decode(raw: &str) -> String {
    // Form submissions encode spaces as '+'
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
