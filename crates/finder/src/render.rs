//! Render sink: pure functions from a [`ViewState`] to display output.

use serde::Serialize;

use crate::{EnrichedMovie, SearchError};

/// TMDB image base URL
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Shown when a movie has no poster
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

pub const PROMPT_MESSAGE: &str = "Please enter a search term.";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No results found.";
pub const FAILED_MESSAGE: &str = "Error loading results. Please try again.";

/// Overview length shown by the text renderer while a card is collapsed
const COLLAPSED_OVERVIEW_CHARS: usize = 160;

/// What the user currently sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "movies", rename_all = "snake_case")]
pub enum ViewState {
    /// No criteria entered
    Prompt,
    /// Search in flight
    Loading,
    Results(Vec<EnrichedMovie>),
    Empty,
    /// Search failed; the cause is logged, not shown
    Failed,
}

impl ViewState {
    /// Map a finished search to the state shown to the user.
    pub fn from_outcome(outcome: Result<Vec<EnrichedMovie>, SearchError>) -> Self {
        match outcome {
            Ok(movies) if movies.is_empty() => ViewState::Empty,
            Ok(movies) => ViewState::Results(movies),
            Err(SearchError::NoCriteria) => ViewState::Prompt,
            Err(e) => {
                tracing::error!("Search failed: {}", e);
                ViewState::Failed
            }
        }
    }

    /// Status line for non-result states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ViewState::Prompt => Some(PROMPT_MESSAGE),
            ViewState::Loading => Some(LOADING_MESSAGE),
            ViewState::Empty => Some(EMPTY_MESSAGE),
            ViewState::Failed => Some(FAILED_MESSAGE),
            ViewState::Results(_) => None,
        }
    }
}

/// Build the poster URL for a poster path
pub fn poster_url(poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) if !path.is_empty() => format!("{}{}", TMDB_IMAGE_BASE_URL, path),
        _ => PLACEHOLDER_POSTER_URL.to_string(),
    }
}

/// Display unit of one movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub title: String,
    pub year: Option<i32>,
    pub poster_url: String,
    pub overview: String,
    pub directors: Vec<String>,
    /// Overview expanded; cards start collapsed
    pub expanded: bool,
}

impl MovieCard {
    pub fn new(movie: &EnrichedMovie) -> Self {
        Self {
            title: movie.movie.title.clone(),
            year: movie.movie.year(),
            poster_url: poster_url(movie.movie.poster_path.as_deref()),
            overview: movie.movie.overview.clone(),
            directors: movie
                .credits
                .crew_with_job("Director")
                .map(str::to_string)
                .collect(),
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Show less"
        } else {
            "Show more"
        }
    }

    fn heading(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Render every card expanded
    pub expanded: bool,
}

fn cards(movies: &[EnrichedMovie], options: RenderOptions) -> Vec<MovieCard> {
    movies
        .iter()
        .map(|movie| {
            let mut card = MovieCard::new(movie);
            if options.expanded {
                card.toggle();
            }
            card
        })
        .collect()
}

// ============ HTML ============

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem;background:#fafafa}\
.results{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1.5rem}\
.message{display:block}\
.indivMovie{background:#fff;border-radius:8px;padding:1rem;box-shadow:0 1px 3px rgba(0,0,0,.15)}\
.indivMovie h2{font-size:1.1rem;margin:0 0 .5rem}\
.moviePoster{width:100%;border-radius:4px}\
.directors{color:#555;font-size:.9rem}\
.show-more{cursor:pointer;color:#06c;list-style:none}\
.movie-description .less{display:none}\
.movie-description[open] .less{display:inline}\
.movie-description[open] .more{display:none}";

/// Render a standalone HTML document.
pub fn render_html(state: &ViewState, options: RenderOptions) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Movie Finder</title>\n",
    );
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    match state {
        ViewState::Results(movies) => {
            html.push_str("<div id=\"results\" class=\"results\">\n");
            for card in cards(movies, options) {
                html.push_str(&render_html_card(&card));
            }
            html.push_str("</div>\n");
        }
        other => {
            let message = other.message().unwrap_or_default();
            html.push_str(&format!(
                "<div id=\"results\" class=\"message\"><p>{}</p></div>\n",
                escape_html(message)
            ));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_html_card(card: &MovieCard) -> String {
    let mut html = String::from("<div class=\"indivMovie\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&card.heading())));
    html.push_str(&format!(
        "<img class=\"moviePoster\" src=\"{}\" alt=\"{}\">\n",
        escape_html(&card.poster_url),
        escape_html(&card.title)
    ));
    if !card.directors.is_empty() {
        html.push_str(&format!(
            "<p class=\"directors\">Directed by {}</p>\n",
            escape_html(&card.directors.join(", "))
        ));
    }
    html.push_str(&format!(
        "<details class=\"movie-description\"{}>\n",
        if card.expanded { " open" } else { "" }
    ));
    html.push_str(
        "<summary class=\"show-more\"><span class=\"more\">Show more</span><span class=\"less\">Show less</span></summary>\n",
    );
    html.push_str(&format!("<p>{}</p>\n", escape_html(&card.overview)));
    html.push_str("</details>\n</div>\n");
    html
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============ Text ============

/// Render a plain-text listing for terminals.
pub fn render_text(state: &ViewState, options: RenderOptions) -> String {
    let ViewState::Results(movies) = state else {
        return format!("{}\n", state.message().unwrap_or_default());
    };

    let mut out = String::new();
    for (index, card) in cards(movies, options).iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", card.heading()));
        if !card.directors.is_empty() {
            out.push_str(&format!("  Directed by {}\n", card.directors.join(", ")));
        }
        out.push_str(&format!("  Poster: {}\n", card.poster_url));
        if !card.overview.is_empty() {
            out.push_str(&format!("  {}\n", overview_text(card)));
        }
    }
    out
}

fn overview_text(card: &MovieCard) -> String {
    if card.expanded || card.overview.chars().count() <= COLLAPSED_OVERVIEW_CHARS {
        return card.overview.clone();
    }
    let truncated: String = card.overview.chars().take(COLLAPSED_OVERVIEW_CHARS).collect();
    format!("{}... [{}]", truncated.trim_end(), card.toggle_label())
}
