//! Resolution of an image and its owner's preferences into the values the
//! embed page renders.

use crate::models::{ImageRecord, OwnerPreferences};

pub const SITE_NAME: &str = "Disco.pics";
pub const SITE_URL: &str = "https://disco.pics";
pub const DEFAULT_THEME_COLOUR: &str = "#000000";

pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".mov"];
pub const VIDEO_WIDTH: u32 = 1280;
pub const VIDEO_HEIGHT: u32 = 720;

const DISCORD_CDN_HOST: &str = "cdn.discordapp.com";
const DISCORD_MEDIA_HOST: &str = "media.discordapp.net";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies by URL suffix only; the backend does not report a
    /// content type.
    pub fn from_url(url: &str) -> Self {
        if VIDEO_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// URL shown inline on the page. Discord CDN links are served from the
/// media proxy host instead; the download link keeps the original.
pub fn display_url(img_url: &str) -> String {
    img_url.replace(DISCORD_CDN_HOST, DISCORD_MEDIA_HOST)
}

/// `#rrggbb` for the theme-color tag. Blank preferences fall back to black
/// and an existing `#` is not doubled.
pub fn theme_colour(pref: Option<&str>) -> String {
    match pref.map(str::trim).map(|c| c.trim_start_matches('#')) {
        Some(colour) if !colour.is_empty() => format!("#{colour}"),
        _ => DEFAULT_THEME_COLOUR.to_string(),
    }
}

/// Fully resolved view of one embed page. Absent preferences are empty
/// strings here, so rendering never deals with optionals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPage {
    pub slug: String,
    pub media_kind: MediaKind,
    /// Original URL, used for the metadata tags and the download link.
    pub media_url: String,
    pub display_url: String,
    pub title: String,
    /// Twitter title falls back to the site name; the OG title does not.
    pub twitter_title: String,
    pub description: String,
    pub site_name: String,
    pub site_url: String,
    pub author_name: String,
    pub theme_colour: String,
    /// `None` when the owner has no stylesheet, never `Some("")`.
    pub custom_css: Option<String>,
}

impl EmbedPage {
    pub fn resolve(image: ImageRecord, prefs: OwnerPreferences) -> Self {
        let text = |value: Option<String>| value.unwrap_or_default();

        let title = text(prefs.embed_title);
        let twitter_title = if title.is_empty() {
            SITE_NAME.to_string()
        } else {
            title.clone()
        };
        let custom_css = prefs.custom_css.filter(|css| !css.trim().is_empty());

        EmbedPage {
            media_kind: MediaKind::from_url(&image.img_url),
            display_url: display_url(&image.img_url),
            media_url: image.img_url,
            slug: image.slug,
            title,
            twitter_title,
            description: text(prefs.embed_desc),
            site_name: text(prefs.embed_site_name),
            site_url: text(prefs.embed_site_url),
            author_name: text(prefs.embed_author_name),
            theme_colour: theme_colour(prefs.embed_colour.as_deref()),
            custom_css,
        }
    }

    pub fn is_video(&self) -> bool {
        self.media_kind == MediaKind::Video
    }
}
