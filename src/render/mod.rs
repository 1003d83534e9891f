//! HTML pages, built with maud. All interpolated values are escaped except
//! the owner's custom stylesheet, which is embedded as-is apart from `</`.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::embed::{EmbedPage, SITE_NAME, SITE_URL, VIDEO_HEIGHT, VIDEO_WIDTH};

/// Stand-in for the handful of utility classes the page markup uses.
const BASE_CSS: &str = r#"
*,*::before,*::after{box-sizing:border-box}
body{margin:0;font-family:ui-sans-serif,system-ui,sans-serif}
.main-container{display:flex;flex-direction:column}
.bg-black{background-color:#000}
.min-h-screen{min-height:100vh}
.pt-5{padding-top:1.25rem}
.media{display:flex;align-items:center;justify-content:center;width:100%}
.file{max-width:100%;max-height:24rem}
.actions{display:flex;flex-direction:column;align-items:center;gap:.5rem;margin-top:1.25rem}
.downloadbtn{padding:.5rem .75rem;color:#fff;border:2px solid #93c5fd;text-decoration:none}
.downloadbtn:hover{background-color:#3b82f6}
.bottom-text{color:#cbd5e1}
"#;

/// Owner CSS for a `<style>` element. `</` is the only sequence that can end
/// the element early; `<\/` is the same text to the CSS parser.
fn style_text(css: &str) -> String {
    css.replace("</", "<\\/")
}

const MAIN_CLASS: &str = "main-container min-h-screen pt-5";
const MAIN_CLASS_DARK: &str = "main-container bg-black min-h-screen pt-5";

fn head_common() -> Markup {
    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        style { (PreEscaped(BASE_CSS)) }
    }
}

fn preview_tags(page: &EmbedPage) -> Markup {
    html! {
        @if page.is_video() {
            meta property="og:type" content="video.other";
            meta property="og:video:type" content="video/mp4";
            meta property="og:video" content=(page.media_url);
            meta property="og:video:url" content=(page.media_url);
            meta property="og:video:secure_url" content=(page.media_url);
            meta property="og:video:width" content=(VIDEO_WIDTH);
            meta property="og:video:height" content=(VIDEO_HEIGHT);
        } @else {
            meta property="og:image" content=(page.media_url);
        }
    }
}

fn embed_tags(page: &EmbedPage) -> Markup {
    html! {
        meta property="og:description" content=(page.description);
        meta property="og:title" content=(page.title);
        meta property="og:site_name" content=(page.site_name);
        meta property="og:url" content=(page.site_url);
        meta property="theme-color" content=(page.theme_colour);
        meta property="article:author" content=(page.author_name);

        meta property="twitter:description" content=(page.description);
        meta property="twitter:title" content=(page.twitter_title);
        meta property="twitter:image" content=(page.media_url);
        meta property="twitter:card" content="summary_large_image";
    }
}

/// The embed page for one image.
pub fn image_page(page: &EmbedPage) -> Markup {
    let main_class = if page.custom_css.is_some() {
        MAIN_CLASS
    } else {
        MAIN_CLASS_DARK
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (head_common())
                title { (SITE_NAME) }
                (preview_tags(page))
                (embed_tags(page))
                @if let Some(css) = &page.custom_css {
                    style id="custom-css" { (PreEscaped(style_text(css))) }
                }
            }
            body {
                main class=(main_class) {
                    div class="media" {
                        @if page.is_video() {
                            video class="file" src=(page.display_url) controls {}
                        } @else {
                            img class="file" src=(page.display_url) alt=(page.slug);
                        }
                    }
                    div class="actions" {
                        a class="downloadbtn" href=(page.media_url) rel="noopener noreferrer" target="_blank" {
                            "Download image " (page.slug)
                        }
                        a class="bottom-text" href=(SITE_URL) { "Disco.pics - Image hosting" }
                    }
                }
            }
        }
    }
}

/// Landing page that immediately sends the browser to `target`.
pub fn redirect_page(target: &str) -> Markup {
    // JSON string literals are valid JS string literals.
    let target_js = serde_json::to_string(target).unwrap_or_else(|_| "\"/\"".to_string());
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                title { (SITE_NAME) }
                script { (PreEscaped(format!("window.location.href = {target_js};"))) }
            }
            body {
                a href=(target) { "Continue to " (SITE_NAME) }
            }
        }
    }
}

/// Shared shell for the not-found and error pages.
pub fn message_page(heading: &str, detail: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (head_common())
                title { (heading) " | " (SITE_NAME) }
            }
            body {
                main class=(MAIN_CLASS_DARK) {
                    div class="actions" {
                        h1 class="bottom-text" { (heading) }
                        p class="bottom-text" { (detail) }
                        a class="downloadbtn" href=(SITE_URL) { "Back to " (SITE_NAME) }
                    }
                }
            }
        }
    }
}

pub fn not_found_page() -> Markup {
    message_page("Not found", "This image does not exist or has been removed.")
}
