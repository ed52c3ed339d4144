//! HTML document wrapper applied to every generated page.

use crate::paths::asset_path;

/// Id of the element the app renders into and hydrates from.
pub const APP_ROOT_ID: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Global stylesheet, relative to the site root.
    pub stylesheet: String,
    /// ES module that hydrates the page, relative to the site root.
    pub client_script: Option<String>,
    pub lang: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            stylesheet: "static/tailwind.css".to_string(),
            client_script: None,
            lang: "en".to_string(),
        }
    }
}

/// Wrap server-rendered markup in a complete HTML document.
#[must_use]
pub fn render_document(config: &ShellConfig, title: &str, body: &str) -> String {
    let client_script = config
        .client_script
        .as_deref()
        .map(|script| {
            format!(
                "<script type=\"module\">import init from \"{}\"; init();</script>\n",
                escape_html(&asset_path(script))
            )
        })
        .unwrap_or_default();
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"{stylesheet}\">\n",
            "{client_script}",
            "</head>\n",
            "<body class=\"bg-gray-800\">\n",
            "<div id=\"{root}\">{body}</div>\n",
            "</body>\n",
            "</html>\n",
        ),
        lang = escape_html(&config.lang),
        title = escape_html(title),
        stylesheet = escape_html(&asset_path(&config.stylesheet)),
        client_script = client_script,
        root = APP_ROOT_ID,
        body = body,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
