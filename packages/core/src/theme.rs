//! Theme record and the global stylesheet rendered from it

/// Colors and fonts shared by every screen.
///
/// Built once at the composition root and handed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub blue_color: String,
    pub grey_color: String,
    pub yellow_color: String,
    pub green_color: String,
    pub font_family: String,
    pub font_import_url: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            blue_color: "#3498db".to_string(),
            grey_color: "#7f8c8d".to_string(),
            yellow_color: "#f1c40f".to_string(),
            green_color: "#2ecc71".to_string(),
            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, \
                          Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif"
                .to_string(),
            font_import_url: Some(
                "https://fonts.googleapis.com/css2?family=Maven+Pro:wght@400;500;600;700&display=swap"
                    .to_string(),
            ),
        }
    }
}

// Condensed element reset
const RESET: &str = "\
html, body, div, span, h1, h2, h3, h4, h5, h6, p, a, img, ul, ol, li, \
form, label, table, tr, th, td, article, aside, footer, header, nav, section, main {
  margin: 0;
  padding: 0;
  border: 0;
  font-size: 100%;
  font: inherit;
  vertical-align: baseline;
}
ol, ul {
  list-style: none;
}
table {
  border-collapse: collapse;
  border-spacing: 0;
}
";

/// Render the global stylesheet for `theme`
pub fn global_stylesheet(theme: &Theme) -> String {
    let mut css = String::new();

    if let Some(url) = &theme.font_import_url {
        css.push_str(&format!("@import url('{}');\n", url));
    }
    css.push_str(RESET);
    css.push_str(&format!(
        "* {{
  box-sizing: border-box;
}}
body {{
  font-family: {font};
}}
a {{
  color: inherit;
  text-decoration: none;
}}
input:focus, input:active, button:focus, button:active {{
  outline: none;
}}
.toast-error {{
  background: {grey};
  color: white;
}}
.button-primary {{
  background: {blue};
  color: white;
}}
",
        font = theme.font_family,
        grey = theme.grey_color,
        blue = theme.blue_color,
    ));

    css
}
