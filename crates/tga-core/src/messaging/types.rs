/// Inline keyboard button that opens a URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkButton {
    pub label: String,
    pub url: String,
}

impl LinkButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One outbound reply, as produced by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub html: String,
    pub button: Option<LinkButton>,
}

impl Reply {
    pub fn text(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            button: None,
        }
    }

    pub fn with_button(html: impl Into<String>, button: LinkButton) -> Self {
        Self {
            html: html.into(),
            button: Some(button),
        }
    }
}
