pub struct WikiLink;

impl WikiLink {
    pub const HYPHEN: char = '-';
    pub const EXTENSION: &'static str = ".html";

    /// `about-me` links to `about-me.html`.
    pub fn href(name: &str) -> String {
        format!("{name}{}", Self::EXTENSION)
    }

    /// Only the first hyphen becomes a space: `a-b-c` displays as `a b-c`.
    pub fn display_name(name: &str) -> String {
        name.replacen(Self::HYPHEN, " ", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_appends_html_extension() {
        assert_eq!(WikiLink::href("about-me"), "about-me.html");
    }

    #[test]
    fn display_replaces_first_hyphen_only() {
        assert_eq!(WikiLink::display_name("about-me"), "about me");
        assert_eq!(WikiLink::display_name("a-b-c"), "a b-c");
        assert_eq!(WikiLink::display_name("plain"), "plain");
    }
}
