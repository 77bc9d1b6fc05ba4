/// A navbar entry: target href and visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const HOME_PAGE: &str = "/";

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { href: "/", label: "Início" },
    NavLink { href: "/cursos", label: "Cursos" },
    NavLink { href: "/novidades", label: "Novidades" },
    NavLink { href: "/dashboard", label: "Dashboard" },
    NavLink { href: "/contato", label: "Contato" },
];

/// Normalizes a location path to the page it names: the last segment with a
/// leading slash, or the home page for an empty path.
pub fn current_page(pathname: &str) -> String {
    match pathname.trim_end_matches('/').rsplit('/').next() {
        Some(segment) if !segment.is_empty() => format!("/{}", segment),
        _ => HOME_PAGE.to_string(),
    }
}

pub fn is_active_link(href: &str, pathname: &str) -> bool {
    href == current_page(pathname)
}

/// Hrefs that should be smooth-scrolled in-page rather than followed.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href.len() > 1
}

/// Scroll destination for an anchor target under the fixed navbar.
pub fn anchor_scroll_top(offset_top: i32, navbar_height: i32) -> f64 {
    f64::from(offset_top - navbar_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_uses_last_segment() {
        assert_eq!(current_page("/cursos"), "/cursos");
        assert_eq!(current_page("/site/contato/"), "/contato");
        assert_eq!(current_page("/"), "/");
        assert_eq!(current_page(""), "/");
    }

    #[test]
    fn exactly_one_link_is_active() {
        for path in ["/", "/cursos", "/novidades", "/dashboard", "/contato"] {
            let active: Vec<_> = NAV_LINKS
                .iter()
                .filter(|l| is_active_link(l.href, path))
                .collect();
            assert_eq!(active.len(), 1, "path {}", path);
            assert_eq!(active[0].href, path);
        }
        assert!(!NAV_LINKS.iter().any(|l| is_active_link(l.href, "/cadastro")));
    }

    #[test]
    fn anchors() {
        assert!(is_in_page_anchor("#avaliacoes"));
        assert!(!is_in_page_anchor("#"));
        assert!(!is_in_page_anchor("/cursos#top"));
        assert_eq!(anchor_scroll_top(500, 80), 420.0);
    }
}
