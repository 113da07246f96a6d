//! Pages and navigation derivation

use crate::types::NavLink;

/// The pages the window can show. Slugs are the targets nav links point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Features,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Features, Page::About, Page::Contact];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Features => "features",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    pub fn from_target(target: &str) -> Option<Page> {
        Self::ALL.iter().copied().find(|p| p.slug() == target)
    }
}

/// Built-in nav shown until (or instead of, on fetch failure) the header
/// fragment's link list.
pub fn builtin_links() -> Vec<NavLink> {
    Page::ALL
        .iter()
        .map(|p| NavLink {
            label: p.title().to_string(),
            target: p.slug().to_string(),
        })
        .collect()
}

/// Whether a nav link is the active one for the current page. Pure
/// derivation; at most the links whose target equals the slug match.
pub fn is_active(current_slug: &str, link: &NavLink) -> bool {
    link.target == current_slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, target: &str) -> NavLink {
        NavLink {
            label: label.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn matching_target_is_active() {
        let links = vec![link("Home", "home"), link("About", "about")];
        let active: Vec<bool> = links.iter().map(|l| is_active("about", l)).collect();
        assert_eq!(active, vec![false, true]);
    }

    #[test]
    fn no_match_marks_nothing() {
        let links = vec![link("Home", "home"), link("About", "about")];
        assert!(links.iter().all(|l| !is_active("pricing", l)));
    }

    #[test]
    fn exactly_one_builtin_link_active_per_page() {
        let links = builtin_links();
        for page in Page::ALL {
            let count = links
                .iter()
                .filter(|l| is_active(page.slug(), l))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn slug_roundtrip() {
        for page in Page::ALL {
            assert_eq!(Page::from_target(page.slug()), Some(page));
        }
        assert_eq!(Page::from_target("pricing"), None);
    }
}
