//! Common types and data structures

use serde::Deserialize;

/// Navigation entry carried by the header fragment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// Header fragment: brand line plus navigation, fetched as remote JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeaderFragment {
    pub brand: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// External link carried by the footer fragment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// Footer fragment: closing text plus external links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterFragment {
    pub text: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// Outcome of one fragment retrieval. A failed fetch is terminal for this
/// run; the built-in chrome stays in place.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentStatus<T> {
    Pending,
    Loaded(T),
    Failed,
}

impl<T> Default for FragmentStatus<T> {
    fn default() -> Self {
        FragmentStatus::Pending
    }
}

impl<T> FragmentStatus<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FragmentStatus::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Slots the two fragment tasks write into, shared with the UI thread.
/// Each task touches only its own slot, so one failing never disturbs
/// the other.
#[derive(Debug, Default)]
pub struct FragmentSlots {
    pub header: FragmentStatus<HeaderFragment>,
    pub footer: FragmentStatus<FooterFragment>,
}
