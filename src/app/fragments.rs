//! Fragment composition: header and footer chrome fetched over HTTP
//!
//! The two retrievals are spawned as separate tasks and never joined, so
//! they complete or fail in either order. A failure is logged and leaves
//! the built-in chrome in place; it never disturbs the other fragment.

use crate::constants::{FOOTER_FRAGMENT_URL, HEADER_FRAGMENT_URL};
use crate::types::{FooterFragment, FragmentSlots, FragmentStatus, HeaderFragment};
use eframe::egui;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use super::App;

impl App {
    /// Kick off both fragment retrievals. Called once, on the first frame.
    pub fn start_fragment_compose(&mut self, ctx: &egui::Context) {
        let client = reqwest::Client::new();

        {
            let slots = Arc::clone(&self.fragment_slots);
            let client = client.clone();
            let ctx = ctx.clone();
            self.runtime.spawn(async move {
                load_header(&slots, &client, HEADER_FRAGMENT_URL).await;
                ctx.request_repaint();
            });
        }

        {
            let slots = Arc::clone(&self.fragment_slots);
            let ctx = ctx.clone();
            self.runtime.spawn(async move {
                load_footer(&slots, &client, FOOTER_FRAGMENT_URL).await;
                ctx.request_repaint();
            });
        }
    }
}

pub(crate) async fn load_header(
    slots: &Mutex<FragmentSlots>,
    client: &reqwest::Client,
    url: &str,
) {
    match fetch_fragment::<HeaderFragment>(client, url).await {
        Ok(fragment) => {
            debug!(brand = %fragment.brand, links = fragment.links.len(), "Header fragment loaded");
            slots.lock().unwrap().header = FragmentStatus::Loaded(fragment);
        }
        Err(e) => {
            warn!(error = %e, url, "Header fragment fetch failed, keeping built-in header");
            slots.lock().unwrap().header = FragmentStatus::Failed;
        }
    }
}

pub(crate) async fn load_footer(
    slots: &Mutex<FragmentSlots>,
    client: &reqwest::Client,
    url: &str,
) {
    match fetch_fragment::<FooterFragment>(client, url).await {
        Ok(fragment) => {
            debug!(links = fragment.links.len(), "Footer fragment loaded");
            slots.lock().unwrap().footer = FragmentStatus::Loaded(fragment);
        }
        Err(e) => {
            warn!(error = %e, url, "Footer fragment fetch failed, keeping built-in footer");
            slots.lock().unwrap().footer = FragmentStatus::Failed;
        }
    }
}

async fn fetch_fragment<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const HEADER_JSON: &str = r#"{
        "brand": "Liquid",
        "tagline": "Design that flows",
        "links": [
            {"label": "Home", "target": "home"},
            {"label": "About", "target": "about"}
        ]
    }"#;

    const FOOTER_JSON: &str = r#"{
        "text": "Made by the Liquid team",
        "links": [{"label": "GitHub", "url": "https://github.com/liquidlabs-studio"}]
    }"#;

    /// Loopback server answering /header.json and /footer.json; anything
    /// else gets a 404.
    fn spawn_server(serve_header: bool, serve_footer: bool) -> (Arc<tiny_http::Server>, String) {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let base = format!("http://{}", server.server_addr().to_ip().unwrap());
        let handle = Arc::clone(&server);
        std::thread::spawn(move || {
            for request in handle.incoming_requests() {
                let response = match request.url() {
                    "/header.json" if serve_header => {
                        tiny_http::Response::from_string(HEADER_JSON)
                    }
                    "/footer.json" if serve_footer => {
                        tiny_http::Response::from_string(FOOTER_JSON)
                    }
                    _ => tiny_http::Response::from_string("not found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });
        (server, base)
    }

    #[test]
    fn header_fragment_parses() {
        let fragment: HeaderFragment = serde_json::from_str(HEADER_JSON).unwrap();
        assert_eq!(fragment.brand, "Liquid");
        assert_eq!(fragment.links.len(), 2);
        assert_eq!(fragment.links[1].target, "about");
    }

    #[test]
    fn footer_fragment_parses_without_links() {
        let fragment: FooterFragment =
            serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(fragment.text, "hello");
        assert!(fragment.links.is_empty());
    }

    #[tokio::test]
    async fn both_fragments_load_when_served() {
        let (_server, base) = spawn_server(true, true);
        let slots = Arc::new(Mutex::new(FragmentSlots::default()));
        let client = reqwest::Client::new();

        load_header(&slots, &client, &format!("{base}/header.json")).await;
        load_footer(&slots, &client, &format!("{base}/footer.json")).await;

        let slots = slots.lock().unwrap();
        assert!(matches!(slots.header, FragmentStatus::Loaded(_)));
        assert!(matches!(slots.footer, FragmentStatus::Loaded(_)));
    }

    #[tokio::test]
    async fn footer_survives_header_failure() {
        let (_server, base) = spawn_server(false, true);
        let slots = Arc::new(Mutex::new(FragmentSlots::default()));
        let client = reqwest::Client::new();

        load_header(&slots, &client, &format!("{base}/header.json")).await;
        load_footer(&slots, &client, &format!("{base}/footer.json")).await;

        let slots = slots.lock().unwrap();
        assert_eq!(slots.header, FragmentStatus::Failed);
        let footer = slots.footer.loaded().expect("footer should have loaded");
        assert_eq!(footer.links.len(), 1);
    }

    #[tokio::test]
    async fn header_survives_footer_failure() {
        let (_server, base) = spawn_server(true, false);
        let slots = Arc::new(Mutex::new(FragmentSlots::default()));
        let client = reqwest::Client::new();

        load_footer(&slots, &client, &format!("{base}/footer.json")).await;
        load_header(&slots, &client, &format!("{base}/header.json")).await;

        let slots = slots.lock().unwrap();
        assert_eq!(slots.footer, FragmentStatus::Failed);
        assert!(slots.header.loaded().is_some());
    }

    #[tokio::test]
    async fn unreachable_host_fails_without_panicking() {
        // Port 1 on loopback refuses connections.
        let slots = Arc::new(Mutex::new(FragmentSlots::default()));
        let client = reqwest::Client::new();

        load_header(&slots, &client, "http://127.0.0.1:1/header.json").await;

        let slots = slots.lock().unwrap();
        assert_eq!(slots.header, FragmentStatus::Failed);
        assert_eq!(slots.footer, FragmentStatus::Pending);
    }
}
