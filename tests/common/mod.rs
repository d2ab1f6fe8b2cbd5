// SPDX-License-Identifier: MPL-2.0
//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_api;

use iced_gallery::config::{ApiConfig, ApiKey};
use iced_gallery::infrastructure::PexelsClient;

pub const TEST_KEY: &str = "test-api-key";

/// Builds a client pointed at the mock server's search route.
pub fn client_for(server: &mock_api::MockApi) -> PexelsClient {
    let api = ApiConfig {
        search_url: Some(server.url("/v1/search")),
        ..ApiConfig::default()
    };
    PexelsClient::new(&api, ApiKey::new(TEST_KEY)).expect("client builds")
}

/// JSON body for a search page holding the given photo ids.
pub fn search_body(ids: &[u64]) -> String {
    let photos: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{
                    "id": {id},
                    "photographer": "Photographer {id}",
                    "alt": "Photo {id}",
                    "src": {{
                        "medium": "https://images.example/{id}/medium.jpg",
                        "original": "https://images.example/{id}/original.jpg"
                    }}
                }}"#
            )
        })
        .collect();
    format!(r#"{{"page": 1, "per_page": 12, "photos": [{}]}}"#, photos.join(","))
}
