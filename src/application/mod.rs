// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the gallery and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The gallery controller talks to ports only, never to `reqwest` or the
//!   filesystem directly
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::{PhotoSearch, SearchRequest};
//! use iced_gallery::infrastructure::PexelsClient;
//!
//! // Infrastructure implements the port trait
//! let client = PexelsClient::new(api_config, api_key)?;
//! let photos = client.search(request).await?;
//! ```

pub mod port;
