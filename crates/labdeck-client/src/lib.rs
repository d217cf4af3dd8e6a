//! # labdeck-client
//!
//! Talks to the container backend over HTTP.
//!
//! - [`ContainerApi`](api::ContainerApi): the seam the UI dispatcher is
//!   written against, one method per endpoint.
//! - [`HttpApi`](http::HttpApi): the `reqwest` implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use labdeck_client::api::ContainerApi;
//! use labdeck_client::http::HttpApi;
//!
//! # async fn run() -> Result<(), labdeck_client::error::ApiError> {
//! let api = HttpApi::new("http://127.0.0.1:5000")?;
//! let created = api.create(2).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod http;
