//! Authentication types for BigCommerce API calls.
//!
//! BigCommerce API accounts authenticate every request with a client ID and
//! an access token sent as headers. There is no token exchange or session
//! lifecycle: [`Credentials`] are simply carried by each resource instance and
//! handed to a new client per call.

mod credentials;

pub use credentials::Credentials;
