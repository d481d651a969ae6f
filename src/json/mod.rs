//! JSON response envelopes.
//!
//! Every response body has the shape
//! `{"success": bool, "message": string, "data": any}`. The HTTP status is
//! carried alongside for the web framework to use.
//!
//! # Example
//!
//! ```
//! use fst_helpers::json::*;
//! use serde_json::json;
//!
//! let resp = JsonResponse::not_found();
//! assert_eq!(resp.status, 404);
//!
//! let body = json_response_string(&json!(false), "Gespeichert", "Fehler", ResponseOptions::default()).unwrap();
//! assert_eq!(body, r#"{"success":false,"message":"Fehler"}"#);
//! ```

mod response;

pub use response::*;
