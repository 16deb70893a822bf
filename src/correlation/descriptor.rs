//! Request and response descriptors supplied by the HTTP client.

use std::collections::HashMap;

use reqwest::header::HeaderMap;

use crate::correlation::key::{generate_key, CorrelationKey};

/// Outbound request as seen by the correlation logger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Body as text, when present and valid UTF-8.
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Correlation key over method, URL, headers and body.
    ///
    /// Non-UTF-8 bodies enter the key as lowercase hex.
    pub fn key(&self) -> CorrelationKey {
        let body = match self.body.as_deref() {
            None => String::new(),
            Some(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => hex::encode(bytes),
            },
        };
        generate_key(&self.method, &self.url, &self.headers, &body)
    }
}

impl From<&reqwest::Request> for RequestDescriptor {
    fn from(request: &reqwest::Request) -> Self {
        Self {
            method: request.method().as_str().to_string(),
            url: request.url().as_str().to_string(),
            headers: header_map(request.headers()),
            body: request
                .body()
                .and_then(|body| body.as_bytes())
                .map(<[u8]>::to_vec),
        }
    }
}

/// Status line and headers of a received response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: HashMap<String, String>,
}

impl ResponseMeta {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl From<&reqwest::Response> for ResponseMeta {
    fn from(response: &reqwest::Response) -> Self {
        Self {
            status: response.status().as_u16(),
            headers: header_map(response.headers()),
        }
    }
}

/// Flatten a header map; repeated names are joined with `", "`.
fn header_map(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        map.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Method, Url};

    #[test]
    fn test_builder_and_body_text() {
        let request = RequestDescriptor::new("POST", "https://api.test/items")
            .with_header("content-type", "application/json")
            .with_body("{\"a\":1}");

        assert_eq!(request.body_text(), Some("{\"a\":1}"));
        assert_eq!(request.headers["content-type"], "application/json");
    }

    #[test]
    fn test_invalid_utf8_body_has_no_text() {
        let request = RequestDescriptor::new("POST", "/").with_body(vec![0xff, 0xfe]);
        assert_eq!(request.body_text(), None);
    }

    #[test]
    fn test_distinct_binary_bodies_have_distinct_keys() {
        let a = RequestDescriptor::new("PUT", "https://api.test/blob").with_body(vec![0xff, 0x00]);
        let b = RequestDescriptor::new("PUT", "https://api.test/blob").with_body(vec![0xfe, 0x00]);
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), a.clone().key());
    }

    #[test]
    fn test_text_body_enters_key_verbatim() {
        let request = RequestDescriptor::new("POST", "/").with_body("ping");
        assert_eq!(request.key(), generate_key("POST", "/", &HashMap::new(), "ping"));
    }

    #[test]
    fn test_absent_and_empty_body_share_a_key() {
        let absent = RequestDescriptor::new("GET", "/");
        let empty = RequestDescriptor::new("GET", "/").with_body(Vec::new());
        assert_eq!(absent.key(), empty.key());
    }

    #[test]
    fn test_from_reqwest_request() {
        let mut request = reqwest::Request::new(
            Method::PUT,
            Url::parse("https://api.test/users/1").unwrap(),
        );
        request
            .headers_mut()
            .insert("x-trace", "abc".parse().unwrap());
        request
            .headers_mut()
            .append("accept", "text/plain".parse().unwrap());
        request
            .headers_mut()
            .append("accept", "application/json".parse().unwrap());
        *request.body_mut() = Some(reqwest::Body::from("hello"));

        let descriptor = RequestDescriptor::from(&request);
        assert_eq!(descriptor.method, "PUT");
        assert_eq!(descriptor.url, "https://api.test/users/1");
        assert_eq!(descriptor.headers["x-trace"], "abc");
        assert_eq!(descriptor.headers["accept"], "text/plain, application/json");
        assert_eq!(descriptor.body_text(), Some("hello"));
    }

    #[test]
    fn test_from_reqwest_request_without_body() {
        let request = reqwest::Request::new(Method::GET, Url::parse("https://api.test/").unwrap());
        let descriptor = RequestDescriptor::from(&request);
        assert!(descriptor.body.is_none());
        assert!(descriptor.headers.is_empty());
    }
}
