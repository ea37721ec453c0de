//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{
    MockDiveEntryCommand, MockDiveEntryQuery, MockSightingCommand, MockSightingQuery,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

const BOUNDARY: &str = "nudilog-test-boundary";

/// Mocked driving ports. Expectations are set before [`MockPorts::app`].
#[derive(Default)]
pub struct MockPorts {
    pub dive_entries: MockDiveEntryCommand,
    pub dive_entries_query: MockDiveEntryQuery,
    pub sightings: MockSightingCommand,
    pub sightings_query: MockSightingQuery,
}

impl MockPorts {
    /// Build an application serving every endpoint against the mocks.
    pub fn app(
        self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(
            Arc::new(self.dive_entries),
            Arc::new(self.dive_entries_query),
            Arc::new(self.sightings),
            Arc::new(self.sightings_query),
        );
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(crate::inbound::http::configure)
    }
}

/// Hand-assembled `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text part.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Append a file part.
    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    /// Close the body.
    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}
