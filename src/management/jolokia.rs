// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::borrow::Cow;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::consts::{JOLOKIA_PAGE_SIZE, MANAGEMENT_HTTP_TIMEOUT_SECS};
use crate::errors::ManagementError;
use crate::management::{AddressRecord, ManagementResult, QueueRecord};
use crate::observability::messages::broker::ManagementCallFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::ManagementClient;

/// Blocking HTTP POST of a JSON body.
///
/// Abstracted so the Jolokia client can be exercised without a broker.
pub trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<Vec<u8>, ManagementError>;
}

/// [`HttpTransport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ManagementError> {
        Self::with_timeout(Duration::from_secs(MANAGEMENT_HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ManagementError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ManagementError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<Vec<u8>, ManagementError> {
        let mut request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .map_err(|e| ManagementError::Http(format!("POST request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManagementError::Status {
                status: status.as_u16(),
                message: format!("HTTP {} from POST {}", status, url),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ManagementError::Http(format!("Failed to read response: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct JolokiaResponse {
    status: u16,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    data: Vec<T>,
    /// Total number of entries across all pages.
    #[serde(default)]
    count: Option<usize>,
}

/// Artemis management through the Jolokia bridge of its web console.
///
/// Every operation is a JSON `exec` request against the broker MBean
/// `org.apache.activemq.artemis:broker="<name>"`.
pub struct JolokiaClient {
    endpoint: String,
    mbean: String,
    authorization: String,
    page_size: u32,
    transport: Box<dyn HttpTransport>,
}

impl JolokiaClient {
    pub fn new(
        host: &str,
        web_port: u16,
        broker_name: &str,
        user: &str,
        password: &str,
    ) -> Result<Self, ManagementError> {
        Ok(Self::with_transport(
            host,
            web_port,
            broker_name,
            user,
            password,
            Box::new(ReqwestTransport::new()?),
        ))
    }

    pub fn with_transport(
        host: &str,
        web_port: u16,
        broker_name: &str,
        user: &str,
        password: &str,
        transport: Box<dyn HttpTransport>,
    ) -> Self {
        Self {
            endpoint: format!("http://{}:{}/console/jolokia", url_host(host), web_port),
            mbean: format!("org.apache.activemq.artemis:broker=\"{}\"", broker_name),
            authorization: format!("Basic {}", BASE64.encode(format!("{}:{}", user, password))),
            page_size: JOLOKIA_PAGE_SIZE,
            transport,
        }
    }

    /// Entries requested per list page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn mbean(&self) -> &str {
        &self.mbean
    }

    fn exec(&self, operation: &str, arguments: Vec<Value>) -> Result<Value, ManagementError> {
        let body = json!({
            "type": "exec",
            "mbean": self.mbean,
            "operation": operation,
            "arguments": arguments,
        })
        .to_string();

        let bytes = self.transport.post_json(
            &self.endpoint,
            &[("Authorization", self.authorization.as_str())],
            &body,
        )?;

        let response: JolokiaResponse = serde_json::from_slice(&bytes)?;
        if response.status != 200 {
            return Err(ManagementError::Status {
                status: response.status,
                message: response.error.unwrap_or_default(),
            });
        }

        Ok(response.value)
    }

    fn call(&self, operation: &str, arguments: Vec<Value>) -> ManagementResult {
        match self.exec(operation, arguments) {
            Ok(value) => ManagementResult::ok(value),
            Err(error) => self.failed(operation, error),
        }
    }

    /// One page of a list operation. Pages are numbered from 1.
    ///
    /// List operations answer with a JSON document encoded as a string.
    fn page<T: DeserializeOwned>(&self, operation: &str, number: u32) -> Result<Page<T>, ManagementError> {
        let options = json!({"field": "", "operation": "", "value": ""}).to_string();
        let value = self.exec(operation, vec![json!(options), json!(number), json!(self.page_size)])?;

        Ok(match value {
            Value::String(encoded) => serde_json::from_str(&encoded)?,
            other => serde_json::from_value(other)?,
        })
    }

    /// Every entry of a list operation, page by page.
    ///
    /// Stops once the reported `count` is reached or a page comes back
    /// short. A failure on any page fails the whole listing.
    fn list<T: DeserializeOwned>(&self, operation: &str) -> ManagementResult<Vec<T>> {
        let mut entries = Vec::new();
        let mut number = 1;

        loop {
            let page: Page<T> = match self.page(operation, number) {
                Ok(page) => page,
                Err(error) => return self.failed(operation, error),
            };

            let received = page.data.len();
            entries.extend(page.data);

            let complete = match page.count {
                Some(count) => entries.len() >= count,
                None => false,
            };
            if complete || received < self.page_size as usize {
                break;
            }
            number += 1;
        }

        ManagementResult::ok(entries)
    }

    fn failed<T>(&self, operation: &str, error: ManagementError) -> ManagementResult<T> {
        ManagementCallFailed {
            endpoint: &self.endpoint,
            operation,
            error: &error,
        }
        .log();
        ManagementResult::failed(error.to_string())
    }
}

/// IPv6 literals need brackets inside a URL authority.
fn url_host(host: &str) -> Cow<'_, str> {
    if host.contains(':') && !host.starts_with('[') {
        Cow::Owned(format!("[{}]", host))
    } else {
        Cow::Borrowed(host)
    }
}

impl ManagementClient for JolokiaClient {
    fn list_queues(&self) -> ManagementResult<Vec<QueueRecord>> {
        self.list("listQueues(java.lang.String,int,int)")
    }

    fn list_addresses(&self) -> ManagementResult<Vec<AddressRecord>> {
        self.list("listAddresses(java.lang.String,int,int)")
    }

    fn create_address(&self, name: &str, routing_type: &str) -> ManagementResult {
        self.call(
            "createAddress(java.lang.String,java.lang.String)",
            vec![json!(name), json!(routing_type)],
        )
    }

    fn create_queue(
        &self,
        address: &str,
        queue: &str,
        durable: bool,
        routing_type: &str,
    ) -> ManagementResult {
        self.call(
            "createQueue(java.lang.String,java.lang.String,java.lang.String,java.lang.String,boolean,int,boolean,boolean)",
            vec![
                json!(address),
                json!(routing_type),
                json!(queue),
                Value::Null,
                json!(durable),
                json!(-1),
                json!(false),
                json!(true),
            ],
        )
    }

    fn delete_address(&self, name: &str, force: bool) -> ManagementResult {
        self.call(
            "deleteAddress(java.lang.String,boolean)",
            vec![json!(name), json!(force)],
        )
    }

    fn delete_queue(&self, name: &str, remove_consumers: bool) -> ManagementResult {
        self.call(
            "destroyQueue(java.lang.String,boolean)",
            vec![json!(name), json!(remove_consumers)],
        )
    }
}
