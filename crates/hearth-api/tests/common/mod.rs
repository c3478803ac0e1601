#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use hearth_api::{ApiClient, ApiRequest, ApiResponse, ApiSettings, HttpClient};
use hearth_retry::RetryPolicy;
use serde_json::{Value, json};

pub const BASE_URL: &str = "http://crm.test/api";

pub enum Reply {
    Json(u16, Value),
    Text(u16, &'static str),
    Fail(&'static str),
    Hang,
}

/// Scripted transport: answers requests from a queue and records them.
#[derive(Default)]
pub struct MockHttp {
    replies:  Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockHttp {
    pub fn new() -> Self { Self::default() }

    pub fn reply(self, reply: Reply) -> Self {
        self.push(reply);
        self
    }

    pub fn push(&self, reply: Reply) { self.replies.lock().unwrap().push_back(reply); }

    pub fn requests(&self) -> Vec<ApiRequest> { self.requests.lock().unwrap().clone() }

    pub fn request_count(&self) -> usize { self.requests.lock().unwrap().len() }
}

impl HttpClient for MockHttp {
    type Error = io::Error;

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, io::Error> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Json(status, body)) => Ok(ApiResponse::new(status, serde_json::to_vec(&body).unwrap())),
            Some(Reply::Text(status, body)) => Ok(ApiResponse::new(status, body)),
            Some(Reply::Fail(reason)) => Err(io::Error::new(io::ErrorKind::ConnectionReset, reason)),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(io::Error::other("no reply scripted")),
        }
    }
}

/// Fast retries so paused-clock tests stay short.
pub fn quick_retries(max_retries: u32) -> RetryPolicy {
    RetryPolicy::default()
        .max_retries(max_retries)
        .initial_delay(Duration::from_millis(10))
        .max_delay(Duration::from_millis(40))
}

pub fn client(http: MockHttp) -> ApiClient<MockHttp> {
    ApiClient::new(http, ApiSettings::new(BASE_URL).timeout(Duration::from_secs(2)))
        .unwrap()
        .retry_policy(quick_retries(2))
}

pub fn property(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "kind": "apartment",
        "price": { "amount": 520000, "currency": "BRL" },
        "address": { "city": "Porto Alegre" }
    })
}

pub fn page(data: Vec<Value>, has_more: bool) -> Value { json!({ "data": data, "hasMore": has_more }) }
