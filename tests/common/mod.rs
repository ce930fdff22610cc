// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use quillside_client::prefs::CookieJar;
use quillside_client::surface::{FormHandle, FragmentHandle, HostPage, IndicatorHandle};
use std::cell::{Cell, RefCell};
use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

pub const VALID_PASSWORD: &str = "correct horse";
pub const TAKEN_NAME: &str = "taken";

/// In-process stand-in for the publishing server, reproducing its wire
/// conventions: a literal token for login, `name#error` for user creation,
/// empty-means-success for password changes, `true`/`false` for moderation
/// actions and a raw markup fragment for pagination.
pub struct TestServer {
    pub base_url: String,
    state: web::Data<ServerState>,
}

impl TestServer {
    pub fn queries(&self) -> Vec<String> {
        self.state.queries.lock().expect("queries lock").clone()
    }
}

#[derive(Default)]
pub struct ServerState {
    queries: Mutex<Vec<String>>,
}

pub async fn start_publishing_server() -> TestServer {
    let _ = env_logger::builder().is_test(true).try_init();

    let state = web::Data::new(ServerState::default());
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    let app_state = state.clone();
    actix_web::rt::spawn(async move {
        let _ = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/login", web::post().to(handle_login))
                .route("/", web::post().to(handle_root_post))
                .route("/", web::get().to(handle_root_get))
        })
        .listen(listener)
        .expect("listen")
        .run()
        .await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        state,
    }
}

fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

async fn handle_login(form: web::Form<Vec<(String, String)>>) -> HttpResponse {
    if field(&form.0, "password") == Some(VALID_PASSWORD) {
        HttpResponse::Ok().body("success")
    } else {
        HttpResponse::Ok().body("wrong credentials")
    }
}

async fn handle_root_post(
    req: HttpRequest,
    state: web::Data<ServerState>,
    form: web::Form<Vec<(String, String)>>,
) -> HttpResponse {
    let query = req.query_string().to_string();
    state.queries.lock().expect("queries lock").push(query.clone());

    if query.contains("newUser") {
        let name = field(&form.0, "name").unwrap_or_default();
        if name == TAKEN_NAME {
            HttpResponse::Ok().body("#name taken")
        } else {
            HttpResponse::Ok().body(format!("{}#", name))
        }
    } else if query.contains("password") {
        let new = field(&form.0, "new").unwrap_or_default();
        if new.len() < 6 {
            HttpResponse::Ok().body("Password too short.")
        } else {
            HttpResponse::Ok().body("")
        }
    } else if query.contains("verify") {
        let verified =
            field(&form.0, "postId") == Some("1") && field(&form.0, "commentId") == Some("7");
        HttpResponse::Ok().body(if verified { "true" } else { "false" })
    } else if query.contains("delete") {
        let deleted = field(&form.0, "postId") == Some("1");
        HttpResponse::Ok().body(if deleted { "true" } else { "false" })
    } else {
        HttpResponse::NotFound().finish()
    }
}

async fn handle_root_get(req: HttpRequest, state: web::Data<ServerState>) -> HttpResponse {
    let query = req.query_string().to_string();
    state.queries.lock().expect("queries lock").push(query.clone());

    match query.strip_prefix("more=").and_then(|raw| raw.parse::<u64>().ok()) {
        Some(offset) => HttpResponse::Ok().body(more_markup(offset)),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Markup the test server serves for a pagination request; tests compare
/// the spliced placeholder content against this byte-for-byte.
pub fn more_markup(offset: u64) -> String {
    format!("<article class=\"entry\">entries from {}</article>", offset)
}

// ---- recording implementations of the host-page handles ----

#[derive(Default)]
pub struct RecordingIndicator {
    visible: Cell<bool>,
    message: RefCell<String>,
}

impl RecordingIndicator {
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }
}

impl IndicatorHandle for RecordingIndicator {
    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }

    fn set_message(&self, text: &str) {
        *self.message.borrow_mut() = text.to_string();
    }
}

pub struct RecordingForm {
    fields: RefCell<Vec<(String, String)>>,
    resets: Cell<u32>,
}

impl RecordingForm {
    pub fn new(fields: Vec<(&str, &str)>) -> Self {
        Self {
            fields: RefCell::new(
                fields
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect(),
            ),
            resets: Cell::new(0),
        }
    }

    pub fn resets(&self) -> u32 {
        self.resets.get()
    }
}

impl FormHandle for RecordingForm {
    fn fields(&self) -> Vec<(String, String)> {
        self.fields.borrow().clone()
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingFragment {
    content: RefCell<Option<String>>,
}

impl RecordingFragment {
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl FragmentHandle for RecordingFragment {
    fn replace_with(&self, markup: &str) {
        *self.content.borrow_mut() = Some(markup.to_string());
    }
}

#[derive(Default)]
pub struct RecordingPage {
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    reloads: RefCell<Vec<Duration>>,
}

impl RecordingPage {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn reloads(&self) -> Vec<Duration> {
        self.reloads.borrow().clone()
    }
}

impl HostPage for RecordingPage {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, location: &str) {
        self.navigations.borrow_mut().push(location.to_string());
    }

    fn schedule_reload(&self, delay: Duration) {
        self.reloads.borrow_mut().push(delay);
    }
}

#[derive(Default)]
pub struct MemoryJar {
    pairs: RefCell<Vec<(String, String)>>,
}

impl CookieJar for MemoryJar {
    fn read(&self) -> String {
        self.pairs
            .borrow()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, pair: &str) {
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let mut pairs = self.pairs.borrow_mut();
        if let Some(existing) = pairs.iter_mut().find(|(key, _)| key == name) {
            existing.1 = value.to_string();
        } else {
            pairs.push((name.to_string(), value.to_string()));
        }
    }
}
