//! HTTP responses for the preview server.
//!
//! Routing produces a [`Reply`] without touching the socket, so every
//! route can be checked in tests; [`send`] writes it to the client.

use crate::{
    config::SiteConfig,
    generator::sitemap::render_sitemap,
    page::{Clock, PageTimestamp, render_page},
    utils::{
        html::escape,
        mime::types::{HTML, PLAIN, XML},
    },
};
use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// A fully computed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Value for the `Allow` header on 405.
    pub allow: Option<&'static str>,
}

impl Reply {
    fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
            allow: None,
        }
    }

    fn not_found() -> Self {
        Self::new(404, PLAIN, "404 Not Found")
    }

    pub fn unavailable() -> Self {
        Self::new(503, PLAIN, "503 Service Unavailable")
    }

    fn method_not_allowed() -> Self {
        Self {
            allow: Some("GET, HEAD"),
            ..Self::new(405, PLAIN, "405 Method Not Allowed")
        }
    }

    fn render_error(error: &anyhow::Error) -> Self {
        let error_str = format!("{error:#}");
        let msg = escape(&error_str);
        let body = format!("<html><body><h1>Render Error</h1><pre>{msg}</pre></body></html>");
        Self::new(500, HTML, body)
    }
}

/// Route one request. HEAD is answered like GET; `send` drops the body.
pub fn route(method: &Method, url: &str, config: &SiteConfig, clock: &dyn Clock) -> Reply {
    if !matches!(method, Method::Get | Method::Head) {
        return Reply::method_not_allowed();
    }

    let path = url.split(['?', '#']).next().unwrap_or("/");
    let sitemap_url = format!("/{}", config.build.sitemap.path.display());

    match path {
        "/" | "/index.html" => match render_page(&config.site, &clock.now_iso()) {
            Ok(page) => Reply::new(200, HTML, page.html),
            Err(e) => Reply::render_error(&anyhow::Error::from(e)),
        },
        p if config.build.sitemap.enable && p == sitemap_url => {
            match PageTimestamp::parse(&clock.now_iso()) {
                Ok(ts) => Reply::new(200, XML, render_sitemap(config, ts)),
                Err(e) => Reply::render_error(&anyhow::Error::from(e)),
            }
        }
        _ => Reply::not_found(),
    }
}

/// Write a reply to the client.
pub fn send(request: Request, reply: Reply) -> Result<()> {
    let head_only = request.method() == &Method::Head;

    let mut headers = vec![make_header("Content-Type", reply.content_type)?];
    if let Some(allow) = reply.allow {
        headers.push(make_header("Allow", allow)?);
    }

    if head_only {
        let mut response = Response::empty(StatusCode(reply.status));
        for header in headers {
            response.add_header(header);
        }
        request.respond(response)?;
    } else {
        let mut response =
            Response::from_data(reply.body).with_status_code(StatusCode(reply.status));
        for header in headers {
            response.add_header(header);
        }
        request.respond(response)?;
    }
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
