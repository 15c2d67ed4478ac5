use crate::config::EndpointConfig;
use crate::form::submission::Submission;
use crate::submit::{MailTransport, SubmitError};
use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

/// Posts submissions as JSON to the configured endpoint.
pub struct HttpMailer {
    client: reqwest::Client,
    url: Url,
}

impl HttpMailer {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, SubmitError> {
        let raw = endpoint.url();
        let url = Url::parse(&raw).map_err(|e| SubmitError::InvalidEndpoint {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .timeout(endpoint.timeout())
            .build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl MailTransport for HttpMailer {
    async fn send(&self, submission: &Submission) -> Result<(), SubmitError> {
        debug!(url = %self.url, "posting submission");
        let response = self
            .client
            .post(self.url.clone())
            .json(submission)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Accept one request, answer with `status_line`, and hand back the raw request.
    async fn serve_once(status_line: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                status_line
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
        });
        (origin, rx)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn endpoint(origin: String) -> EndpointConfig {
        EndpointConfig {
            origin,
            path: "/api/send-email".into(),
            timeout_secs: 5,
        }
    }

    fn sample() -> Submission {
        Submission {
            name: "Anna".into(),
            company: "Studio".into(),
            contact: "a@b.co".into(),
            about: "A new website".into(),
            budget: 20_000,
        }
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let (origin, request) = serve_once("200 OK").await;
        let mailer = HttpMailer::new(&endpoint(origin)).unwrap();

        mailer.send(&sample()).await.unwrap();

        let raw = request.await.unwrap();
        assert!(raw.starts_with("POST /api/send-email HTTP/1.1"));
        assert!(raw
            .to_ascii_lowercase()
            .contains("content-type: application/json"));
        let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["name"], "Anna");
        assert_eq!(json["company"], "Studio");
        assert_eq!(json["contact"], "a@b.co");
        assert_eq!(json["about"], "A new website");
        assert_eq!(json["budget"], 20000);
    }

    #[tokio::test]
    async fn test_error_status_is_a_failure() {
        let (origin, _request) = serve_once("502 Bad Gateway").await;
        let mailer = HttpMailer::new(&endpoint(origin)).unwrap();

        let err = mailer.send(&sample()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Status { status: 502 }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_failure() {
        // Bind and drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let mailer = HttpMailer::new(&endpoint(origin)).unwrap();

        let err = mailer.send(&sample()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[test]
    fn test_rejects_malformed_origin() {
        let err = HttpMailer::new(&endpoint("not a url".into())).err().unwrap();
        assert!(matches!(err, SubmitError::InvalidEndpoint { .. }));
    }
}
