//! Client for the registration backend
//!
//! `RegistrationApi` is the seam the flow controller talks to; the
//! `RegistrationClient` implementation posts JSON to `/api/register`.

mod registration_client;

pub use registration_client::{RegistrationApi, RegistrationClient};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::RegistrationInput;
    use crate::services::errors::{RegistrationError, GENERIC_FAILURE_MESSAGE};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn input() -> RegistrationInput {
        RegistrationInput {
            first_name: "Ren".to_string(),
            last_name: "Ito".to_string(),
            email: "ren@example.com".to_string(),
            phone_number: None,
            birth_date: None,
        }
    }

    /// Serves a single canned HTTP reply and returns the endpoint URL
    fn serve_once(status: &str, content_type: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(reply.as_bytes());
            }
        });
        format!("http://{}/api/register", addr)
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = RegistrationClient::new("http://127.0.0.1:5000/api/register");
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/api/register");
    }

    #[tokio::test]
    async fn test_closed_port_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = RegistrationClient::new(format!("http://127.0.0.1:{}/api/register", port));
        let err = client.register(&input()).await.unwrap_err();

        assert!(matches!(err, RegistrationError::Network { .. }));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_rejection_body_is_decoded_despite_status() {
        let endpoint = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"success": false, "error": "Email taken"}"#,
        );
        let client = RegistrationClient::new(endpoint);

        let response = client.register(&input()).await.unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Email taken"));
    }

    #[tokio::test]
    async fn test_html_reply_is_a_decode_error() {
        let endpoint = serve_once(
            "500 Internal Server Error",
            "text/html",
            "<h1>Internal Server Error</h1>",
        );
        let client = RegistrationClient::new(endpoint);

        let err = client.register(&input()).await.unwrap_err();

        assert!(matches!(err, RegistrationError::Decode { .. }));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
