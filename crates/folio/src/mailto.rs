//! Mail client handoff for the contact form.
//!
//! There is no backend: a submission becomes a `mailto:` URL handed to
//! the platform opener, and the user's own mail client takes it from
//! there.

use std::fmt::Write as _;
use std::io;
use std::process::{Command, Stdio};

/// Percent-encode a URL component.
///
/// Alphanumerics and `-_.!~*'()` pass through; every other byte of the
/// UTF-8 encoding becomes a `%XX` escape.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Compose the `mailto:` URL for a contact form submission.
pub fn compose(to: &str, name: &str, email: &str, message: &str) -> String {
    let subject = encode_component(&format!("Portfolio Contact from {name}"));
    let body = encode_component(&format!(
        "From: {name}\nEmail: {email}\n\nMessage:\n{message}"
    ));
    format!("mailto:{to}?subject={subject}&body={body}")
}

/// Hand a URL to the platform opener.
///
/// The spawned opener is not waited on; whether a mail client actually
/// appears is between it and the desktop.
pub fn open(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    command
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("hello"), "hello");
        assert_eq!(encode_component("Jane Doe"), "Jane%20Doe");
        assert_eq!(encode_component("a+b=c&d"), "a%2Bb%3Dc%26d");
        assert_eq!(encode_component("jane@example.com"), "jane%40example.com");
        assert_eq!(encode_component("don't panic!"), "don't%20panic!");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        // Multi-byte characters escape per UTF-8 byte.
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_compose_layout() {
        let url = compose("me@example.com", "Jane", "jane@example.com", "Hi there");
        assert_eq!(
            url,
            "mailto:me@example.com\
             ?subject=Portfolio%20Contact%20from%20Jane\
             &body=From%3A%20Jane%0AEmail%3A%20jane%40example.com%0A%0AMessage%3A%0AHi%20there"
        );
    }

    #[test]
    fn test_compose_escapes_message_content() {
        let url = compose("me@example.com", "A&B", "x@y.z", "1 + 1 = 2?");
        assert!(url.contains("subject=Portfolio%20Contact%20from%20A%26B"));
        assert!(url.contains("1%20%2B%201%20%3D%202%3F"));
    }
}
