use sha2::{Digest, Sha256};

const FINGERPRINT_LEN: usize = 16;
const SEPARATOR: char = '|';
const RENDER_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

fn fingerprint(registration_id: &str, secret: &str) -> String {
    let digest = Sha256::digest(format!("{registration_id}{secret}").as_bytes());
    hex::encode(digest)[..FINGERPRINT_LEN].to_string()
}

/// Issue the QR payload for a registration: the identifier plus a keyed
/// fingerprint that cannot be forged without the secret.
pub fn issue(registration_id: &str, secret: &str) -> String {
    format!(
        "{registration_id}{SEPARATOR}{}",
        fingerprint(registration_id, secret)
    )
}

/// Verify a scanned payload and extract the registration identifier.
///
/// This is a pure predicate: malformed input of any shape yields `None`,
/// never an error.
pub fn verify(payload: &str, secret: &str) -> Option<String> {
    let mut parts = payload.split(SEPARATOR);
    let registration_id = parts.next()?;
    let presented = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    (presented == fingerprint(registration_id, secret)).then(|| registration_id.to_string())
}

/// URL rendering the payload as a scannable image. Presentation only; the
/// verification contract depends solely on the payload string.
pub fn image_url(payload: &str) -> String {
    format!(
        "{RENDER_SERVICE_URL}?size=300x300&data={}",
        urlencoding::encode(payload)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "super-secret";

    #[test]
    fn round_trip_recovers_the_registration_id() {
        let token = issue("4fd51a80-1111-2222-3333-444455556666", SECRET);

        assert_eq!(
            verify(&token, SECRET).as_deref(),
            Some("4fd51a80-1111-2222-3333-444455556666")
        );
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = issue("some-registration", SECRET);

        assert_eq!(verify(&token, "other-secret"), None);
    }

    #[test]
    fn tampered_identifier_fails_verification() {
        let token = issue("victim", SECRET);
        let fingerprint = token.split('|').nth(1).unwrap();
        let forged = format!("attacker|{fingerprint}");

        assert_eq!(verify(&forged, SECRET), None);
    }

    #[test]
    fn malformed_payloads_are_rejected_without_panicking() {
        for payload in ["", "no-separator", "a|b|c", "|", "id|"] {
            assert_eq!(verify(payload, SECRET), None);
        }
    }

    #[test]
    fn fingerprint_is_sixteen_hex_characters() {
        let token = issue("abc", SECRET);
        let fingerprint = token.split('|').nth(1).unwrap();

        assert_eq!(fingerprint.len(), 16);
        assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn image_url_percent_encodes_the_payload() {
        let url = image_url("abc|def");

        assert!(url.starts_with(RENDER_SERVICE_URL));
        assert!(url.contains("abc%7Cdef"));
    }
}
