// src/password.rs
//
// Password hashes in the format Werkzeug's `check_password_hash` understands:
//
//     pbkdf2:<digest>:<iterations>$<salt>$<hex digest>
//
// The quiz application authenticates with Werkzeug, so seeded users can only
// log in if their hashes use this exact encoding.

pub const DEFAULT_ITERATIONS: u32 = 600_000;
pub const SALT_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    Sha256,
    Sha512,
}

impl Digest {
    fn name(self) -> &'static str {
        match self {
            Digest::Sha256 => "sha256",
            Digest::Sha512 => "sha512",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sha256" => Some(Digest::Sha256),
            "sha512" => Some(Digest::Sha512),
            _ => None,
        }
    }

    fn derive(self, password: &[u8], salt: &[u8], iterations: u32) -> Vec<u8> {
        match self {
            Digest::Sha256 => {
                let mut out = [0u8; 32];
                pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut out);
                out.to_vec()
            }
            Digest::Sha512 => {
                let mut out = [0u8; 64];
                pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut out);
                out.to_vec()
            }
        }
    }
}

/// Hashes `password` with the default method, `pbkdf2:sha256:600000`.
pub fn generate_password_hash(password: &str) -> anyhow::Result<String> {
    generate_password_hash_with(password, Digest::Sha256, DEFAULT_ITERATIONS)
}

/// Hashes `password` with an explicit digest and iteration count.
///
/// A fresh 16-character alphanumeric salt is drawn for every call, so two
/// hashes of the same password never compare equal.
pub fn generate_password_hash_with(
    password: &str,
    digest: Digest,
    iterations: u32,
) -> anyhow::Result<String> {
    if iterations == 0 {
        anyhow::bail!("PBKDF2 iteration count must be greater than zero");
    }

    let salt = gen_salt(SALT_LENGTH);
    let derived = digest.derive(password.as_bytes(), salt.as_bytes(), iterations);

    Ok(format!(
        "pbkdf2:{}:{}${}${}",
        digest.name(),
        iterations,
        salt,
        hex::encode(derived)
    ))
}

/// Checks `password` against a stored hash.
///
/// Anything that cannot be parsed, or uses a method other than PBKDF2 with
/// SHA-256/SHA-512, simply fails to verify.
pub fn check_password_hash(pwhash: &str, password: &str) -> bool {
    let mut parts = pwhash.splitn(3, '$');
    let (Some(method), Some(salt), Some(expected_hex)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let Some((digest, iterations)) = parse_method(method) else {
        return false;
    };
    let Ok(expected) = hex::decode(expected_hex) else {
        return false;
    };

    let actual = digest.derive(password.as_bytes(), salt.as_bytes(), iterations);
    constant_time_eq(&actual, &expected)
}

fn parse_method(method: &str) -> Option<(Digest, u32)> {
    let args = method.strip_prefix("pbkdf2:")?;
    let mut args = args.split(':');
    let digest = Digest::from_name(args.next()?)?;
    let iterations = match args.next() {
        Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0)?,
        None => DEFAULT_ITERATIONS,
    };
    if args.next().is_some() {
        return None;
    }
    Some((digest, iterations))
}

fn gen_salt(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keeps the suite fast in debug builds.
    const TEST_ITERATIONS: u32 = 1_000;

    #[test]
    fn hash_has_werkzeug_layout() {
        let hash = generate_password_hash_with("test1234", Digest::Sha256, TEST_ITERATIONS).unwrap();
        let parts: Vec<&str> = hash.split('$').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "pbkdf2:sha256:1000");
        assert_eq!(parts[1].len(), SALT_LENGTH);
        assert!(parts[1].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(parts[2].len(), 64);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hash_verifies_and_differs_from_plaintext() {
        let hash = generate_password_hash_with("Admin123", Digest::Sha256, TEST_ITERATIONS).unwrap();
        assert_ne!(hash, "Admin123");
        assert!(check_password_hash(&hash, "Admin123"));
        assert!(!check_password_hash(&hash, "admin123"));
        assert!(!check_password_hash(&hash, ""));
    }

    #[test]
    fn salts_are_random() {
        let a = generate_password_hash_with("same", Digest::Sha256, TEST_ITERATIONS).unwrap();
        let b = generate_password_hash_with("same", Digest::Sha256, TEST_ITERATIONS).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn sha512_round_trip() {
        let hash = generate_password_hash_with("pw", Digest::Sha512, TEST_ITERATIONS).unwrap();
        assert!(hash.starts_with("pbkdf2:sha512:1000$"));
        assert!(check_password_hash(&hash, "pw"));
    }

    #[test]
    fn verifies_known_werkzeug_hash() {
        // Published PBKDF2-HMAC-SHA256 vector: P = "password", S = "salt", c = 1.
        let hash = "pbkdf2:sha256:1$salt$120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b";
        assert!(check_password_hash(hash, "password"));
        assert!(!check_password_hash(hash, "passwort"));
    }

    #[test]
    fn zero_iterations_is_an_error() {
        assert!(generate_password_hash_with("pw", Digest::Sha256, 0).is_err());
    }

    #[test]
    fn malformed_hashes_do_not_verify() {
        for bad in [
            "",
            "test1234",
            "pbkdf2:sha256:1000$onlysalt",
            "scrypt:32768:8:1$salt$abcdef",
            "pbkdf2:md5:1000$salt$abcdef",
            "pbkdf2:sha256:many$salt$abcdef",
            "pbkdf2:sha256:0$salt$abcdef",
            "pbkdf2:sha256:1000:extra$salt$abcdef",
            "pbkdf2:sha256:1$salt$not-hex",
        ] {
            assert!(!check_password_hash(bad, "test1234"), "{bad} should not verify");
        }
    }

    #[test]
    fn method_without_iterations_uses_default() {
        assert_eq!(
            parse_method("pbkdf2:sha256"),
            Some((Digest::Sha256, DEFAULT_ITERATIONS))
        );
        assert_eq!(parse_method("pbkdf2:sha512:42"), Some((Digest::Sha512, 42)));
    }
}

use pbkdf2::pbkdf2_hmac;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use sha2::{Sha256, Sha512};
