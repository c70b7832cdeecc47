use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;

/// Random 64-byte secret, base64 encoded.
#[must_use]
pub fn generate_secret() -> String {
    let mut secret = [0u8; 64];
    rand::thread_rng().fill_bytes(&mut secret);
    general_purpose::STANDARD.encode(secret)
}

/// Prints a secret for signing identity tokens.
///
/// The same value must be configured in the auth service that issues the
/// tokens this API verifies.
pub fn handle_generate_secret_command() {
    let encoded = generate_secret();

    println!("🔐 Generated JWT Secret:");
    println!();
    println!("jwt:");
    println!("  secret: \"{encoded}\"");
    println!("  expiration_days: 7");
    println!();
    println!("Add this to your config/{{environment}}.yaml file, or set APP_JWT__SECRET.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_decodes_to_64_bytes() {
        let decoded = general_purpose::STANDARD
            .decode(generate_secret())
            .expect("valid base64");
        assert_eq!(decoded.len(), 64);
    }

    #[test]
    fn test_secrets_differ() {
        assert_ne!(generate_secret(), generate_secret());
    }
}
