use rand::distributions::Alphanumeric;
use rand::Rng;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const VERIFICATION_CODE_LEN: usize = 6;
pub const RESET_TOKEN_LEN: usize = 32;

/// Six characters from `[A-Z0-9]`.
pub fn verification_code() -> String {
    let mut rng = rand::thread_rng();
    (0..VERIFICATION_CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// 32 random alphanumeric characters.
pub fn reset_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LEN)
        .map(char::from)
        .collect()
}
