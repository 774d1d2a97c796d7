use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

fn argon2() -> Result<Argon2<'static>, String> {
    let params =
        Params::new(15, 2, 1, None).map_err(|e| format!("Invalid Argon2 parameters: {}", e))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash the shared admin passphrase. Done once at startup so the plaintext
/// from the environment is not kept around or compared directly.
pub fn hash_password(password: &str) -> Result<String, String> {
    let argon2 = argon2()?;
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Hashing failed: {}", e))?
        .to_string();
    Ok(password_hash)
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(argon2) = argon2() else {
        return false;
    };
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    argon2
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("darkhan").unwrap();
        assert!(verify_password("darkhan", &hash));
        assert!(!verify_password("wrong", &hash));
    }
}
