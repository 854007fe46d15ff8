//! Print the Argon2id hash of a password read from stdin.
//!
//! ```text
//! printf '%s' 'the-admin-password' | hash-admin-password > .hashedpass
//! ```

use std::io::Read;
use std::process::ExitCode;

use trainer_api::auth::password::hash_password;

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read password from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let password = input.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        eprintln!("Refusing to hash an empty password");
        return ExitCode::FAILURE;
    }

    match hash_password(password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to hash password: {e}");
            ExitCode::FAILURE
        }
    }
}
