use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "ARGON2PHC_PASSWORD";

/// Reads the password to hash or check.
///
/// Sources, in order: `ARGON2PHC_PASSWORD`, one line of piped stdin, then an
/// interactive prompt. With `confirm` set the prompt asks twice, so a typo
/// cannot end up baked into a new hash.
pub fn read_password(confirm: bool) -> Result<Zeroizing<String>> {
    //  ARGON2PHC_PASSWORD="hunter2" argon2phc hash
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if pw.is_empty() {
            bail!("{PASSWORD_ENV} is set but empty");
        }
        return Ok(Zeroizing::new(pw));
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        //  printf "%s\n" "$PW" | argon2phc verify '$argon2id$...'
        if let Some(pw) = read_piped(stdin.lock())? {
            return Ok(pw);
        }
        bail!("No password provided");
    }

    let pw = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    if pw.is_empty() {
        bail!("password must not be empty");
    }
    if confirm {
        let again = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);
        if *again != *pw {
            bail!("passwords do not match");
        }
    }
    Ok(pw)
}

/// Takes the first line of `reader` as the password.
///
/// `Ok(None)` means nothing was piped at all; a bare newline is an error
/// rather than an empty password.
fn read_piped<R: BufRead>(mut reader: R) -> Result<Option<Zeroizing<String>>> {
    let mut line = Zeroizing::new(String::new());
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    trim_newline(&mut line);

    if line.is_empty() {
        bail!("piped password is empty");
    }
    Ok(Some(line))
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
