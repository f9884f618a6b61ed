use std::io::Write;

use crate::domain::wallet::Wallet;

#[derive(serde::Serialize)]
/// Output row. Headers, in order: `owner,balance,verified,locked`.
struct WalletRow<'a> {
    owner: &'a str,
    balance: String,
    verified: bool,
    locked: bool,
}

/// Writes the wallet state as a one-row CSV table with a header.
///
/// The balance is formatted with exactly four decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if serializing or flushing fails.
///
/// # Examples
///
/// ```
/// use digital_wallet::common::money::Money;
/// use digital_wallet::domain::wallet::Wallet;
/// use digital_wallet::io::writer::write_wallet;
///
/// let wallet = Wallet::new("alice", Money::zero()).unwrap();
/// let mut out = Vec::new();
/// write_wallet(&mut out, &wallet).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "owner,balance,verified,locked\nalice,0.0000,false,false\n");
/// ```
pub fn write_wallet<W: Write>(writer: W, wallet: &Wallet) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    wtr.serialize(WalletRow {
        owner: wallet.owner(),
        balance: wallet.balance().to_string_4dp(),
        verified: wallet.is_verified(),
        locked: wallet.is_locked(),
    })?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use std::str::FromStr;

    fn write_to_string(wallet: &Wallet) -> String {
        let mut out = Vec::new();
        write_wallet(&mut out, wallet).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_flags() {
        let mut wallet = Wallet::new("bob", Money::from_str("50").unwrap()).unwrap();
        wallet.verify();
        wallet.lock();

        let s = write_to_string(&wallet);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines, vec!["owner,balance,verified,locked", "bob,50.0000,true,true"]);
    }

    #[test]
    fn quotes_owner_containing_delimiter() {
        let wallet = Wallet::new("Smith, J", Money::from_str("1.2346").unwrap()).unwrap();

        let s = write_to_string(&wallet);
        assert_eq!(s.lines().nth(1), Some("\"Smith, J\",1.2346,false,false"));
    }
}
