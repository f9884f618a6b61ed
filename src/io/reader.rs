use crate::common::{command::WalletCommand, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Raw script row. `owner` is only read for `open`, where a blank owner is
/// kept as an empty name; `amount` is blank for verify/lock/unlock.
struct ScriptRow {
    op: String,
    owner: Option<String>,
    amount: Option<String>,
}

/// Reads wallet commands from a CSV script.
///
/// Headers: `op,owner,amount`. The `op` field is trimmed and lowercased.
/// `open` needs an initial balance in `amount` and takes the owner as given
/// (possibly empty); `deposit`, `pay` and `refund` need an amount. Amounts with
/// more than four decimal places are refused.
///
/// # Examples
///
/// ```
/// use digital_wallet::io::reader::read_commands;
/// use digital_wallet::common::command::WalletCommand;
/// use csv::ReaderBuilder;
///
/// let data = "op,owner,amount\n\
/// open,alice,100\n\
/// verify,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(&commands[0], Ok(WalletCommand::Open { owner, .. }) if owner == "alice"));
/// assert!(matches!(commands[1], Ok(WalletCommand::Verify)));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<WalletCommand, String>> + '_ {
    rdr.deserialize::<ScriptRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();

        match op.as_str() {
            "open" => {
                let owner = row.owner.unwrap_or_default();
                let initial = parse_amount(&op, row.amount)?;
                Ok(WalletCommand::Open { owner, initial })
            }
            "verify" => Ok(WalletCommand::Verify),
            "lock" => Ok(WalletCommand::Lock),
            "unlock" => Ok(WalletCommand::Unlock),
            "deposit" => Ok(WalletCommand::Deposit {
                amount: parse_amount(&op, row.amount)?,
            }),
            "pay" => Ok(WalletCommand::Pay {
                amount: parse_amount(&op, row.amount)?,
            }),
            "refund" => Ok(WalletCommand::Refund {
                amount: parse_amount(&op, row.amount)?,
            }),
            other => Err(format!("unknown wallet op: {other}")),
        }
    })
}

fn parse_amount(op: &str, amount: Option<String>) -> Result<Money, String> {
    let raw = amount.ok_or_else(|| format!("{op} missing amount"))?;
    Money::from_str(&raw).map_err(|e| format!("{op} has invalid amount {raw:?}: {e}"))
}
