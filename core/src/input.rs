use anyhow::{anyhow, Result};

/// One `add` invocation: the positional date plus the two typed counts.
#[derive(Debug, PartialEq, Default)]
pub struct ParsedEntry {
    pub date: String,
    pub incidents: Option<f64>,
    pub risks: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CountKey {
    Incidents,
    Risks,
}

/// Parse `add` arguments. Tokens of the form `key:value` set one of
/// the two counts; the key may be any prefix of `incidents` or
/// `risks` (`i:2`, `inc:2`, `r:1`). Everything else is collected as
/// the date. Arguments are processed in order, and giving the same
/// count twice is an error rather than a silent overwrite.
pub fn parse_entry(args: &[String]) -> Result<ParsedEntry> {
    let mut entry = ParsedEntry::default();
    let mut date_parts = Vec::new();

    for arg in args {
        let Some((key, value)) = arg.split_once(':').filter(|(k, _)| !k.is_empty()) else {
            date_parts.push(arg.as_str());
            continue;
        };

        let count: f64 = value
            .parse()
            .map_err(|_| anyhow!("Invalid count for '{}': '{}'", key, value))?;
        if !(count >= 0.0) {
            return Err(anyhow!("Count for '{}' must be zero or more", key));
        }

        let slot = match resolve_key(key)? {
            CountKey::Incidents => &mut entry.incidents,
            CountKey::Risks => &mut entry.risks,
        };
        if slot.is_some() {
            return Err(anyhow!("Duplicate key: '{}'", key));
        }
        *slot = Some(count);
    }

    entry.date = date_parts.join(" ");
    Ok(entry)
}

// The two key names share no prefix, so any prefix is unambiguous.
fn resolve_key(key: &str) -> Result<CountKey> {
    if "incidents".starts_with(key) {
        Ok(CountKey::Incidents)
    } else if "risks".starts_with(key) {
        Ok(CountKey::Risks)
    } else {
        Err(anyhow!("Unknown key: '{}'", key))
    }
}
