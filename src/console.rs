//! Serial console commands.
//!
//! The console is the runtime configuration surface: touch filter
//! thresholds, the mode-change vote count, direct mode switches, the
//! provisioning signal and a telemetry dump. Commands arrive as whole
//! lines; keywords are case-insensitive.
//!
//! ```text
//! touch time <ms>     minimum interval between accepted touches
//! touch dist <units>  minimum travel for a quick follow-up touch
//! touch new <ms>      age at which a lingering contact counts as new
//! ui votes <n>        hot-zone hits required to commit a mode change
//! ui mode <n>         switch mode by number (unknown values -> menu)
//! provision           mark external setup complete
//! info                log telemetry counters
//! ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SetTimeSensitivity(u64),
    SetDistSensitivity(u16),
    SetTreatAsNew(u64),
    SetVoteThreshold(u8),
    SetMode(u8),
    Provision,
    ShowInfo,
}

pub fn parse(line: &[u8]) -> Option<Command> {
    let line = core::str::from_utf8(line).ok()?;
    let mut words = line.split_ascii_whitespace();
    let head = words.next()?;

    let command = if head.eq_ignore_ascii_case("touch") {
        let what = words.next()?;
        let value = words.next()?;
        if what.eq_ignore_ascii_case("time") {
            Command::SetTimeSensitivity(value.parse().ok()?)
        } else if what.eq_ignore_ascii_case("dist") {
            Command::SetDistSensitivity(value.parse().ok()?)
        } else if what.eq_ignore_ascii_case("new") {
            Command::SetTreatAsNew(value.parse().ok()?)
        } else {
            return None;
        }
    } else if head.eq_ignore_ascii_case("ui") {
        let what = words.next()?;
        let value = words.next()?;
        if what.eq_ignore_ascii_case("votes") {
            Command::SetVoteThreshold(value.parse().ok()?)
        } else if what.eq_ignore_ascii_case("mode") {
            Command::SetMode(value.parse().ok()?)
        } else {
            return None;
        }
    } else if head.eq_ignore_ascii_case("provision") {
        Command::Provision
    } else if head.eq_ignore_ascii_case("info") {
        Command::ShowInfo
    } else {
        return None;
    };

    // Trailing junk invalidates the line.
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_command_set() {
        assert_eq!(parse(b"touch time 150"), Some(Command::SetTimeSensitivity(150)));
        assert_eq!(parse(b"touch dist 200"), Some(Command::SetDistSensitivity(200)));
        assert_eq!(parse(b"touch new 600"), Some(Command::SetTreatAsNew(600)));
        assert_eq!(parse(b"ui votes 3"), Some(Command::SetVoteThreshold(3)));
        assert_eq!(parse(b"ui mode 2"), Some(Command::SetMode(2)));
        assert_eq!(parse(b"provision"), Some(Command::Provision));
        assert_eq!(parse(b"info"), Some(Command::ShowInfo));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse(b"TOUCH TIME 25"), Some(Command::SetTimeSensitivity(25)));
        assert_eq!(parse(b"Provision"), Some(Command::Provision));
    }

    #[test]
    fn junk_is_rejected() {
        assert_eq!(parse(b""), None);
        assert_eq!(parse(b"touch"), None);
        assert_eq!(parse(b"touch time"), None);
        assert_eq!(parse(b"touch time abc"), None);
        assert_eq!(parse(b"touch time 150 extra"), None);
        assert_eq!(parse(b"ui mode -1"), None);
        assert_eq!(parse(b"reboot"), None);
        assert_eq!(parse(&[0xFF, 0xFE]), None);
    }

    #[test]
    fn numeric_mode_values_pass_through_unvalidated() {
        // Range checking happens at the controller, which owns the
        // fallback policy; the parser only requires a u8.
        assert_eq!(parse(b"ui mode 99"), Some(Command::SetMode(99)));
    }
}
