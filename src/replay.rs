//! Headless driver: pointer releases in, move reports out.
//!
//! Input is JSON lines, one `{"x": .., "y": ..}` object per release.
//! Output is one JSON [`MoveReport`] per release, in the same order.

use crate::session::{Match, MoveReport, PointerRelease};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Feeds every release in `input` to `game` and writes a report per line.
///
/// Blank lines are skipped. Returns the reports in arrival order.
///
/// # Errors
///
/// Fails on unreadable input, a malformed line or a failed write.
#[instrument(skip_all)]
pub fn run_replay(
    game: &mut Match,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<Vec<MoveReport>> {
    let mut reports = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", number + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let release: PointerRelease = serde_json::from_str(&line)
            .with_context(|| format!("Malformed pointer release on line {}", number + 1))?;
        debug!(?release, "Replaying release");

        let report = game.release(release.x, release.y);
        serde_json::to_writer(&mut output, &report).context("Failed to write report")?;
        writeln!(output).context("Failed to write report")?;
        reports.push(report);
    }

    info!(
        events = reports.len(),
        accepted = reports.iter().filter(|r| *r.accepted()).count(),
        "Replay finished"
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::SurfaceSize;
    use crate::session::Players;

    fn game() -> Match {
        Match::new(
            Players::new("Xena".to_string(), "Otto".to_string()),
            SurfaceSize::new(3, 3).unwrap(),
        )
    }

    #[test]
    fn test_reports_one_line_per_release() {
        let mut game = game();
        let input = "{\"x\":0,\"y\":0}\n\n{\"x\":0,\"y\":0}\n";
        let mut out = Vec::new();

        let reports = run_replay(&mut game, input.as_bytes(), &mut out).unwrap();

        assert_eq!(reports.len(), 2);
        assert!(*reports[0].accepted());
        assert!(!*reports[1].accepted());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        let second: serde_json::Value = serde_json::from_str(text.lines().nth(1).unwrap()).unwrap();
        assert_eq!(second["rejection"]["reason"], "cell_occupied");
    }

    #[test]
    fn test_malformed_line_names_line_number() {
        let mut game = game();
        let err = run_replay(&mut game, "{\"x\":1}\n".as_bytes(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
