use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Player;
use crate::pot::SidePot;
use crate::round::{RoundListener, Stage};

/// Complete record of one round: the final board and who got paid what.
/// Serialized to JSONL for observability; never read back by the engine.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round counter within the logger's lifetime
    pub round_no: u32,
    /// Community cards at settlement
    pub board: Vec<Card>,
    /// Total chips in play for the round
    pub pot: u32,
    /// Winner name -> chips won
    pub payouts: BTreeMap<String, u32>,
    /// Timestamp when the round settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Appends one [`RoundRecord`] per settled round to a JSONL file.
///
/// Doubles as a [`RoundListener`], so it can be chained next to a rendering
/// listener by the session layer.
pub struct HistoryLogger {
    writer: Option<BufWriter<File>>,
    round_no: u32,
    board: Vec<Card>,
}

impl HistoryLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            round_no: 0,
            board: Vec::new(),
        })
    }

    /// A logger that records nothing, for tests and disabled logging.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            round_no: 0,
            board: Vec::new(),
        }
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

impl RoundListener for HistoryLogger {
    fn stage_dealt(&mut self, _stage: Stage, board: &[Card], _pot_size: u32) {
        self.board = board.to_vec();
    }

    fn pots_paid(
        &mut self,
        pots: &[SidePot],
        payouts: &BTreeMap<usize, u32>,
        players: &[Player],
    ) {
        self.round_no += 1;
        let record = RoundRecord {
            round_no: self.round_no,
            board: std::mem::take(&mut self.board),
            pot: pots.iter().map(|p| p.size).sum(),
            payouts: payouts
                .iter()
                .map(|(&seat, &prize)| (players[seat].name().to_string(), prize))
                .collect(),
            ts: None,
        };
        let _ = self.write(&record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_json() {
        let record = RoundRecord {
            round_no: 3,
            board: vec![],
            pot: 120,
            payouts: BTreeMap::from([("Alice".to_string(), 120)]),
            ts: Some("2024-01-01T00:00:00Z".to_string()),
        };
        let line = serde_json::to_string(&record).unwrap();
        let back: RoundRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, record);
    }
}
