use std::collections::HashMap;

use tracing::debug;

use super::error::ParseError;
use super::lexer::tokenize;
use super::{Command, ScoreUpdate, StatUpdate};
use crate::store::MatchId;

const REQUIRED_STATS: [&str; 4] = ["goals", "y", "r", "played"];

/// Parse a single command line.
///
/// Structure is checked before any field: fewer than three words or a first
/// word other than `/match` fails before the match id or action is looked at.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens = tokenize(line)?;
    if tokens.len() < 3 {
        return Err(ParseError::new("Command is too short."));
    }
    if tokens[0] != "/match" {
        return Err(ParseError::new("Command must start with /match."));
    }

    let match_id: MatchId = tokens[1]
        .parse()
        .map_err(|_| ParseError::new("Match id must be an integer."))?;

    let command = match tokens[2].as_str() {
        "score" => Command::ScoreUpdate(parse_score(match_id, &tokens[3..])?),
        "stats" => Command::StatUpdate(parse_stats(match_id, &tokens[3..])?),
        _ => return Err(ParseError::new("Unknown action. Use 'score' or 'stats'.")),
    };

    debug!(?command, "parsed command");
    Ok(command)
}

fn parse_score(match_id: MatchId, tokens: &[String]) -> Result<ScoreUpdate, ParseError> {
    let Some(score_token) = tokens.first() else {
        return Err(ParseError::new("Score is required."));
    };

    let (home_raw, away_raw) = score_token
        .split_once('-')
        .ok_or_else(|| ParseError::new("Score must be in home-away format, e.g. 2-1."))?;

    let (Some(home), Some(away)) = (integer(home_raw), integer(away_raw)) else {
        return Err(ParseError::new("Scores must be integers."));
    };
    if home < 0 || away < 0 {
        return Err(ParseError::new("Scores must be zero or higher."));
    }

    let notes = match tokens {
        [_] => None,
        [_, keyword, ..] if keyword != "notes" => {
            return Err(ParseError::new("Use notes \"...\" to include match notes."));
        }
        [_, _] => return Err(ParseError::new("Notes text is missing.")),
        [_, _, text] => Some(text.clone()),
        _ => return Err(ParseError::new("Unexpected text after notes.")),
    };

    Ok(ScoreUpdate {
        match_id,
        home_score: count(home, "Scores are too large.")?,
        away_score: count(away, "Scores are too large.")?,
        notes,
    })
}

fn parse_stats(match_id: MatchId, tokens: &[String]) -> Result<StatUpdate, ParseError> {
    if tokens.len() < 2 {
        return Err(ParseError::new(
            "Stats command requires a player identifier and fields.",
        ));
    }

    let player_identifier = tokens[0].clone();
    let mut fields: HashMap<&str, &str> = HashMap::new();
    for token in &tokens[1..] {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| ParseError::new("Stats fields must use key=value format."))?;
        fields.insert(key, value);
    }

    let missing: Vec<&str> = REQUIRED_STATS
        .iter()
        .copied()
        .filter(|key| !fields.contains_key(key))
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::new(format!(
            "Missing fields: {}.",
            missing.join(", ")
        )));
    }

    let (Some(goals), Some(yellow), Some(red), Some(played)) = (
        integer(fields["goals"]),
        integer(fields["y"]),
        integer(fields["r"]),
        integer(fields["played"]),
    ) else {
        return Err(ParseError::new("Stats values must be integers."));
    };

    if !matches!(played, 0 | 1) {
        return Err(ParseError::new("Played must be 0 or 1."));
    }
    if goals < 0 || yellow < 0 || red < 0 {
        return Err(ParseError::new("Stats values must be zero or higher."));
    }

    Ok(StatUpdate {
        match_id,
        player_identifier,
        goals: count(goals, "Stats values are too large.")?,
        yellow_cards: count(yellow, "Stats values are too large.")?,
        red_cards: count(red, "Stats values are too large.")?,
        played: played == 1,
    })
}

fn integer(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn count(value: i64, too_large: &'static str) -> Result<u32, ParseError> {
    u32::try_from(value).map_err(|_| ParseError::new(too_large))
}
