//! Pure text extractors for the free-text fragments on the score pages.
//! These never panic on well-formed-but-unexpected input; fields that are
//! merely absent are omitted, and only structurally empty input is an error.

use crate::errors::{AppError, Result};
use crate::models::match_stats::{
    CommentaryEntry, PlayerData, PreviousInnings, RunRateData, TeamScoreData,
};

/// Wickets are omitted from the source text when a side is all out.
const ALL_OUT_WICKETS: &str = "10";

/// Parse a team score fragment such as "CBD 74/3 (9.1)" or
/// "ENG 246 & 316/6 (77)". The segment after the last `&` is the current
/// innings; the one before it becomes `previous_innings`. The first
/// whitespace token of the fragment is the team name.
pub fn parse_team_score(text: &str) -> Result<TeamScoreData> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::parse("empty team score fragment"));
    }

    let segments: Vec<&str> = trimmed.split('&').map(str::trim).collect();
    let first_tokens: Vec<&str> = segments[0].split_whitespace().collect();
    let (name, first_numbers) = match first_tokens.split_first() {
        Some((name, rest)) => (name.to_string(), rest.to_vec()),
        None => return Err(AppError::parse("empty team score fragment")),
    };

    if segments.len() == 1 {
        let (score, wickets, overs) = parse_innings_numbers(&first_numbers)
            .ok_or_else(|| AppError::parse(format!("no score digits in {:?}", trimmed)))?;
        return Ok(TeamScoreData {
            name,
            score,
            wickets,
            overs,
            previous_innings: None,
        });
    }

    let current_tokens: Vec<&str> = segments[segments.len() - 1].split_whitespace().collect();
    let (score, wickets, overs) = parse_innings_numbers(&current_tokens)
        .ok_or_else(|| AppError::parse(format!("no score digits in {:?}", trimmed)))?;

    let previous_tokens: Vec<&str> = segments[segments.len() - 2].split_whitespace().collect();
    let previous_innings = parse_innings_numbers(&previous_tokens)
        .map(|(score, wickets, _)| PreviousInnings { score, wickets });

    Ok(TeamScoreData {
        name,
        score,
        wickets,
        overs,
        previous_innings,
    })
}

/// Tokens of one innings segment, e.g. ["74/3", "(9.1)"] or ["436"].
/// Returns (score, wickets, overs); None when no score digits are present.
fn parse_innings_numbers(tokens: &[&str]) -> Option<(String, String, Option<String>)> {
    let mut score: Option<String> = None;
    let mut wickets: Option<String> = None;
    let mut overs: Option<String> = None;

    for token in tokens {
        if token.starts_with('(') {
            let inner = token.trim_start_matches('(').trim_end_matches(')');
            if !inner.is_empty() {
                overs = Some(inner.to_string());
            }
        } else if let Some((runs, fallen)) = token.split_once('/') {
            if runs.chars().any(|c| c.is_ascii_digit()) {
                score = Some(runs.to_string());
                if !fallen.is_empty() {
                    wickets = Some(fallen.to_string());
                }
            }
        } else if score.is_none() && token.chars().any(|c| c.is_ascii_digit()) {
            score = Some((*token).to_string());
        }
    }

    score.map(|score| (score, wickets.unwrap_or_else(|| ALL_OUT_WICKETS.to_string()), overs))
}

/// Parse a batter fragment such as "Ruturaj Gaikwad 62(41)" into name, runs
/// and balls. None when the trailing runs(balls) pair is missing.
pub fn parse_player_data(text: &str) -> Option<PlayerData> {
    let trimmed = text.trim();
    let (name, tail) = trimmed.rsplit_once(char::is_whitespace)?;

    let open = tail.find('(')?;
    let close = tail.rfind(')')?;
    if close <= open {
        return None;
    }

    let runs = tail[..open].trim_end_matches('*');
    let balls = &tail[open + 1..close];
    if runs.is_empty() || !runs.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if balls.is_empty() || !balls.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(PlayerData {
        name: name.to_string(),
        runs: runs.to_string(),
        balls: balls.to_string(),
    })
}

/// Parse a run-rate fragment such as "CRR: 8.12" or "CRR: 8.12 REQ: 9.26".
/// The required rate only exists during a chase.
pub fn parse_run_rate(text: &str) -> Option<RunRateData> {
    let current_run_rate = rate_after_label(text, "CRR")?;
    let required_run_rate =
        rate_after_label(text, "RRR").or_else(|| rate_after_label(text, "REQ"));

    Some(RunRateData {
        current_run_rate,
        required_run_rate,
    })
}

fn rate_after_label(text: &str, label: &str) -> Option<f64> {
    let idx = text.find(label)?;
    let rest = text[idx + label.len()..]
        .trim_start_matches(|c: char| c == ':' || c.is_whitespace());
    let digits: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

/// Turn one commentary line into an entry. A leading "Over N[.B]" label sets
/// `has_over` and is stripped from the commentary text.
pub fn parse_commentary_entry(text: &str) -> CommentaryEntry {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix("Over") {
        let rest = rest.trim_start();
        let over: String = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if !over.is_empty() {
            let commentary = rest[over.len()..]
                .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
                .to_string();
            return CommentaryEntry {
                commentary: if commentary.is_empty() {
                    trimmed.to_string()
                } else {
                    commentary
                },
                has_over: true,
                over: Some(over),
            };
        }
    }

    CommentaryEntry {
        commentary: trimmed.to_string(),
        has_over: false,
        over: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_score_with_overs() {
        let parsed = parse_team_score("CBD 74/3 (9.1)").unwrap();
        assert_eq!(parsed.name, "CBD");
        assert_eq!(parsed.score, "74");
        assert_eq!(parsed.wickets, "3");
        assert_eq!(parsed.overs.as_deref(), Some("9.1"));
        assert!(parsed.previous_innings.is_none());
    }

    #[test]
    fn team_score_without_overs() {
        let parsed = parse_team_score("CBD 74/3").unwrap();
        assert_eq!(parsed.name, "CBD");
        assert_eq!(parsed.score, "74");
        assert_eq!(parsed.wickets, "3");
        assert!(parsed.overs.is_none());
    }

    #[test]
    fn team_score_all_out_defaults_wickets() {
        let parsed = parse_team_score("IND 436").unwrap();
        assert_eq!(parsed.name, "IND");
        assert_eq!(parsed.score, "436");
        assert_eq!(parsed.wickets, "10");
        assert!(parsed.overs.is_none());
    }

    #[test]
    fn team_score_multi_innings() {
        let parsed = parse_team_score("ENG 246 & 316/6 (77)").unwrap();
        assert_eq!(parsed.name, "ENG");
        assert_eq!(parsed.score, "316");
        assert_eq!(parsed.wickets, "6");
        assert_eq!(parsed.overs.as_deref(), Some("77"));
        let previous = parsed.previous_innings.unwrap();
        assert_eq!(previous.score, "246");
        assert_eq!(previous.wickets, "10");
    }

    #[test]
    fn team_score_rejects_digitless_text() {
        assert!(parse_team_score("rain delay").is_err());
        assert!(parse_team_score("   ").is_err());
    }

    #[test]
    fn player_data_parses_name_runs_balls() {
        let player = parse_player_data("Ruturaj Gaikwad 62(41)").unwrap();
        assert_eq!(player.name, "Ruturaj Gaikwad");
        assert_eq!(player.runs, "62");
        assert_eq!(player.balls, "41");
    }

    #[test]
    fn player_data_tolerates_not_out_marker() {
        let player = parse_player_data("Shivam Dube 27*(12)").unwrap();
        assert_eq!(player.name, "Shivam Dube");
        assert_eq!(player.runs, "27");
        assert_eq!(player.balls, "12");
    }

    #[test]
    fn player_data_without_score_tail_is_none() {
        assert!(parse_player_data("Shivam Dube").is_none());
        assert!(parse_player_data("").is_none());
    }

    #[test]
    fn run_rate_with_required() {
        let rates = parse_run_rate("CRR: 8.12 REQ: 9.26").unwrap();
        assert_eq!(rates.current_run_rate, 8.12);
        assert_eq!(rates.required_run_rate, Some(9.26));
    }

    #[test]
    fn run_rate_without_required() {
        let rates = parse_run_rate("CRR: 4.50").unwrap();
        assert_eq!(rates.current_run_rate, 4.5);
        assert!(rates.required_run_rate.is_none());
    }

    #[test]
    fn run_rate_without_label_is_none() {
        assert!(parse_run_rate("innings break").is_none());
    }

    #[test]
    fn commentary_with_over_label() {
        let entry = parse_commentary_entry("Over 14.1: short and pulled away for four");
        assert!(entry.has_over);
        assert_eq!(entry.over.as_deref(), Some("14.1"));
        assert_eq!(entry.commentary, "short and pulled away for four");
    }

    #[test]
    fn commentary_without_over_label() {
        let entry = parse_commentary_entry("Bowler change at the pavilion end");
        assert!(!entry.has_over);
        assert!(entry.over.is_none());
        assert_eq!(entry.commentary, "Bowler change at the pavilion end");
    }
}
