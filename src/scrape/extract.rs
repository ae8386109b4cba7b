//! Document-level extraction. Each function parses the DOM inside
//! synchronous code and returns owned data, so nothing non-`Send` leaks
//! into the async services.

use scraper::ElementRef;
use std::collections::HashMap;

use crate::errors::{AppError, Result};
use crate::models::match_stats::{
    CommentaryEntry, OnBatting, RunRateData, TeamScoreData,
};
use crate::scrape::fetcher::ScrapedPage;
use crate::scrape::reconcile::ScrapedMatch;
use crate::scrape::selectors;
use crate::scrape::text;

/// All regions of a match detail page in one pass. Team scores are the only
/// required region; everything else degrades to `None` / empty.
#[derive(Debug)]
pub struct StatsParts {
    pub team1: TeamScoreData,
    pub team2: TeamScoreData,
    pub on_batting: Option<OnBatting>,
    pub run_rate: Option<RunRateData>,
    pub summary: String,
    pub is_live: Option<bool>,
    pub commentary: Option<Vec<CommentaryEntry>>,
    pub key_stats: HashMap<String, String>,
    pub tournament_name: Option<String>,
    pub match_name: Option<String>,
}

/// Pull every schedule card off the match-list page. Cards without an href
/// or a name are skipped; an empty result is the reconciler's problem.
pub fn schedule_cards(page: &ScrapedPage) -> Vec<ScrapedMatch> {
    let doc = page.dom();
    let mut cards = Vec::new();

    for node in doc.select(&selectors::schedule_card()) {
        let Some(href) = node.value().attr("href") else {
            continue;
        };
        let name = match node.value().attr("title") {
            Some(title) => title.trim().to_string(),
            None => node_text(node),
        };
        if href.trim().is_empty() || name.is_empty() {
            continue;
        }
        cards.push(ScrapedMatch {
            match_url: href.trim().to_string(),
            match_name: name,
        });
    }

    cards
}

pub fn match_stats_parts(page: &ScrapedPage) -> Result<StatsParts> {
    let doc = page.dom();

    let score_texts: Vec<String> = doc
        .select(&selectors::team_score())
        .map(node_text)
        .filter(|t| !t.is_empty())
        .collect();
    if score_texts.is_empty() {
        return Err(AppError::parse(format!(
            "no team score elements on {}",
            page.url()
        )));
    }

    let mut teams = score_texts
        .iter()
        .filter_map(|t| text::parse_team_score(t).ok());
    let team1 = teams
        .next()
        .ok_or_else(|| AppError::parse(format!("unparseable team scores on {}", page.url())))?;
    let team2 = teams
        .next()
        .ok_or_else(|| AppError::parse(format!("second team score missing on {}", page.url())))?;

    let batters: Vec<_> = doc
        .select(&selectors::batting_row())
        .map(node_text)
        .filter_map(|t| text::parse_player_data(&t))
        .collect();
    let on_batting = match (batters.first(), batters.get(1)) {
        (Some(player1), Some(player2)) => Some(OnBatting {
            player1: player1.clone(),
            player2: player2.clone(),
        }),
        _ => None,
    };

    let run_rate = doc
        .select(&selectors::run_rate())
        .map(node_text)
        .find_map(|t| text::parse_run_rate(&t));

    let summary = doc
        .select(&selectors::match_state())
        .map(node_text)
        .find(|t| !t.is_empty())
        .unwrap_or_default();

    let is_live = if doc.select(&selectors::live_badge()).next().is_some() {
        Some(true)
    } else if doc.select(&selectors::complete_badge()).next().is_some() {
        Some(false)
    } else {
        None
    };

    let lines: Vec<CommentaryEntry> = doc
        .select(&selectors::commentary_line())
        .map(node_text)
        .filter(|t| !t.is_empty())
        .map(|t| text::parse_commentary_entry(&t))
        .collect();
    let commentary = if lines.is_empty() { None } else { Some(lines) };

    let key_stats: HashMap<String, String> = doc
        .select(&selectors::key_stat_item())
        .map(node_text)
        .filter_map(|t| {
            t.split_once(':')
                .map(|(label, value)| (label.trim().to_string(), value.trim().to_string()))
        })
        .collect();

    let tournament_name = doc
        .select(&selectors::tournament_link())
        .map(node_text)
        .find(|t| !t.is_empty());

    let match_name = doc
        .select(&selectors::match_header())
        .map(node_text)
        .find(|t| !t.is_empty());

    Ok(StatsParts {
        team1,
        team2,
        on_batting,
        run_rate,
        summary,
        is_live,
        commentary,
        key_stats,
        tournament_name,
        match_name,
    })
}

/// Whitespace-normalized text content of an element.
fn node_text(node: ElementRef) -> String {
    node.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE_FIXTURE: &str = r#"
        <html><body>
        <div class="cb-mtch-lst">
          <a class="cb-lv-scrs-well" href="/live-cricket-scores/118928/csk-vs-mi"
             title="CSK vs MI, Final">CSK 115/2 (14.1)</a>
        </div>
        <div class="cb-mtch-lst">
          <a class="cb-lv-scrs-well" href="/live-cricket-scores/118930/ind-vs-aus">
            IND vs AUS, 2nd Test
          </a>
        </div>
        <div class="cb-mtch-lst">
          <a class="cb-lv-scrs-well" title="No href, skipped">bad card</a>
        </div>
        </body></html>
    "#;

    const DETAIL_FIXTURE: &str = r#"
        <html><body>
        <h1 class="cb-nav-hdr">CSK vs MI, Final</h1>
        <div class="cb-nav-subhdr"><a class="text-hvr-underline" href="/series/9237">Indian Premier League 2024</a></div>
        <div class="cb-min-bat-rw">
          <div class="cb-min-tm">MI 168/5 (20)</div>
          <div class="cb-min-tm">CSK 115/2 (14.1)</div>
          <div class="cb-min-rr">CRR: 8.12 REQ: 9.26</div>
        </div>
        <div class="cb-min-stts cb-text-live">CSK need 54 runs in 35 balls</div>
        <div class="cb-min-inf">
          <div class="cb-min-itm-rw">Ruturaj Gaikwad 62(41)</div>
          <div class="cb-min-itm-rw">Shivam Dube 27(12)</div>
        </div>
        <p class="cb-com-ln">Over 14.1: short and pulled away for four</p>
        <p class="cb-com-ln">Bowler change at the pavilion end</p>
        <div class="cb-key-st-lst">
          <div class="cb-key-st-itm">Toss: CSK won the toss and chose to bowl</div>
          <div class="cb-key-st-itm">Venue: Wankhede Stadium</div>
        </div>
        </body></html>
    "#;

    fn page(body: &str) -> ScrapedPage {
        ScrapedPage::new("http://example.test/page", body)
    }

    #[test]
    fn schedule_cards_read_href_and_title() {
        let cards = schedule_cards(&page(SCHEDULE_FIXTURE));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].match_url, "/live-cricket-scores/118928/csk-vs-mi");
        assert_eq!(cards[0].match_name, "CSK vs MI, Final");
        // no title attribute: the card text is the name
        assert_eq!(cards[1].match_name, "IND vs AUS, 2nd Test");
    }

    #[test]
    fn schedule_cards_on_unrelated_markup_is_empty() {
        let cards = schedule_cards(&page("<html><body><p>nothing here</p></body></html>"));
        assert!(cards.is_empty());
    }

    #[test]
    fn detail_page_yields_all_regions() {
        let parts = match_stats_parts(&page(DETAIL_FIXTURE)).unwrap();

        assert_eq!(parts.team1.name, "MI");
        assert_eq!(parts.team1.score, "168");
        assert_eq!(parts.team1.wickets, "5");
        assert_eq!(parts.team2.name, "CSK");
        assert_eq!(parts.team2.overs.as_deref(), Some("14.1"));

        let batting = parts.on_batting.unwrap();
        assert_eq!(batting.player1.name, "Ruturaj Gaikwad");
        assert_eq!(batting.player2.runs, "27");

        let rates = parts.run_rate.unwrap();
        assert_eq!(rates.current_run_rate, 8.12);
        assert_eq!(rates.required_run_rate, Some(9.26));

        assert_eq!(parts.summary, "CSK need 54 runs in 35 balls");
        assert_eq!(parts.is_live, Some(true));

        let commentary = parts.commentary.unwrap();
        assert_eq!(commentary.len(), 2);
        assert!(commentary[0].has_over);
        assert_eq!(commentary[0].over.as_deref(), Some("14.1"));
        assert!(!commentary[1].has_over);

        assert_eq!(
            parts.key_stats.get("Venue").map(String::as_str),
            Some("Wankhede Stadium")
        );
        assert_eq!(parts.tournament_name.as_deref(), Some("Indian Premier League 2024"));
        assert_eq!(parts.match_name.as_deref(), Some("CSK vs MI, Final"));
    }

    #[test]
    fn optional_regions_are_omitted_not_fatal() {
        let minimal = r#"
            <html><body>
            <div class="cb-min-bat-rw">
              <div class="cb-min-tm">IND 436</div>
              <div class="cb-min-tm">AUS 89/1 (30)</div>
            </div>
            </body></html>
        "#;
        let parts = match_stats_parts(&page(minimal)).unwrap();
        assert!(parts.on_batting.is_none());
        assert!(parts.run_rate.is_none());
        assert!(parts.commentary.is_none());
        assert!(parts.key_stats.is_empty());
        assert!(parts.is_live.is_none());
        assert_eq!(parts.summary, "");
        assert_eq!(parts.team1.wickets, "10");
    }

    #[test]
    fn missing_team_scores_is_a_parse_failure() {
        let err = match_stats_parts(&page("<html><body></body></html>")).unwrap_err();
        assert!(matches!(err, AppError::ParseFailure(_)));
    }
}
