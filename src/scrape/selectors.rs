// Every CSS selector the pipeline relies on lives in this table. The source
// site's markup is an external contract: when it changes, this file is the
// only place that has to move.
use scraper::Selector;

fn sel(css: &str) -> Selector {
    // static strings, kept parseable by the test below
    Selector::parse(css).unwrap()
}

/// One schedule card anchor on the match-list page. href is the match url,
/// title the match name.
pub fn schedule_card() -> Selector {
    sel("div.cb-mtch-lst a.cb-lv-scrs-well")
}

/// Match title header on the detail page.
pub fn match_header() -> Selector {
    sel("h1.cb-nav-hdr")
}

/// Tournament link in the detail page sub-header.
pub fn tournament_link() -> Selector {
    sel("div.cb-nav-subhdr a.text-hvr-underline")
}

/// One element per team innings line, e.g. "CSK 115/2 (14.1)".
pub fn team_score() -> Selector {
    sel("div.cb-min-bat-rw div.cb-min-tm")
}

/// Free-text match state ("CSK need 54 runs in 35 balls").
pub fn match_state() -> Selector {
    sel("div.cb-min-stts")
}

pub fn live_badge() -> Selector {
    sel("div.cb-min-stts.cb-text-live")
}

pub fn complete_badge() -> Selector {
    sel("div.cb-min-stts.cb-text-complete")
}

/// One row per batter at the crease, e.g. "Ruturaj Gaikwad 62(41)".
pub fn batting_row() -> Selector {
    sel("div.cb-min-inf div.cb-min-itm-rw")
}

/// Run-rate fragment, e.g. "CRR: 8.12 REQ: 9.26".
pub fn run_rate() -> Selector {
    sel("div.cb-min-bat-rw div.cb-min-rr")
}

/// One line of ball-by-ball commentary.
pub fn commentary_line() -> Selector {
    sel("p.cb-com-ln")
}

/// One "Label: value" item in the key-stats block.
pub fn key_stat_item() -> Selector {
    sel("div.cb-key-st-lst div.cb-key-st-itm")
}
