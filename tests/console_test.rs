mod common;

use assert2::check;
use common::scenario;
use rosterdex::console::Console;
use rosterdex::search::SuggestLimits;
use rosterdex::{Dataset, Navigator};
use rstest::rstest;
use std::time::Duration;

async fn run_script(dataset: &Dataset, script: &str) -> String {
    let console = Console::new(
        dataset,
        SuggestLimits::default(),
        Duration::from_millis(200),
        Navigator::default(),
        Vec::new(),
    );
    let out = console.run(script.as_bytes()).await.expect("console run failed");
    String::from_utf8(out).expect("console output is UTF-8")
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn settled_input_renders_suggestions(scenario: Dataset) {
    let out = run_script(&scenario, "ale\n").await;
    check!(out == "  1. Alex Smith [Player]\n");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn superseded_input_never_renders(scenario: Dataset) {
    let out = run_script(&scenario, "al\nale\nred\n").await;
    check!(out == "  1. Red Team [Team]\n");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn short_input_cancels_pending_query(scenario: Dataset) {
    let out = run_script(&scenario, "al\na\n").await;
    check!(out.is_empty());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn keyboard_selection_navigates(scenario: Dataset) {
    let out = run_script(&scenario, "ale\n:wait\n:down\n:enter\n").await;
    check!(
        out == "  1. Alex Smith [Player]\n\
                > 1. Alex Smith [Player]\n\
                navigate: player_dashboard.html?season=2026&player=p1\n"
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn submit_navigates_on_exact_match(scenario: Dataset) {
    let out = run_script(&scenario, "Red Team\n:submit\n").await;
    check!(out == "navigate: team_dashboard.html?season=2026&team=Red%20Team\n");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn submit_without_exact_match_shows_no_results(scenario: Dataset) {
    let out = run_script(&scenario, "zz\n:submit\n:quit\nignored\n").await;
    check!(out == "No results found\n");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn escape_keeps_pending_query(scenario: Dataset) {
    let out = run_script(&scenario, "ale\n:wait\nred\n:esc\n").await;
    check!(out == "  1. Alex Smith [Player]\n(suggestions hidden)\n  1. Red Team [Team]\n");

    let out = run_script(&scenario, "ale\n:esc\n").await;
    check!(out == "  1. Alex Smith [Player]\n");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn up_without_highlight_does_not_rerender(scenario: Dataset) {
    let out = run_script(&scenario, "ale\n:wait\n:up\n").await;
    check!(out == "  1. Alex Smith [Player]\n");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn escape_hides_visible_list(scenario: Dataset) {
    let out = run_script(&scenario, "ale\n:wait\n:esc\n:down\n").await;
    check!(out == "  1. Alex Smith [Player]\n(suggestions hidden)\n");
}
