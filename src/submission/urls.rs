//! URL building utilities for server endpoints and pages

fn trim_server(server_url: &str) -> &str {
    server_url.trim_end_matches('/')
}

/// Builds the tournament creation endpoint.
///
/// # Example
/// ```
/// use team_battle_scheduler::submission::build_create_tournament_url;
///
/// let url = build_create_tournament_url("https://lichess.org/");
/// assert_eq!(url, "https://lichess.org/api/tournament");
/// ```
pub fn build_create_tournament_url(server_url: &str) -> String {
    format!("{}/api/tournament", trim_server(server_url))
}

/// Builds the public page of a created tournament.
///
/// # Example
/// ```
/// use team_battle_scheduler::submission::build_tournament_page_url;
///
/// let url = build_tournament_page_url("https://lichess.org", "aBcD1234");
/// assert_eq!(url, "https://lichess.org/tournament/aBcD1234");
/// ```
pub fn build_tournament_page_url(server_url: &str, tournament_id: &str) -> String {
    format!("{}/tournament/{tournament_id}", trim_server(server_url))
}

/// Builds the page listing a team's upcoming tournaments.
///
/// # Example
/// ```
/// use team_battle_scheduler::submission::build_team_tournaments_url;
///
/// let url = build_team_tournaments_url("https://lichess.org", "rust-club");
/// assert_eq!(url, "https://lichess.org/team/rust-club/tournaments");
/// ```
pub fn build_team_tournaments_url(server_url: &str, team_id: &str) -> String {
    format!("{}/team/{team_id}/tournaments", trim_server(server_url))
}
