use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

use crate::cache::Cache;
use crate::config::ScraperSettings;
use crate::domain::{MatchInfo, TeamInfo, Tournament, TournamentData};
use crate::errors::parse_context;
use crate::http::RateLimitedClient;

const TOURNAMENTS_PATH: &str = "/tournaments";
const NAME_DATES_DELIMITER: &str = " | ";
const DATE_FORMAT: &str = "%d.%m.%Y";

/// CSS selectors for tugeny.org markup
struct Selectors {
    tournament_link: Selector,
    team_link: Selector,
    match_item: Selector,
    match_teams: Selector,
    match_results: Selector,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            tournament_link: parse_selector(r#"a[href^="/tournaments/"]"#)?,
            team_link: parse_selector(".view-team a")?,
            match_item: parse_selector(".view-match")?,
            match_teams: parse_selector(".view-match__teams a")?,
            match_results: parse_selector(".view-match__results")?,
        })
    }
}

fn parse_selector(selector: &'static str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow::anyhow!("Invalid selector {}: {}", selector, e))
}

/// Scraper for tournaments, teams and match results on tugeny.org
pub struct TugenyScraper {
    client: RateLimitedClient,
    base_url: String,
    selectors: Selectors,
    date_regex: Regex,
}

impl TugenyScraper {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        Ok(Self {
            client: RateLimitedClient::from_settings(settings)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            selectors: Selectors::compile()?,
            date_regex: Self::compile_regex()?,
        })
    }

    /// List every tournament linked from the tournament overview page
    pub async fn discover_tournaments(&mut self, cache: &Cache) -> Result<Vec<Tournament>> {
        info!("Discovering tournaments from {}{}", self.base_url, TOURNAMENTS_PATH);

        let (html, _) = self.fetch_page(TOURNAMENTS_PATH, cache).await?;
        let tournaments = self.extract_tournaments(&Html::parse_document(&html));

        info!("  → Found {} tournaments", tournaments.len());
        Ok(tournaments)
    }

    /// Fetch the team list and match results of one tournament.
    /// The flag is true when both pages came from the cache.
    pub async fn fetch_tournament(
        &mut self,
        tournament: Tournament,
        cache: &Cache,
    ) -> Result<(TournamentData, bool)> {
        let (teams_html, teams_cached) =
            self.fetch_page(&teams_path(&tournament.slug), cache).await?;
        let (matches_html, matches_cached) =
            self.fetch_page(&matches_path(&tournament.slug), cache).await?;

        let teams = self.extract_teams(&Html::parse_document(&teams_html));
        let matches = self.extract_matches(&Html::parse_document(&matches_html));
        debug!(
            "{}: {} teams, {} matches",
            tournament.slug,
            teams.len(),
            matches.len()
        );

        let data = TournamentData {
            tournament,
            teams,
            matches,
        };
        Ok((data, teams_cached && matches_cached))
    }

    // --- HTTP Fetching ---

    /// Return the page body, from the cache when present
    async fn fetch_page(&mut self, path: &str, cache: &Cache) -> Result<(String, bool)> {
        if let Some(html) = cache.load_page(path)? {
            return Ok((html, true));
        }

        let url = format!("{}{}", self.base_url, path);
        let html = self.client.get_text(&url).await?;
        cache.save_page(path, &html)?;
        Ok((html, false))
    }

    // --- Construction Helpers ---

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"\b\d{1,2}\.\d{1,2}\.\d{4}\b").context(parse_context("date regex"))
    }

    // --- Tournament Extraction ---

    fn extract_tournaments(&self, html: &Html) -> Vec<Tournament> {
        let mut seen = HashSet::new();
        let mut tournaments = Vec::new();

        for element in html.select(&self.selectors.tournament_link) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let Some(tournament) = self.parse_tournament_link(&element_text(&element), href)
            else {
                debug!("Skipping non-tournament link: {}", href);
                continue;
            };

            if seen.insert(tournament.slug.clone()) {
                tournaments.push(tournament);
            }
        }

        tournaments
    }

    /// Parse a link like `<a href="/tournaments/dm-2019">DM 2019 | 01.06.2019 - 02.06.2019</a>`
    fn parse_tournament_link(&self, text: &str, href: &str) -> Option<Tournament> {
        let (name, dates) = text.split_once(NAME_DATES_DELIMITER)?;
        let slug = href.split('/').nth(2).filter(|s| !s.is_empty())?;
        let (start_date, end_date) = self.parse_dates(dates);

        if start_date.is_none() {
            warn!("Could not parse dates '{}' of tournament {}", dates.trim(), slug);
        }

        Some(Tournament {
            name: name.trim().to_string(),
            slug: slug.to_string(),
            start_date,
            end_date,
        })
    }

    /// First date found is the start, last is the end
    fn parse_dates(&self, text: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let dates: Vec<NaiveDate> = self
            .date_regex
            .find_iter(text)
            .filter_map(|m| NaiveDate::parse_from_str(m.as_str(), DATE_FORMAT).ok())
            .collect();

        (dates.first().copied(), dates.last().copied())
    }

    // --- Team Extraction ---

    fn extract_teams(&self, html: &Html) -> Vec<TeamInfo> {
        html.select(&self.selectors.team_link)
            .filter_map(|element| parse_team_link(&element))
            .collect()
    }

    // --- Match Extraction ---

    fn extract_matches(&self, html: &Html) -> Vec<MatchInfo> {
        html.select(&self.selectors.match_item)
            .enumerate()
            .filter_map(|(idx, element)| match self.parse_match(&element) {
                Ok(info) => Some(info),
                Err(e) => {
                    warn!("Skipping match {}: {}", idx, e);
                    None
                }
            })
            .collect()
    }

    fn parse_match(&self, element: &ElementRef) -> Result<MatchInfo> {
        let links: Vec<ElementRef> = element.select(&self.selectors.match_teams).collect();
        let [link_a, link_b] = links.as_slice() else {
            anyhow::bail!("expected 2 teams, got {}", links.len());
        };

        let team_a = parse_team_link(link_a).context("first team link has no slug")?;
        let team_b = parse_team_link(link_b).context("second team link has no slug")?;
        let results = element
            .select(&self.selectors.match_results)
            .next()
            .map(|e| element_text(&e))
            .context("match results are missing")?;

        Ok(MatchInfo {
            team_a,
            team_b,
            results,
        })
    }
}

fn teams_path(slug: &str) -> String {
    format!("{}/{}/teams", TOURNAMENTS_PATH, slug)
}

fn matches_path(slug: &str) -> String {
    format!("{}/{}/matches", TOURNAMENTS_PATH, slug)
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_team_link(element: &ElementRef) -> Option<TeamInfo> {
    let href = element.value().attr("href")?;
    let slug = team_slug(href)?;

    Some(TeamInfo {
        slug: slug.to_string(),
        name: element_text(element),
    })
}

/// Last non-empty path segment of a team URL
fn team_slug(href: &str) -> Option<&str> {
    href.split('/').rev().find(|segment| !segment.is_empty())
}
