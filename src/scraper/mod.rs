pub mod http_client;
pub mod parsers;
pub mod user_agent;

use crate::config::{MissingPctPolicy, ScraperConfig};
use crate::models::{LeagueData, Round, TeamStanding};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

use self::http_client::HttpClient;
use self::parsers::{parse_rounds, parse_standings};

// ── Leagues ───────────────────────────────────────────────────────────────────

const URL_TABELA_A: &str = "https://p1.trrsf.com/api/musa-soccer/ms-standings-light?idChampionship=1456&idPhase=&language=pt-BR&country=BR&nav=N&timezone=BR";
const URL_RODADAS_A: &str = "https://p1.trrsf.com/api/musa-soccer/ms-standings-games-light?idChampionship=1456&idPhase=&language=pt-BR&country=BR&nav=N&timezone=BR";
const URL_TABELA_B: &str = "https://p1.trrsf.com/api/musa-soccer/ms-standings-light?idChampionship=1438&idPhase=&language=pt-BR&country=BR&nav=N&timezone=BR";
const URL_RODADAS_B: &str = "https://p1.trrsf.com/api/musa-soccer/ms-standings-games-light?idChampionship=1438&idPhase=&language=pt-BR&country=BR&nav=N&timezone=BR";

/// The two statically configured competitions. The numeric championship id
/// is baked into the endpoint URLs; nothing else varies between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    SerieA,
    SerieB,
}

impl League {
    pub fn standings_url(&self) -> &'static str {
        match self {
            League::SerieA => URL_TABELA_A,
            League::SerieB => URL_TABELA_B,
        }
    }

    pub fn rounds_url(&self) -> &'static str {
        match self {
            League::SerieA => URL_RODADAS_A,
            League::SerieB => URL_RODADAS_B,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            League::SerieA => "Série A",
            League::SerieB => "Série B",
        }
    }
}

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable data source abstraction.
#[async_trait]
pub trait StandingsSource: Send + Sync {
    async fn fetch_standings(&self, league: League) -> Result<Vec<TeamStanding>>;
    async fn fetch_rounds(&self, league: League) -> Result<Vec<Round>>;

    /// Full result for one league: standings always, rounds on request.
    /// The rounds fetch starts only after standings completed; either
    /// failure fails the whole call, no partial result.
    async fn league_data(&self, league: League, include_rounds: bool) -> Result<LeagueData> {
        let tabela = self.fetch_standings(league).await?;
        let rodadas = if include_rounds {
            Some(self.fetch_rounds(league).await?)
        } else {
            None
        };
        Ok(LeagueData { tabela, rodadas })
    }
}

// ── terra.com.br scraper ──────────────────────────────────────────────────────

pub struct TerraScraper {
    client: HttpClient,
    missing_pct: MissingPctPolicy,
}

impl TerraScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
            missing_pct: config.missing_pct,
        })
    }

    pub async fn serie_a(&self, include_rounds: bool) -> Result<LeagueData> {
        self.league_data(League::SerieA, include_rounds).await
    }

    pub async fn serie_b(&self, include_rounds: bool) -> Result<LeagueData> {
        self.league_data(League::SerieB, include_rounds).await
    }
}

#[async_trait]
impl StandingsSource for TerraScraper {
    async fn fetch_standings(&self, league: League) -> Result<Vec<TeamStanding>> {
        let url = league.standings_url();
        info!("Fetching {} standings ({})", league.name(), url);

        let html = self
            .client
            .get_text(url)
            .await
            .with_context(|| format!("Failed to fetch {} standings", league.name()))?;

        let teams = parse_standings(&html, self.missing_pct)?;
        if teams.is_empty() {
            warn!("{}: standings page matched no rows", league.name());
        }
        debug!("{}: {} standings rows", league.name(), teams.len());

        Ok(teams)
    }

    async fn fetch_rounds(&self, league: League) -> Result<Vec<Round>> {
        let url = league.rounds_url();
        info!("Fetching {} rounds ({})", league.name(), url);

        let html = self
            .client
            .get_text(url)
            .await
            .with_context(|| format!("Failed to fetch {} rounds", league.name()))?;

        let rounds = parse_rounds(&html)?;
        debug!(
            "{}: {} rounds, {} matches",
            league.name(),
            rounds.len(),
            rounds.iter().map(|r| r.partidas.len()).sum::<usize>()
        );

        Ok(rounds)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn standing(nome: &str, posicao: &str) -> TeamStanding {
        TeamStanding {
            nome: nome.to_string(),
            escudo: String::new(),
            posicao: posicao.to_string(),
            pontos: String::new(),
            jogos: String::new(),
            vitorias: String::new(),
            empates: String::new(),
            derrotas: String::new(),
            gols_pro: String::new(),
            gols_contra: String::new(),
            saldo_gols: String::new(),
            aproveitamento: "70%".to_string(),
        }
    }

    #[derive(Default)]
    struct CountingSource {
        standings_calls: AtomicUsize,
        rounds_calls: AtomicUsize,
    }

    #[async_trait]
    impl StandingsSource for CountingSource {
        async fn fetch_standings(&self, _league: League) -> Result<Vec<TeamStanding>> {
            self.standings_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![standing("Palmeiras", "1"), standing("São Paulo", "2")])
        }

        async fn fetch_rounds(&self, _league: League) -> Result<Vec<Round>> {
            self.rounds_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
    }

    #[test]
    fn league_urls_embed_the_championship_ids() {
        assert!(League::SerieA.standings_url().contains("idChampionship=1456"));
        assert!(League::SerieA.rounds_url().contains("ms-standings-games-light"));
        assert!(League::SerieB.standings_url().contains("idChampionship=1438"));
        assert!(League::SerieB.rounds_url().contains("idChampionship=1438"));
    }

    #[test]
    fn skipping_rounds_skips_the_second_fetch() {
        let source = CountingSource::default();
        let data = tokio_test::block_on(source.league_data(League::SerieA, false)).unwrap();

        assert!(data.rodadas.is_none());
        assert_eq!(data.tabela.len(), 2);
        assert_eq!(data.tabela[0].nome, "Palmeiras");
        assert_eq!(source.standings_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.rounds_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn including_rounds_fetches_both() {
        let source = CountingSource::default();
        let data = tokio_test::block_on(source.league_data(League::SerieB, true)).unwrap();

        assert_eq!(data.rodadas, Some(vec![]));
        assert_eq!(source.standings_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.rounds_calls.load(Ordering::SeqCst), 1);
    }
}
