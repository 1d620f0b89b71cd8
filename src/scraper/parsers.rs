//! Selector-driven extraction from the terra.com.br standings widgets.
//!
//! The markup is stable but loosely structured, so each output field is
//! described declaratively (selector + what to take from the match) and the
//! rows are processed uniformly. Missing optional nodes degrade to empty
//! strings; only the two machine-readable markers on the rounds page are
//! hard requirements.

use crate::config::MissingPctPolicy;
use crate::models::{Match, Round, TeamStanding};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("round {round}: date marker has no data-date attribute")]
    MissingRoundDate { round: usize },

    #[error("round {round}, match {index}: team label meta has no content")]
    MissingMatchLabel { round: usize, index: usize },

    #[error("invalid selector `{0}`")]
    Selector(String),
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::Selector(css.to_string()))
}

// ── Field mapping ─────────────────────────────────────────────────────────────

enum Take {
    InnerHtml,
    Attr(&'static str),
}

/// One field of an output record: where to look and what to read there.
struct Field {
    sel: Selector,
    take: Take,
}

impl Field {
    fn new(css: &'static str, take: Take) -> Result<Self, ExtractError> {
        Ok(Self {
            sel: selector(css)?,
            take,
        })
    }

    fn extract(&self, scope: &ElementRef) -> Option<String> {
        let el = scope.select(&self.sel).next()?;
        match self.take {
            Take::InnerHtml => Some(el.inner_html()),
            Take::Attr(name) => el.value().attr(name).map(str::to_string),
        }
    }

    fn extract_or_empty(&self, scope: &ElementRef) -> String {
        self.extract(scope).unwrap_or_default()
    }
}

// ── Standings table ───────────────────────────────────────────────────────────

pub fn parse_standings(
    html: &str,
    missing_pct: MissingPctPolicy,
) -> Result<Vec<TeamStanding>, ExtractError> {
    let doc = Html::parse_document(html);
    let row_sel = selector("table > tbody > tr")?;

    // Team name lives in the link's title attribute, not its text.
    let nome = Field::new(".team-name > a", Take::Attr("title"))?;
    let escudo = Field::new(".shield > a > img", Take::Attr("src"))?;
    let posicao = Field::new(".position", Take::InnerHtml)?;
    let pontos = Field::new(".points", Take::InnerHtml)?;
    let jogos = Field::new(r#"td[title="Jogos"]"#, Take::InnerHtml)?;
    let vitorias = Field::new(r#"td[title="Vitórias"]"#, Take::InnerHtml)?;
    let empates = Field::new(r#"td[title="Empates"]"#, Take::InnerHtml)?;
    let derrotas = Field::new(r#"td[title="Derrotas"]"#, Take::InnerHtml)?;
    let gols_pro = Field::new(r#"td[title="Gols Pró"]"#, Take::InnerHtml)?;
    let gols_contra = Field::new(r#"td[title="Gols Contra"]"#, Take::InnerHtml)?;
    let saldo_gols = Field::new(r#"td[title="Saldo de Gols"]"#, Take::InnerHtml)?;
    let aproveitamento = Field::new(r#"td[title="Aproveitamento"]"#, Take::InnerHtml)?;

    let mut teams = Vec::new();
    for row in doc.select(&row_sel) {
        teams.push(TeamStanding {
            nome: nome.extract_or_empty(&row),
            escudo: escudo.extract_or_empty(&row),
            posicao: posicao.extract_or_empty(&row),
            pontos: pontos.extract_or_empty(&row),
            jogos: jogos.extract_or_empty(&row),
            vitorias: vitorias.extract_or_empty(&row),
            empates: empates.extract_or_empty(&row),
            derrotas: derrotas.extract_or_empty(&row),
            gols_pro: gols_pro.extract_or_empty(&row),
            gols_contra: gols_contra.extract_or_empty(&row),
            saldo_gols: saldo_gols.extract_or_empty(&row),
            aproveitamento: win_pct(aproveitamento.extract(&row), missing_pct),
        });
    }

    Ok(teams)
}

/// Always suffixes "%". A missing cell follows the configured policy: the
/// upstream source shipped the literal "undefined%" in that case.
fn win_pct(value: Option<String>, policy: MissingPctPolicy) -> String {
    match (value, policy) {
        (Some(v), _) => format!("{v}%"),
        (None, MissingPctPolicy::UndefinedLiteral) => "undefined%".to_string(),
        (None, MissingPctPolicy::Empty) => String::new(),
    }
}

// ── Rounds / fixtures ─────────────────────────────────────────────────────────

pub fn parse_rounds(html: &str) -> Result<Vec<Round>, ExtractError> {
    let doc = Html::parse_document(html);
    let round_sel = selector("ul.rounds > li")?;
    let date_marker = Field::new("br.date-round", Take::Attr("data-date"))?;
    let header = Field::new("h3", Take::InnerHtml)?;
    let match_sel = selector("li.match")?;
    let label = Field::new(r#"meta[itemprop="name"]"#, Take::Attr("content"))?;
    let match_date = Field::new("div.details > strong.date-manager", Take::InnerHtml)?;
    let stadium = Field::new("div.details > span.stadium", Take::InnerHtml)?;
    let home_goals = Field::new(".goals.home", Take::InnerHtml)?;
    let away_goals = Field::new(".goals.away", Take::InnerHtml)?;

    let mut rounds = Vec::new();
    for (i, item) in doc.select(&round_sel).enumerate() {
        let raw_date = date_marker
            .extract(&item)
            .ok_or(ExtractError::MissingRoundDate { round: i })?;

        let mut partidas = Vec::new();
        for (j, fixture) in item.select(&match_sel).enumerate() {
            let partida = label
                .extract(&fixture)
                .ok_or(ExtractError::MissingMatchLabel { round: i, index: j })?;
            let (time_casa, time_fora) = split_team_label(&partida);
            let gols_casa = home_goals.extract_or_empty(&fixture);
            let gols_fora = away_goals.extract_or_empty(&fixture);

            partidas.push(Match {
                partida,
                data: match_date.extract_or_empty(&fixture),
                local: stadium.extract_or_empty(&fixture),
                resultado_texto: format!("{time_casa} {gols_casa} x {gols_fora} {time_fora}"),
                time_casa,
                time_fora,
                gols_casa,
                gols_fora,
            });
        }

        rounds.push(Round {
            rodada: header.extract_or_empty(&item),
            inicio: reformat_round_date(&raw_date),
            // Exact attribute equality: an item carrying extra classes is
            // deliberately classified as not-current.
            rodada_atual: item.value().attr("class") == Some("round"),
            partidas,
        });
    }

    Ok(rounds)
}

/// "YYYY-MM-DD hh:mm" → "DD/MM/YYYY" by literal substring reorder.
/// Not calendar-validated: malformed input comes back malformed.
fn reformat_round_date(raw: &str) -> String {
    let date = raw.split(' ').next().unwrap_or(raw);
    let mut parts = date.split('-');
    let year = parts.next().unwrap_or("");
    let month = parts.next().unwrap_or("");
    let day = parts.next().unwrap_or("");
    format!("{day}/{month}/{year}")
}

/// "Home x Away" → ("Home", "Away"). A second `x` inside a team name would
/// truncate the away side; the upstream labels never contain one.
fn split_team_label(raw: &str) -> (String, String) {
    let mut parts = raw.split('x');
    let home = parts.next().unwrap_or("").trim().to_string();
    let away = parts.next().unwrap_or("").trim().to_string();
    (home, away)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
