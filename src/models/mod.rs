use serde::{Deserialize, Serialize};

// ── Standings row ─────────────────────────────────────────────────────────────

/// One team's row in the standings table, in the upstream display format.
/// Everything is a pre-formatted string because that is how the source page
/// renders it; consumers that want numbers parse downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamStanding {
    pub nome: String,
    pub escudo: String,
    pub posicao: String,
    pub pontos: String,
    pub jogos: String,
    pub vitorias: String,
    pub empates: String,
    pub derrotas: String,
    pub gols_pro: String,
    pub gols_contra: String,
    pub saldo_gols: String,
    /// Win percentage, always carrying a trailing "%".
    pub aproveitamento: String,
}

// ── Rounds / fixtures ─────────────────────────────────────────────────────────

/// One scheduling round, with its fixtures in document order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub rodada: String,
    /// Round start date as DD/MM/YYYY, rebuilt from the page's
    /// machine-readable YYYY-MM-DD marker without calendar validation.
    pub inicio: String,
    pub rodada_atual: bool,
    pub partidas: Vec<Match>,
}

/// One fixture. Goal fields are empty strings until the match is played.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    /// Raw "Home x Away" label from the meta tag.
    pub partida: String,
    pub data: String,
    pub local: String,
    pub time_casa: String,
    pub time_fora: String,
    pub gols_casa: String,
    pub gols_fora: String,
    /// "{time_casa} {gols_casa} x {gols_fora} {time_fora}", blanks kept.
    pub resultado_texto: String,
}

// ── Combined league result ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeagueData {
    pub tabela: Vec<TeamStanding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rodadas: Option<Vec<Round>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_data_omits_rodadas_when_absent() {
        let data = LeagueData {
            tabela: vec![],
            rodadas: None,
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"tabela":[]}"#);
    }

    #[test]
    fn league_data_keeps_rodadas_when_present() {
        let data = LeagueData {
            tabela: vec![],
            rodadas: Some(vec![]),
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains(r#""rodadas":[]"#));
    }
}
