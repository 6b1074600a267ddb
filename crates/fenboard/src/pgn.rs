//! Lightweight regex-based PGN scanning.
//!
//! Only what diagram rendering needs is extracted: the header tags and the
//! mainline SAN tokens. Comments (`{...}` and `;` to end of line), nested
//! variations, NAGs, move numbers and result tokens are stripped. Move
//! legality is left to the rules engine.

use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[\s*(\w+)\s+"((?:[^"\\]|\\.)*)"\s*\]"#).expect("header regex is valid")
});
static BRACE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("comment regex is valid"));
static LINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";[^\n]*").expect("comment regex is valid"));
static INNERMOST_VARIATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("variation regex is valid"));
static NAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\d+").expect("NAG regex is valid"));
static MOVE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.(?:\.\.)?").expect("move number regex is valid"));
static SAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=?[QRBN])?|O-O-O|O-O|0-0-0|0-0)[+#]?$")
        .expect("SAN regex is valid")
});

/// Header tags and mainline moves of one PGN game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PgnGame {
    headers: Vec<(String, String)>,
    sans: Vec<String>,
}

impl PgnGame {
    /// Scans PGN text. Never fails: unrecognized tokens are skipped.
    pub fn scan(pgn: &str) -> Self {
        let headers = HEADER_RE
            .captures_iter(pgn)
            .map(|cap| (cap[1].to_string(), cap[2].replace("\\\"", "\"")))
            .collect();

        let movetext = HEADER_RE.replace_all(pgn, " ");
        let movetext = BRACE_COMMENT_RE.replace_all(&movetext, " ");
        let movetext = LINE_COMMENT_RE.replace_all(&movetext, " ");
        let mut movetext = movetext.into_owned();
        while INNERMOST_VARIATION_RE.is_match(&movetext) {
            movetext = INNERMOST_VARIATION_RE
                .replace_all(&movetext, " ")
                .into_owned();
        }
        let movetext = NAG_RE.replace_all(&movetext, " ");
        let movetext = MOVE_NUMBER_RE.replace_all(&movetext, " ");

        let sans = movetext
            .split_whitespace()
            .map(|token| token.trim_end_matches(['!', '?']))
            .filter(|token| SAN_RE.is_match(token))
            .map(|token| token.replace('0', "O"))
            .collect();

        Self { headers, sans }
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Looks up a header tag by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The custom starting position, when `SetUp` is `1` and `FEN` is present.
    pub fn setup_fen(&self) -> Option<&str> {
        match (self.header("SetUp"), self.header("FEN")) {
            (Some("1"), Some(fen)) => Some(fen),
            _ => None,
        }
    }

    /// Mainline SAN tokens in game order.
    pub fn sans(&self) -> &[String] {
        &self.sans
    }
}
