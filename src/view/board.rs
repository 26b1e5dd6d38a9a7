//! Render-ready board snapshot.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{BoardSize, CardId, PairValue};

/// What a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum CardFace {
    /// Face-down.
    Hidden,
    /// Face-up in the current selection.
    FaceUp(PairValue),
    /// Matched.
    Solved(PairValue),
}

impl CardFace {
    /// Flipped or solved.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, CardFace::Hidden)
    }

    #[must_use]
    pub fn is_solved(self) -> bool {
        matches!(self, CardFace::Solved(_))
    }

    /// Value shown, if face-up.
    #[must_use]
    pub fn value(self) -> Option<PairValue> {
        match self {
            CardFace::Hidden => None,
            CardFace::FaceUp(value) | CardFace::Solved(value) => Some(value),
        }
    }
}

/// One cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub position: usize,
    pub row: usize,
    pub column: usize,
    pub id: CardId,
    pub face: CardFace,
}

/// Label of the board's action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionLabel {
    Reset,
    PlayAgain,
}

impl ActionLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActionLabel::Reset => "Reset",
            ActionLabel::PlayAgain => "Play Again",
        }
    }

    /// Label for a board that is or is not won.
    #[must_use]
    pub fn for_won(won: bool) -> Self {
        if won {
            ActionLabel::PlayAgain
        } else {
            ActionLabel::Reset
        }
    }
}

impl std::fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the presentation layer needs to draw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub board_size: BoardSize,
    pub cards: Vec<CardView>,
    pub won: bool,
    pub input_locked: bool,
    pub action: ActionLabel,
}

impl BoardView {
    /// Card view by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardView> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Rows of cards, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CardView]> {
        self.cards.chunks(usize::from(self.board_size.side()).max(1))
    }

    /// Number of face-up cards, solved included.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|card| card.face.is_face_up()).count()
    }

    /// Draw the board as text.
    ///
    /// Hidden cards show `?`, face-up cards their value, solved cards their
    /// value in brackets. A won board ends with a banner line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let width = self
            .cards
            .iter()
            .filter_map(|card| card.face.value())
            .map(|value| value.to_string().len() + 2)
            .max()
            .unwrap_or(1)
            .max(3);

        let mut out = String::new();
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|card| {
                    let text = match card.face {
                        CardFace::Hidden => "?".to_string(),
                        CardFace::FaceUp(value) => value.to_string(),
                        CardFace::Solved(value) => format!("[{}]", value),
                    };
                    format!("{:^width$}", text, width = width)
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(" ").trim_end());
        }
        if self.won {
            let _ = writeln!(out, "You Won!");
        }
        out
    }
}
