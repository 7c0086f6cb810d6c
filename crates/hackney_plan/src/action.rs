//! Plan actions and the token decoder.
//!
//! Solver output spells actions as `verb(param,...)` tokens. Decoding
//! happens exactly once, here, into a closed variant type; everything
//! downstream matches exhaustively instead of re-inspecting strings.

use hackney_foundation::{Direction, Error, Result, TaxiId};

/// One primitive solver action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move a taxi one cell in a direction.
    Move {
        /// The taxi to move.
        taxi: TaxiId,
        /// Where to move it.
        direction: Direction,
    },
    /// Pick up the passenger co-located with the taxi.
    Pick {
        /// The picking taxi.
        taxi: TaxiId,
    },
    /// Drop the carried passenger at the taxi's cell.
    Drop {
        /// The dropping taxi.
        taxi: TaxiId,
    },
    /// Do nothing this step.
    Wait {
        /// The waiting taxi.
        taxi: TaxiId,
    },
}

impl Action {
    /// The taxi this action concerns.
    #[must_use]
    pub const fn taxi(&self) -> TaxiId {
        match *self {
            Self::Move { taxi, .. } | Self::Pick { taxi } | Self::Drop { taxi } | Self::Wait { taxi } => {
                taxi
            }
        }
    }
}

/// The ordered (but conceptually simultaneous) actions of one time step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionBatch {
    /// The solver time index this batch belongs to.
    pub time_index: u32,
    /// Actions in token order.
    pub actions: Vec<Action>,
}

impl ActionBatch {
    /// Creates an empty batch at the given time index.
    #[must_use]
    pub const fn new(time_index: u32) -> Self {
        Self {
            time_index,
            actions: Vec::new(),
        }
    }
}

/// Decodes one whitespace-delimited plan token.
///
/// Returns `Ok(Some(action))` for the four action verbs, `Ok(None)` for
/// well-formed tokens with any other verb (solver output interleaves fluent
/// predicates with actions; those are not ours to judge), and an error for
/// tokens that cannot be decoded at all.
///
/// The caller decides whether to skip-and-log or abort; this function only
/// reports.
///
/// # Errors
/// Returns [`Error::malformed_token`] for tokens without a parameter list,
/// with an unterminated parameter list, or with unusable parameters.
pub fn parse_action(token: &str) -> Result<Option<Action>> {
    let open = token
        .find('(')
        .ok_or_else(|| Error::malformed_token(token, "no parameter list"))?;
    let rest = &token[open + 1..];
    let close = rest
        .rfind(')')
        .ok_or_else(|| Error::malformed_token(token, "unterminated parameter list"))?;
    let verb = &token[..open];
    let params: Vec<&str> = rest[..close].split(',').map(str::trim).collect();

    let taxi = |index: usize| -> Result<TaxiId> {
        let param = params
            .get(index)
            .copied()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::malformed_token(token, "missing taxi id"))?;
        let mut glyphs = param.chars();
        match (glyphs.next(), glyphs.next()) {
            (Some(glyph), None) => TaxiId::from_glyph(glyph)
                .ok_or_else(|| Error::malformed_token(token, format!("invalid taxi id `{param}`"))),
            _ => Err(Error::malformed_token(
                token,
                format!("invalid taxi id `{param}`"),
            )),
        }
    };

    match verb {
        "move" => {
            let taxi = taxi(0)?;
            let word = params
                .get(1)
                .copied()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| Error::malformed_token(token, "missing direction"))?;
            let direction = Direction::parse(word)
                .ok_or_else(|| Error::malformed_token(token, format!("invalid direction `{word}`")))?;
            Ok(Some(Action::Move { taxi, direction }))
        }
        "pick" => Ok(Some(Action::Pick { taxi: taxi(0)? })),
        "drop" => Ok(Some(Action::Drop { taxi: taxi(0)? })),
        "wait" => Ok(Some(Action::Wait { taxi: taxi(0)? })),
        _ => Ok(None),
    }
}
