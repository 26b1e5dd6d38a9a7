//! The game controller: owns the deck and runs the flip state machine.

use std::time::Duration;

use im::HashSet as ImHashSet;
use log::{debug, info, trace, warn};

use crate::core::{BoardSize, CardId, ConfigError, DeckError, FlipRejection, GameConfig, GameRng, GameRngState};
use crate::deck::Deck;
use crate::events::{GameEvent, ObserverId, Observers, StateObserver};
use crate::schedule::{Epoch, ResetTicket, Scheduler, TimerQueue};
use crate::view::{ActionLabel, BoardView, CardFace, CardView};

use super::outcome::FlipOutcome;
use super::selection::{Phase, Selection};

/// Owns one memory game and every state it passes through.
///
/// All mutation goes through `flip_card`, `resolve_mismatch`,
/// `set_board_size`, `reset` and `deal`. Observers are notified after each
/// completed change.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use memory_match::deck::Deck;
/// use memory_match::{CardId, FlipOutcome, GameConfig, GameController};
///
/// let mut game = GameController::with_seed(GameConfig::default(), 42).unwrap();
///
/// // Fixed layout: positions hold values [1, 2, 1, 2], ids 1..=4
/// game.deal(Deck::from_values([1, 2, 1, 2]).unwrap()).unwrap();
///
/// // Mismatch: both stay face-up for the delay
/// let outcome = game.flip_card(CardId::new(1));
/// assert_eq!(outcome, FlipOutcome::FirstRevealed(CardId::new(1)));
/// assert!(game.flip_card(CardId::new(2)).ticket().is_some());
/// assert!(game.is_input_locked());
///
/// game.advance(Duration::from_millis(1000));
/// assert!(!game.is_input_locked());
///
/// // Solve both pairs
/// game.flip_card(CardId::new(1));
/// game.flip_card(CardId::new(3));
/// game.flip_card(CardId::new(2));
/// game.flip_card(CardId::new(4));
/// assert!(game.is_won());
/// ```
#[derive(Debug)]
pub struct GameController<S: Scheduler = TimerQueue> {
    config: GameConfig,
    board_size: BoardSize,
    deck: Deck,
    selection: Selection,
    solved: ImHashSet<CardId>,
    input_locked: bool,
    epoch: Epoch,
    /// Ticket of the mismatch currently on display.
    pending_reset: Option<ResetTicket>,
    /// Next ticket sequence number within this epoch.
    mismatch_sequence: u32,
    rng: GameRng,
    scheduler: S,
    observers: Observers,
}

impl GameController<TimerQueue> {
    /// Create a controller with an entropy-seeded RNG and a manual clock.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy(), TimerQueue::new())
    }

    /// Create a controller with a seeded RNG and a manual clock.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed), TimerQueue::new())
    }

    /// Move the manual clock forward and resolve every mismatch that fell due.
    ///
    /// Returns how many resets were applied.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = self.scheduler.advance(elapsed);
        due.into_iter().filter(|&ticket| self.resolve_mismatch(ticket)).count()
    }
}

impl<S: Scheduler> GameController<S> {
    /// Create a controller with a seeded RNG and a host scheduler.
    pub fn with_scheduler(config: GameConfig, seed: u64, scheduler: S) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed), scheduler)
    }

    /// Create a controller from all parts. Deals the first deck.
    pub fn with_rng(config: GameConfig, rng: GameRng, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut controller = Self {
            board_size: config.initial_size(),
            config,
            deck: Deck::default(),
            selection: Selection::new(),
            solved: ImHashSet::new(),
            input_locked: false,
            epoch: Epoch::default(),
            pending_reset: None,
            mismatch_sequence: 0,
            rng,
            scheduler,
            observers: Observers::new(),
        };
        controller.regenerate();
        Ok(controller)
    }

    // === Observers ===

    /// Register an observer for board changes.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn emit(&mut self, event: GameEvent) {
        self.observers.notify(&event);
    }

    // === Lifecycle ===

    /// Deal a new game at the current board size.
    ///
    /// Works from any state, including while a mismatch is on display; the
    /// pending reset is cancelled and can no longer affect the board.
    pub fn reset(&mut self) {
        self.regenerate();
    }

    /// Switch to another allowed board size and deal.
    ///
    /// Sizes outside the configured set, and the current size, are ignored.
    /// Returns true if a new game was dealt.
    pub fn set_board_size(&mut self, requested: u8) -> bool {
        let Some(size) = self.config.board_size(requested) else {
            debug!("ignoring board size {}: allowed {:?}", requested, self.config.allowed_sizes());
            return false;
        };
        if size == self.board_size {
            return false;
        }

        let from = self.board_size;
        self.board_size = size;
        debug!("board size {} -> {}", from, size);
        self.emit(GameEvent::BoardSizeChanged { from, to: size });
        self.regenerate();
        true
    }

    /// Replace the deck with a fixed layout for the current board size.
    pub fn deal(&mut self, deck: Deck) -> Result<(), DeckError> {
        let expected = self.board_size.card_count();
        if deck.len() != expected {
            return Err(DeckError::SizeMismatch {
                expected,
                actual: deck.len(),
            });
        }
        self.install(deck);
        Ok(())
    }

    fn regenerate(&mut self) {
        let deck = Deck::generate(self.board_size, &mut self.rng);
        self.install(deck);
    }

    fn install(&mut self, deck: Deck) {
        if let Some(stale) = self.pending_reset.take() {
            debug!("cancelling {} for new deal", stale);
            self.scheduler.cancel(stale);
        }

        self.epoch = self.epoch.next();
        self.deck = deck;
        self.selection.clear();
        self.solved = ImHashSet::new();
        self.input_locked = false;
        self.mismatch_sequence = 0;

        info!("dealt {} cards on {} board ({})", self.deck.len(), self.board_size, self.epoch);
        self.check_invariants();
        self.emit(GameEvent::Dealt {
            epoch: self.epoch,
            size: self.board_size,
        });
    }

    // === Flipping ===

    /// Flip a card.
    ///
    /// Ignored while input is locked, after the game is won, for solved
    /// cards and for ids outside the deck. Flipping the face-up card again
    /// turns it back down. Flipping a second card evaluates the pair at once.
    pub fn flip_card(&mut self, id: CardId) -> FlipOutcome {
        if let Err(rejection) = self.check_flip(id) {
            match rejection {
                FlipRejection::UnknownCard(_) => warn!("flip ignored: {}", rejection),
                _ => trace!("flip ignored: {}", rejection),
            }
            return FlipOutcome::Ignored(rejection);
        }

        let outcome = match self.selection.first() {
            None => {
                self.selection.push(id);
                debug!("revealed {}", id);
                self.emit(GameEvent::CardRevealed { card: id });
                FlipOutcome::FirstRevealed(id)
            }
            Some(first) if first == id => {
                self.selection.clear();
                debug!("hid {}", id);
                self.emit(GameEvent::CardHidden { card: id });
                FlipOutcome::Deselected(id)
            }
            Some(first) => {
                self.input_locked = true;
                self.selection.push(id);
                self.evaluate(first, id)
            }
        };
        self.check_invariants();
        outcome
    }

    fn check_flip(&self, id: CardId) -> Result<(), FlipRejection> {
        if self.input_locked {
            return Err(FlipRejection::InputLocked);
        }
        if self.is_won() {
            return Err(FlipRejection::GameWon);
        }
        if !self.deck.contains(id) {
            return Err(FlipRejection::UnknownCard(id));
        }
        if self.solved.contains(&id) {
            return Err(FlipRejection::AlreadySolved(id));
        }
        Ok(())
    }

    /// Compare the selected pair. Input is locked on entry.
    fn evaluate(&mut self, first: CardId, second: CardId) -> FlipOutcome {
        match (self.deck.value_of(first), self.deck.value_of(second)) {
            (Some(a), Some(b)) if a == b => {
                self.solved.insert(first);
                self.solved.insert(second);
                self.selection.clear();
                self.input_locked = false;
                debug!("matched {} and {} (value {})", first, second, a);
                self.emit(GameEvent::PairMatched { first, second, value: a });

                let won = self.is_won();
                if won {
                    info!("all {} pairs solved ({})", self.deck.pair_count(), self.epoch);
                    self.emit(GameEvent::Won { epoch: self.epoch });
                }
                FlipOutcome::Matched { first, second, won }
            }
            _ => {
                let ticket = ResetTicket::new(self.epoch, self.mismatch_sequence);
                self.mismatch_sequence = self.mismatch_sequence.wrapping_add(1);
                self.pending_reset = Some(ticket);
                self.scheduler.schedule(self.config.mismatch_delay(), ticket);
                debug!("mismatch {} and {}, {} scheduled", first, second, ticket);
                self.emit(GameEvent::PairMismatched { first, second, ticket });
                FlipOutcome::Mismatched { first, second, ticket }
            }
        }
    }

    /// Turn a mismatched pair back down and unlock input.
    ///
    /// Only the pending ticket of the current epoch has any effect. Returns
    /// false for stale or repeated tickets.
    pub fn resolve_mismatch(&mut self, ticket: ResetTicket) -> bool {
        if !ticket.belongs_to(self.epoch) || self.pending_reset != Some(ticket) {
            debug!("ignoring stale {} ({})", ticket, self.epoch);
            return false;
        }

        self.pending_reset = None;
        self.selection.clear();
        self.input_locked = false;
        debug!("cleared mismatch {}", ticket);
        self.check_invariants();
        self.emit(GameEvent::MismatchCleared { ticket });
        true
    }

    fn check_invariants(&self) {
        debug_assert!(self.selection.len() <= Selection::CAPACITY);
        debug_assert!(self.selection.as_slice().iter().all(|id| !self.solved.contains(id)));
        debug_assert!(self.solved.len() % 2 == 0);
        debug_assert!(self.solved.len() <= self.deck.len());
        debug_assert_eq!(self.selection.is_full(), self.input_locked);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Solved card ids.
    #[must_use]
    pub fn solved(&self) -> &ImHashSet<CardId> {
        &self.solved
    }

    #[must_use]
    pub fn is_solved(&self, id: CardId) -> bool {
        self.solved.contains(&id)
    }

    /// Selected or solved.
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.selection.contains(id) || self.solved.contains(&id)
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Every card of a non-empty deck is solved.
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.deck.is_empty() && self.solved.len() == self.deck.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    /// Current game generation.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Ticket of the mismatch on display, if any.
    #[must_use]
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending_reset
    }

    /// RNG state, to reproduce the following deals.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Label for the board's action button.
    #[must_use]
    pub fn action_label(&self) -> ActionLabel {
        ActionLabel::for_won(self.is_won())
    }

    /// Snapshot of the board for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let side = usize::from(self.board_size.side()).max(1);
        let cards = self
            .deck
            .iter()
            .enumerate()
            .map(|(position, card)| {
                let face = if self.solved.contains(&card.id) {
                    CardFace::Solved(card.value)
                } else if self.selection.contains(card.id) {
                    CardFace::FaceUp(card.value)
                } else {
                    CardFace::Hidden
                };
                CardView {
                    position,
                    row: position / side,
                    column: position % side,
                    id: card.id,
                    face,
                }
            })
            .collect();

        BoardView {
            board_size: self.board_size,
            cards,
            won: self.is_won(),
            input_locked: self.input_locked,
            action: self.action_label(),
        }
    }
}
