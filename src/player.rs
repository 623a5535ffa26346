//! Move selectors: human-driven players and the search-backed opponent

use crate::board::{Grid, Token};
use crate::search::{SearchResult, SearchStats, Searcher};

/// A named token owner. Places tokens in the column it is told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    token: Token,
}

impl Player {
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    /// Drop this player's token into `column`.
    ///
    /// `None` means the column is full or off the grid; the caller decides
    /// whether to ask again.
    pub fn attempt_move(&self, grid: &mut Grid, column: usize) -> Option<usize> {
        grid.place(column, self.token)
    }
}

/// Player whose column comes from a minimax search
#[derive(Debug, Clone)]
pub struct AutomatedPlayer {
    player: Player,
    searcher: Searcher,
    last_search: Option<SearchResult>,
}

impl AutomatedPlayer {
    /// Automated player searching `depth` plies with alpha-beta pruning
    pub fn new(name: impl Into<String>, token: Token, depth: u32) -> Self {
        Self::with_searcher(Player::new(name, token), Searcher::new(depth))
    }

    pub fn with_searcher(player: Player, searcher: Searcher) -> Self {
        Self {
            player,
            searcher,
            last_search: None,
        }
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.searcher.depth()
    }

    /// Result of the most recent search, if any
    #[inline]
    pub fn last_search(&self) -> Option<SearchResult> {
        self.last_search
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    /// Search for a column without playing it
    pub fn choose_column(&mut self, grid: &Grid) -> SearchResult {
        let result = self.searcher.best_column(grid, self.player.token());
        self.last_search = Some(result);
        result
    }

    /// Search a normalized copy of `grid`, then play the chosen column on `grid` itself.
    ///
    /// `None` when no column can take a token.
    pub fn choose_and_play(&mut self, grid: &mut Grid) -> Option<usize> {
        let column = self.choose_column(grid).column?;
        self.player.attempt_move(grid, column)
    }
}

/// Entry in the turn order
#[derive(Debug, Clone)]
pub enum Participant {
    /// Moves come from outside (clicks, tests)
    Human(Player),
    /// Moves come from the search
    Automated(AutomatedPlayer),
}

impl Participant {
    #[inline]
    pub fn player(&self) -> &Player {
        match self {
            Participant::Human(player) => player,
            Participant::Automated(automated) => automated.player(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.player().name()
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.player().token()
    }

    #[inline]
    pub fn is_automated(&self) -> bool {
        matches!(self, Participant::Automated(_))
    }

    /// Most recent search of an automated participant
    pub fn last_search(&self) -> Option<(SearchResult, SearchStats)> {
        match self {
            Participant::Human(_) => None,
            Participant::Automated(automated) => automated
                .last_search()
                .map(|result| (result, automated.stats())),
        }
    }
}

impl From<Player> for Participant {
    fn from(player: Player) -> Self {
        Participant::Human(player)
    }
}

impl From<AutomatedPlayer> for Participant {
    fn from(automated: AutomatedPlayer) -> Self {
        Participant::Automated(automated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Token = Token::Player(0);
    const BLUE: Token = Token::Player(1);

    #[test]
    fn test_attempt_move_places_own_token() {
        let mut grid = Grid::new(6, 7, 4);
        let player = Player::new("Red", RED);
        let index = player.attempt_move(&mut grid, 2).unwrap();
        assert_eq!(grid.to_coord(index).map(|c| (c.row, c.col)), Some((5, 2)));
        assert_eq!(grid.token_at(5, 2), Some(RED));
    }

    #[test]
    fn test_attempt_move_illegal_column() {
        let mut grid = Grid::new(1, 2, 2);
        let player = Player::new("Red", RED);
        assert!(player.attempt_move(&mut grid, 0).is_some());
        assert!(player.attempt_move(&mut grid, 0).is_none());
        assert!(player.attempt_move(&mut grid, 7).is_none());
    }

    #[test]
    fn test_automated_first_move_is_central() {
        let mut grid = Grid::new(6, 7, 4);
        let mut computer = AutomatedPlayer::new("Blue", BLUE, 1);
        let index = computer.choose_and_play(&mut grid).unwrap();
        assert_eq!(grid.to_coord(index).map(|c| c.col), Some(3));
        assert_eq!(grid.token_at(5, 3), Some(BLUE));
        assert_eq!(computer.last_search().and_then(|r| r.column), Some(3));
    }

    #[test]
    fn test_automated_plays_real_token() {
        // Tokens other than the canonical markers survive normalization
        let green = Token::Player(7);
        let mut grid = Grid::new(6, 7, 4);
        grid.place(0, RED);
        let mut computer = AutomatedPlayer::new("Green", green, 2);
        let index = computer.choose_and_play(&mut grid).unwrap();
        assert_eq!(grid.cell(index).unwrap().token(), green);
        assert_eq!(grid.token_count(), 2);
    }

    #[test]
    fn test_automated_completes_own_line() {
        let mut grid = Grid::new(6, 7, 4);
        for row in 3..6 {
            grid.set(row, 5, BLUE);
        }
        grid.set(5, 0, RED);
        grid.set(5, 1, RED);
        let mut computer = AutomatedPlayer::new("Blue", BLUE, 3);
        let index = computer.choose_and_play(&mut grid).unwrap();
        assert!(grid.cell(index).unwrap().completes_line(4));
    }

    #[test]
    fn test_automated_on_full_grid() {
        let mut grid = Grid::new(1, 2, 2);
        grid.place(0, RED);
        grid.place(1, BLUE);
        let mut computer = AutomatedPlayer::new("Blue", BLUE, 4);
        assert!(computer.choose_and_play(&mut grid).is_none());
        assert!(computer.last_search().unwrap().is_no_move());
    }

    #[test]
    fn test_participant_accessors() {
        let human: Participant = Player::new("Red", RED).into();
        let computer: Participant = AutomatedPlayer::new("Blue", BLUE, 5).into();
        assert!(!human.is_automated());
        assert!(computer.is_automated());
        assert_eq!(human.name(), "Red");
        assert_eq!(computer.token(), BLUE);
        assert!(human.last_search().is_none());
        assert!(computer.last_search().is_none());
    }
}
