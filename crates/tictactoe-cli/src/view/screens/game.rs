use std::cell::Cell;

use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, Padding},
};
use ratatui_runtime::{Screen, ScreenTransition};
use tictactoe_engine::{CellIndex, GameState, Status};
use tracing::{debug, info};

use crate::view::{
    screens::HelpScreen,
    widgets::{
        BoardDisplay, ButtonDisplay, KeyBinding, KeyBindingDisplay, MoveListDisplay, style,
    },
};

const REVERSE_LABEL: &str = "reverse";

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::IsVariant)]
enum Focus {
    Board,
    Moves,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Left,
    Right,
    Up,
    Down,
    Select,
    Place(CellIndex),
    SwitchFocus,
    Reverse,
    StepBack,
    StepForward,
    Help,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Char('h') | KeyCode::Left => Some(Self::Left),
            KeyCode::Char('l') | KeyCode::Right => Some(Self::Right),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::Up),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Select),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|digit| usize::try_from(digit).ok())
                .and_then(|digit| CellIndex::new(digit - 1))
                .map(Self::Place),
            KeyCode::Tab | KeyCode::BackTab => Some(Self::SwitchFocus),
            KeyCode::Char('r') => Some(Self::Reverse),
            KeyCode::Char('[') => Some(Self::StepBack),
            KeyCode::Char(']') => Some(Self::StepForward),
            KeyCode::Char('?') => Some(Self::Help),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn bindings() -> &'static [KeyBinding<'static>] {
        &[
            (&["h", "j", "k", "l"], "Move cursor / selection"),
            (&["←", "↓", "↑", "→"], "Move cursor / selection"),
            (&["Enter", "Space"], "Place mark / go to move"),
            (&["1-9"], "Place mark on cell"),
            (&["Tab"], "Switch board / move list"),
            (&["r"], "Reverse move list"),
            (&["["], "Previous move"),
            (&["]"], "Next move"),
            (&["?"], "Help"),
            (&["q", "Esc"], "Quit"),
        ]
    }

    fn summary_bindings() -> &'static [KeyBinding<'static>] {
        &[
            (&["Tab"], "Focus"),
            (&["r"], "Reverse"),
            (&["[", "]"], "Prev/Next"),
            (&["?"], "Help"),
            (&["q"], "Quit"),
        ]
    }
}

/// Screen areas of the game view, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy)]
struct GameLayout {
    board: Rect,
    status: Rect,
    reverse: Rect,
    moves: Rect,
    help: Rect,
}

/// The game: board on the left, status, reverse button and move list on the right.
#[derive(Debug)]
pub struct GameScreen {
    state: GameState,
    focus: Focus,
    cursor: CellIndex,
    selected_row: usize,
    // Last frame area, needed to map mouse positions back to widgets
    frame_area: Cell<Rect>,
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GameScreen {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            focus: Focus::Board,
            cursor: CellIndex::CENTER,
            selected_row: 0,
            frame_area: Cell::new(Rect::default()),
        }
    }

    #[cfg(test)]
    fn state(&self) -> &GameState {
        &self.state
    }

    fn board_display(&self) -> BoardDisplay<'_> {
        let display = BoardDisplay::new(self.state.board()).block(
            BlockWidget::bordered()
                .title(" Board ")
                .padding(Padding::horizontal(1))
                .border_style(border_style(self.focus.is_board())),
        );
        if self.focus.is_board() {
            display.cursor(self.cursor)
        } else {
            display
        }
    }

    fn move_list_display(&self) -> MoveListDisplay<'_> {
        let display = MoveListDisplay::new(&self.state).block(
            BlockWidget::bordered()
                .title(" Moves ")
                .border_style(border_style(self.focus.is_moves())),
        );
        if self.focus.is_moves() {
            display.selected(self.selected_row)
        } else {
            display
        }
    }

    fn status_line(&self) -> Line<'static> {
        let status = self.state.status();
        let style = match status {
            Status::Winner(_) => style::WIN_STATUS,
            Status::Draw => style::DRAW_STATUS,
            Status::NextPlayer(_) => Style::new(),
        };
        Line::styled(status.to_string(), style)
    }

    fn layout(&self, area: Rect) -> GameLayout {
        let board = self.board_display();
        let moves = self.move_list_display();
        let reverse = ButtonDisplay::new(REVERSE_LABEL);

        let info_height = 1 + 1 + 1 + 1 + moves.height();
        let [main_area, help] = Layout::vertical([
            Constraint::Length(u16::max(board.height(), info_height)),
            Constraint::Length(1),
        ])
        .spacing(1)
        .flex(Flex::Center)
        .areas(area);

        let [board_column, info_column] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(moves.width()),
        ])
        .spacing(2)
        .flex(Flex::Center)
        .areas(main_area);

        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(board_column);
        let [status, reverse_row, moves_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(moves.height()),
        ])
        .spacing(1)
        .areas(info_column);
        let [reverse_area] =
            Layout::horizontal([Constraint::Length(reverse.width())]).areas(reverse_row);

        GameLayout {
            board: board_area,
            status,
            reverse: reverse_area,
            moves: moves_area,
            help,
        }
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.selected_row = self.row_of_step(self.state.step());
    }

    fn row_of_step(&self, step: usize) -> usize {
        self.state
            .moves()
            .position(|entry| entry.move_number() == step)
            .unwrap_or(0)
    }

    fn place(&mut self, index: CellIndex) {
        self.cursor = index;
        self.set_state(self.state.apply_move(index));
    }

    fn jump(&mut self, step: usize) {
        match self.state.jump_to(step) {
            Ok(state) => self.set_state(state),
            Err(error) => debug!(%error, "jump ignored"),
        }
    }

    fn reverse(&mut self) {
        let selected_step = MoveListDisplay::new(&self.state).step_at_row(self.selected_row);
        self.state = self.state.toggle_order();
        self.selected_row = self.row_of_step(selected_step.unwrap_or(self.state.step()));
    }

    fn move_selection(&mut self, down: bool) {
        let last = self.state.history().len() - 1;
        self.selected_row = if down {
            usize::min(self.selected_row + 1, last)
        } else {
            self.selected_row.saturating_sub(1)
        };
    }

    fn apply_action(&mut self, action: Action) -> ScreenTransition {
        match (action, self.focus) {
            (Action::Left, Focus::Board) => self.cursor = self.cursor.left().unwrap_or(self.cursor),
            (Action::Right, Focus::Board) => {
                self.cursor = self.cursor.right().unwrap_or(self.cursor);
            }
            (Action::Up, Focus::Board) => self.cursor = self.cursor.up().unwrap_or(self.cursor),
            (Action::Down, Focus::Board) => self.cursor = self.cursor.down().unwrap_or(self.cursor),
            (Action::Up, Focus::Moves) => self.move_selection(false),
            (Action::Down, Focus::Moves) => self.move_selection(true),
            (Action::Left | Action::Right, Focus::Moves) => {}
            (Action::Select, Focus::Board) => self.place(self.cursor),
            (Action::Select, Focus::Moves) => {
                if let Some(step) = MoveListDisplay::new(&self.state).step_at_row(self.selected_row)
                {
                    self.jump(step);
                }
            }
            (Action::Place(index), _) => {
                self.focus = Focus::Board;
                self.place(index);
            }
            (Action::SwitchFocus, Focus::Board) => self.focus = Focus::Moves,
            (Action::SwitchFocus, Focus::Moves) => self.focus = Focus::Board,
            (Action::Reverse, _) => self.reverse(),
            (Action::StepBack, _) => {
                if let Some(step) = self.state.step().checked_sub(1) {
                    self.jump(step);
                }
            }
            (Action::StepForward, _) => self.jump(self.state.step() + 1),
            (Action::Help, _) => {
                return ScreenTransition::Push(Box::new(HelpScreen::new(Action::bindings())));
            }
            (Action::Quit, _) => return ScreenTransition::Exit,
        }
        ScreenTransition::Stay
    }

    fn handle_click(&mut self, event: &MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(event.column, event.row);
        let layout = self.layout(self.frame_area.get());

        let cell = self.board_display().cell_at(layout.board, position);
        if let Some(index) = cell {
            self.focus = Focus::Board;
            self.place(index);
            return;
        }

        let row = self.move_list_display().row_at(layout.moves, position);
        if let Some(row) = row {
            self.focus = Focus::Moves;
            self.selected_row = row;
            if let Some(step) = MoveListDisplay::new(&self.state).step_at_row(row) {
                self.jump(step);
            }
            return;
        }

        if layout.reverse.contains(position) {
            self.reverse();
        }
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        style::FOCUSED_BORDER
    } else {
        style::UNFOCUSED_BORDER
    }
}

impl Screen for GameScreen {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        if let Some(event) = event.as_key_press_event()
            && let Some(action) = Action::from_key_event(&event)
        {
            return self.apply_action(action);
        }
        if let Some(event) = event.as_mouse_event() {
            self.handle_click(&event);
        }
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        self.frame_area.set(frame.area());
        let layout = self.layout(frame.area());

        frame.render_widget(self.board_display(), layout.board);
        frame.render_widget(self.status_line(), layout.status);
        frame.render_widget(ButtonDisplay::new(REVERSE_LABEL), layout.reverse);
        frame.render_widget(self.move_list_display(), layout.moves);
        frame.render_widget(
            KeyBindingDisplay::new(Action::summary_bindings()),
            layout.help,
        );
    }

    fn on_close(&mut self) {
        info!(status = %self.state.status(), step = self.state.step(), "game closed");
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_engine::{HistoryOrder, Mark};

    use super::*;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 24;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press(screen: &mut GameScreen, codes: &[KeyCode]) {
        for code in codes {
            let transition = screen.handle_event(&key(*code));
            assert!(matches!(transition, ScreenTransition::Stay), "{code:?}");
        }
    }

    fn digits(screen: &mut GameScreen, cells: &str) {
        let codes: Vec<_> = cells.chars().map(KeyCode::Char).collect();
        press(screen, &codes);
    }

    fn click(position: Position) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: position.x,
            row: position.y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn center(area: Rect) -> Position {
        Position::new(area.x + area.width / 2, area.y + area.height / 2)
    }

    fn draw(screen: &GameScreen) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| screen.draw(frame)).unwrap();
        terminal
    }

    fn full_layout(screen: &GameScreen) -> GameLayout {
        screen.layout(Rect::new(0, 0, WIDTH, HEIGHT))
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "15");

        let board = screen.state().board();
        assert_eq!(board.cell(CellIndex::new(0).unwrap()).mark(), Some(Mark::X));
        assert_eq!(board.cell(CellIndex::new(4).unwrap()).mark(), Some(Mark::O));
        assert_eq!(screen.state().step(), 2);
    }

    #[test]
    fn test_cursor_and_select() {
        let mut screen = GameScreen::new();
        // cursor starts at the center cell
        press(&mut screen, &[KeyCode::Up, KeyCode::Left, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            screen.state().board().cell(CellIndex::new(0).unwrap()).mark(),
            Some(Mark::X)
        );

        press(&mut screen, &[KeyCode::Char('j'), KeyCode::Char(' ')]);
        assert_eq!(
            screen.state().board().cell(CellIndex::new(3).unwrap()).mark(),
            Some(Mark::O)
        );
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "55");
        assert_eq!(screen.state().step(), 1);
        assert_eq!(screen.state().status(), Status::NextPlayer(Mark::O));
    }

    #[test]
    fn test_win_then_moves_ignored() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "14253");
        assert_eq!(screen.state().status(), Status::Winner(Mark::X));
        digits(&mut screen, "3");
        assert_eq!(screen.state().step(), 5);
    }

    #[test]
    fn test_move_list_navigation_jumps() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "123");
        press(
            &mut screen,
            &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter],
        );
        assert_eq!(screen.state().step(), 1);
        assert!(!screen.state().x_is_next());

        // branching from step 1 drops moves 2 and 3
        digits(&mut screen, "9");
        assert_eq!(screen.state().history().len(), 3);
        assert_eq!(screen.focus, Focus::Board);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "12");
        press(&mut screen, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(screen.state().step(), 0);
        press(&mut screen, &[KeyCode::Char('[')]);
        assert_eq!(screen.state().step(), 0);
        press(&mut screen, &[KeyCode::Char(']'), KeyCode::Char(']'), KeyCode::Char(']')]);
        assert_eq!(screen.state().step(), 2);
    }

    #[test]
    fn test_reverse_keeps_selected_entry() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "12");
        press(&mut screen, &[KeyCode::Tab, KeyCode::Up]);
        assert_eq!(screen.selected_row, 1);

        press(&mut screen, &[KeyCode::Char('r')]);
        assert_eq!(screen.state().order(), HistoryOrder::Descending);
        assert_eq!(screen.selected_row, 1);

        press(&mut screen, &[KeyCode::Down]);
        press(&mut screen, &[KeyCode::Enter]);
        assert_eq!(screen.state().step(), 0);
    }

    #[test]
    fn test_help_and_quit_transitions() {
        let mut screen = GameScreen::new();
        assert!(matches!(
            screen.handle_event(&key(KeyCode::Char('?'))),
            ScreenTransition::Push(_)
        ));
        assert!(matches!(
            screen.handle_event(&key(KeyCode::Char('q'))),
            ScreenTransition::Exit
        ));
    }

    #[test]
    fn test_click_on_cells() {
        let mut screen = GameScreen::new();
        draw(&screen);
        let layout = full_layout(&screen);
        let areas = screen.board_display().cell_areas(layout.board);

        screen.handle_event(&click(center(areas[2])));
        screen.handle_event(&click(center(areas[6])));

        let board = screen.state().board();
        assert_eq!(board.cell(CellIndex::new(2).unwrap()).mark(), Some(Mark::X));
        assert_eq!(board.cell(CellIndex::new(6).unwrap()).mark(), Some(Mark::O));
    }

    #[test]
    fn test_click_on_move_list_and_reverse() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "123");
        draw(&screen);
        let layout = full_layout(&screen);

        // first list row sits just inside the top border
        let first_row = Position::new(layout.moves.x + 2, layout.moves.y + 1);
        screen.handle_event(&click(first_row));
        assert_eq!(screen.state().step(), 0);
        assert!(screen.state().x_is_next());

        screen.handle_event(&click(center(layout.reverse)));
        assert_eq!(screen.state().order(), HistoryOrder::Descending);

        screen.handle_event(&click(first_row));
        assert_eq!(screen.state().step(), 3);
    }

    #[test]
    fn test_draw_shows_status_and_moves() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "1");
        let text = screen_text(&draw(&screen));

        assert!(text.contains("Next player: O"));
        assert!(text.contains("[ reverse ]"));
        assert!(text.contains("1. Go to game start"));
        assert!(text.contains("2. Go to move #1(0, 0)"));
    }

    #[test]
    fn test_draw_shows_draw_status() {
        let mut screen = GameScreen::new();
        digits(&mut screen, "123546879");
        assert_eq!(screen.state().status(), Status::Draw);
        assert!(screen_text(&draw(&screen)).contains("Draw"));
    }
}
