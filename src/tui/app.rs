//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which manages the TUI state,
//! handles user input, and renders the interface. Every frame is rebuilt
//! in full from the current task list, so the screen always reflects the
//! store exactly.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};

use crate::math;
use crate::store::TaskList;
use crate::tui::colors::{DARK_GREEN, ERROR_RED};
use crate::tui::enums::{AppState, CalcField, Focus};
use crate::tui::input::InputField;

/// How long the input border stays red after an empty submission.
const INPUT_FLASH: Duration = Duration::from_millis(500);

/// Main application state for the terminal user interface.
///
/// Owns the task list, the new-task input line, the calculator form and
/// the table selection. All mutation goes through the `TaskList` methods
/// followed by a save, then the next frame re-renders everything.
pub struct App {
    state: AppState,
    list: TaskList,
    db_path: PathBuf,
    table_state: TableState,
    focus: Focus,
    input: InputField,
    input_flash_until: Option<Instant>,
    calc_a: InputField,
    calc_b: InputField,
    calc_field: CalcField,
    calc_result: String,
    status_message: String,
}

impl App {
    /// Create a new App instance, loading the task list from the specified path.
    pub fn new(db_path: &Path) -> io::Result<Self> {
        let list = TaskList::load(db_path);

        let mut app = App {
            state: AppState::TaskList,
            list,
            db_path: db_path.to_path_buf(),
            table_state: TableState::default(),
            focus: Focus::Input,
            input: InputField::new(),
            input_flash_until: None,
            calc_a: InputField::new(),
            calc_b: InputField::new(),
            calc_field: CalcField::First,
            calc_result: String::new(),
            status_message: String::new(),
        };

        if !app.list.tasks.is_empty() {
            app.table_state.select(Some(0));
        }
        Ok(app)
    }

    /// Save the task list to disk.
    fn save(&mut self) -> io::Result<()> {
        self.list.save(&self.db_path)
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// ID of the task under the table cursor, if any.
    fn selected_id(&self) -> Option<u64> {
        self.table_state
            .selected()
            .and_then(|idx| self.list.tasks.get(idx))
            .map(|t| t.id)
    }

    /// Clamp or initialise the table selection after a mutation.
    fn fix_selection(&mut self) {
        let len = self.list.tasks.len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            match self.table_state.selected() {
                Some(idx) if idx >= len => self.table_state.select(Some(len - 1)),
                None => self.table_state.select(Some(0)),
                _ => {}
            }
        }
    }

    /// Whether the rejected-input flash is still live.
    pub fn input_flash_active(&self) -> bool {
        self.input_flash_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Submit the input line through the validation gate.
    ///
    /// Non-empty trimmed text becomes a new task: append, save, clear the
    /// input. Empty text is rejected with a transient border flash and
    /// focus kept on the input.
    pub fn submit_input(&mut self) -> io::Result<()> {
        match self.list.add_task(&self.input.value) {
            Some(id) => {
                self.save()?;
                self.input.clear();
                self.input_flash_until = None;
                self.fix_selection();
                self.set_status_message(format!("Added task {}", id));
            }
            None => {
                self.input_flash_until = Some(Instant::now() + INPUT_FLASH);
                self.focus = Focus::Input;
            }
        }
        Ok(())
    }

    /// Toggle completion of the selected task.
    pub fn toggle_selected(&mut self) -> io::Result<()> {
        if let Some(id) = self.selected_id() {
            if let Some(done) = self.list.toggle(id) {
                self.save()?;
                self.set_status_message(format!(
                    "Task {} {}",
                    id,
                    if done { "completed" } else { "reopened" }
                ));
            }
        }
        Ok(())
    }

    /// Delete the selected task.
    pub fn delete_selected(&mut self) -> io::Result<()> {
        if let Some(id) = self.selected_id() {
            if self.list.delete(id) {
                self.save()?;
                self.fix_selection();
                self.set_status_message(format!("Deleted task {}", id));
            }
        }
        Ok(())
    }

    /// Move the table cursor up or down.
    fn move_selection(&mut self, down: bool) {
        let len = self.list.tasks.len();
        if len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(idx) if down && idx + 1 < len => idx + 1,
            Some(idx) if !down && idx > 0 => idx - 1,
            Some(idx) => idx,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    /// Handle keyboard input on the task list screen.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> io::Result<bool> {
        match key {
            KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
            }
            KeyCode::Esc => {
                if self.focus == Focus::Input && !self.input.value.is_empty() {
                    self.input.clear();
                } else {
                    return Ok(true);
                }
            }
            _ => match self.focus {
                Focus::Input => match key {
                    KeyCode::Enter => self.submit_input()?,
                    KeyCode::Backspace => self.input.handle_backspace(),
                    KeyCode::Delete => self.input.handle_delete(),
                    KeyCode::Left => self.input.move_cursor_left(),
                    KeyCode::Right => self.input.move_cursor_right(),
                    KeyCode::Down => {
                        self.focus = Focus::List;
                        self.fix_selection();
                    }
                    KeyCode::Char(c) => self.input.handle_char(c),
                    _ => {}
                },
                Focus::List => match key {
                    KeyCode::Char('q') => return Ok(true),
                    KeyCode::Up => self.move_selection(false),
                    KeyCode::Down => self.move_selection(true),
                    KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected()?,
                    KeyCode::Char('d') => self.delete_selected()?,
                    KeyCode::Char('i') => self.focus = Focus::Input,
                    KeyCode::Char('c') => {
                        self.state = AppState::Calculator;
                        self.calc_result.clear();
                    }
                    KeyCode::Char('h') => self.state = AppState::Help,
                    _ => {}
                },
            },
        }
        Ok(false)
    }

    /// Handle keyboard input on the calculator screen.
    ///
    /// Returns true if the application should quit.
    fn handle_calculator_input(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> io::Result<bool> {
        let field = match self.calc_field {
            CalcField::First => &mut self.calc_a,
            CalcField::Second => &mut self.calc_b,
        };
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Esc => {
                self.state = AppState::TaskList;
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.calc_field = match self.calc_field {
                    CalcField::First => CalcField::Second,
                    CalcField::Second => CalcField::First,
                };
            }
            KeyCode::Enter => self.compute_sum(),
            KeyCode::Backspace => field.handle_backspace(),
            KeyCode::Delete => field.handle_delete(),
            KeyCode::Left => field.move_cursor_left(),
            KeyCode::Right => field.move_cursor_right(),
            KeyCode::Char(c) => field.handle_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Parse both operand fields and show their sum or a validation message.
    pub fn compute_sum(&mut self) {
        self.calc_result = match math::sum_inputs(&self.calc_a.value, &self.calc_b.value) {
            Some(total) => format!("Result: {}", total),
            None => "Please enter valid numbers.".to_string(),
        };
    }

    /// Handle keyboard input on the help screen.
    ///
    /// Returns true if the application should quit.
    fn handle_help_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') => {
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Poll for and handle keyboard events based on current screen.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.status_message.clear();

                let should_quit = match self.state {
                    AppState::TaskList => self.handle_task_list_input(key.code, key.modifiers)?,
                    AppState::Calculator => {
                        self.handle_calculator_input(key.code, key.modifiers)?
                    }
                    AppState::Help => self.handle_help_input(key.code, key.modifiers)?,
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the task list screen: header, input line, and task table.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // new-task input
                Constraint::Min(0),    // task table
            ])
            .split(area);

        let open = self.list.tasks.iter().filter(|t| !t.completed).count();
        let header_text = vec![Line::from(vec![
            Span::styled("TO-DO LIST", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} open / {} total", open, self.list.tasks.len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];
        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let input_border = if self.input_flash_active() {
            Style::default().fg(ERROR_RED)
        } else if self.focus == Focus::Input {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(self.input.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(input_border)
                .title("New task (Enter to add)"),
        );
        f.render_widget(input, chunks[1]);
        if self.focus == Focus::Input {
            f.set_cursor_position((
                chunks[1].x + self.input.cursor as u16 + 1,
                chunks[1].y + 1,
            ));
        }

        if self.list.tasks.is_empty() {
            let empty = Paragraph::new("No tasks yet. Type above and press Enter to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title("Tasks"))
                .alignment(Alignment::Center);
            f.render_widget(empty, chunks[2]);
            return;
        }

        let header_cells = ["", "ID", "Text"].iter().map(|h| {
            ratatui::widgets::Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))
        });
        let header_row = Row::new(header_cells).height(1);

        let rows: Vec<Row> = self
            .list
            .tasks
            .iter()
            .map(|task| {
                let mark = if task.completed { "[x]" } else { "[ ]" };
                let style = if task.completed {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                Row::new(vec![
                    ratatui::widgets::Cell::from(mark),
                    ratatui::widgets::Cell::from(task.id.to_string()),
                    ratatui::widgets::Cell::from(task.text.as_str()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(3),  // completion mark
            Constraint::Length(5),  // ID
            Constraint::Min(20),    // Text
        ];

        let table = Table::new(rows, widths)
            .header(header_row)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Tasks ({}) - Space toggles, 'd' deletes",
                self.list.tasks.len()
            )))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, chunks[2], &mut self.table_state);
    }

    /// Render the two-operand calculator screen.
    fn render_calculator(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // first operand
                Constraint::Length(3), // second operand
                Constraint::Length(3), // result
                Constraint::Min(0),
            ])
            .split(area);

        let header = Paragraph::new(Line::from(Span::styled(
            "CALCULATOR",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let active = Style::default().fg(Color::Yellow);
        let inactive = Style::default();

        let first = Paragraph::new(self.calc_a.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if self.calc_field == CalcField::First {
                    active
                } else {
                    inactive
                })
                .title("First number"),
        );
        f.render_widget(first, chunks[1]);

        let second = Paragraph::new(self.calc_b.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if self.calc_field == CalcField::Second {
                    active
                } else {
                    inactive
                })
                .title("Second number"),
        );
        f.render_widget(second, chunks[2]);

        let (field, field_area) = match self.calc_field {
            CalcField::First => (&self.calc_a, chunks[1]),
            CalcField::Second => (&self.calc_b, chunks[2]),
        };
        f.set_cursor_position((field_area.x + field.cursor as u16 + 1, field_area.y + 1));

        let result = Paragraph::new(self.calc_result.as_str())
            .block(Block::default().borders(Borders::ALL).title("Sum"));
        f.render_widget(result, chunks[3]);

        let hint = Paragraph::new("Tab switches fields, Enter computes, Esc returns to tasks")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[4]);
    }

    /// Render the help screen.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(
                "Keys",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Tab          switch between input line and task list"),
            Line::from("Enter        add the typed task / toggle the selected task"),
            Line::from("Space        toggle the selected task"),
            Line::from("d            delete the selected task"),
            Line::from("i            jump to the input line"),
            Line::from("c            open the calculator"),
            Line::from("h            toggle this help"),
            Line::from("Esc / q      quit (Esc first clears a non-empty input line)"),
            Line::from(""),
            Line::from("Tasks are saved to the task file after every change."),
        ];
        let help = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .alignment(Alignment::Left);
        f.render_widget(help, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::TaskList => {
                    format!("Tasks: {} | Press 'h' for help", self.list.tasks.len())
                }
                AppState::Calculator => "Calculator".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(DARK_GREEN).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the current screen.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.state {
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::Calculator => self.render_calculator(f, chunks[0]),
            AppState::Help => self.render_help(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn type_input(&mut self, s: &str) {
        for c in s.chars() {
            self.input.handle_char(c);
        }
    }
}
