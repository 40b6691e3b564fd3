//! Ratatui form backend implementation for the FormBackend trait.
//!
//! Displays all fields at once in a scrollable form with keyboard navigation.
//! Every field interaction is pushed into the session as it happens; submit
//! is gated behind the input checks from the field descriptors.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use moodcheck::{
    Answers, AnswerValue, Field, FieldKind, FormBackend, FormDefinition, Session, SubmissionSink,
    Survey,
};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};
use std::io::{self, Stdout};
use thiserror::Error;

/// Error type for the terminal form backend.
#[derive(Debug, Error)]
pub enum FormError {
    /// User left the form before submitting (e.g., pressed Esc).
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the terminal form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Terminal form backend that displays all fields at once.
#[derive(Debug, Clone, Default)]
pub struct TerminalForm {
    /// Color theme for the UI.
    theme: Theme,
}

impl TerminalForm {
    /// Create a new terminal form with the default theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, FormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), FormError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Per-field widget state.
#[derive(Debug, Clone)]
enum ControlState {
    Text {
        value: String,
        cursor: usize,
    },
    Select {
        options: Vec<String>,
        chosen: Option<usize>,
    },
    Radio {
        options: Vec<String>,
        chosen: Option<usize>,
        /// Currently highlighted option (for keyboard navigation)
        highlight: usize,
    },
    Slider {
        min: i64,
        max: i64,
        value: i64,
        low_caption: Option<String>,
        high_caption: Option<String>,
    },
}

/// A field in the form: its descriptor, widget state and current error.
#[derive(Debug, Clone)]
struct FormRow {
    field: Field,
    control: ControlState,
    error: Option<String>,
}

impl FormRow {
    fn new(field: &Field, answers: &Answers) -> Self {
        let control = match field.kind() {
            FieldKind::Text(_) => {
                let value = answers.get_text(field.name()).unwrap_or_default().to_string();
                let cursor = value.len();
                ControlState::Text { value, cursor }
            }
            FieldKind::Select(choice) => {
                let current = answers.get_text(field.name()).unwrap_or_default();
                ControlState::Select {
                    chosen: choice.options.iter().position(|o| o == current),
                    options: choice.options.clone(),
                }
            }
            FieldKind::Radio(choice) => {
                let current = answers.get_text(field.name()).unwrap_or_default();
                let chosen = choice.options.iter().position(|o| o == current);
                ControlState::Radio {
                    highlight: chosen.unwrap_or(0),
                    chosen,
                    options: choice.options.clone(),
                }
            }
            FieldKind::Slider(slider) => ControlState::Slider {
                min: slider.min,
                max: slider.max,
                value: answers.get_int(field.name()).unwrap_or(slider.default),
                low_caption: slider.low_caption.clone(),
                high_caption: slider.high_caption.clone(),
            },
        };
        Self {
            field: field.clone(),
            control,
            error: None,
        }
    }

    /// The answer this row currently represents.
    fn current_value(&self) -> AnswerValue {
        match &self.control {
            ControlState::Text { value, .. } => AnswerValue::Text(value.clone()),
            ControlState::Select { options, chosen }
            | ControlState::Radio {
                options, chosen, ..
            } => AnswerValue::Text(
                chosen
                    .and_then(|idx| options.get(idx))
                    .cloned()
                    .unwrap_or_default(),
            ),
            ControlState::Slider { value, .. } => AnswerValue::Int(*value),
        }
    }
}

/// State for the entire form.
struct FormState {
    rows: Vec<FormRow>,
    focused: usize,
    /// Vertical scroll offset in rows of cells
    scroll_offset: u16,
    /// Whether the submit button is focused
    submit_focused: bool,
    /// Whether the session has been submitted at least once
    submitted: bool,
    theme: Theme,
    title: String,
    intro: Option<String>,
}

impl FormState {
    fn new(definition: &FormDefinition, answers: &Answers, theme: Theme) -> Self {
        let rows = definition
            .fields()
            .iter()
            .map(|field| FormRow::new(field, answers))
            .collect();
        Self {
            rows,
            focused: 0,
            scroll_offset: 0,
            submit_focused: false,
            submitted: false,
            theme,
            title: definition.title.clone(),
            intro: definition.intro.clone(),
        }
    }

    fn focused_row(&self) -> Option<&FormRow> {
        if self.submit_focused {
            None
        } else {
            self.rows.get(self.focused)
        }
    }

    fn focused_row_mut(&mut self) -> Option<&mut FormRow> {
        if self.submit_focused {
            None
        } else {
            self.rows.get_mut(self.focused)
        }
    }

    /// Push the focused row's current value into the session.
    fn sync_focused<T: Survey>(&self, session: &mut Session<T>) {
        if let Some(row) = self.focused_row() {
            session.set(row.field.name(), row.current_value());
        }
    }

    fn next_field(&mut self) {
        if self.submit_focused {
            return;
        }
        if self.focused + 1 < self.rows.len() {
            self.focused += 1;
        } else {
            self.submit_focused = true;
        }
    }

    fn prev_field(&mut self) {
        if self.submit_focused {
            self.submit_focused = false;
            self.focused = self.rows.len().saturating_sub(1);
        } else if self.focused > 0 {
            self.focused -= 1;
        }
    }

    fn insert_char(&mut self, c: char) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Text { value, cursor } = &mut row.control
        {
            value.insert(*cursor, c);
            *cursor += c.len_utf8();
            row.error = None;
        }
    }

    fn backspace(&mut self) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Text { value, cursor } = &mut row.control
            && *cursor > 0
        {
            let prev = value[..*cursor]
                .chars()
                .next_back()
                .map_or(0, char::len_utf8);
            *cursor -= prev;
            value.remove(*cursor);
            row.error = None;
        }
    }

    fn delete(&mut self) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Text { value, cursor } = &mut row.control
            && *cursor < value.len()
        {
            value.remove(*cursor);
            row.error = None;
        }
    }

    fn cursor_home(&mut self) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Text { cursor, .. } = &mut row.control
        {
            *cursor = 0;
        }
    }

    fn cursor_end(&mut self) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Text { value, cursor } = &mut row.control
        {
            *cursor = value.len();
        }
    }

    /// Left arrow: cursor left in text, previous option in selects, minus one
    /// on sliders.
    fn step_left(&mut self) {
        if let Some(row) = self.focused_row_mut() {
            match &mut row.control {
                ControlState::Text { value, cursor } => {
                    if *cursor > 0 {
                        let prev = value[..*cursor]
                            .chars()
                            .next_back()
                            .map_or(0, char::len_utf8);
                        *cursor -= prev;
                    }
                }
                ControlState::Select { options, chosen } => {
                    if !options.is_empty() {
                        let next = match chosen {
                            Some(idx) => (*idx + options.len() - 1) % options.len(),
                            None => options.len() - 1,
                        };
                        *chosen = Some(next);
                        row.error = None;
                    }
                }
                ControlState::Slider { min, value, .. } => {
                    *value = (*value - 1).max(*min);
                }
                ControlState::Radio { .. } => {}
            }
        }
    }

    /// Right arrow: cursor right in text, next option in selects, plus one on
    /// sliders.
    fn step_right(&mut self) {
        if let Some(row) = self.focused_row_mut() {
            match &mut row.control {
                ControlState::Text { value, cursor } => {
                    if *cursor < value.len() {
                        let next = value[*cursor..].chars().next().map_or(0, char::len_utf8);
                        *cursor += next;
                    }
                }
                ControlState::Select { options, chosen } => {
                    if !options.is_empty() {
                        let next = match chosen {
                            Some(idx) => (*idx + 1) % options.len(),
                            None => 0,
                        };
                        *chosen = Some(next);
                        row.error = None;
                    }
                }
                ControlState::Slider { max, value, .. } => {
                    *value = (*value + 1).min(*max);
                }
                ControlState::Radio { .. } => {}
            }
        }
    }

    /// Move the highlight up within a radio group.
    fn option_up(&mut self) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Radio {
                options, highlight, ..
            } = &mut row.control
            && !options.is_empty()
        {
            *highlight = (*highlight + options.len() - 1) % options.len();
        }
    }

    /// Move the highlight down within a radio group.
    fn option_down(&mut self) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Radio {
                options, highlight, ..
            } = &mut row.control
            && !options.is_empty()
        {
            *highlight = (*highlight + 1) % options.len();
        }
    }

    /// Select the currently highlighted radio option.
    fn choose_highlighted(&mut self) {
        if let Some(row) = self.focused_row_mut()
            && let ControlState::Radio {
                chosen, highlight, ..
            } = &mut row.control
        {
            *chosen = Some(*highlight);
            row.error = None;
        }
    }

    /// Check if the focused field is a radio group (owns Up/Down/Enter).
    fn on_radio(&self) -> bool {
        matches!(
            self.focused_row().map(|r| &r.control),
            Some(ControlState::Radio { .. })
        )
    }

    /// Check if the focused field is a select (Space cycles it).
    fn on_select(&self) -> bool {
        matches!(
            self.focused_row().map(|r| &r.control),
            Some(ControlState::Select { .. })
        )
    }

    /// Run the native-style input checks over every row. On failure, annotate
    /// the rows and focus the first offender. The session is never touched.
    fn check_all(&mut self) -> bool {
        let mut first_error = None;
        for (idx, row) in self.rows.iter_mut().enumerate() {
            row.error = row.field.check(&row.current_value()).err();
            if row.error.is_some() && first_error.is_none() {
                first_error = Some(idx);
            }
        }
        if let Some(idx) = first_error {
            self.focused = idx;
            self.submit_focused = false;
            return false;
        }
        true
    }

    /// Calculate the Y position of a row in the virtual scroll area.
    fn row_y_position(&self, target: usize) -> u16 {
        self.rows[..target.min(self.rows.len())]
            .iter()
            .map(row_height)
            .sum()
    }

    /// Calculate total content height.
    fn total_content_height(&self) -> u16 {
        self.rows.iter().map(row_height).sum()
    }

    /// Adjust scroll offset to keep the focused row visible.
    fn adjust_scroll(&mut self, viewport_height: u16) {
        if self.submit_focused {
            return;
        }
        let row_y = self.row_y_position(self.focused);
        let height = self.rows.get(self.focused).map_or(3, row_height);

        if row_y < self.scroll_offset {
            self.scroll_offset = row_y;
        }
        let row_bottom = row_y + height;
        let viewport_bottom = self.scroll_offset + viewport_height;
        if row_bottom > viewport_bottom {
            self.scroll_offset = row_bottom.saturating_sub(viewport_height);
        }
    }
}

fn row_height(row: &FormRow) -> u16 {
    match &row.control {
        ControlState::Radio { options, .. } => 2 + options.len() as u16,
        ControlState::Slider { .. } => 4,
        ControlState::Text { .. } | ControlState::Select { .. } => 3,
    }
}

/// Cosmetic option label: dashes become spaces, each word is capitalized.
/// The stored answer keeps the raw option value.
fn display_label(option: &str) -> String {
    option
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn draw_form(frame: &mut Frame, state: &mut FormState) {
    let area = frame.area();
    let theme = state.theme.clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Form content
            Constraint::Length(3), // Submit button
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    // Title
    let title_text = if let Some(intro) = &state.intro {
        format!("{}\n{}", state.title, intro)
    } else {
        state.title.clone()
    };
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(title, chunks[0]);

    // Form content area - reserve space for scrollbar on the right
    let form_area = chunks[1];
    let content_width = form_area.width.saturating_sub(2);
    let viewport_height = form_area.height;

    state.adjust_scroll(viewport_height);

    let total_height = state.total_content_height();
    let scroll_offset = state.scroll_offset;

    // Render rows with scroll offset
    let mut virtual_y: u16 = 0;
    for (idx, row) in state.rows.iter().enumerate() {
        let is_focused = !state.submit_focused && idx == state.focused;
        let height = row_height(row);

        let row_top = virtual_y;
        let row_bottom = virtual_y + height;
        virtual_y = row_bottom;

        // Skip rows completely above the viewport
        if row_bottom <= scroll_offset {
            continue;
        }
        // Stop once we're completely below the viewport
        if row_top >= scroll_offset + viewport_height {
            break;
        }

        let visible_top = row_top.saturating_sub(scroll_offset);
        let clip_top = scroll_offset.saturating_sub(row_top);
        let available_height = viewport_height.saturating_sub(visible_top);
        let visible_height = (height - clip_top).min(available_height);

        // Rows clipped at the top look broken, skip them like partial borders
        if visible_height > 0 && clip_top == 0 {
            let row_area = Rect {
                x: form_area.x + 1,
                y: form_area.y + visible_top,
                width: content_width,
                height: visible_height,
            };
            draw_row(frame, row, row_area, is_focused, &theme);
        }
    }

    // Scrollbar if content exceeds viewport
    if total_height > viewport_height {
        let scrollbar_area = Rect {
            x: form_area.x + form_area.width - 1,
            y: form_area.y,
            width: 1,
            height: viewport_height,
        };

        let mut scrollbar_state = ScrollbarState::new(total_height as usize)
            .position(scroll_offset as usize)
            .viewport_content_length(viewport_height as usize);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    // Submit button
    let submit_color = if state.submitted {
        theme.success
    } else {
        theme.primary
    };
    let submit_style = if state.submit_focused {
        Style::default()
            .fg(theme.text)
            .bg(submit_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(submit_color)
            .add_modifier(Modifier::BOLD)
    };
    let label = if state.submitted {
        "✓ Submitted"
    } else {
        "Submit"
    };
    let submit_text = if state.submit_focused {
        format!("  [ {label} ]  ")
    } else {
        format!("    {label}    ")
    };
    let submit_button = Paragraph::new(submit_text)
        .style(submit_style)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if state.submit_focused {
                    submit_color
                } else {
                    theme.border
                })),
        );
    frame.render_widget(submit_button, chunks[2]);

    // Help bar
    let help_text = "Tab: Next  ↑/↓: Navigate  ←/→: Adjust  Space/Enter: Select  Esc: Leave";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);
}

fn draw_row(frame: &mut Frame, row: &FormRow, area: Rect, is_focused: bool, theme: &Theme) {
    let border_color = if row.error.is_some() {
        theme.error
    } else if is_focused {
        theme.primary
    } else {
        theme.border
    };

    let marker = if row.field.is_required() { " *" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {}{} ", row.field.prompt(), marker))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &row.control {
        ControlState::Text { value, cursor } => {
            let text = Paragraph::new(value.clone()).style(Style::default().fg(theme.text));
            frame.render_widget(text, inner);

            if is_focused {
                let cursor_x = inner.x + value[..*cursor].chars().count() as u16;
                if cursor_x < inner.x + inner.width {
                    frame.set_cursor_position((cursor_x, inner.y));
                }
            }
        }
        ControlState::Select { options, chosen } => {
            let (content, color) = match chosen.and_then(|idx| options.get(idx)) {
                Some(option) => (format!("‹ {} ›", display_label(option)), theme.text),
                None => ("‹ select an option ›".to_string(), theme.border),
            };
            let text = Paragraph::new(content).style(Style::default().fg(color));
            frame.render_widget(text, inner);
        }
        ControlState::Radio {
            options,
            chosen,
            highlight,
        } => {
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    let marker = if *chosen == Some(idx) { "(●)" } else { "( )" };
                    let is_highlighted = is_focused && idx == *highlight;
                    let style = if is_highlighted {
                        Style::default()
                            .fg(theme.text)
                            .bg(theme.selected_bg)
                            .add_modifier(Modifier::BOLD)
                    } else if *chosen == Some(idx) {
                        Style::default().fg(theme.highlight)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    ListItem::new(format!("{} {}", marker, display_label(option))).style(style)
                })
                .collect();
            let list = List::new(items);
            frame.render_widget(list, inner);
        }
        ControlState::Slider {
            min,
            max,
            value,
            low_caption,
            high_caption,
        } => {
            let track: String = (*min..=*max)
                .map(|v| if v <= *value { '█' } else { '─' })
                .collect();
            let track_line = format!("{track}  {value}");
            let gauge = Paragraph::new(track_line).style(Style::default().fg(if is_focused {
                theme.highlight
            } else {
                theme.text
            }));
            let track_area = Rect { height: 1, ..inner };
            frame.render_widget(gauge, track_area);

            if inner.height > 1 {
                let low = low_caption.as_deref().unwrap_or("");
                let high = high_caption.as_deref().unwrap_or("");
                let pad = (inner.width as usize).saturating_sub(low.len() + high.len()).max(1);
                let captions = format!("{low}{}{high}", " ".repeat(pad));
                let caption_area = Rect {
                    y: inner.y + 1,
                    height: 1,
                    ..inner
                };
                frame.render_widget(
                    Paragraph::new(captions).style(Style::default().fg(theme.border)),
                    caption_area,
                );
            }
        }
    }

    // Show error if any
    if let Some(error) = &row.error {
        let error_area = Rect {
            x: area.x + 1,
            y: area.y + area.height - 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let error_text =
            Paragraph::new(format!("⚠ {}", error)).style(Style::default().fg(theme.error));
        frame.render_widget(error_text, error_area);
    }
}

impl<T: Survey> FormBackend<T> for TerminalForm {
    type Error = FormError;

    fn run(
        &self,
        session: &mut Session<T>,
        sink: &mut dyn SubmissionSink<T>,
    ) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut state = FormState::new(session.definition(), session.answers(), self.theme.clone());

        let outcome = event_loop(&mut terminal, &mut state, session, sink);
        self.restore_terminal(&mut terminal)?;
        outcome
    }
}

fn event_loop<T: Survey>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut FormState,
    session: &mut Session<T>,
    sink: &mut dyn SubmissionSink<T>,
) -> Result<(), FormError> {
    loop {
        terminal.draw(|frame| draw_form(frame, state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Esc => {
                    if state.submitted {
                        return Ok(());
                    }
                    return Err(FormError::Cancelled);
                }
                // Ctrl+Enter or F10 submits from anywhere
                KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    try_submit(state, session, sink);
                }
                KeyCode::F(10) => {
                    try_submit(state, session, sink);
                }
                // Enter: submit on the button, select in radio groups, or
                // move on
                KeyCode::Enter => {
                    if state.submit_focused {
                        try_submit(state, session, sink);
                    } else if state.on_radio() {
                        state.choose_highlighted();
                        state.sync_focused(session);
                    } else {
                        state.next_field();
                    }
                }
                KeyCode::BackTab | KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    state.prev_field();
                }
                KeyCode::Tab => {
                    state.next_field();
                }
                KeyCode::Up => {
                    if state.on_radio() {
                        state.option_up();
                    } else {
                        state.prev_field();
                    }
                }
                KeyCode::Down => {
                    if state.on_radio() {
                        state.option_down();
                    } else {
                        state.next_field();
                    }
                }
                KeyCode::Left => {
                    state.step_left();
                    state.sync_focused(session);
                }
                KeyCode::Right => {
                    state.step_right();
                    state.sync_focused(session);
                }
                // Space: select in radio groups, cycle selects, type in text
                KeyCode::Char(' ') => {
                    if state.on_radio() {
                        state.choose_highlighted();
                    } else if state.on_select() {
                        state.step_right();
                    } else {
                        state.insert_char(' ');
                    }
                    state.sync_focused(session);
                }
                KeyCode::Char(c) => {
                    state.insert_char(c);
                    state.sync_focused(session);
                }
                KeyCode::Backspace => {
                    state.backspace();
                    state.sync_focused(session);
                }
                KeyCode::Delete => {
                    state.delete();
                    state.sync_focused(session);
                }
                KeyCode::Home => {
                    state.cursor_home();
                }
                KeyCode::End => {
                    state.cursor_end();
                }
                KeyCode::PageDown => {
                    for _ in 0..5 {
                        state.next_field();
                    }
                }
                KeyCode::PageUp => {
                    for _ in 0..5 {
                        state.prev_field();
                    }
                }
                _ => {}
            }
        }
    }
}

/// Gate submission behind the input checks; on success report the record.
/// A repeat submit after success goes through the same path and re-emits.
fn try_submit<T: Survey>(
    state: &mut FormState,
    session: &mut Session<T>,
    sink: &mut dyn SubmissionSink<T>,
) {
    if state.check_all() {
        session.submit(sink);
        state.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodcheck::{MoodEntry, RecordingSink, SubmissionStatus};

    fn fresh() -> (Session<MoodEntry>, FormState) {
        let session = Session::<MoodEntry>::new();
        let state = FormState::new(session.definition(), session.answers(), Theme::default());
        (session, state)
    }

    #[test]
    fn rows_follow_the_descriptor_list() {
        let (_, state) = fresh();
        assert_eq!(state.rows.len(), 10);
        assert!(matches!(state.rows[0].control, ControlState::Text { .. }));
        assert!(matches!(state.rows[3].control, ControlState::Radio { .. }));
        assert!(matches!(
            state.rows[9].control,
            ControlState::Slider { value: 5, .. }
        ));
    }

    #[test]
    fn typing_syncs_into_the_session() {
        let (mut session, mut state) = fresh();
        for c in "a@b.com".chars() {
            state.insert_char(c);
            state.sync_focused(&mut session);
        }
        assert_eq!(session.answers().get_text("email").unwrap(), "a@b.com");
    }

    #[test]
    fn check_all_blocks_empty_required_fields() {
        let (_, mut state) = fresh();
        state.focused = 5;

        assert!(!state.check_all());
        assert_eq!(state.focused, 0);
        assert!(state.rows[0].error.is_some());
        assert!(state.rows[1].error.is_some());
        assert!(state.rows[2].error.is_none());
    }

    #[test]
    fn check_all_passes_with_valid_required_fields() {
        let (mut session, mut state) = fresh();
        for c in "a@b.com".chars() {
            state.insert_char(c);
        }
        state.sync_focused(&mut session);
        state.next_field();
        for c in "30".chars() {
            state.insert_char(c);
        }
        state.sync_focused(&mut session);

        assert!(state.check_all());
    }

    #[test]
    fn select_cycles_and_wraps() {
        let (mut session, mut state) = fresh();
        state.focused = 5; // mood: 6 options

        state.step_right();
        state.sync_focused(&mut session);
        assert_eq!(session.answers().get_text("mood").unwrap(), "relaxed");

        state.step_left();
        state.step_left();
        state.sync_focused(&mut session);
        assert_eq!(session.answers().get_text("mood").unwrap(), "stressed");
    }

    #[test]
    fn radio_choice_stores_the_raw_option() {
        let (mut session, mut state) = fresh();
        state.focused = 4; // location

        state.option_down();
        state.choose_highlighted();
        state.sync_focused(&mut session);

        assert_eq!(
            session.answers().get_text("location").unwrap(),
            "public-space"
        );
    }

    #[test]
    fn slider_clamps_at_the_bounds() {
        let (mut session, mut state) = fresh();
        state.focused = 8; // mood_intensity

        for _ in 0..20 {
            state.step_right();
        }
        state.sync_focused(&mut session);
        assert_eq!(session.answers().get_int("mood_intensity").unwrap(), 10);

        for _ in 0..20 {
            state.step_left();
        }
        state.sync_focused(&mut session);
        assert_eq!(session.answers().get_int("mood_intensity").unwrap(), 1);
    }

    #[test]
    fn submit_path_emits_and_marks_submitted() {
        let (mut session, mut state) = fresh();
        let mut sink = RecordingSink::new();
        for c in "a@b.com".chars() {
            state.insert_char(c);
        }
        state.sync_focused(&mut session);
        state.next_field();
        for c in "30".chars() {
            state.insert_char(c);
        }
        state.sync_focused(&mut session);

        try_submit(&mut state, &mut session, &mut sink);
        assert!(state.submitted);
        assert_eq!(session.status(), SubmissionStatus::Submitted);

        // Re-submission re-emits without further state change
        try_submit(&mut state, &mut session, &mut sink);
        assert_eq!(sink.len(), 2);
        assert_eq!(session.status(), SubmissionStatus::Submitted);
    }

    #[test]
    fn cosmetic_labels() {
        assert_eq!(display_label("public-space"), "Public Space");
        assert_eq!(display_label("prefer-not-to-say"), "Prefer Not To Say");
        assert_eq!(display_label("happy"), "Happy");
    }

    #[test]
    fn error_display() {
        let err = FormError::Cancelled;
        assert_eq!(err.to_string(), "Form cancelled by user");
    }
}
