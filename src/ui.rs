use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use household_builder::{Candidate, HouseholdBuilder};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Age,
    Relationship,
    Smoker,
    Household,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Age => Focus::Relationship,
            Focus::Relationship => Focus::Smoker,
            Focus::Smoker => Focus::Household,
            Focus::Household => Focus::Age,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Focus::Age => Focus::Household,
            Focus::Relationship => Focus::Age,
            Focus::Smoker => Focus::Relationship,
            Focus::Household => Focus::Smoker,
        }
    }

    pub fn in_form(&self) -> bool {
        !matches!(self, Focus::Household)
    }
}

pub struct App {
    pub builder: HouseholdBuilder,
    pub focus: Focus,
    pub age_input: String,
    pub rel_index: usize,
    pub smoker: bool,
    pub errors: Vec<String>,
    pub household_state: ListState,
    pub submitted_payload: Option<String>,
}

impl App {
    pub fn new(builder: HouseholdBuilder) -> Self {
        Self {
            builder,
            focus: Focus::Age,
            age_input: String::new(),
            rel_index: 0,
            smoker: false,
            errors: Vec::new(),
            household_state: ListState::default(),
            submitted_payload: None,
        }
    }

    pub fn rel_value(&self) -> &str {
        self.builder
            .catalog()
            .options()
            .get(self.rel_index)
            .map(|option| option.as_str())
            .unwrap_or("")
    }

    pub fn next_relationship(&mut self) {
        let count = self.builder.catalog().count();
        if count == 0 {
            return;
        }
        self.rel_index = (self.rel_index + 1) % count;
    }

    pub fn previous_relationship(&mut self) {
        let count = self.builder.catalog().count();
        if count == 0 {
            return;
        }
        self.rel_index = if self.rel_index == 0 {
            count - 1
        } else {
            self.rel_index - 1
        };
    }

    pub fn toggle_smoker(&mut self) {
        self.smoker = !self.smoker;
    }

    pub fn push_age_char(&mut self, c: char) {
        // Junk characters are allowed in; validation reports them properly
        if c.is_ascii_graphic() {
            self.age_input.push(c);
        }
    }

    pub fn pop_age_char(&mut self) {
        self.age_input.pop();
    }

    /// Validate the current form values and admit the member on success
    pub fn add_member(&mut self) {
        let candidate = Candidate::new(
            self.age_input.clone(),
            self.rel_value().to_string(),
            self.smoker,
        );

        match self.builder.add_candidate(&candidate) {
            Ok(_) => {
                self.clear_form();
                if self.household_state.selected().is_none() {
                    self.household_state.select(Some(0));
                }
            }
            Err(errors) => {
                self.errors = errors.iter().map(ToString::to_string).collect();
            }
        }
    }

    /// Remove the highlighted household entry
    pub fn delete_selected(&mut self) {
        let Some(index) = self.household_state.selected() else {
            return;
        };
        let Some(member) = self.builder.members().get(index) else {
            return;
        };

        let id = member.id.clone();
        self.builder.remove_member(&id);

        let len = self.builder.members().len();
        if len == 0 {
            self.household_state.select(None);
        } else if index >= len {
            self.household_state.select(Some(len - 1));
        }
    }

    pub fn submit(&mut self) {
        match self.builder.submit() {
            Ok(payload) => {
                self.submitted_payload = Some(payload);
                self.errors.clear();
            }
            Err(err) => {
                self.errors = vec![err.to_string()];
            }
        }
    }

    fn clear_form(&mut self) {
        self.age_input.clear();
        self.rel_index = 0;
        self.smoker = false;
        self.errors.clear();
    }

    pub fn select_next(&mut self) {
        let len = self.builder.members().len();
        if len == 0 {
            return;
        }
        let i = match self.household_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.household_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        let len = self.builder.members().len();
        if len == 0 {
            return;
        }
        let i = match self.household_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.household_state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('q') if app.focus != Focus::Age => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.focus = app.focus.previous();
                    } else {
                        app.focus = app.focus.next();
                    }
                }
                KeyCode::BackTab => app.focus = app.focus.previous(),
                KeyCode::Enter if app.focus.in_form() => app.add_member(),
                KeyCode::Char('s') if app.focus != Focus::Age => app.submit(),
                KeyCode::Char('d') | KeyCode::Delete if app.focus == Focus::Household => {
                    app.delete_selected()
                }
                KeyCode::Left if app.focus == Focus::Relationship => app.previous_relationship(),
                KeyCode::Right if app.focus == Focus::Relationship => app.next_relationship(),
                KeyCode::Up => match app.focus {
                    Focus::Relationship => app.previous_relationship(),
                    Focus::Household => app.select_previous(),
                    _ => {}
                },
                KeyCode::Down => match app.focus {
                    Focus::Relationship => app.next_relationship(),
                    Focus::Household => app.select_next(),
                    _ => {}
                },
                KeyCode::Char(' ') if app.focus == Focus::Smoker => app.toggle_smoker(),
                KeyCode::Char(c) if app.focus == Focus::Age => app.push_age_char(c),
                KeyCode::Backspace if app.focus == Focus::Age => app.pop_age_char(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    // Content area, with the debug pane below once a submission happened
    let content_area = if app.submitted_payload.is_some() {
        let content_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Form + household
                Constraint::Length(8), // Debug pane
            ])
            .split(chunks[1]);

        render_debug_pane(f, content_chunks[1], app);
        content_chunks[0]
    } else {
        chunks[1]
    };

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Entry form
            Constraint::Percentage(60), // Household list
        ])
        .split(content_area);

    render_form(f, content_chunks[0], app);
    render_household(f, content_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header_spans = vec![
        Span::styled(
            "Household Builder",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Members: {}", app.builder.members().len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Options: {}", app.builder.catalog().join()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(header_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn field_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Age:          ", field_style(app.focus == Focus::Age)),
            Span::styled(
                format!("[{}_]", app.age_input),
                field_style(app.focus == Focus::Age),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Relationship: ",
                field_style(app.focus == Focus::Relationship),
            ),
            Span::styled(
                format!("< {} >", app.rel_value()),
                field_style(app.focus == Focus::Relationship),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Smoker:       ", field_style(app.focus == Focus::Smoker)),
            Span::styled(
                if app.smoker { "[x]" } else { "[ ]" },
                field_style(app.focus == Focus::Smoker),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Enter adds this person to the household",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]),
    ];

    if !app.errors.is_empty() {
        content.push(Line::from(""));
        for error in &app.errors {
            content.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Red)),
                Span::styled(error.clone(), Style::default().fg(Color::Red)),
            ]));
        }
    }

    let border_color = if app.focus.in_form() {
        Color::Yellow
    } else {
        Color::White
    };

    let form = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(" Add a Member "),
        );

    f.render_widget(form, area);
}

fn render_household(f: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .builder
        .members()
        .iter()
        .map(|member| ListItem::new(member.to_string()))
        .collect();

    let border_color = if app.focus == Focus::Household {
        Color::Yellow
    } else {
        Color::White
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" Household ({}) ", app.builder.members().len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.household_state);
}

fn render_debug_pane(f: &mut Frame, area: Rect, app: &App) {
    let payload = app.submitted_payload.as_deref().unwrap_or("");

    let pane = Paragraph::new(payload)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Debug - Serialized Household "),
        );

    f.render_widget(pane, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Field | "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" Option | "),
        Span::styled("Space", Style::default().fg(Color::Yellow)),
        Span::raw(" Toggle | "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Add | "),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(" Delete | "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(" Submit | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    if app.submitted_payload.is_some() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            "Submitted ✓",
            Style::default().fg(Color::Green),
        ));
    }

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
